use async_trait::async_trait;
use contracts::domain::common::{Stateful, TransitionMeta};

/// Supplies the initial record collection.
///
/// Implementations return a consistent snapshot; the order of the returned
/// records is the insertion order list pages show by default.
#[async_trait]
pub trait RecordSource<R>: Send + Sync
where
    R: Send + Sync + 'static,
{
    async fn fetch_records(&self) -> anyhow::Result<Vec<R>>;
}

/// Durable commit of a status change.
///
/// The locally validated record is advisory until this call succeeds; the
/// returned record is what the store keeps.
#[async_trait]
pub trait TransitionPersistence<R>: Send + Sync
where
    R: Stateful + Send + Sync + 'static,
{
    async fn persist_transition(
        &self,
        proposed: &R,
        from: R::Status,
        to: R::Status,
        meta: &TransitionMeta,
    ) -> anyhow::Result<R>;
}

/// Best-effort side channel to the customer or merchant behind a record.
/// Callers log and swallow failures.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify_user(&self, record_id: &str, message: &str) -> anyhow::Result<()>;
}
