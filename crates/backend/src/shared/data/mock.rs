//! In-process collaborators backed by static mock data. There is no real
//! backend behind the console; these stand in for it.

use super::{Notifier, RecordSource, TransitionPersistence};
use async_trait::async_trait;
use contracts::domain::common::{AggregateId, Lifecycle, Stateful, TransitionMeta};
use std::sync::Mutex;

/// Serves a fixed snapshot of records
pub struct MockRecordSource<R> {
    records: Vec<R>,
}

impl<R: Clone> MockRecordSource<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl<R> RecordSource<R> for MockRecordSource<R>
where
    R: Clone + Send + Sync + 'static,
{
    async fn fetch_records(&self) -> anyhow::Result<Vec<R>> {
        Ok(self.records.clone())
    }
}

/// Accepts every transition and keeps the committed records in memory.
/// `fail_next` makes the next commit fail, for exercising rollback.
pub struct InMemoryPersistence<R> {
    committed: Mutex<Vec<R>>,
    fail_next: Mutex<Option<String>>,
}

impl<R: Clone> InMemoryPersistence<R> {
    pub fn new() -> Self {
        Self {
            committed: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
        }
    }

    pub fn fail_next(&self, message: impl Into<String>) {
        if let Ok(mut slot) = self.fail_next.lock() {
            *slot = Some(message.into());
        }
    }

    /// Records committed so far, oldest first
    pub fn committed(&self) -> Vec<R> {
        self.committed
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }
}

impl<R: Clone> Default for InMemoryPersistence<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R> TransitionPersistence<R> for InMemoryPersistence<R>
where
    R: Stateful + Send + Sync + 'static,
{
    async fn persist_transition(
        &self,
        proposed: &R,
        from: R::Status,
        to: R::Status,
        _meta: &TransitionMeta,
    ) -> anyhow::Result<R> {
        let failure = self
            .fail_next
            .lock()
            .map_err(|_| anyhow::anyhow!("persistence lock poisoned"))?
            .take();
        if let Some(message) = failure {
            anyhow::bail!(message);
        }

        tracing::debug!(
            "Committed {} {}: {} -> {}",
            R::collection_name(),
            proposed.id().as_string(),
            from.code(),
            to.code()
        );

        self.committed
            .lock()
            .map_err(|_| anyhow::anyhow!("persistence lock poisoned"))?
            .push(proposed.clone());
        Ok(proposed.clone())
    }
}

/// Writes notifications to the log instead of sending them
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify_user(&self, record_id: &str, message: &str) -> anyhow::Result<()> {
        tracing::info!("Notify {}: {}", record_id, message);
        Ok(())
    }
}

/// Collects notifications so callers can inspect them. A failing recorder
/// still records the attempt before returning an error.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// `(record_id, message)` pairs, oldest first
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_user(&self, record_id: &str, message: &str) -> anyhow::Result<()> {
        self.sent
            .lock()
            .map_err(|_| anyhow::anyhow!("notifier lock poisoned"))?
            .push((record_id.to_string(), message.to_string()));
        if self.fail {
            anyhow::bail!("notification channel unavailable");
        }
        Ok(())
    }
}
