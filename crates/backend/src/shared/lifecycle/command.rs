use super::{attempt_transition, ActionError};
use crate::shared::data::{Notifier, RecordStore, TransitionPersistence};
use contracts::domain::common::{AggregateId, Lifecycle, Stateful, TransitionMeta};

/// A requested status change of one record.
///
/// Executing it validates the change, applies the new value to the store
/// right away, and then commits it externally. A failed commit restores
/// the previous value, so the store never drifts from the last committed
/// state.
#[derive(Debug, Clone)]
pub struct TransitionCommand<R: Stateful> {
    id: R::Id,
    target: R::Status,
    meta: TransitionMeta,
    notification: Option<String>,
}

impl<R> TransitionCommand<R>
where
    R: Stateful + Send + Sync + 'static,
{
    pub fn new(id: R::Id, target: R::Status, meta: TransitionMeta) -> Self {
        Self {
            id,
            target,
            meta,
            notification: None,
        }
    }

    /// Message sent to the user behind the record once the change is
    /// committed
    pub fn with_notification(mut self, message: impl Into<String>) -> Self {
        self.notification = Some(message.into());
        self
    }

    pub fn target(&self) -> R::Status {
        self.target
    }

    pub async fn execute(
        self,
        store: &mut RecordStore<R>,
        persistence: &dyn TransitionPersistence<R>,
        notifier: &dyn Notifier,
    ) -> Result<R, ActionError> {
        let collection = R::collection_name();
        let id = self.id.as_string();

        let previous = store
            .get(&self.id)
            .cloned()
            .ok_or_else(|| ActionError::NotFound {
                collection,
                id: id.clone(),
            })?;
        let from = previous.status();
        let proposed = attempt_transition(&previous, self.target, self.meta.clone())?;

        store.replace(proposed.clone());

        let committed = match persistence
            .persist_transition(&proposed, from, self.target, &self.meta)
            .await
            .and_then(|committed| {
                if committed.id() == self.id {
                    Ok(committed)
                } else {
                    Err(anyhow::anyhow!(
                        "persistence returned record {} instead of {}",
                        committed.id().as_string(),
                        id
                    ))
                }
            }) {
            Ok(committed) => committed,
            Err(e) => {
                store.replace(previous);
                tracing::warn!(
                    "Rolled back {} {} ({} -> {}): {}",
                    collection,
                    id,
                    from.code(),
                    self.target.code(),
                    e
                );
                return Err(ActionError::PersistenceFailure {
                    collection,
                    id,
                    source: e,
                });
            }
        };

        if store.replace(committed.clone()).is_none() {
            tracing::warn!("{} {} vanished from the store during commit", collection, id);
        }
        tracing::info!(
            "{} {}: {} -> {}",
            collection,
            id,
            from.code(),
            self.target.code()
        );

        if let Some(message) = &self.notification {
            if let Err(e) = notifier.notify_user(&id, message).await {
                tracing::warn!("Failed to notify user of {} {}: {}", collection, id, e);
            }
        }

        Ok(committed)
    }
}
