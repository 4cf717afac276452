use super::{Notifier, RecordSource, RecordStore, TransitionPersistence};
use crate::shared::lifecycle::{ActionError, TransitionCommand};
use crate::shared::list::{self, ListError, Searchable};
use anyhow::Context;
use contracts::domain::common::{AggregateId, Lifecycle, Stateful, TransitionMeta};
use contracts::shared::list::{Page, ViewState};
use std::sync::Arc;

/// One back-office record collection together with the collaborators it
/// loads from and commits to
pub struct RecordCollection<R: Stateful + Send + Sync + 'static> {
    store: RecordStore<R>,
    source: Arc<dyn RecordSource<R>>,
    persistence: Arc<dyn TransitionPersistence<R>>,
    notifier: Arc<dyn Notifier>,
}

impl<R> RecordCollection<R>
where
    R: Stateful + Searchable + Send + Sync + 'static,
{
    /// Fetch the initial snapshot from `source`
    pub async fn load(
        source: Arc<dyn RecordSource<R>>,
        persistence: Arc<dyn TransitionPersistence<R>>,
        notifier: Arc<dyn Notifier>,
    ) -> anyhow::Result<Self> {
        let store = Self::fetch(source.as_ref()).await?;
        tracing::info!("Loaded {} {} records", store.len(), R::collection_name());
        Ok(Self {
            store,
            source,
            persistence,
            notifier,
        })
    }

    /// Replace the local records with a fresh snapshot. Used after a
    /// `NotFound` action error.
    pub async fn reload(&mut self) -> anyhow::Result<()> {
        self.store = Self::fetch(self.source.as_ref()).await?;
        tracing::info!("Reloaded {} {} records", self.store.len(), R::collection_name());
        Ok(())
    }

    async fn fetch(source: &dyn RecordSource<R>) -> anyhow::Result<RecordStore<R>> {
        let records = source
            .fetch_records()
            .await
            .with_context(|| format!("Failed to fetch {} records", R::collection_name()))?;
        Ok(RecordStore::from_records(records)?)
    }

    pub fn records(&self) -> &[R] {
        self.store.records()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn get(&self, id: &R::Id) -> Result<&R, ActionError> {
        self.store.get(id).ok_or_else(|| ActionError::NotFound {
            collection: R::collection_name(),
            id: id.as_string(),
        })
    }

    pub fn render(&self, state: &ViewState) -> Result<Page<R>, ListError> {
        list::render(self.store.records(), state)
    }

    pub async fn transition(
        &mut self,
        id: R::Id,
        target: R::Status,
        meta: TransitionMeta,
        notification: Option<String>,
    ) -> Result<R, ActionError> {
        let mut command = TransitionCommand::<R>::new(id, target, meta);
        if let Some(message) = notification {
            command = command.with_notification(message);
        }
        command
            .execute(
                &mut self.store,
                self.persistence.as_ref(),
                self.notifier.as_ref(),
            )
            .await
    }

    /// Record count per status, in the status display order. Feeds the
    /// tab badges above each list.
    pub fn status_counts(&self) -> Vec<(R::Status, usize)> {
        R::Status::all()
            .iter()
            .map(|status| {
                let count = self
                    .store
                    .records()
                    .iter()
                    .filter(|r| r.status() == *status)
                    .count();
                (*status, count)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::mock::{InMemoryPersistence, MockRecordSource, TracingNotifier};
    use chrono::Utc;
    use contracts::domain::a005_room::aggregate::{Room, RoomStatus};

    fn room(no: &str) -> Room {
        Room::new_for_insert(
            "Lakeside".into(),
            no.into(),
            "Deluxe King".into(),
            3,
            488.0,
            2,
            Utc::now(),
        )
    }

    async fn collection(rooms: Vec<Room>) -> RecordCollection<Room> {
        RecordCollection::load(
            Arc::new(MockRecordSource::new(rooms)),
            Arc::new(InMemoryPersistence::new()),
            Arc::new(TracingNotifier),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_duplicate_snapshot_fails_to_load() {
        let first = room("301");
        let result = RecordCollection::load(
            Arc::new(MockRecordSource::new(vec![first.clone(), first])),
            Arc::new(InMemoryPersistence::new()),
            Arc::new(TracingNotifier),
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_transition_and_reload() {
        let rooms = vec![room("301"), room("302")];
        let id = rooms[0].base.id;
        let mut rooms = collection(rooms).await;

        rooms
            .transition(id, RoomStatus::Maintenance, TransitionMeta::new(), None)
            .await
            .unwrap();
        assert_eq!(rooms.get(&id).unwrap().status, RoomStatus::Maintenance);

        let counts = rooms.status_counts();
        assert_eq!(
            counts,
            vec![
                (RoomStatus::Available, 1),
                (RoomStatus::Occupied, 0),
                (RoomStatus::Maintenance, 1),
            ]
        );

        // The mock source still serves the initial snapshot
        rooms.reload().await.unwrap();
        assert_eq!(rooms.get(&id).unwrap().status, RoomStatus::Available);
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let rooms = collection(vec![room("301")]).await;
        let err = rooms.get(&room("999").base.id).unwrap_err();
        assert!(err.should_refetch());
    }
}
