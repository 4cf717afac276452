use contracts::domain::common::{AggregateId, AggregateRoot};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Duplicate {collection} id: {id}")]
    DuplicateId { collection: &'static str, id: String },
    #[error("Invalid {collection} record {id}: {reason}")]
    InvalidRecord {
        collection: &'static str,
        id: String,
        reason: String,
    },
}

/// Ordered in-memory record collection with unique ids.
///
/// Every record passes `AggregateRoot::validate` on load.
///
/// Records are never removed here; hiding or cancelling is a status change.
#[derive(Debug, Clone)]
pub struct RecordStore<R: AggregateRoot> {
    records: Vec<R>,
}

impl<R: AggregateRoot> RecordStore<R> {
    pub fn from_records(records: Vec<R>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            let id = record.id();
            if !seen.insert(id) {
                return Err(StoreError::DuplicateId {
                    collection: R::collection_name(),
                    id: id.as_string(),
                });
            }
            record
                .validate()
                .map_err(|reason| StoreError::InvalidRecord {
                    collection: R::collection_name(),
                    id: id.as_string(),
                    reason,
                })?;
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.records.iter().find(|r| r.id() == *id)
    }

    /// Swap in a new value of an existing record, keeping its position.
    /// Returns the replaced value, or `None` when the id is unknown.
    pub fn replace(&mut self, record: R) -> Option<R> {
        let id = record.id();
        let slot = self.records.iter_mut().find(|r| r.id() == id)?;
        Some(std::mem::replace(slot, record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use contracts::domain::a004_lead::aggregate::{Lead, LeadSource, LeadStatus};

    fn lead(code: &str) -> Lead {
        Lead::new_for_insert(
            code.into(),
            "张三".into(),
            "13800000000".into(),
            "Hill Inn".into(),
            LeadSource::Website,
            Utc::now(),
        )
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let first = lead("LD-1");
        let copy = first.clone();
        let err = RecordStore::from_records(vec![first, lead("LD-2"), copy]).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId { collection: "lead", .. }));
    }

    #[test]
    fn test_invalid_record_is_rejected_on_load() {
        let mut broken = lead("LD-2");
        broken.contact_name = "  ".into();
        let err = RecordStore::from_records(vec![lead("LD-1"), broken]).unwrap_err();
        match err {
            StoreError::InvalidRecord { collection, reason, .. } => {
                assert_eq!(collection, "lead");
                assert!(!reason.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_replace_keeps_position() {
        let leads = vec![lead("LD-1"), lead("LD-2"), lead("LD-3")];
        let id = leads[1].base.id;
        let mut store = RecordStore::from_records(leads).unwrap();

        let mut updated = store.get(&id).unwrap().clone();
        updated.status = LeadStatus::Following;
        let previous = store.replace(updated).unwrap();

        assert_eq!(previous.status, LeadStatus::Pending);
        assert_eq!(store.records()[1].status, LeadStatus::Following);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_replace_unknown_id() {
        let mut store = RecordStore::from_records(vec![lead("LD-1")]).unwrap();
        assert!(store.replace(lead("LD-X")).is_none());
        assert_eq!(store.len(), 1);
    }
}
