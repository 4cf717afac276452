//! Общие типы и трейты для всех агрегатов

pub mod aggregate_id;
pub mod aggregate_root;
pub mod base_aggregate;
pub mod entity_metadata;
pub mod lifecycle;
pub mod status_change;

// Re-exports
pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;
pub use base_aggregate::BaseAggregate;
pub use entity_metadata::EntityMetadata;
pub use lifecycle::{BadgeVariant, Lifecycle, Stateful};
pub use status_change::{StatusChange, TransitionMeta};
