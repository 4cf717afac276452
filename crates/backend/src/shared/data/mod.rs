//! Record collections held by the console and the external collaborators
//! they load from and commit to.

pub mod collaborators;
pub mod collection;
pub mod mock;
pub mod record_store;

pub use collaborators::{Notifier, RecordSource, TransitionPersistence};
pub use collection::RecordCollection;
pub use record_store::{RecordStore, StoreError};
