//! Status transitions: legality check against the lifecycle graph and the
//! command that applies a checked change to a record store.

pub mod command;
pub mod error;
pub mod transition;

pub use command::TransitionCommand;
pub use error::{ActionError, TransitionError};
pub use transition::attempt_transition;
