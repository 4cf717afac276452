//! Shared contracts of the back-office console: domain aggregates with
//! their status lifecycles, and the list DTOs every list page exchanges.

pub mod domain;
pub mod shared;
