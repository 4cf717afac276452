#![allow(
    clippy::too_many_arguments,
    clippy::type_complexity,
    clippy::unnecessary_lazy_evaluations
)]

pub mod domain;
pub mod shared;
pub mod system;

pub use system::initialization::{initialize_console, AdminConsole};
