pub mod config;
pub mod data;
pub mod date_utils;
pub mod lifecycle;
pub mod list;
