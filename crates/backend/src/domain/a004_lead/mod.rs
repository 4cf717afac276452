pub mod list;
pub mod repository;
pub mod service;
