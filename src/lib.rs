pub mod config;
pub mod domain;
pub mod forms;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod services;

/// Category selected when the catalog is first shown.
pub const DEFAULT_CATEGORY: &str = "typeProgramming";
