//! Hospitality catalogue services
//!
//! CRUD services for airports, gifts, meal-addition templates and restaurants,
//! built on a generic unit-of-work repository with pluggable persistence.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod persistence;

// Re-export commonly used types
pub use crate::core::{CrudService, Failure, FailureKind, Outcome, Repository, Specification, Success};
pub use modules::airports;
pub use modules::gifts;
pub use modules::meal_addition_templates;
pub use modules::restaurants;
pub use persistence::Store;
