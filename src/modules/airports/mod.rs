pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{Airport, AirportDto, AirportRelation};
pub use services::AirportService;
