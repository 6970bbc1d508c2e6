pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{Restaurant, RestaurantDto};
pub use services::RestaurantService;
