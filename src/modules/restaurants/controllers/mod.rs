pub mod restaurant_controller;

pub use restaurant_controller::configure;
