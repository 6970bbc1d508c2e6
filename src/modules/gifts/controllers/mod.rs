pub mod gift_controller;

pub use gift_controller::configure;
