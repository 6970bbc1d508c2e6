pub mod airport_controller;

pub use airport_controller::configure;
