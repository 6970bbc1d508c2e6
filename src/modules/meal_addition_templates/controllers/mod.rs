pub mod meal_addition_template_controller;

pub use meal_addition_template_controller::configure;
