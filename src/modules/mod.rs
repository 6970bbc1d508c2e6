pub mod airports;
pub mod controller;
pub mod gifts;
pub mod locations;
pub mod meal_addition_templates;
pub mod restaurants;

use actix_web::web;

/// Register the routes of every entity module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(airports::configure)
        .configure(gifts::configure)
        .configure(meal_addition_templates::configure)
        .configure(restaurants::configure);
}
