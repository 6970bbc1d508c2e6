pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{
    GuestType, MealAdditionTemplate, MealAdditionTemplateDto, MealAdditionTemplateRelation,
    MealType,
};
pub use services::MealAdditionTemplateService;
