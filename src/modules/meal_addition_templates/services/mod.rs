pub mod meal_addition_template_service;

pub use meal_addition_template_service::MealAdditionTemplateService;
