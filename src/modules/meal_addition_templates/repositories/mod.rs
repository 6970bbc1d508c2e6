pub mod meal_addition_template_repository;
