pub mod meal_addition_template;
pub mod meal_types;

pub use meal_addition_template::{
    MealAdditionTemplate, MealAdditionTemplateDto, MealAdditionTemplateRelation,
};
pub use meal_types::{GuestType, MealType};
