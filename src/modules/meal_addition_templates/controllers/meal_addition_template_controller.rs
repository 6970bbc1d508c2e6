use actix_web::web;

use crate::modules::controller::{self, Resource};
use crate::modules::meal_addition_templates::models::{
    MealAdditionTemplate, MealAdditionTemplateDto,
};
use crate::modules::meal_addition_templates::services::MealAdditionTemplateService;
use crate::persistence::Store;

pub struct MealAdditionTemplates;

impl Resource for MealAdditionTemplates {
    type Dto = MealAdditionTemplateDto;
    type Service = MealAdditionTemplateService;
    const PATH: &'static str = "/meal-addition-templates";

    fn service(store: &Store) -> MealAdditionTemplateService {
        MealAdditionTemplateService::new(store.repository::<MealAdditionTemplate>())
    }

    fn assign_id(dto: &mut MealAdditionTemplateDto, id: String) {
        dto.id = id;
    }
}

/// Configure meal-addition template routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    controller::configure::<MealAdditionTemplates>(cfg);
}
