use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::meal_types::{GuestType, MealType};
use crate::core::Entity;
use crate::modules::restaurants::models::{Restaurant, RestaurantDto};

/// Reusable meal add-on for a guest type, served at a restaurant
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct MealAdditionTemplate {
    pub id: String,
    pub guest_type: GuestType,
    pub meal_type: MealType,
    pub notes: Option<String>,
    pub restaurant_id: String,

    #[sqlx(skip)]
    pub restaurant: Option<Restaurant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MealAdditionTemplateRelation {
    Restaurant,
}

impl Entity for MealAdditionTemplate {
    type Key = String;
    type Relation = MealAdditionTemplateRelation;
    const NAME: &'static str = "MealAdditionTemplate";

    fn key(&self) -> &String {
        &self.id
    }
}

impl MealAdditionTemplate {
    pub fn from_dto(dto: MealAdditionTemplateDto) -> Self {
        Self {
            id: if dto.id.is_empty() {
                Uuid::new_v4().to_string()
            } else {
                dto.id
            },
            guest_type: dto.guest_type,
            meal_type: dto.meal_type,
            notes: dto.notes,
            restaurant_id: dto.restaurant_id,
            restaurant: None,
        }
    }

    pub fn apply(&mut self, dto: &MealAdditionTemplateDto) {
        self.guest_type = dto.guest_type;
        self.meal_type = dto.meal_type;
        self.notes = dto.notes.clone();
        self.restaurant_id = dto.restaurant_id.clone();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealAdditionTemplateDto {
    #[serde(default)]
    pub id: String,
    pub guest_type: GuestType,
    pub meal_type: MealType,
    #[serde(default)]
    pub notes: Option<String>,
    pub restaurant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<RestaurantDto>,
}

impl From<MealAdditionTemplate> for MealAdditionTemplateDto {
    fn from(template: MealAdditionTemplate) -> Self {
        Self {
            id: template.id,
            guest_type: template.guest_type,
            meal_type: template.meal_type,
            notes: template.notes,
            restaurant_id: template.restaurant_id,
            restaurant: template.restaurant.map(RestaurantDto::from),
        }
    }
}
