// Test Data Factory
//
// Builds DTOs with predictable defaults. Ids are fixed where a test needs
// to refer back to them and random otherwise.

use hospitality::airports::AirportDto;
use hospitality::gifts::GiftDto;
use hospitality::meal_addition_templates::{GuestType, MealAdditionTemplateDto, MealType};
use hospitality::restaurants::RestaurantDto;
use rust_decimal::Decimal;
use uuid::Uuid;

pub struct TestDataFactory;

impl TestDataFactory {
    /// Unique id with TEST prefix
    pub fn random_id() -> String {
        format!("TEST-{}", Uuid::new_v4())
    }

    pub fn restaurant(id: &str, name: &str, comments: Option<&str>) -> RestaurantDto {
        RestaurantDto {
            id: id.to_string(),
            name: name.to_string(),
            comments: comments.map(str::to_string),
        }
    }

    pub fn gift(id: &str, name: &str, price: Decimal) -> GiftDto {
        GiftDto {
            id: id.to_string(),
            name: name.to_string(),
            description: Some(format!("{} for the room", name)),
            price,
        }
    }

    pub fn airport(id: &str, code: &str, city_id: &str) -> AirportDto {
        AirportDto {
            id: id.to_string(),
            name: format!("{} International", code),
            code: code.to_string(),
            description: None,
            city_id: city_id.to_string(),
            city: None,
        }
    }

    pub fn meal_template(id: &str, restaurant_id: &str) -> MealAdditionTemplateDto {
        MealAdditionTemplateDto {
            id: id.to_string(),
            guest_type: GuestType::Adult,
            meal_type: MealType::Breakfast,
            notes: Some("Served 7-10am".to_string()),
            restaurant_id: restaurant_id.to_string(),
            restaurant: None,
        }
    }
}
