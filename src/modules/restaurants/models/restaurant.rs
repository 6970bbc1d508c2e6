use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::{Entity, NoRelation};

/// Restaurant that meal-addition templates can be served at
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub comments: Option<String>,
}

impl Entity for Restaurant {
    type Key = String;
    type Relation = NoRelation;
    const NAME: &'static str = "Restaurant";

    fn key(&self) -> &String {
        &self.id
    }
}

impl Restaurant {
    /// Build a new entity from a transport object, generating an id when none is given
    pub fn from_dto(dto: RestaurantDto) -> Self {
        Self {
            id: if dto.id.is_empty() {
                Uuid::new_v4().to_string()
            } else {
                dto.id
            },
            name: dto.name,
            comments: dto.comments,
        }
    }

    /// Copy the mutable fields from a transport object
    pub fn apply(&mut self, dto: &RestaurantDto) {
        self.name = dto.name.clone();
        self.comments = dto.comments.clone();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantDto {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub comments: Option<String>,
}

impl From<Restaurant> for RestaurantDto {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            comments: restaurant.comments,
        }
    }
}
