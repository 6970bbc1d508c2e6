use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{Entity, NoRelation};

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Country {
    pub id: String,
    pub name: String,
}

impl Entity for Country {
    type Key = String;
    type Relation = NoRelation;
    const NAME: &'static str = "Country";

    fn key(&self) -> &String {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDto {
    pub id: String,
    pub name: String,
}

impl From<Country> for CountryDto {
    fn from(country: Country) -> Self {
        Self {
            id: country.id,
            name: country.name,
        }
    }
}
