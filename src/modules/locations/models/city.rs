use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::country::{Country, CountryDto};
use crate::core::Entity;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct City {
    pub id: String,
    pub name: String,
    pub country_id: String,

    #[sqlx(skip)]
    pub country: Option<Country>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CityRelation {
    Country,
}

impl Entity for City {
    type Key = String;
    type Relation = CityRelation;
    const NAME: &'static str = "City";

    fn key(&self) -> &String {
        &self.id
    }
}

impl City {
    pub fn new(id: impl Into<String>, name: impl Into<String>, country_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country_id: country_id.into(),
            country: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityDto {
    pub id: String,
    pub name: String,
    pub country_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<CountryDto>,
}

impl From<City> for CityDto {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            name: city.name,
            country_id: city.country_id,
            country: city.country.map(CountryDto::from),
        }
    }
}
