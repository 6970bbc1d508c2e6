use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::Entity;
use crate::modules::locations::models::{City, CityDto};

/// Airport served by transfers, located in a city
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Airport {
    pub id: String,
    pub name: String,
    /// IATA/ICAO code
    pub code: String,
    pub description: Option<String>,
    pub city_id: String,

    #[sqlx(skip)]
    pub city: Option<City>,
}

/// Eager-loadable relations of an airport
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AirportRelation {
    City,
    /// The city together with its country; implies `City`
    CityCountry,
}

impl Entity for Airport {
    type Key = String;
    type Relation = AirportRelation;
    const NAME: &'static str = "Airport";

    fn key(&self) -> &String {
        &self.id
    }
}

impl Airport {
    pub fn from_dto(dto: AirportDto) -> Self {
        Self {
            id: if dto.id.is_empty() {
                Uuid::new_v4().to_string()
            } else {
                dto.id
            },
            name: dto.name,
            code: dto.code,
            description: dto.description,
            city_id: dto.city_id,
            city: None,
        }
    }

    /// Copy name, code, description and city reference from a transport object
    pub fn apply(&mut self, dto: &AirportDto) {
        self.name = dto.name.clone();
        self.code = dto.code.clone();
        self.description = dto.description.clone();
        self.city_id = dto.city_id.clone();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportDto {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    pub city_id: String,
    /// Populated on reads, ignored on writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<CityDto>,
}

impl From<Airport> for AirportDto {
    fn from(airport: Airport) -> Self {
        Self {
            id: airport.id,
            name: airport.name,
            code: airport.code,
            description: airport.description,
            city_id: airport.city_id,
            city: airport.city.map(CityDto::from),
        }
    }
}
