pub mod city;
pub mod country;

pub use city::{City, CityDto, CityRelation};
pub use country::{Country, CountryDto};
