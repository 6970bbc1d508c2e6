//! Countries and cities referenced by airports.
//!
//! These are read-side reference data; rows are written through the generic
//! repository directly and no service or routes are exposed for them.

pub mod models;
pub mod repositories;

pub use models::{City, CityDto, CityRelation, Country, CountryDto};
