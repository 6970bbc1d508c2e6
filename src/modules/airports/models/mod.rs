pub mod airport;

pub use airport::{Airport, AirportDto, AirportRelation};
