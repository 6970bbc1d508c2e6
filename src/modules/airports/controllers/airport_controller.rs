use actix_web::web;

use crate::modules::airports::models::{Airport, AirportDto};
use crate::modules::airports::services::AirportService;
use crate::modules::controller::{self, Resource};
use crate::persistence::Store;

pub struct Airports;

impl Resource for Airports {
    type Dto = AirportDto;
    type Service = AirportService;
    const PATH: &'static str = "/airports";

    fn service(store: &Store) -> AirportService {
        AirportService::new(store.repository::<Airport>())
    }

    fn assign_id(dto: &mut AirportDto, id: String) {
        dto.id = id;
    }
}

/// Configure airport routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    controller::configure::<Airports>(cfg);
}
