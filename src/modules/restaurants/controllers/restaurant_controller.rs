//! Restaurant endpoints
//!
//! GET/POST /restaurants, GET/PUT/DELETE /restaurants/{id}

use actix_web::web;

use crate::modules::controller::{self, Resource};
use crate::modules::restaurants::models::{Restaurant, RestaurantDto};
use crate::modules::restaurants::services::RestaurantService;
use crate::persistence::Store;

pub struct Restaurants;

impl Resource for Restaurants {
    type Dto = RestaurantDto;
    type Service = RestaurantService;
    const PATH: &'static str = "/restaurants";

    fn service(store: &Store) -> RestaurantService {
        RestaurantService::new(store.repository::<Restaurant>())
    }

    fn assign_id(dto: &mut RestaurantDto, id: String) {
        dto.id = id;
    }
}

/// Configure restaurant routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    controller::configure::<Restaurants>(cfg);
}
