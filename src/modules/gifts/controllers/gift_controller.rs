use actix_web::web;

use crate::modules::controller::{self, Resource};
use crate::modules::gifts::models::{Gift, GiftDto};
use crate::modules::gifts::services::GiftService;
use crate::persistence::Store;

pub struct Gifts;

impl Resource for Gifts {
    type Dto = GiftDto;
    type Service = GiftService;
    const PATH: &'static str = "/gifts";

    fn service(store: &Store) -> GiftService {
        GiftService::new(store.repository::<Gift>())
    }

    fn assign_id(dto: &mut GiftDto, id: String) {
        dto.id = id;
    }
}

/// Configure gift routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    controller::configure::<Gifts>(cfg);
}
