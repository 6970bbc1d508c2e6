use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::{Entity, NoRelation};

/// Complimentary or purchasable gift offered with a booking
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Gift {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
}

impl Entity for Gift {
    type Key = String;
    type Relation = NoRelation;
    const NAME: &'static str = "Gift";

    fn key(&self) -> &String {
        &self.id
    }
}

/// Decimal places of the `gifts.price` column
pub const PRICE_SCALE: u32 = 2;

/// Round half away from zero to the stored scale, as MySQL does on insert,
/// and pad to that scale so the value reads back identically.
fn stored_price(price: Decimal) -> Decimal {
    let mut stored = price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    stored.rescale(PRICE_SCALE);
    stored
}

impl Gift {
    pub fn from_dto(dto: GiftDto) -> Self {
        Self {
            id: if dto.id.is_empty() {
                Uuid::new_v4().to_string()
            } else {
                dto.id
            },
            name: dto.name,
            description: dto.description,
            price: stored_price(dto.price),
        }
    }

    pub fn apply(&mut self, dto: &GiftDto) {
        self.name = dto.name.clone();
        self.description = dto.description.clone();
        self.price = stored_price(dto.price);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftDto {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Decimal,
}

impl From<Gift> for GiftDto {
    fn from(gift: Gift) -> Self {
        Self {
            id: gift.id,
            name: gift.name,
            description: gift.description,
            price: gift.price,
        }
    }
}
