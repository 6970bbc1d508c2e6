use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::core::{CrudService, Failure, Outcome, Repository, Specification, Success};
use crate::modules::gifts::models::{Gift, GiftDto};

/// CRUD operations for gifts
pub struct GiftService {
    repository: Arc<dyn Repository<Gift>>,
}

impl GiftService {
    pub fn new(repository: Arc<dyn Repository<Gift>>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CrudService for GiftService {
    type Dto = GiftDto;

    async fn list(&self, cancel: &CancellationToken) -> Outcome<Vec<GiftDto>> {
        let gifts = self
            .repository
            .list(&Specification::all(), false, cancel)
            .await?;

        Ok(Success::new(gifts.into_iter().map(GiftDto::from).collect()))
    }

    async fn get(&self, id: &str, cancel: &CancellationToken) -> Outcome<GiftDto> {
        self.repository
            .first_or_default(&Specification::by_key(id), false, cancel)
            .await?
            .map(|gift| Success::new(GiftDto::from(gift)))
            .ok_or_else(|| Failure::not_found::<Gift>(id))
    }

    async fn create(&self, dto: GiftDto, cancel: &CancellationToken) -> Outcome<GiftDto> {
        let gift = self.repository.create(Gift::from_dto(dto), cancel).await?;
        self.repository.save(cancel).await?;

        info!(id = %gift.id, price = %gift.price, "Gift created");
        let message = format!("Gift '{}' was successfully created", gift.id);
        Ok(Success::with_message(gift.into(), message))
    }

    async fn update(&self, dto: GiftDto, cancel: &CancellationToken) -> Outcome {
        let Some(mut gift) = self
            .repository
            .first_or_default(&Specification::by_key(dto.id.as_str()), true, cancel)
            .await?
        else {
            return Err(Failure::not_found::<Gift>(&dto.id));
        };

        gift.apply(&dto);
        self.repository.update(gift)?;
        self.repository.save(cancel).await?;

        info!(id = %dto.id, "Gift updated");
        Ok(Success::message(format!("Gift '{}' was successfully updated", dto.id)))
    }

    async fn delete(&self, id: &str, cancel: &CancellationToken) -> Outcome {
        self.repository.delete(&id.to_string(), cancel).await?;
        self.repository.save(cancel).await?;

        info!(id = %id, "Gift removed");
        Ok(Success::message(format!("Gift '{}' was successfully removed", id)))
    }
}
