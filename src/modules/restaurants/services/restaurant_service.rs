use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::core::{CrudService, Failure, Outcome, Repository, Specification, Success};
use crate::modules::restaurants::models::{Restaurant, RestaurantDto};

/// CRUD operations for restaurants
pub struct RestaurantService {
    repository: Arc<dyn Repository<Restaurant>>,
}

impl RestaurantService {
    pub fn new(repository: Arc<dyn Repository<Restaurant>>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CrudService for RestaurantService {
    type Dto = RestaurantDto;

    async fn list(&self, cancel: &CancellationToken) -> Outcome<Vec<RestaurantDto>> {
        let restaurants = self
            .repository
            .list(&Specification::all(), false, cancel)
            .await?;

        Ok(Success::new(
            restaurants.into_iter().map(RestaurantDto::from).collect(),
        ))
    }

    async fn get(&self, id: &str, cancel: &CancellationToken) -> Outcome<RestaurantDto> {
        let restaurant = self
            .repository
            .first_or_default(&Specification::by_key(id), false, cancel)
            .await?
            .ok_or_else(|| {
                warn!(id = %id, "Restaurant not found");
                Failure::not_found::<Restaurant>(id)
            })?;

        Ok(Success::new(restaurant.into()))
    }

    async fn create(&self, dto: RestaurantDto, cancel: &CancellationToken) -> Outcome<RestaurantDto> {
        let restaurant = self
            .repository
            .create(Restaurant::from_dto(dto), cancel)
            .await?;
        self.repository.save(cancel).await?;

        info!(id = %restaurant.id, name = %restaurant.name, "Restaurant created");
        let message = format!("Restaurant '{}' was successfully created", restaurant.id);
        Ok(Success::with_message(restaurant.into(), message))
    }

    async fn update(&self, dto: RestaurantDto, cancel: &CancellationToken) -> Outcome {
        let mut restaurant = self
            .repository
            .first_or_default(&Specification::by_key(dto.id.as_str()), true, cancel)
            .await?
            .ok_or_else(|| Failure::not_found::<Restaurant>(&dto.id))?;

        restaurant.apply(&dto);
        self.repository.update(restaurant)?;
        self.repository.save(cancel).await?;

        info!(id = %dto.id, "Restaurant updated");
        Ok(Success::message(format!(
            "Restaurant '{}' was successfully updated",
            dto.id
        )))
    }

    async fn delete(&self, id: &str, cancel: &CancellationToken) -> Outcome {
        self.repository.delete(&id.to_string(), cancel).await?;
        self.repository.save(cancel).await?;

        info!(id = %id, "Restaurant removed");
        Ok(Success::message(format!(
            "Restaurant '{}' was successfully removed",
            id
        )))
    }
}
