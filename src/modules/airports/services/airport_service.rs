use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::core::{CrudService, Failure, Outcome, Repository, Specification, Success};
use crate::modules::airports::models::{Airport, AirportDto, AirportRelation};

/// CRUD operations for airports. Reads carry the city and its country.
pub struct AirportService {
    repository: Arc<dyn Repository<Airport>>,
}

impl AirportService {
    pub fn new(repository: Arc<dyn Repository<Airport>>) -> Self {
        Self { repository }
    }

    fn with_location(spec: Specification<Airport>) -> Specification<Airport> {
        spec.include(AirportRelation::City)
            .include(AirportRelation::CityCountry)
    }

    async fn find(&self, id: &str, cancel: &CancellationToken) -> Result<Airport, Failure> {
        self.repository
            .first_or_default(&Self::with_location(Specification::by_key(id)), false, cancel)
            .await?
            .ok_or_else(|| Failure::not_found::<Airport>(id))
    }
}

#[async_trait]
impl CrudService for AirportService {
    type Dto = AirportDto;

    async fn list(&self, cancel: &CancellationToken) -> Outcome<Vec<AirportDto>> {
        let airports = self
            .repository
            .list(&Self::with_location(Specification::all()), false, cancel)
            .await?;

        debug!(count = airports.len(), "Listed airports");
        Ok(Success::new(
            airports.into_iter().map(AirportDto::from).collect(),
        ))
    }

    async fn get(&self, id: &str, cancel: &CancellationToken) -> Outcome<AirportDto> {
        let airport = self.find(id, cancel).await?;
        Ok(Success::new(airport.into()))
    }

    async fn create(&self, dto: AirportDto, cancel: &CancellationToken) -> Outcome<AirportDto> {
        let airport = self.repository.create(Airport::from_dto(dto), cancel).await?;
        self.repository.save(cancel).await?;
        info!(id = %airport.id, code = %airport.code, "Airport created");

        // The row is committed from here on; a failed reload must not turn
        // the outcome into a failure.
        let created = match self.find(&airport.id, cancel).await {
            Ok(loaded) => loaded,
            Err(failure) => {
                warn!(id = %airport.id, error = %failure, "Created airport returned without its location");
                airport
            }
        };
        let message = format!("Airport '{}' was successfully created", created.id);
        Ok(Success::with_message(created.into(), message))
    }

    async fn update(&self, dto: AirportDto, cancel: &CancellationToken) -> Outcome {
        let mut airport = self
            .repository
            .first_or_default(&Specification::by_key(dto.id.as_str()), true, cancel)
            .await?
            .ok_or_else(|| Failure::not_found::<Airport>(&dto.id))?;

        airport.apply(&dto);
        self.repository.update(airport)?;
        self.repository.save(cancel).await?;

        info!(id = %dto.id, "Airport updated");
        Ok(Success::message(format!(
            "Airport '{}' was successfully updated",
            dto.id
        )))
    }

    async fn delete(&self, id: &str, cancel: &CancellationToken) -> Outcome {
        self.repository.delete(&id.to_string(), cancel).await?;
        self.repository.save(cancel).await?;

        info!(id = %id, "Airport removed");
        Ok(Success::message(format!("Airport '{}' was successfully removed", id)))
    }
}
