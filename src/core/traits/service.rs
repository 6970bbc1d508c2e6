use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::core::outcome::Outcome;

/// Five-operation contract shared by every entity service
#[async_trait]
pub trait CrudService: Send + Sync {
    /// Transport object exchanged with callers
    type Dto: Send + Sync + 'static;

    async fn list(&self, cancel: &CancellationToken) -> Outcome<Vec<Self::Dto>>;

    async fn get(&self, id: &str, cancel: &CancellationToken) -> Outcome<Self::Dto>;

    async fn create(&self, dto: Self::Dto, cancel: &CancellationToken) -> Outcome<Self::Dto>;

    /// The DTO's id selects the entity to edit; its other fields replace the mutable ones.
    async fn update(&self, dto: Self::Dto, cancel: &CancellationToken) -> Outcome;

    async fn delete(&self, id: &str, cancel: &CancellationToken) -> Outcome;
}
