use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::core::outcome::Failure;
use crate::core::specification::Specification;
use crate::core::traits::Entity;

/// Generic unit-of-work repository.
///
/// One instance is one unit of work: `create`, `update` and `delete` stage
/// changes that only reach the store when `save` commits them. Instances are
/// created per request and must not be shared across requests.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// List every entity matching the specification, with its includes loaded.
    ///
    /// Pass `track_changes = true` when the returned instances will be
    /// mutated and saved through this unit of work.
    async fn list(
        &self,
        spec: &Specification<T>,
        track_changes: bool,
        cancel: &CancellationToken,
    ) -> Result<Vec<T>, Failure>;

    /// Fetch at most one match. `Ok(None)` means the query ran and found nothing.
    async fn first_or_default(
        &self,
        spec: &Specification<T>,
        track_changes: bool,
        cancel: &CancellationToken,
    ) -> Result<Option<T>, Failure>;

    /// Stage a new entity for insertion.
    async fn create(&self, entity: T, cancel: &CancellationToken) -> Result<T, Failure>;

    /// Stage a mutation of an existing entity. Performs no I/O.
    fn update(&self, entity: T) -> Result<T, Failure>;

    /// Stage removal by key. Fails when no entity with that key exists.
    async fn delete(&self, key: &T::Key, cancel: &CancellationToken) -> Result<(), Failure>;

    /// Commit all staged changes atomically, discarding them on failure.
    async fn save(&self, cancel: &CancellationToken) -> Result<(), Failure>;
}
