//! In-process persistence engine.
//!
//! Committed rows live in a shared [`Tables`] set behind an async lock. Each
//! [`MemoryRepository`] is one unit of work: reads see committed rows only,
//! writes are staged and applied to a copy of the tables on `save`, which
//! replaces the shared set only when every change applied cleanly.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::core::{cancellable, Criteria, Entity, Failure, Repository, Specification};
use crate::modules::airports::models::Airport;
use crate::modules::gifts::models::Gift;
use crate::modules::locations::models::{City, Country};
use crate::modules::meal_addition_templates::models::MealAdditionTemplate;
use crate::modules::restaurants::models::Restaurant;
use crate::persistence::unit_of_work::{Change, UnitOfWork};

/// Every committed row, keyed per entity type.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub countries: BTreeMap<String, Country>,
    pub cities: BTreeMap<String, City>,
    pub airports: BTreeMap<String, Airport>,
    pub gifts: BTreeMap<String, Gift>,
    pub restaurants: BTreeMap<String, Restaurant>,
    pub meal_addition_templates: BTreeMap<String, MealAdditionTemplate>,
}

/// Maps an entity onto its table and its relations onto sibling tables.
pub trait MemoryEntity: Entity {
    fn table(tables: &Tables) -> &BTreeMap<Self::Key, Self>;

    fn table_mut(tables: &mut Tables) -> &mut BTreeMap<Self::Key, Self>;

    /// Set relation fields from committed rows: loaded when included, cleared otherwise.
    fn hydrate(&mut self, _tables: &Tables, _includes: &BTreeSet<Self::Relation>) {}

    /// Outgoing references that must resolve before a write commits.
    fn check_references(&self, _tables: &Tables) -> Result<(), String> {
        Ok(())
    }

    /// Number of committed rows still pointing at `key`.
    fn dependents(_key: &Self::Key, _tables: &Tables) -> usize {
        0
    }
}

/// Shared handle to the in-memory tables. Cloning shares the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the committed state
    pub async fn snapshot(&self) -> Tables {
        self.tables.read().await.clone()
    }
}

/// Unit-of-work repository over a [`MemoryStore`].
pub struct MemoryRepository<T: MemoryEntity> {
    store: MemoryStore,
    unit: Mutex<UnitOfWork<T>>,
}

impl<T: MemoryEntity> MemoryRepository<T> {
    pub fn new(store: MemoryStore) -> Self {
        Self {
            store,
            unit: Mutex::new(UnitOfWork::default()),
        }
    }

    /// Number of staged, unsaved changes
    pub fn pending_changes(&self) -> usize {
        self.unit().map(|unit| unit.pending()).unwrap_or(0)
    }

    fn unit(&self) -> Result<MutexGuard<'_, UnitOfWork<T>>, Failure> {
        self.unit
            .lock()
            .map_err(|_| Failure::persistence("Unit of work is unavailable after a panic"))
    }

    async fn query(
        &self,
        spec: &Specification<T>,
        track_changes: bool,
        limit: Option<usize>,
    ) -> Result<Vec<T>, Failure> {
        let entities: Vec<T> = {
            let tables = self.store.tables.read().await;
            let candidates: Vec<T> = match spec.criteria() {
                Criteria::KeyEquals(key) => T::table(&tables).get(key).cloned().into_iter().collect(),
                _ => T::table(&tables).values().cloned().collect(),
            };
            candidates
                .into_iter()
                .map(|mut entity| {
                    entity.hydrate(&tables, spec.includes());
                    entity
                })
                .filter(|entity| spec.is_satisfied_by(entity))
                .take(limit.unwrap_or(usize::MAX))
                .collect()
        };

        if track_changes {
            self.unit()?.track(&entities);
        }

        debug!(entity = T::NAME, count = entities.len(), tracked = track_changes, "Loaded entities");
        Ok(entities)
    }
}

fn apply<T: MemoryEntity>(tables: &mut Tables, change: Change<T>) -> Result<(), Failure> {
    match change {
        Change::Insert(entity) => {
            if T::table(tables).contains_key(entity.key()) {
                return Err(Failure::conflict(format!(
                    "{} with id '{}' already exists",
                    T::NAME,
                    entity.key()
                )));
            }
            entity.check_references(tables).map_err(Failure::conflict)?;
            T::table_mut(tables).insert(entity.key().clone(), entity);
        }
        Change::Update(entity) => {
            if !T::table(tables).contains_key(entity.key()) {
                return Err(Failure::not_found::<T>(entity.key()));
            }
            entity.check_references(tables).map_err(Failure::conflict)?;
            T::table_mut(tables).insert(entity.key().clone(), entity);
        }
        Change::Delete(key) => {
            let dependents = T::dependents(&key, tables);
            if dependents > 0 {
                return Err(Failure::conflict(format!(
                    "Cannot remove {} '{}': {} other record(s) still reference it",
                    T::NAME,
                    key,
                    dependents
                )));
            }
            if T::table_mut(tables).remove(&key).is_none() {
                return Err(Failure::not_found::<T>(&key));
            }
        }
    }
    Ok(())
}

#[async_trait]
impl<T: MemoryEntity> Repository<T> for MemoryRepository<T> {
    async fn list(
        &self,
        spec: &Specification<T>,
        track_changes: bool,
        cancel: &CancellationToken,
    ) -> Result<Vec<T>, Failure> {
        cancellable(cancel, "list", self.query(spec, track_changes, None)).await
    }

    async fn first_or_default(
        &self,
        spec: &Specification<T>,
        track_changes: bool,
        cancel: &CancellationToken,
    ) -> Result<Option<T>, Failure> {
        let mut found = cancellable(cancel, "fetch", self.query(spec, track_changes, Some(1))).await?;
        Ok(found.pop())
    }

    async fn create(&self, entity: T, cancel: &CancellationToken) -> Result<T, Failure> {
        cancellable(cancel, "create", async {
            self.unit()?.stage(Change::Insert(entity.clone()));
            Ok(entity)
        })
        .await
    }

    fn update(&self, entity: T) -> Result<T, Failure> {
        let mut unit = self.unit()?;
        if !unit.is_tracked(entity.key()) {
            debug!(entity = T::NAME, id = %entity.key(), "Attaching untracked entity for update");
        }
        unit.stage(Change::Update(entity.clone()));
        Ok(entity)
    }

    async fn delete(&self, key: &T::Key, cancel: &CancellationToken) -> Result<(), Failure> {
        cancellable(cancel, "delete", async {
            let committed = T::table(&*self.store.tables.read().await).contains_key(key);
            let mut unit = self.unit()?;
            if !unit.stages_presence_of(key).unwrap_or(committed) {
                return Err(Failure::not_found::<T>(key));
            }
            unit.stage(Change::Delete(key.clone()));
            Ok(())
        })
        .await
    }

    async fn save(&self, cancel: &CancellationToken) -> Result<(), Failure> {
        cancellable(cancel, "save", async {
            let changes = self.unit()?.take_changes();
            if changes.is_empty() {
                return Ok(());
            }
            let count = changes.len();

            let mut tables = self.store.tables.write().await;
            let mut working = tables.clone();
            for change in changes {
                if let Err(failure) = apply(&mut working, change) {
                    error!(entity = T::NAME, error = %failure, "Rolled back unit of work");
                    return Err(failure);
                }
            }
            *tables = working;

            info!(entity = T::NAME, changes = count, "Committed unit of work");
            Ok(())
        })
        .await
    }
}
