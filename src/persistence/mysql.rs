//! MySQL persistence engine built on sqlx.
//!
//! Reads run directly against the pool; staged writes are replayed inside a
//! single transaction on `save`, so a failing statement rolls back the whole
//! unit of work when the transaction is dropped uncommitted.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use sqlx::mysql::{MySqlArguments, MySqlRow};
use sqlx::query::Query;
use sqlx::{FromRow, MySql, MySqlPool, QueryBuilder};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::core::{cancellable, Criteria, Entity, Failure, Repository, Specification};
use crate::persistence::unit_of_work::{Change, UnitOfWork};

pub type MySqlQuery<'q> = Query<'q, MySql, MySqlArguments>;

/// Maps an entity onto a MySQL table whose primary key column is `id`.
#[async_trait]
pub trait MySqlEntity: Entity + for<'r> FromRow<'r, MySqlRow> + Unpin {
    const TABLE: &'static str;

    /// Non-key columns, in the order `bind_columns` binds them
    const COLUMNS: &'static [&'static str];

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q>;

    /// Populate relation fields for the included relations.
    async fn load_relations(
        _entities: &mut [Self],
        _includes: &BTreeSet<Self::Relation>,
        _pool: &MySqlPool,
    ) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

fn select_sql<E: MySqlEntity>() -> String {
    let columns: Vec<&str> = std::iter::once("id").chain(E::COLUMNS.iter().copied()).collect();
    format!("SELECT {} FROM {}", columns.join(", "), E::TABLE)
}

fn insert_sql<E: MySqlEntity>() -> String {
    let columns: Vec<&str> = std::iter::once("id").chain(E::COLUMNS.iter().copied()).collect();
    let placeholders = vec!["?"; columns.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        E::TABLE,
        columns.join(", "),
        placeholders
    )
}

fn update_sql<E: MySqlEntity>() -> String {
    let assignments: Vec<String> = E::COLUMNS.iter().map(|c| format!("{} = ?", c)).collect();
    format!("UPDATE {} SET {} WHERE id = ?", E::TABLE, assignments.join(", "))
}

/// Load rows of `E` by key, for eager-loading relations.
pub async fn fetch_by_keys<E: MySqlEntity>(
    pool: &MySqlPool,
    keys: Vec<E::Key>,
) -> Result<BTreeMap<E::Key, E>, sqlx::Error> {
    let keys: BTreeSet<E::Key> = keys.into_iter().collect();
    if keys.is_empty() {
        return Ok(BTreeMap::new());
    }

    let mut builder = QueryBuilder::<MySql>::new(select_sql::<E>());
    builder.push(" WHERE id IN (");
    let mut separated = builder.separated(", ");
    for key in &keys {
        separated.push_bind(key.to_string());
    }
    separated.push_unseparated(")");

    let rows: Vec<E> = builder.build_query_as::<E>().fetch_all(pool).await?;
    Ok(rows.into_iter().map(|row| (row.key().clone(), row)).collect())
}

/// Unit-of-work repository over a MySQL pool.
pub struct MySqlRepository<T: MySqlEntity> {
    pool: MySqlPool,
    unit: Mutex<UnitOfWork<T>>,
}

impl<T: MySqlEntity> MySqlRepository<T> {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            pool,
            unit: Mutex::new(UnitOfWork::default()),
        }
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
        let mut entities: Vec<T> = match spec.criteria() {
            Criteria::KeyEquals(key) => {
                let sql = format!("{} WHERE id = ?", select_sql::<T>());
                sqlx::query_as::<_, T>(&sql)
                    .bind(key.to_string())
                    .fetch_all(&self.pool)
                    .await?
            }
            Criteria::All | Criteria::Matching(_) => {
                let sql = format!("{} ORDER BY id", select_sql::<T>());
                sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?
            }
        };

        T::load_relations(&mut entities, spec.includes(), &self.pool).await?;
        entities.retain(|entity| spec.is_satisfied_by(entity));
        if let Some(limit) = limit {
            entities.truncate(limit);
        }

        if track_changes {
            self.unit()?.track(&entities);
        }

        debug!(entity = T::NAME, count = entities.len(), tracked = track_changes, "Loaded entities");
        Ok(entities)
    }

    async fn exists(&self, key: &T::Key) -> Result<bool, Failure> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE id = ?", T::TABLE);
        let count = sqlx::query_scalar::<_, i64>(&sql)
            .bind(key.to_string())
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn commit(&self, changes: Vec<Change<T>>) -> Result<(), Failure> {
        let insert = insert_sql::<T>();
        let update = update_sql::<T>();
        let delete = format!("DELETE FROM {} WHERE id = ?", T::TABLE);
        let locate = format!("SELECT COUNT(*) FROM {} WHERE id = ? FOR UPDATE", T::TABLE);

        let mut tx = self.pool.begin().await?;
        for change in &changes {
            match change {
                Change::Insert(entity) => {
                    let query = sqlx::query(&insert).bind(entity.key().to_string());
                    entity.bind_columns(query).execute(&mut *tx).await?;
                }
                Change::Update(entity) => {
                    // Affected-row counts skip unchanged rows, so lock and count instead.
                    let present = sqlx::query_scalar::<_, i64>(&locate)
                        .bind(entity.key().to_string())
                        .fetch_one(&mut *tx)
                        .await?;
                    if present == 0 {
                        return Err(Failure::not_found::<T>(entity.key()));
                    }
                    entity
                        .bind_columns(sqlx::query(&update))
                        .bind(entity.key().to_string())
                        .execute(&mut *tx)
                        .await?;
                }
                Change::Delete(key) => {
                    let result = sqlx::query(&delete)
                        .bind(key.to_string())
                        .execute(&mut *tx)
                        .await?;
                    if result.rows_affected() == 0 {
                        return Err(Failure::not_found::<T>(key));
                    }
                }
            }
        }
        tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl<T: MySqlEntity> Repository<T> for MySqlRepository<T> {
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
            let staged = self.unit()?.stages_presence_of(key);
            let present = match staged {
                Some(present) => present,
                None => self.exists(key).await?,
            };
            if !present {
                return Err(Failure::not_found::<T>(key));
            }
            self.unit()?.stage(Change::Delete(key.clone()));
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

            match self.commit(changes).await {
                Ok(()) => {
                    info!(entity = T::NAME, changes = count, "Committed unit of work");
                    Ok(())
                }
                Err(failure) => {
                    error!(entity = T::NAME, error = %failure, "Rolled back unit of work");
                    Err(failure)
                }
            }
        })
        .await
    }
}
