//! Persistence engines behind the generic [`Repository`] contract.

pub mod memory;
pub mod mysql;
pub mod unit_of_work;

use std::sync::Arc;

use sqlx::MySqlPool;

use crate::core::Repository;

pub use memory::{MemoryEntity, MemoryRepository, MemoryStore, Tables};
pub use mysql::{MySqlEntity, MySqlRepository};
pub use unit_of_work::{Change, UnitOfWork};

/// An entity every backend knows how to persist.
pub trait Persistable: MemoryEntity + MySqlEntity {}

impl<T> Persistable for T where T: MemoryEntity + MySqlEntity {}

/// Handle to the configured persistence engine, shared by all requests.
#[derive(Debug, Clone)]
pub enum Store {
    Memory(MemoryStore),
    MySql(MySqlPool),
}

impl Store {
    /// Open a fresh unit of work for one request.
    pub fn repository<T: Persistable>(&self) -> Arc<dyn Repository<T>> {
        match self {
            Store::Memory(store) => Arc::new(MemoryRepository::<T>::new(store.clone())),
            Store::MySql(pool) => Arc::new(MySqlRepository::<T>::new(pool.clone())),
        }
    }

    pub fn backend(&self) -> &'static str {
        match self {
            Store::Memory(_) => "memory",
            Store::MySql(_) => "mysql",
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::Memory(MemoryStore::new())
    }
}
