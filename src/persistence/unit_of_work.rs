use std::collections::BTreeMap;

use crate::core::Entity;

/// A staged write waiting for `save`.
#[derive(Debug, Clone)]
pub enum Change<T: Entity> {
    Insert(T),
    Update(T),
    Delete(T::Key),
}

impl<T: Entity> Change<T> {
    pub fn key(&self) -> &T::Key {
        match self {
            Change::Insert(entity) | Change::Update(entity) => entity.key(),
            Change::Delete(key) => key,
        }
    }
}

/// Per-request bookkeeping: tracked instances and staged changes.
#[derive(Debug)]
pub struct UnitOfWork<T: Entity> {
    tracked: BTreeMap<T::Key, T>,
    changes: Vec<Change<T>>,
}

impl<T: Entity> Default for UnitOfWork<T> {
    fn default() -> Self {
        Self {
            tracked: BTreeMap::new(),
            changes: Vec::new(),
        }
    }
}

impl<T: Entity> UnitOfWork<T> {
    pub fn track(&mut self, entities: &[T]) {
        for entity in entities {
            self.tracked.insert(entity.key().clone(), entity.clone());
        }
    }

    pub fn is_tracked(&self, key: &T::Key) -> bool {
        self.tracked.contains_key(key)
    }

    pub fn stage(&mut self, change: Change<T>) {
        if let Change::Update(entity) | Change::Insert(entity) = &change {
            self.tracked.insert(entity.key().clone(), entity.clone());
        }
        self.changes.push(change);
    }

    /// Whether the last staged change for `key` leaves it present.
    pub fn stages_presence_of(&self, key: &T::Key) -> Option<bool> {
        self.changes
            .iter()
            .rev()
            .find(|change| change.key() == key)
            .map(|change| !matches!(change, Change::Delete(_)))
    }

    pub fn pending(&self) -> usize {
        self.changes.len()
    }

    /// Drain staged changes. Tracking ends with the commit attempt.
    pub fn take_changes(&mut self) -> Vec<Change<T>> {
        self.tracked.clear();
        std::mem::take(&mut self.changes)
    }
}
