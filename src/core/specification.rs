//! Query descriptor passed opaquely to a repository: which rows, with which
//! related data.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::core::traits::Entity;

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Row selection part of a specification.
pub enum Criteria<T: Entity> {
    /// Constant true
    All,
    /// Key equals the given value
    KeyEquals(T::Key),
    /// Arbitrary predicate, evaluated against loaded entities
    Matching(Predicate<T>),
}

impl<T: Entity> Clone for Criteria<T> {
    fn clone(&self) -> Self {
        match self {
            Criteria::All => Criteria::All,
            Criteria::KeyEquals(key) => Criteria::KeyEquals(key.clone()),
            Criteria::Matching(predicate) => Criteria::Matching(Arc::clone(predicate)),
        }
    }
}

impl<T: Entity> fmt::Debug for Criteria<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criteria::All => write!(f, "All"),
            Criteria::KeyEquals(key) => write!(f, "KeyEquals({:?})", key),
            Criteria::Matching(_) => write!(f, "Matching(..)"),
        }
    }
}

/// Predicate plus the set of relations to eager-load.
pub struct Specification<T: Entity> {
    criteria: Criteria<T>,
    includes: BTreeSet<T::Relation>,
}

impl<T: Entity> Specification<T> {
    pub fn new(criteria: Criteria<T>) -> Self {
        Self {
            criteria,
            includes: BTreeSet::new(),
        }
    }

    /// Match every entity
    pub fn all() -> Self {
        Self::new(Criteria::All)
    }

    /// Match the entity with the given key
    pub fn by_key(key: impl Into<T::Key>) -> Self {
        Self::new(Criteria::KeyEquals(key.into()))
    }

    /// Match entities satisfying an arbitrary predicate
    pub fn matching(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self::new(Criteria::Matching(Arc::new(predicate)))
    }

    /// Eager-load a relation. Repeated or reordered includes are equivalent.
    pub fn include(mut self, relation: T::Relation) -> Self {
        self.includes.insert(relation);
        self
    }

    pub fn criteria(&self) -> &Criteria<T> {
        &self.criteria
    }

    pub fn includes(&self) -> &BTreeSet<T::Relation> {
        &self.includes
    }

    pub fn is_included(&self, relation: T::Relation) -> bool {
        self.includes.contains(&relation)
    }

    pub fn is_satisfied_by(&self, entity: &T) -> bool {
        match &self.criteria {
            Criteria::All => true,
            Criteria::KeyEquals(key) => entity.key() == key,
            Criteria::Matching(predicate) => predicate(entity),
        }
    }
}

impl<T: Entity> Clone for Specification<T> {
    fn clone(&self) -> Self {
        Self {
            criteria: self.criteria.clone(),
            includes: self.includes.clone(),
        }
    }
}

impl<T: Entity> fmt::Debug for Specification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specification")
            .field("entity", &T::NAME)
            .field("criteria", &self.criteria)
            .field("includes", &self.includes)
            .finish()
    }
}
