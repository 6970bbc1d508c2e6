use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A persisted aggregate addressable by a unique key.
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    /// Identifier type
    type Key: Clone + Ord + Hash + Display + Debug + Send + Sync + 'static;

    /// Related entities that can be eager-loaded alongside this one
    type Relation: Copy + Ord + Debug + Send + Sync + 'static;

    /// Human-readable entity name used in messages
    const NAME: &'static str;

    fn key(&self) -> &Self::Key;
}

/// Relation set of an entity that has nothing to eager-load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NoRelation {}
