//! # Strategy Tables
//!
//! A table maps strategy names to strategies. This trait abstracts over the
//! lookup backend so a dispatcher works the same with a table assembled at
//! runtime (`HashMapTable`) or one fixed at compile time (`PhfTable`).
//!
//! Tables are immutable once built. Swapping the active strategy is the
//! dispatcher's job; adding strategies means building a new table.

use crate::error::RegistryError;

/// Result of a table lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<'a, V> {
    /// The name is registered.
    Found(&'a V),
    /// No strategy is registered under the name.
    Missing,
}

impl<'a, V> Lookup<'a, V> {
    /// Returns true if the name was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// Returns the found value, if any.
    pub fn found(self) -> Option<&'a V> {
        match self {
            Lookup::Found(v) => Some(v),
            Lookup::Missing => None,
        }
    }
}

/// A mapping from strategy name to strategy.
pub trait StrategyTable: Send + Sync + 'static {
    /// The stored strategy type.
    type Value;

    /// Look up a strategy by name.
    fn lookup(&self, name: &str) -> Lookup<'_, Self::Value>;

    /// Check if a name is registered.
    fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_found()
    }

    /// Registered names, sorted.
    fn names(&self) -> Vec<&str>;

    /// Number of registered strategies.
    fn len(&self) -> usize {
        self.names().len()
    }

    /// Whether the table is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builder for constructing strategy tables at runtime.
pub trait TableBuilder<V>: Default + Send {
    /// The table type this builder produces.
    type Table: StrategyTable<Value = V>;

    /// Insert a named strategy.
    ///
    /// Returns an error if the name already exists.
    fn insert(&mut self, name: String, value: V) -> Result<(), RegistryError>;

    /// Build the table, consuming the builder.
    fn build(self) -> Result<Self::Table, RegistryError>;
}
