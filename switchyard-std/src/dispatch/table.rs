//! HashMap-based strategy table.
//!
//! This is the default table and requires no external dependencies.

use std::collections::HashMap;
use switchyard_core::{Lookup, RegistryError, StrategyTable, TableBuilder};

/// A strategy table backed by `HashMap`.
pub struct HashMapTable<V> {
    map: HashMap<String, V>,
}

impl<V> HashMapTable<V> {
    /// Create a table from an existing map.
    pub fn from_map(map: HashMap<String, V>) -> Self {
        Self { map }
    }

    /// Start building a table.
    pub fn builder() -> HashMapTableBuilder<V> {
        HashMapTableBuilder::default()
    }
}

impl<V> StrategyTable for HashMapTable<V>
where
    V: Send + Sync + 'static,
{
    type Value = V;

    fn lookup(&self, name: &str) -> Lookup<'_, V> {
        match self.map.get(name) {
            Some(v) => Lookup::Found(v),
            None => Lookup::Missing,
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.map.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}

/// Builder for [`HashMapTable`].
pub struct HashMapTableBuilder<V> {
    map: HashMap<String, V>,
    allow_overrides: bool,
}

impl<V> HashMapTableBuilder<V> {
    /// Allow duplicate names (later insertions override earlier ones).
    pub fn allow_overrides(mut self) -> Self {
        self.allow_overrides = true;
        self
    }
}

impl<V> Default for HashMapTableBuilder<V> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            allow_overrides: false,
        }
    }
}

impl<V> TableBuilder<V> for HashMapTableBuilder<V>
where
    V: Send + Sync + 'static,
{
    type Table = HashMapTable<V>;

    fn insert(&mut self, name: String, value: V) -> Result<(), RegistryError> {
        if !self.allow_overrides && self.map.contains_key(&name) {
            return Err(RegistryError::DuplicateStrategy(name));
        }
        self.map.insert(name, value);
        Ok(())
    }

    fn build(self) -> Result<Self::Table, RegistryError> {
        if self.map.is_empty() {
            return Err(RegistryError::Empty);
        }
        Ok(HashMapTable { map: self.map })
    }
}
