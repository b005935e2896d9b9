//! Fluent registry builder for type-erased strategies.

use super::table::{HashMapTable, HashMapTableBuilder};
use switchyard_core::{Message, RegistryError, SharedStrategy, Strategy, TableBuilder};

/// A runtime registry of strategies that share a context and output type.
pub type StrategyRegistry<C, O> = HashMapTable<SharedStrategy<C, O>>;

/// Builder for constructing a [`StrategyRegistry`].
///
/// Registration is chainable; the first duplicate name is reported by
/// [`build`](Self::build).
pub struct RegistryBuilder<C: Message, O> {
    inner: HashMapTableBuilder<SharedStrategy<C, O>>,
    error: Option<RegistryError>,
}

impl<C: Message, O: 'static> Default for RegistryBuilder<C, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Message, O: 'static> RegistryBuilder<C, O> {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            inner: HashMapTableBuilder::default(),
            error: None,
        }
    }

    /// Let later registrations replace earlier ones with the same name.
    pub fn allow_overrides(mut self) -> Self {
        self.inner = self.inner.allow_overrides();
        self
    }

    /// Register a strategy under `name`.
    pub fn register<S>(mut self, name: impl Into<String>, strategy: S) -> Self
    where
        S: Strategy<C, Output = O>,
    {
        if self.error.is_none() {
            if let Err(e) = self.inner.insert(name.into(), SharedStrategy::new(strategy)) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Build the registry.
    pub fn build(self) -> Result<StrategyRegistry<C, O>, RegistryError> {
        match self.error {
            Some(e) => Err(e),
            None => self.inner.build(),
        }
    }
}
