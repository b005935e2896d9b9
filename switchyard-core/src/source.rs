//! External item source.
//!
//! Observers that react to a category change usually need to reload the
//! items of that category. [`ItemSource`] is the seam for that lookup; the
//! transport behind it (HTTP, a cache, a fixture) is up to the caller.

use crate::error::BoxError;
use std::sync::Arc;

/// A catalogue item returned by an [`ItemSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category the item belongs to.
    pub category: String,
}

impl Item {
    /// Create an item.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
        }
    }
}

/// Capability to fetch the items of a category.
pub trait ItemSource: Send + Sync + 'static {
    /// Fetch every item in `category`.
    fn fetch_items(&self, category: &str) -> Result<Vec<Item>, BoxError>;
}

impl<T: ItemSource> ItemSource for Arc<T> {
    fn fetch_items(&self, category: &str) -> Result<Vec<Item>, BoxError> {
        (**self).fetch_items(category)
    }
}
