//! Observer that reloads items whenever the selected category changes.

use std::sync::{Arc, Mutex};
use switchyard_core::{BoxError, Item, ItemSource, Observer};

/// Refreshes a cached item list from an [`ItemSource`] on every update.
///
/// The published state is the category name. On a fetch failure the cache
/// keeps the previous items and the error is returned to the hub.
///
/// Clones share the same cache, so a clone kept by the caller sees what the
/// subscribed instance fetched.
pub struct FetchingObserver<Src> {
    source: Src,
    items: Arc<Mutex<Vec<Item>>>,
}

impl<Src: ItemSource> FetchingObserver<Src> {
    /// Create an observer with an empty cache.
    pub fn new(source: Src) -> Self {
        Self {
            source,
            items: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of the most recently fetched items.
    pub fn items(&self) -> Vec<Item> {
        match self.items.lock() {
            Ok(items) => items.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn refresh(&self, category: &str) -> Result<(), BoxError> {
        let fetched = self.source.fetch_items(category)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(category, count = fetched.len(), "items refreshed");

        let mut items = self
            .items
            .lock()
            .map_err(|_| BoxError::from("item cache lock poisoned"))?;
        *items = fetched;
        Ok(())
    }
}

impl<Src: Clone> Clone for FetchingObserver<Src> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            items: self.items.clone(),
        }
    }
}

impl<Src: ItemSource> Observer<String> for FetchingObserver<Src> {
    fn update(&self, state: &String) -> Result<(), BoxError> {
        self.refresh(state)
    }
}

impl<Src: ItemSource> Observer<&'static str> for FetchingObserver<Src> {
    fn update(&self, state: &&'static str) -> Result<(), BoxError> {
        self.refresh(state)
    }
}
