//! Testing utilities for Switchyard.
//!
//! This module provides fixtures that make it easier to test code built on
//! dispatchers and hubs.
//!
//! # Features
//!
//! - [`RecordingObserver`]: An observer that records every state it receives
//! - [`FailingObserver`]: An observer that always fails
//! - [`CountingStrategy`]: A strategy that counts invocations and returns a fixed value
//! - [`StaticSource`]: An in-memory [`ItemSource`] that can be switched into failure

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use switchyard_core::{BoxError, Item, ItemSource, Message, Observer, Strategy};

// ============================================================================
// Recording Observer
// ============================================================================

/// An observer that records all states it receives.
///
/// Clones share the same log, so keep one clone for assertions and subscribe
/// the other. Several recorders can share one journal (see
/// [`with_journal`](Self::with_journal)) to assert cross-subscriber ordering.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingObserver::<String>::new();
/// hub.subscribe(recorder.clone());
///
/// hub.publish("tools".to_string())?;
///
/// assert_eq!(recorder.states(), vec!["tools".to_string()]);
/// ```
pub struct RecordingObserver<S: Clone> {
    states: Arc<Mutex<Vec<S>>>,
    journal: Option<(&'static str, Arc<Mutex<Vec<String>>>)>,
}

impl<S: Clone> RecordingObserver<S> {
    /// Create a new recording observer.
    pub fn new() -> Self {
        Self {
            states: Arc::new(Mutex::new(Vec::new())),
            journal: None,
        }
    }

    /// Create a recorder that also appends `label` to a shared journal on
    /// every update.
    pub fn with_journal(label: &'static str, journal: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            states: Arc::new(Mutex::new(Vec::new())),
            journal: Some((label, journal)),
        }
    }

    /// Get a clone of the recorded states.
    pub fn states(&self) -> Vec<S> {
        self.states.lock().unwrap().clone()
    }

    /// Get the number of recorded states.
    pub fn count(&self) -> usize {
        self.states.lock().unwrap().len()
    }

    /// Clear all recorded states.
    pub fn clear(&self) {
        self.states.lock().unwrap().clear();
    }
}

impl<S: Clone> Default for RecordingObserver<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone> Clone for RecordingObserver<S> {
    fn clone(&self) -> Self {
        Self {
            states: self.states.clone(),
            journal: self.journal.clone(),
        }
    }
}

impl<S: Message + Clone> Observer<S> for RecordingObserver<S> {
    fn update(&self, state: &S) -> Result<(), BoxError> {
        self.states.lock().unwrap().push(state.clone());
        if let Some((label, journal)) = &self.journal {
            journal.lock().unwrap().push((*label).to_string());
        }
        Ok(())
    }
}

// ============================================================================
// Failing Observer
// ============================================================================

/// An observer that fails every update with a fixed message.
///
/// It still counts how often it was called, which is useful to check whether
/// delivery continued past it.
#[derive(Clone)]
pub struct FailingObserver {
    message: &'static str,
    calls: Arc<AtomicUsize>,
}

impl FailingObserver {
    /// Create an observer failing with `message`.
    pub fn new(message: &'static str) -> Self {
        Self {
            message,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of updates received.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<S: Message> Observer<S> for FailingObserver {
    fn update(&self, _state: &S) -> Result<(), BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.message.into())
    }
}

// ============================================================================
// Counting Strategy
// ============================================================================

/// A strategy that counts invocations and always returns the same value.
///
/// # Example
///
/// ```rust,ignore
/// let card = CountingStrategy::returning("card");
/// let registry = RegistryBuilder::new().register("CreditCard", card.clone()).build()?;
///
/// dispatcher.invoke(ctx);
/// assert_eq!(card.count(), 1);
/// ```
pub struct CountingStrategy<T> {
    count: Arc<AtomicUsize>,
    value: T,
}

impl<T: Clone> CountingStrategy<T> {
    /// Create a counting strategy returning `value`.
    pub fn returning(value: T) -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            value,
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<T: Clone> Clone for CountingStrategy<T> {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
            value: self.value.clone(),
        }
    }
}

impl<C, T> Strategy<C> for CountingStrategy<T>
where
    C: Message,
    T: Clone + Send + Sync + 'static,
{
    type Output = T;

    fn execute(&self, _context: C) -> T {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.value.clone()
    }
}

// ============================================================================
// Static Source
// ============================================================================

/// An in-memory [`ItemSource`].
///
/// Clones share state, so a test can flip a source into failure after
/// handing a clone to an observer.
#[derive(Clone, Default)]
pub struct StaticSource {
    items: Arc<Vec<Item>>,
    failure: Arc<Mutex<Option<String>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StaticSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item.
    pub fn with_item(mut self, item: Item) -> Self {
        Arc::make_mut(&mut self.items).push(item);
        self
    }

    /// Make every subsequent fetch fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }

    /// Clear failure state.
    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Categories requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl ItemSource for StaticSource {
    fn fetch_items(&self, category: &str) -> Result<Vec<Item>, BoxError> {
        self.requests.lock().unwrap().push(category.to_string());

        if let Some(ref message) = *self.failure.lock().unwrap() {
            return Err(message.clone().into());
        }

        Ok(self
            .items
            .iter()
            .filter(|item| item.category == category)
            .cloned()
            .collect())
    }
}
