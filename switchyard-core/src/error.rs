//! Error types for Switchyard.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`SwitchyardError`] - Top-level error type for all Switchyard operations
//! - [`ConfigurationError`] - Invalid initial strategy at construction
//! - [`UnknownStrategyError`] - Switching to a name that is not registered
//! - [`RegistryError`] - Errors while building a strategy table
//! - [`PublishError`] - Subscriber failures during a publish

use crate::{context::ExtractError, subject::SubscriptionId};
use thiserror::Error;

/// A boxed error type for opaque handler and subscriber failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Switchyard operations.
#[derive(Error, Debug)]
pub enum SwitchyardError {
    /// The dispatcher was constructed with an unregistered strategy.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A strategy switch named an unregistered strategy.
    #[error(transparent)]
    UnknownStrategy(#[from] UnknownStrategyError),

    /// A strategy table could not be built.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// One or more subscribers failed during a publish.
    #[error("publish error: {0}")]
    Publish(#[from] PublishError),

    /// A context record field was missing or malformed.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// The initial strategy handed to a dispatcher is not in its table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("initial strategy `{name}` is not registered")]
pub struct ConfigurationError {
    /// The requested strategy name.
    pub name: String,
}

/// A strategy switch named a strategy that is not in the table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no strategy registered under `{name}`")]
pub struct UnknownStrategyError {
    /// The requested strategy name.
    pub name: String,
}

/// Errors that can occur while building a strategy table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The same name was registered twice and overrides were not allowed.
    #[error("strategy `{0}` is already registered")]
    DuplicateStrategy(String),

    /// The table has no strategies at all.
    #[error("no strategies registered")]
    Empty,
}

/// A single subscriber failure recorded during a publish.
#[derive(Debug)]
pub struct SubscriberFailure {
    /// Subscription whose observer failed.
    pub subscription: SubscriptionId,
    /// Zero-based position of the subscriber in notification order.
    pub position: usize,
    /// The error raised by the observer, uninterpreted.
    pub error: BoxError,
}

/// Errors that can occur while publishing a state to subscribers.
#[derive(Error, Debug)]
pub enum PublishError {
    /// Delivery stopped at the first failing subscriber.
    #[error("subscriber {subscription} failed; {delivered} delivered before abort")]
    Aborted {
        /// Subscription whose observer failed.
        subscription: SubscriptionId,
        /// Number of subscribers notified successfully before the failure.
        delivered: usize,
        /// The error raised by the observer.
        #[source]
        source: BoxError,
    },

    /// Every subscriber was notified and at least one of them failed.
    #[error("{} of {} subscribers failed", .failures.len(), .delivered + .failures.len())]
    Failed {
        /// Number of subscribers notified successfully.
        delivered: usize,
        /// Failures in notification order.
        failures: Vec<SubscriberFailure>,
    },
}

impl PublishError {
    /// Number of subscribers that were notified successfully.
    pub fn delivered(&self) -> usize {
        match self {
            PublishError::Aborted { delivered, .. } | PublishError::Failed { delivered, .. } => {
                *delivered
            }
        }
    }

    /// Subscriptions that failed, in notification order.
    pub fn failed_subscriptions(&self) -> Vec<SubscriptionId> {
        match self {
            PublishError::Aborted { subscription, .. } => vec![*subscription],
            PublishError::Failed { failures, .. } => {
                failures.iter().map(|f| f.subscription).collect()
            }
        }
    }
}

impl From<BoxError> for SwitchyardError {
    fn from(err: BoxError) -> Self {
        SwitchyardError::Custom(err)
    }
}
