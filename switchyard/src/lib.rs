//! # switchyard - Runtime-Swappable Strategies and Synchronous Notification
//!
//! `switchyard` bundles two small building blocks:
//!
//! - a **strategy dispatcher** that keeps one named handler active, invokes
//!   it with a context, and lets callers swap it by name at runtime;
//! - a **notification hub** that delivers every published state to its
//!   subscribers, synchronously and in subscription order.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use switchyard::prelude::*;
//!
//! let registry = RegistryBuilder::new()
//!     .register("CreditCard", |ctx: ContextRecord| charge_card(&ctx))
//!     .register("PayPal", |ctx: ContextRecord| charge_paypal(&ctx))
//!     .build()?;
//!
//! let mut payments = StrategyDispatcher::new(registry, "CreditCard")?;
//! payments.invoke(ContextRecord::new().with("amount", "10"))?;
//! payments.set_strategy("PayPal")?;
//!
//! let mut categories = NotificationHub::new();
//! categories.subscribe(LoggingObserver::named("category"));
//! categories.publish("tools".to_string())?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use switchyard_core::{
    // Errors
    BoxError,
    // Notification
    BoxObserver,
    ConfigurationError,
    // Context
    ContextRecord,
    ExtractError,
    // External collaborator
    Item,
    ItemSource,
    IntoUpdate,
    Lookup,
    // Message
    Message,
    Observer,
    PublishError,
    PublishReport,
    RegistryError,
    // Strategies
    SharedStrategy,
    Strategy,
    StrategyTable,
    Subject,
    SubscriberFailure,
    SubscriptionId,
    SwitchyardError,
    TableBuilder,
    UnknownStrategyError,
};

// Dispatch
pub use switchyard_std::dispatch::{
    HashMapTable, HashMapTableBuilder, RegistryBuilder, StrategyDispatcher, StrategyRegistry,
};

#[cfg(feature = "phf")]
pub use switchyard_std::dispatch::PhfTable;

// Notification
pub use switchyard_std::notify::{DeliveryPolicy, NotificationHub};

/// Standard observer implementations.
pub mod observers {
    pub use switchyard_std::observers::{FetchingObserver, LoggingObserver};
}

/// Standard strategy wrappers.
pub mod strategies {
    pub use switchyard_std::strategies::Traced;
}

/// Testing utilities.
pub mod testing {
    pub use switchyard_std::testing::{
        CountingStrategy, FailingObserver, RecordingObserver, StaticSource,
    };
}

/// Prelude module - common imports for Switchyard.
///
/// # Usage
///
/// ```rust,ignore
/// use switchyard::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, ContextRecord, DeliveryPolicy, NotificationHub, Observer, PublishError,
        RegistryBuilder, Strategy, StrategyDispatcher, StrategyTable, Subject, SwitchyardError,
        observers::{FetchingObserver, LoggingObserver},
        strategies::Traced,
    };
}
