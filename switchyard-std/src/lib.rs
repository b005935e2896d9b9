//! # switchyard-std
//!
//! Standard implementations for the Switchyard library.
//!
//! This crate provides:
//! - **Strategy dispatch**: [`StrategyDispatcher`], [`RegistryBuilder`], [`HashMapTable`]
//!   and, with the `phf` feature, a compile-time `PhfTable`
//! - **Notification**: [`NotificationHub`] with a configurable [`DeliveryPolicy`]
//! - **Standard observers**: Logging, Fetching
//! - **Standard strategies**: [`Traced`](strategies::Traced)
//! - **Testing fixtures**: see [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use switchyard_core;

pub mod dispatch;
pub mod notify;
pub mod observers;
pub mod strategies;
pub mod testing;

pub use dispatch::{HashMapTable, RegistryBuilder, StrategyDispatcher, StrategyRegistry};
pub use notify::{DeliveryPolicy, NotificationHub};
