//! # switchyard-core
//!
//! Core traits for the Switchyard library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that supplies strategies or observers without pulling in the
//! standard implementations from `switchyard-std`.
//!
//! # Two Halves
//!
//! ## Strategy Selection ([`Strategy`], [`StrategyTable`])
//!
//! A [`Strategy`] is an interchangeable handler that receives a context and
//! produces an output. A [`StrategyTable`] maps names to strategies; the
//! dispatcher in `switchyard-std` keeps one of them active and lets callers
//! swap it by name at runtime.
//!
//! - **Plain functions**: any `Fn(C) -> O` is a strategy
//! - **Pluggable lookup**: tables can be built at runtime or fixed at compile time
//! - **Opaque output**: whatever the handler returns is handed back unchanged
//!
//! ## Notification ([`Subject`], [`Observer`])
//!
//! A [`Subject`] holds an ordered list of [`Observer`]s and delivers every
//! published state to each of them, synchronously and in subscription order.
//!
//! # Error Types
//!
//! - [`SwitchyardError`] - Top-level error type
//! - [`ConfigurationError`] / [`UnknownStrategyError`] - Strategy selection errors
//! - [`PublishError`] - Subscriber failures during a publish
//! - [`ExtractError`] - Context record field access

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod context;
mod error;
mod message;
mod observer;
mod response;
mod source;
mod strategy;
mod subject;
mod table;

// Re-exports
pub use context::{ContextRecord, ExtractError};
pub use error::{
    BoxError, ConfigurationError, PublishError, RegistryError, SubscriberFailure,
    SwitchyardError, UnknownStrategyError,
};
pub use message::Message;
pub use observer::{BoxObserver, Observer};
pub use response::IntoUpdate;
pub use source::{Item, ItemSource};
pub use strategy::{SharedStrategy, Strategy};
pub use subject::{PublishReport, Subject, SubscriptionId};
pub use table::{Lookup, StrategyTable, TableBuilder};
