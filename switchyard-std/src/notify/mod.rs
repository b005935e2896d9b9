//! Publish/subscribe notification.
//!
//! Subscribers run synchronously on the publishing thread, in subscription
//! order. Use [`DeliveryPolicy`] to pick between reporting every failure
//! after a full pass and stopping at the first one.

pub mod hub;

pub use hub::{DeliveryPolicy, NotificationHub};
