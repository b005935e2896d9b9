//! Subject core trait.

use crate::{error::PublishError, message::Message, observer::Observer};
use std::fmt;

/// Handle identifying one subscription on a subject.
///
/// Every call to [`Subject::subscribe`] yields a fresh id, even when the same
/// observer is subscribed twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Wrap a raw id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The result of a successful publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PublishReport {
    /// Number of subscribers that were notified.
    pub delivered: usize,
}

/// An entity whose state changes are delivered to its observers.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot publish states of type `{S}`",
    label = "missing `Subject` implementation",
    note = "Implement `Subject<{S}>` to manage subscribers."
)]
pub trait Subject<S: Message> {
    /// Append an observer to the notification list.
    fn subscribe<O: Observer<S>>(&mut self, observer: O) -> SubscriptionId;

    /// Remove a subscription. Returns whether one was removed.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;

    /// Record `state` and deliver it to every subscriber in subscription order.
    fn publish(&mut self, state: S) -> Result<PublishReport, PublishError>;
}
