//! Logging Observer - Observability for published states.

use std::fmt::Debug;
use switchyard_core::{BoxError, Message, Observer};

/// An observer that logs every published state.
///
/// Logs through `tracing` at debug level when the `tracing` feature is
/// enabled and does nothing otherwise. It never fails, so it is safe to put
/// first in a hub with [`AbortOnError`](crate::notify::DeliveryPolicy::AbortOnError).
///
/// # Example
///
/// ```rust,ignore
/// let mut hub = NotificationHub::new();
/// hub.subscribe(LoggingObserver::named("category"));
/// ```
pub struct LoggingObserver {
    name: &'static str,
}

impl LoggingObserver {
    /// Create a new `LoggingObserver` with a default name.
    pub fn new() -> Self {
        Self { name: "state" }
    }

    /// Create a new `LoggingObserver` with a custom name.
    ///
    /// The name identifies the subject in log messages.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }

    /// The name used in log messages.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Observer<S> for LoggingObserver
where
    S: Message + Debug,
{
    fn update(&self, state: &S) -> Result<(), BoxError> {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(name = %self.name, state = ?state, "state published");
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = (self.name, state);
        }

        Ok(())
    }
}
