//! # Observers
//!
//! An observer is registered with a [`Subject`] and receives every state the
//! subject publishes. Observers see the state by reference so one value can
//! be shared by all subscribers without cloning.
//!
//! Any `Fn(&S) -> R` closure is an observer as long as `R` is `()` or a
//! `Result`; see [`IntoUpdate`].
//!
//! [`Subject`]: crate::Subject

use crate::{error::BoxError, message::Message, response::IntoUpdate};

/// An entity registered to receive subject state changes.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Observer<{S}>`",
    label = "missing `Observer` implementation",
    note = "Observers must implement `update` for the state type `{S}`, or be a `Fn(&{S})` closure."
)]
pub trait Observer<S: Message>: Send + Sync + 'static {
    /// Called with the newly published state.
    fn update(&self, state: &S) -> Result<(), BoxError>;

    /// Boxes the observer.
    fn boxed(self) -> BoxObserver<S>
    where
        Self: Sized,
    {
        BoxObserver::new(self)
    }
}

// Blanket impl for closures
impl<F, S, R> Observer<S> for F
where
    S: Message,
    R: IntoUpdate,
    F: Fn(&S) -> R + Send + Sync + 'static,
{
    fn update(&self, state: &S) -> Result<(), BoxError> {
        (self)(state).into_update()
    }
}

/// A heap-allocated observer of any concrete type.
pub struct BoxObserver<S: Message> {
    inner: Box<dyn Observer<S>>,
}

impl<S: Message> BoxObserver<S> {
    /// Box a concrete observer.
    pub fn new<O: Observer<S>>(observer: O) -> Self {
        Self {
            inner: Box::new(observer),
        }
    }
}

impl<S: Message> Observer<S> for BoxObserver<S> {
    fn update(&self, state: &S) -> Result<(), BoxError> {
        self.inner.update(state)
    }

    fn boxed(self) -> BoxObserver<S> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_closure_observer() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let observer = move |state: &String| sink.lock().unwrap().push(state.clone());

        observer.update(&"tools".to_string()).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec!["tools".to_string()]);
    }

    #[test]
    fn test_fallible_closure_observer() {
        let observer = |state: &u32| {
            if *state > 3 {
                Err("too large")
            } else {
                Ok(())
            }
        };
        assert!(observer.update(&1).is_ok());
        assert_eq!(observer.update(&9).unwrap_err().to_string(), "too large");
    }

    #[test]
    fn test_boxed_observer_delegates() {
        let boxed = (|_: &u32| Err::<(), _>("nope")).boxed();
        assert!(boxed.update(&0).is_err());
    }
}
