//! Tracing wrapper for strategies.

use switchyard_core::{Message, Strategy};

/// A strategy wrapper that instruments execution with a `tracing` span.
///
/// Input and output pass through untouched; only a span named after the
/// strategy is entered for the duration of the call.
///
/// ```rust,ignore
/// let registry = RegistryBuilder::new()
///     .register("CreditCard", Traced::new(pay_by_card, "CreditCard"))
///     .build()?;
/// ```
pub struct Traced<S> {
    inner: S,
    name: &'static str,
}

impl<S> Traced<S> {
    /// Wrap `inner`, labelling its spans with `name`.
    pub const fn new(inner: S, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The span label.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Unwrap the inner strategy.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Clone> Clone for Traced<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<C, S> Strategy<C> for Traced<S>
where
    C: Message,
    S: Strategy<C>,
{
    type Output = S::Output;

    #[cfg(feature = "tracing")]
    fn execute(&self, context: C) -> Self::Output {
        let span = tracing::debug_span!("strategy", name = %self.name);
        let _entered = span.enter();
        tracing::debug!("executing");
        self.inner.execute(context)
    }

    #[cfg(not(feature = "tracing"))]
    fn execute(&self, context: C) -> Self::Output {
        self.inner.execute(context)
    }
}
