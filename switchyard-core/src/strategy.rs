//! # Strategies
//!
//! A strategy is one of several interchangeable handlers for the same kind of
//! context. The caller never names the concrete handler; a dispatcher picks
//! one by key and the caller only sees the output.
//!
//! # Usage Patterns
//!
//! 1. **Plain function or closure**: `|ctx: ContextRecord| charge(ctx)`
//! 2. **Struct implementation**: `impl Strategy<ContextRecord> for CardPayment`
//! 3. **Type-erased**: [`SharedStrategy`] for runtime registries holding
//!    handlers of different concrete types
//!
//! The output is opaque to the framework. A handler that can fail returns a
//! `Result` and the error reaches the caller exactly as the handler built it.

use crate::message::Message;
use std::{fmt, sync::Arc};

/// An interchangeable handler selected by a runtime key.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a strategy for contexts of type `{C}`",
    label = "missing `Strategy<{C}>` implementation",
    note = "Strategies must implement `execute`, or be a `Fn({C}) -> Output` closure."
)]
pub trait Strategy<C: Message>: Send + Sync + 'static {
    /// The result of executing the strategy.
    type Output;

    /// Executes the strategy with the given context.
    fn execute(&self, context: C) -> Self::Output;
}

// Blanket impl for closures and function pointers
impl<F, C, O> Strategy<C> for F
where
    C: Message,
    F: Fn(C) -> O + Send + Sync + 'static,
{
    type Output = O;

    fn execute(&self, context: C) -> Self::Output {
        (self)(context)
    }
}

/// A reference-counted, type-erased strategy.
///
/// Cloning is cheap, which lets a dispatcher hold the active handler while
/// the table keeps its own copy.
pub struct SharedStrategy<C: Message, O> {
    inner: Arc<dyn Strategy<C, Output = O>>,
}

impl<C: Message, O> SharedStrategy<C, O> {
    /// Erase a concrete strategy.
    pub fn new<S>(strategy: S) -> Self
    where
        S: Strategy<C, Output = O>,
    {
        Self {
            inner: Arc::new(strategy),
        }
    }

    /// Whether two handles point at the same strategy instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<C: Message, O> Clone for SharedStrategy<C, O> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Message, O> fmt::Debug for SharedStrategy<C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedStrategy").finish_non_exhaustive()
    }
}

impl<C: Message, O: 'static> Strategy<C> for SharedStrategy<C, O> {
    type Output = O;

    fn execute(&self, context: C) -> Self::Output {
        self.inner.execute(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubler;

    impl Strategy<u64> for Doubler {
        type Output = u64;

        fn execute(&self, context: u64) -> u64 {
            context * 2
        }
    }

    fn triple(x: u64) -> u64 {
        x * 3
    }

    #[test]
    fn test_closure_and_fn_are_strategies() {
        let add_one = |x: u64| x + 1;
        assert_eq!(add_one.execute(1), 2);
        assert_eq!((triple as fn(u64) -> u64).execute(2), 6);
    }

    #[test]
    fn test_shared_strategy_erases_type() {
        let strategies: Vec<SharedStrategy<u64, u64>> = vec![
            SharedStrategy::new(Doubler),
            SharedStrategy::new(|x: u64| x + 10),
        ];
        let outputs: Vec<u64> = strategies.iter().map(|s| s.execute(5)).collect();
        assert_eq!(outputs, vec![10, 15]);
    }

    #[test]
    fn test_shared_strategy_clone_shares_instance() {
        let a = SharedStrategy::new(Doubler);
        let b = a.clone();
        let c = SharedStrategy::new(Doubler);
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));
    }
}
