//! Runtime strategy selection.

use std::marker::PhantomData;
use switchyard_core::{
    ConfigurationError, Lookup, Message, Strategy, StrategyTable, UnknownStrategyError,
};

/// Selects one strategy out of a table by name and invokes it.
///
/// The active strategy can be replaced at any time with
/// [`set_strategy`](Self::set_strategy); callers of [`invoke`](Self::invoke)
/// are unaffected by which handler is behind it.
///
/// # Example
///
/// ```rust,ignore
/// let registry = RegistryBuilder::new()
///     .register("CreditCard", pay_by_card)
///     .register("PayPal", pay_by_paypal)
///     .build()?;
///
/// let mut payments = StrategyDispatcher::new(registry, "CreditCard")?;
/// payments.invoke(ContextRecord::new().with("amount", "10"))?;
///
/// payments.set_strategy("PayPal")?;
/// payments.invoke(ContextRecord::new().with("amount", "5"))?;
/// ```
pub struct StrategyDispatcher<C, T>
where
    T: StrategyTable,
{
    table: T,
    active: T::Value,
    active_name: String,
    _context: PhantomData<fn(C)>,
}

impl<C, T> StrategyDispatcher<C, T>
where
    C: Message,
    T: StrategyTable,
    T::Value: Strategy<C> + Clone,
{
    /// Create a dispatcher with `initial` as the active strategy.
    ///
    /// Fails if `initial` is not registered in `table`.
    pub fn new(table: T, initial: &str) -> Result<Self, ConfigurationError> {
        let active = match table.lookup(initial) {
            Lookup::Found(strategy) => strategy.clone(),
            Lookup::Missing => {
                return Err(ConfigurationError {
                    name: initial.to_string(),
                });
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(strategy = initial, registered = table.len(), "dispatcher ready");

        Ok(Self {
            table,
            active,
            active_name: initial.to_string(),
            _context: PhantomData,
        })
    }

    /// Make `name` the active strategy.
    ///
    /// On failure the active strategy is left unchanged.
    pub fn set_strategy(&mut self, name: &str) -> Result<(), UnknownStrategyError> {
        let Some(strategy) = self.table.lookup(name).found() else {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                requested = name,
                active = %self.active_name,
                "unknown strategy; keeping active one"
            );
            return Err(UnknownStrategyError {
                name: name.to_string(),
            });
        };

        self.active = strategy.clone();
        if self.active_name != name {
            #[cfg(feature = "tracing")]
            tracing::debug!(from = %self.active_name, to = name, "strategy switched");
            self.active_name = name.to_string();
        }
        Ok(())
    }

    /// Execute the active strategy with `context` and return its output.
    pub fn invoke(&self, context: C) -> <T::Value as Strategy<C>>::Output {
        self.active.execute(context)
    }

    /// Name of the active strategy.
    pub fn active(&self) -> &str {
        &self.active_name
    }

    /// Registered strategy names, sorted.
    pub fn strategies(&self) -> Vec<&str> {
        self.table.names()
    }

    /// The backing table.
    pub fn table(&self) -> &T {
        &self.table
    }

    /// Consume the dispatcher and return its table.
    pub fn into_table(self) -> T {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::RegistryBuilder;

    fn registry() -> crate::dispatch::StrategyRegistry<u64, String> {
        RegistryBuilder::new()
            .register("CreditCard", |amount: u64| format!("card:{amount}"))
            .register("PayPal", |amount: u64| format!("paypal:{amount}"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_invoke_initial_strategy() {
        let dispatcher = StrategyDispatcher::<u64, _>::new(registry(), "CreditCard").unwrap();
        assert_eq!(dispatcher.active(), "CreditCard");
        assert_eq!(dispatcher.invoke(10), "card:10");
    }

    #[test]
    fn test_unknown_initial_strategy() {
        let result = StrategyDispatcher::<u64, _>::new(registry(), "Bitcoin");
        assert_eq!(
            result.err(),
            Some(ConfigurationError {
                name: "Bitcoin".to_string()
            })
        );
    }

    #[test]
    fn test_switch_strategy() {
        let mut dispatcher = StrategyDispatcher::<u64, _>::new(registry(), "CreditCard").unwrap();
        dispatcher.set_strategy("PayPal").unwrap();
        assert_eq!(dispatcher.active(), "PayPal");
        assert_eq!(dispatcher.invoke(5), "paypal:5");
    }

    #[test]
    fn test_unknown_switch_keeps_active() {
        let mut dispatcher = StrategyDispatcher::<u64, _>::new(registry(), "CreditCard").unwrap();
        let err = dispatcher.set_strategy("Cash").unwrap_err();
        assert_eq!(err.name, "Cash");
        assert_eq!(dispatcher.active(), "CreditCard");
        assert_eq!(dispatcher.invoke(1), "card:1");
    }

    #[test]
    fn test_strategy_listing() {
        let dispatcher = StrategyDispatcher::<u64, _>::new(registry(), "PayPal").unwrap();
        assert_eq!(dispatcher.strategies(), vec!["CreditCard", "PayPal"]);
        assert_eq!(dispatcher.into_table().len(), 2);
    }
}
