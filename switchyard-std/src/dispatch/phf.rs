//! PHF-based strategy table.
//!
//! Provides compile-time perfect hash lookup. The table is immutable and is
//! constructed from a static map reference, typically of plain function
//! pointers.
//!
//! ```rust,ignore
//! static PAYMENTS: phf::Map<&'static str, fn(ContextRecord) -> Receipt> = phf::phf_map! {
//!     "CreditCard" => pay_by_card as fn(ContextRecord) -> Receipt,
//!     "PayPal" => pay_by_paypal as fn(ContextRecord) -> Receipt,
//! };
//!
//! let dispatcher = StrategyDispatcher::new(PhfTable::new(&PAYMENTS), "CreditCard")?;
//! ```

use switchyard_core::{Lookup, StrategyTable};

/// A strategy table based on `phf::Map`.
pub struct PhfTable<V: 'static> {
    map: &'static phf::Map<&'static str, V>,
}

impl<V: Send + Sync + 'static> PhfTable<V> {
    /// Create a new table from a static PHF map.
    pub const fn new(map: &'static phf::Map<&'static str, V>) -> Self {
        Self { map }
    }
}

impl<V: Send + Sync + 'static> StrategyTable for PhfTable<V> {
    type Value = V;

    fn lookup(&self, name: &str) -> Lookup<'_, V> {
        match self.map.get(name) {
            Some(v) => Lookup::Found(v),
            None => Lookup::Missing,
        }
    }

    fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.map.keys().copied().collect();
        names.sort_unstable();
        names
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}

// Note: TableBuilder is not implemented for PhfTable because PHF maps
// are constructed at compile time, not runtime.
