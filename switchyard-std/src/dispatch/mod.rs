//! Strategy dispatch.
//!
//! This module provides the tables strategies are registered in and the
//! dispatcher that keeps one of them active.
//!
//! # Choosing a Table
//!
//! | Table | Use Case | Construction |
//! |-------|----------|--------------|
//! | `HashMapTable` / `StrategyRegistry` | Strategies known at startup, any handler type | Runtime builder |
//! | `PhfTable` | Fixed set of plain functions | Compile time (`phf` feature) |

pub mod dispatcher;
pub mod registry;
pub mod table;

#[cfg(feature = "phf")]
pub mod phf;

pub use dispatcher::StrategyDispatcher;
pub use registry::{RegistryBuilder, StrategyRegistry};
pub use table::{HashMapTable, HashMapTableBuilder};

#[cfg(feature = "phf")]
pub use self::phf::PhfTable;
