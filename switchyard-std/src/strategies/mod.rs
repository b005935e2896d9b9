//! Standard strategy wrappers.

pub mod traced;

pub use traced::Traced;
