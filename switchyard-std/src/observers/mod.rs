//! Standard observer implementations.

pub mod fetching;
pub mod logging;

pub use fetching::FetchingObserver;
pub use logging::LoggingObserver;
