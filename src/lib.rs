//! Summarise sequential vs. speculative benchmark runs and plot the
//! comparison.

pub mod env;
pub mod metrics;
pub mod plot;
pub mod report;
pub mod stats;

pub use env::init_logging;
