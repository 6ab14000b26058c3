//! Shared test doubles and utilities for the Seedling fixture generator.

mod clock;
mod logging;
mod rng;

pub use clock::FixedClock;
pub use logging::init_test_tracing;
pub use rng::{FixedSource, RequestLog, SequenceSource};
