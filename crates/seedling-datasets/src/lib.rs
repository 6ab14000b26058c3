//! Seedling Datasets — category generators over embedded word tables.
//!
//! These are consumers of the randomizer: each generator picks from its own
//! tables through a shared [`seedling_randomizer::Randomizer`]. Together they
//! populate the standard word registry.

pub mod categories;
pub mod locale;
pub mod registry;

pub use categories::{Address, Commerce, Company, Finance, Hacker, Name};
pub use locale::{Currency, Locale};
pub use registry::Datasets;
