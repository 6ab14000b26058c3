//! Seedling Randomizer — seeded primitives for synthetic fixture data.
//!
//! Every operation funnels through [`Randomizer::number`] (or
//! [`Randomizer::double`]) and therefore through the shared seed state. For a
//! fixed seed and a fixed single-threaded call order the produced values are
//! identical on every run.

pub mod enums;
pub mod pattern;
pub mod randomizer;
pub mod shuffle;
pub mod words;

pub use enums::EnumSet;
pub use randomizer::Randomizer;
pub use shuffle::Shuffle;
pub use words::{WordComposer, WordFunction, WordRegistry, WordRegistryBuilder};
