//! Seedling Core — the shared random source behind every fixture generator.
//!
//! This crate owns the seed state and the primitives it exposes. Everything
//! that produces fixture values draws through it.

pub mod clock;
pub mod config;
pub mod error;
pub mod rng;
pub mod seed;
