//! Chinese placeholder text ("lorem ipsum") generation library.
//!
//! This crate provides a small, stateless generation pipeline:
//! - Lenient parameter resolution (integers or numeric-looking text)
//! - Randomized sentence lengths around a target average
//! - Word sampling without replacement from a fixed corpus
//! - Weighted internal and terminal punctuation
//!
//! Randomness is drawn through [`model::random_source::RandomSource`],
//! which every `rand::Rng` implements, so tests can inject seeded or
//! scripted sources.

/// Generation pipeline, corpus and parameters.
pub mod model;

/// Crate error type.
pub mod error;

/// I/O utilities (word list loading, path helpers).
pub mod io;

pub use error::{LoremError, Result};
pub use model::generator::{generate, Generator};
pub use model::params::{GenerationParams, ParamValue};
