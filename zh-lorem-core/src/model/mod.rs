//! Top-level module for the placeholder text pipeline.
//!
//! Generation runs as a one-way pipeline:
//! parameters → resolved integers → sampled lengths → sampled words → text.
//! - Parameter resolution (`params`)
//! - Sentence length sampling (`length`)
//! - Distinct word sampling (`sampler`)
//! - Punctuation policy (`punctuation`) and assembly (`assembler`)
//! - Vocabulary handling (`corpus`) and the high-level `Generator`

/// High-level interface generating paragraphs from a corpus.
pub mod generator;

/// Immutable vocabulary: built-in word list, file loading and merging.
pub mod corpus;

/// Caller parameters and their lenient integer coercion.
pub mod params;

/// Randomized sentence lengths around a target average.
pub mod length;

/// Sampling of distinct words without replacement.
pub mod sampler;

/// Weighted internal and terminal punctuation.
pub mod punctuation;

/// Sentence and paragraph assembly.
pub mod assembler;

/// Random source abstraction, implemented by every `rand::Rng`.
pub mod random_source;
