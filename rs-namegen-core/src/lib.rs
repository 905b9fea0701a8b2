//! Fragment-based name generation library.
//!
//! This crate learns statistical fragment patterns from a corpus of example
//! names and samples new names from them:
//! - Corpus segmentation into n-gram or vowel-group fragments
//! - Transition (Markov) models and positional prefix/join/suffix tables
//! - Weighted sampling through a shrinking candidate pool
//! - Markov traversal and part composition, with minimum length and
//!   uniqueness constraints
//!
//! Randomness always flows through an explicit, seedable generator so that
//! runs are reproducible.

/// Fragment models, sampling and generation.
pub mod model;

/// Error type shared by the whole crate.
pub mod error;

/// I/O utilities (corpus loading, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use error::{NameGenError, Result};
