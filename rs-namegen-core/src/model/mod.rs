//! Top-level module for fragment models and name generation.
//!
//! This module provides:
//! - Segmentation of names into fragments (`segmenter`)
//! - Frequency tables, transition models and part models
//! - Weighted sampling with constraint filtering (`sampler`)
//! - Markov and part generators, and the high-level `Generator`

/// A substring unit produced by segmentation, opaque to the models.
pub type Fragment = String;

/// The empty fragment: state before the first fragment of a name.
pub const START: &str = "";

/// High-level generation interface.
///
/// Owns the learned models, the random source and the usage sets of a run.
pub mod generator;

/// Options of a generation run and algorithm selection.
pub mod generation_options;

/// Every model learned from a corpus, with loading, caching and export.
pub mod model_set;

/// Markov-chain traversal over a transition model.
pub mod markov;

/// Independent prefix/join/suffix composition.
pub mod parts;

/// Fragment → successors counts, rooted at `START`.
pub mod transition_model;

/// Prefix, join and suffix tables.
pub mod part_model;

/// Fragment occurrence counts and weighted sampling.
pub mod frequency_table;

/// Candidate pools and constraint-aware selection.
pub mod sampler;

/// Fixed n-gram and vowel-group splitting.
pub mod segmenter;

/// Per-category sets of already emitted fragments.
pub mod usage;
