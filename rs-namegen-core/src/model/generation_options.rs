use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NameGenError;

/// Generation algorithm.
///
/// # Variants
/// - `Markov2Gram`, `Markov3Gram`: walk the 2-gram / 3-gram transition model.
/// - `MarkovVowelGroup`: walk the vowel-group transition model.
/// - `MarkovVowelGroupLegacy`: same, over legacy vowel-group segmentation.
/// - `Parts2`: one prefix then one suffix.
/// - `Parts3`: one prefix, one join, then one suffix.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Algorithm {
	Markov2Gram,
	Markov3Gram,
	#[default]
	MarkovVowelGroup,
	MarkovVowelGroupLegacy,
	Parts2,
	Parts3,
}

impl Algorithm {
	pub const ALL: [Algorithm; 6] = [
		Algorithm::Markov2Gram,
		Algorithm::Markov3Gram,
		Algorithm::MarkovVowelGroup,
		Algorithm::MarkovVowelGroupLegacy,
		Algorithm::Parts2,
		Algorithm::Parts3,
	];

	/// Canonical name, as accepted by `FromStr`.
	pub fn as_str(&self) -> &'static str {
		match self {
			Algorithm::Markov2Gram => "markov-2gram",
			Algorithm::Markov3Gram => "markov-3gram",
			Algorithm::MarkovVowelGroup => "markov-vowelgroup",
			Algorithm::MarkovVowelGroupLegacy => "markov-vowelgroup-legacy",
			Algorithm::Parts2 => "parts-2",
			Algorithm::Parts3 => "parts-3",
		}
	}

	/// Transitions allowed after the first fragment, for Markov algorithms.
	///
	/// Shorter fragments get more steps so that names end up with similar
	/// lengths. Part algorithms return `None`.
	pub fn default_max_steps(&self) -> Option<usize> {
		match self {
			Algorithm::Markov2Gram => Some(6),
			Algorithm::Markov3Gram => Some(4),
			Algorithm::MarkovVowelGroup | Algorithm::MarkovVowelGroupLegacy => Some(3),
			Algorithm::Parts2 | Algorithm::Parts3 => None,
		}
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Algorithm {
	type Err = NameGenError;

	/// Parses a canonical name or one of the short aliases
	/// (`2gr`, `3gr`, `vg3`, `pt2`, `pt3`). Case-insensitive.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"markov-2gram" | "2gr" => Ok(Algorithm::Markov2Gram),
			"markov-3gram" | "3gr" => Ok(Algorithm::Markov3Gram),
			"markov-vowelgroup" | "vg3" => Ok(Algorithm::MarkovVowelGroup),
			"markov-vowelgroup-legacy" => Ok(Algorithm::MarkovVowelGroupLegacy),
			"parts-2" | "pt2" => Ok(Algorithm::Parts2),
			"parts-3" | "pt3" => Ok(Algorithm::Parts3),
			_ => Err(NameGenError::UnknownAlgorithm(s.to_owned())),
		}
	}
}

/// Parameters of a generation run.
///
/// # Invariants
/// - `max_steps`, when set, overrides the algorithm's default step bound and
///   is ignored by part algorithms
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationOptions {
	pub algorithm: Algorithm,

	/// Candidates shorter than this (in characters) are redrawn.
	pub min_fragment_length: usize,

	/// Number of names to generate.
	pub count: usize,

	/// Never reuse a fragment within a category during the run.
	pub unique: bool,

	/// Render fragments space-separated instead of concatenated.
	pub raw_output: bool,

	/// Overrides `Algorithm::default_max_steps`.
	pub max_steps: Option<usize>,
}

impl GenerationOptions {
	/// Creates options for `algorithm` with every other field at its default.
	pub fn new(algorithm: Algorithm) -> Self {
		Self { algorithm, ..Default::default() }
	}

	/// Step bound for Markov algorithms.
	pub fn max_steps(&self) -> usize {
		self.max_steps.or(self.algorithm.default_max_steps()).unwrap_or(0)
	}

	/// Renders a generated fragment sequence.
	pub fn render<S: AsRef<str>>(&self, fragments: &[S]) -> String {
		let parts = fragments.iter().map(|fragment| fragment.as_ref());
		if self.raw_output {
			parts.collect::<Vec<&str>>().join(" ")
		} else {
			parts.collect::<String>()
		}
	}
}
