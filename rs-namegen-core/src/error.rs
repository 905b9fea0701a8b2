use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::usage::Category;

/// Errors produced while loading corpora, building models or preparing a
/// generation run.
///
/// Dead ends and exhausted candidate pools are not errors: they only make a
/// generated name shorter.
#[derive(Debug, Error)]
pub enum NameGenError {
	/// The requested algorithm name is not known.
	#[error("unknown algorithm '{0}' (expected one of: markov-2gram, markov-3gram, markov-vowelgroup, markov-vowelgroup-legacy, parts-2, parts-3)")]
	UnknownAlgorithm(String),

	/// Uniqueness was requested for more names than a category can supply.
	#[error("not enough unique {category} fragments: {available} available, {required} required")]
	InsufficientFragments {
		category: Category,
		available: usize,
		required: usize,
	},

	/// A corpus, cache or export path does not exist.
	#[error("no such file or directory: {}", .0.display())]
	NotFound(PathBuf),

	/// Reading or writing a file failed.
	#[error("i/o error on {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The binary model cache could not be encoded or decoded.
	#[error("model cache error: {0}")]
	Cache(#[from] postcard::Error),

	/// A model could not be exported as JSON.
	#[error("model export error: {0}")]
	Export(#[from] serde_json::Error),
}

impl NameGenError {
	pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}
}

pub type Result<T> = std::result::Result<T, NameGenError>;
