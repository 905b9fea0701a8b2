use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{NameGenError, Result};
use crate::io::{build_output_path, get_filename, is_up_to_date, list_files, read_corpus, write_json};

use super::frequency_table::FrequencyTable;
use super::generation_options::Algorithm;
use super::part_model::PartModel;
use super::segmenter::{Segmenter, VowelBoundary};
use super::transition_model::TransitionModel;
use super::usage::Category;

/// Extension of corpus files picked up when a directory is given.
pub const CORPUS_EXTENSION: &str = "txt";

/// Extension of the binary model cache written next to a corpus.
pub const CACHE_EXTENSION: &str = "bin";

/// Every model learned from a corpus.
///
/// This struct manages:
/// - `two_grams` / `three_grams`: transition models over fixed-size fragments
/// - `vowel_groups`: transition model over exact vowel-group fragments
/// - `legacy_vowel_groups`: same, over legacy vowel-group fragments
/// - `parts`: prefix/join/suffix tables from exact vowel-group fragments
/// - `corpus_names`: names of the corpus files loaded from disk
///
/// Built once, then only read by generators.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ModelSet {
	two_grams: TransitionModel,
	three_grams: TransitionModel,
	vowel_groups: TransitionModel,
	legacy_vowel_groups: TransitionModel,
	parts: PartModel,
	name_count: usize,
	corpus_names: Vec<String>,
}

impl ModelSet {
	/// Returns an empty model set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a model set from in-memory names.
	pub fn from_names<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut models = Self::new();
		for name in names {
			models.add_name(name.as_ref());
		}
		models
	}

	/// Adds one corpus name to every model.
	///
	/// Surrounding whitespace is trimmed; blank names are ignored.
	pub fn add_name(&mut self, name: &str) {
		let name = name.trim();
		if name.is_empty() {
			return;
		}

		self.two_grams.record_transitions(&Segmenter::NGram(2).split(name));
		self.three_grams.record_transitions(&Segmenter::NGram(3).split(name));

		let groups = Segmenter::VowelGroups(VowelBoundary::Exact).split(name);
		self.vowel_groups.record_transitions(&groups);
		self.parts.record_parts(&groups);

		let legacy_groups = Segmenter::VowelGroups(VowelBoundary::Legacy).split(name);
		self.legacy_vowel_groups.record_transitions(&legacy_groups);

		self.name_count += 1;
	}

	/// Loads the models of one corpus file.
	///
	/// With `use_cache`, a `<stem>.bin` file next to the corpus is reused when
	/// it is at least as recent as the corpus, and rewritten otherwise.
	///
	/// # Errors
	/// - The corpus does not exist or cannot be read
	/// - The cache cannot be encoded or written
	pub fn load<P: AsRef<Path>>(filepath: P, use_cache: bool) -> Result<Self> {
		let path = filepath.as_ref();
		if !path.is_file() {
			return Err(NameGenError::NotFound(path.to_path_buf()));
		}

		let mut models = if use_cache {
			Self::load_cached(path)?
		} else {
			Self::read_corpus_file(path)?
		};
		models.corpus_names.push(get_filename(path)?);
		Ok(models)
	}

	/// Loads and merges several corpora.
	///
	/// A directory stands for every `.txt` file directly inside it.
	pub fn load_all<P: AsRef<Path>>(paths: &[P], use_cache: bool) -> Result<Self> {
		let mut merged = Self::new();

		for path in paths {
			let path = path.as_ref();
			let files = if path.is_dir() {
				list_files(path, CORPUS_EXTENSION)?
			} else {
				vec![path.to_path_buf()]
			};
			if files.is_empty() {
				warn!("no .{CORPUS_EXTENSION} corpus found in {}", path.display());
			}
			for file in files {
				merged.merge(&Self::load(&file, use_cache)?);
			}
		}

		info!("{}", merged.stats());
		Ok(merged)
	}

	fn read_corpus_file(path: &Path) -> Result<Self> {
		let names = read_corpus(path)?;
		info!("read {} names from {}", names.len(), path.display());
		Ok(Self::from_names(names))
	}

	fn load_cached(path: &Path) -> Result<Self> {
		let cache_path = build_output_path(path, CACHE_EXTENSION)?;

		if is_up_to_date(&cache_path, path) {
			match Self::read_cache(&cache_path) {
				Ok(models) => {
					debug!("loaded cached models from {}", cache_path.display());
					return Ok(models);
				}
				Err(e) => warn!("rebuilding unreadable cache {}: {e}", cache_path.display()),
			}
		}

		let models = Self::read_corpus_file(path)?;
		let bytes = postcard::to_stdvec(&models)?;
		fs::write(&cache_path, bytes).map_err(|e| NameGenError::io(&cache_path, e))?;
		debug!("wrote model cache {}", cache_path.display());
		Ok(models)
	}

	fn read_cache(cache_path: &Path) -> Result<Self> {
		let bytes = fs::read(cache_path).map_err(|e| NameGenError::io(cache_path, e))?;
		Ok(postcard::from_bytes(&bytes)?)
	}

	/// Transition model walked by a Markov `algorithm`, `None` for part algorithms.
	pub fn transition_model(&self, algorithm: Algorithm) -> Option<&TransitionModel> {
		match algorithm {
			Algorithm::Markov2Gram => Some(&self.two_grams),
			Algorithm::Markov3Gram => Some(&self.three_grams),
			Algorithm::MarkovVowelGroup => Some(&self.vowel_groups),
			Algorithm::MarkovVowelGroupLegacy => Some(&self.legacy_vowel_groups),
			Algorithm::Parts2 | Algorithm::Parts3 => None,
		}
	}

	/// Part tables drawn by a part `algorithm`, in generation order.
	///
	/// Empty for Markov algorithms.
	pub fn part_tables(&self, algorithm: Algorithm) -> Vec<(Category, &FrequencyTable)> {
		let categories: &[Category] = match algorithm {
			Algorithm::Parts2 => &[Category::Prefix, Category::Suffix],
			Algorithm::Parts3 => &[Category::Prefix, Category::Join, Category::Suffix],
			_ => &[],
		};
		categories
			.iter()
			.filter_map(|&category| self.parts.table(category).map(|table| (category, table)))
			.collect()
	}

	pub fn parts(&self) -> &PartModel {
		&self.parts
	}

	/// Names of the corpus files merged into this set.
	pub fn corpus_names(&self) -> &[String] {
		&self.corpus_names
	}

	/// Number of corpus names ingested.
	pub fn name_count(&self) -> usize {
		self.name_count
	}

	/// Merges another model set into this one by summing every count.
	pub fn merge(&mut self, other: &Self) {
		self.two_grams.merge(&other.two_grams);
		self.three_grams.merge(&other.three_grams);
		self.vowel_groups.merge(&other.vowel_groups);
		self.legacy_vowel_groups.merge(&other.legacy_vowel_groups);
		self.parts.merge(&other.parts);
		self.name_count += other.name_count;
		self.corpus_names.extend(other.corpus_names.iter().cloned());
	}

	/// Key counts of every model.
	pub fn stats(&self) -> ModelStats {
		ModelStats {
			names: self.name_count,
			two_grams: self.two_grams.len(),
			three_grams: self.three_grams.len(),
			vowel_groups: self.vowel_groups.len(),
			legacy_vowel_groups: self.legacy_vowel_groups.len(),
			prefixes: self.parts.prefixes().len(),
			joins: self.parts.joins().len(),
			suffixes: self.parts.suffixes().len(),
		}
	}

	/// Writes every model as a JSON file into `dir`, creating it if needed.
	///
	/// Returns the paths written.
	pub fn export_json<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<PathBuf>> {
		let dir = dir.as_ref();
		fs::create_dir_all(dir).map_err(|e| NameGenError::io(dir, e))?;

		let transitions = [
			("twograms.json", &self.two_grams),
			("threegrams.json", &self.three_grams),
			("vowelgroups.json", &self.vowel_groups),
			("legacy_vowelgroups.json", &self.legacy_vowel_groups),
		];
		let tables = [
			("prefixes.json", self.parts.prefixes()),
			("joins.json", self.parts.joins()),
			("suffixes.json", self.parts.suffixes()),
		];

		let mut written = Vec::with_capacity(transitions.len() + tables.len());
		for (file, model) in transitions {
			let path = dir.join(file);
			write_json(&path, model)?;
			written.push(path);
		}
		for (file, table) in tables {
			let path = dir.join(file);
			write_json(&path, table)?;
			written.push(path);
		}

		debug!("exported {} model files to {}", written.len(), dir.display());
		Ok(written)
	}
}

/// Number of keys in each model of a `ModelSet`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModelStats {
	pub names: usize,
	pub two_grams: usize,
	pub three_grams: usize,
	pub vowel_groups: usize,
	pub legacy_vowel_groups: usize,
	pub prefixes: usize,
	pub joins: usize,
	pub suffixes: usize,
}

impl fmt::Display for ModelStats {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "names: {}", self.names)?;
		writeln!(f, "twograms: {}", self.two_grams)?;
		writeln!(f, "threegrams: {}", self.three_grams)?;
		writeln!(f, "vowelgroups: {}", self.vowel_groups)?;
		writeln!(f, "legacy vowelgroups: {}", self.legacy_vowel_groups)?;
		writeln!(f, "prefixes: {}", self.prefixes)?;
		writeln!(f, "joins: {}", self.joins)?;
		write!(f, "suffixes: {}", self.suffixes)
	}
}
