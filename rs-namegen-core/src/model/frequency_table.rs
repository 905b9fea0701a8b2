use std::collections::{BTreeMap, HashSet};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Fragment;
use super::sampler::CandidatePool;

/// Occurrence counts of fragments.
///
/// A `FrequencyTable` is either the set of outgoing edges of one state in a
/// transition model, or one positional table (prefix, join, suffix) of a
/// part model.
///
/// ## Responsibilities:
/// - Accumulate occurrences during learning
/// - Draw a fragment with probability proportional to its count
/// - Merge with another table (ex. one table per corpus file)
///
/// ## Invariants
/// - Each count is strictly positive
/// - Keys are kept sorted, so candidate lists never depend on hash order
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FrequencyTable {
	/// Example: { "ka" => 42, "mo" => 3 }
	counts: BTreeMap<Fragment, usize>,
}

impl FrequencyTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `fragment`.
	pub fn add(&mut self, fragment: &str) {
		self.add_count(fragment, 1);
	}

	/// Records `count` occurrences of `fragment`. A zero count is ignored.
	pub fn add_count(&mut self, fragment: &str, count: usize) {
		if count == 0 {
			return;
		}
		*self.counts.entry(fragment.to_owned()).or_insert(0) += count;
	}

	/// Occurrences recorded for `fragment` (0 if never seen).
	pub fn count(&self, fragment: &str) -> usize {
		self.counts.get(fragment).copied().unwrap_or(0)
	}

	/// Number of distinct fragments.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Sum of all counts.
	pub fn total(&self) -> usize {
		self.counts.values().sum()
	}

	/// Iterates over `(fragment, count)` in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
		self.counts.iter().map(|(k, v)| (k.as_str(), *v))
	}

	/// Number of distinct fragments at least `min_length` characters long and
	/// absent from `used`.
	pub fn count_usable(&self, min_length: usize, used: Option<&HashSet<Fragment>>) -> usize {
		self.counts
			.keys()
			.filter(|k| k.chars().count() >= min_length)
			.filter(|k| used.is_none_or(|used| !used.contains(k.as_str())))
			.count()
	}

	/// Draws a fragment with probability proportional to its count.
	///
	/// Returns `None` if the table is empty.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		CandidatePool::weighted(self).draw(rng)
	}

	/// Merges another table into this one by summing counts.
	pub fn merge(&mut self, other: &Self) {
		for (fragment, count) in &other.counts {
			*self.counts.entry(fragment.clone()).or_insert(0) += *count;
		}
	}
}

impl<S: AsRef<str>> FromIterator<(S, usize)> for FrequencyTable {
	fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
		let mut table = Self::new();
		for (fragment, count) in iter {
			table.add_count(fragment.as_ref(), count);
		}
		table
	}
}
