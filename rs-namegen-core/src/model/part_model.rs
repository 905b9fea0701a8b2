use serde::{Deserialize, Serialize};

use super::frequency_table::FrequencyTable;
use super::usage::Category;

/// Positional tables for composing names from independent parts.
///
/// Built from vowel-group fragments: the first fragment of a name is a
/// prefix, the last one a suffix, everything in between a join.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PartModel {
	prefixes: FrequencyTable,
	joins: FrequencyTable,
	suffixes: FrequencyTable,
}

impl PartModel {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records the parts of one segmented name.
	///
	/// Names with fewer than two fragments are ignored.
	pub fn record_parts<S: AsRef<str>>(&mut self, fragments: &[S]) {
		let [first, middle @ .., last] = fragments else {
			return;
		};
		self.prefixes.add(first.as_ref());
		for join in middle {
			self.joins.add(join.as_ref());
		}
		self.suffixes.add(last.as_ref());
	}

	pub fn prefixes(&self) -> &FrequencyTable {
		&self.prefixes
	}

	pub fn joins(&self) -> &FrequencyTable {
		&self.joins
	}

	pub fn suffixes(&self) -> &FrequencyTable {
		&self.suffixes
	}

	/// Table holding the given part category.
	///
	/// Returns `None` for `Category::Transition`, which has no part table.
	pub fn table(&self, category: Category) -> Option<&FrequencyTable> {
		match category {
			Category::Prefix => Some(&self.prefixes),
			Category::Join => Some(&self.joins),
			Category::Suffix => Some(&self.suffixes),
			Category::Transition => None,
		}
	}

	pub fn merge(&mut self, other: &Self) {
		self.prefixes.merge(&other.prefixes);
		self.joins.merge(&other.joins);
		self.suffixes.merge(&other.suffixes);
	}
}
