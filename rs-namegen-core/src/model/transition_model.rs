use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::frequency_table::FrequencyTable;
use super::{Fragment, START};

/// A Markov chain over fragments.
///
/// Maps a "from" fragment to the table of fragments observed right after it.
/// The empty fragment (`START`) is the state before the first fragment of
/// every name.
///
/// # Invariants
/// - Every state present has at least one transition
/// - A fragment never seen as "from" is absent and acts as a dead end
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct TransitionModel {
	states: BTreeMap<Fragment, FrequencyTable>,
}

impl TransitionModel {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records the transitions of one segmented name.
	///
	/// Walks `fragments` from `START`, counting each step `current → next`.
	pub fn record_transitions<S: AsRef<str>>(&mut self, fragments: &[S]) {
		let mut current = START;
		for fragment in fragments {
			let fragment = fragment.as_ref();
			self.states.entry(current.to_owned()).or_default().add(fragment);
			current = fragment;
		}
	}

	/// Outgoing transitions of `from`, or `None` for a dead end.
	pub fn transitions(&self, from: &str) -> Option<&FrequencyTable> {
		self.states.get(from)
	}

	/// Number of "from" states, the start state included.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Merges another model into this one by summing transition counts.
	pub fn merge(&mut self, other: &Self) {
		for (key, table) in &other.states {
			if let Some(existing) = self.states.get_mut(key) {
				existing.merge(table);
			} else {
				self.states.insert(key.clone(), table.clone());
			}
		}
	}
}
