use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Fragment;

/// Scope of a uniqueness constraint.
///
/// Fragments emitted in one category never block the same text in another.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
	/// Fragments drawn along a transition model.
	Transition,
	Prefix,
	Join,
	Suffix,
}

impl Category {
	pub fn as_str(&self) -> &'static str {
		match self {
			Category::Transition => "transition",
			Category::Prefix => "prefix",
			Category::Join => "join",
			Category::Suffix => "suffix",
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// Fragments already emitted during this run, per category.
///
/// Only grows; dropped with the generator.
#[derive(Debug, Default, Clone)]
pub struct UsageSets {
	sets: HashMap<Category, HashSet<Fragment>>,
}

impl UsageSets {
	pub fn new() -> Self {
		Self::default()
	}

	/// Fragments used so far in `category`, if any.
	pub fn used(&self, category: Category) -> Option<&HashSet<Fragment>> {
		self.sets.get(&category)
	}

	pub fn contains(&self, category: Category, fragment: &str) -> bool {
		self.sets.get(&category).is_some_and(|set| set.contains(fragment))
	}

	/// Marks `fragment` as used in `category`.
	pub fn record(&mut self, category: Category, fragment: &str) {
		self.sets.entry(category).or_default().insert(fragment.to_owned());
	}

	/// Number of fragments used in `category`.
	pub fn len(&self, category: Category) -> usize {
		self.sets.get(&category).map_or(0, HashSet::len)
	}
}
