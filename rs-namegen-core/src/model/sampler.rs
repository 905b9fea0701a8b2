use std::collections::HashSet;

use rand::Rng;

use super::Fragment;
use super::frequency_table::FrequencyTable;

/// A shrinking multiset of candidate fragments.
///
/// The pool is an explicit, ordered list of slots borrowed from a
/// `FrequencyTable`. Drawing picks a slot uniformly; rejecting a fragment
/// removes all of its slots, so a retry loop over a pool ends after at most
/// as many rejections as there are distinct fragments.
#[derive(Clone, Debug)]
pub struct CandidatePool<'a> {
	slots: Vec<&'a str>,
}

impl<'a> CandidatePool<'a> {
	/// One slot per recorded occurrence: draws are weighted by count.
	pub fn weighted(table: &'a FrequencyTable) -> Self {
		let slots = table
			.iter()
			.flat_map(|(fragment, count)| std::iter::repeat_n(fragment, count))
			.collect();
		Self { slots }
	}

	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	/// Draws one slot uniformly over every remaining position.
	///
	/// A pool with a single slot returns it without touching `rng`.
	pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'a str> {
		match self.slots.len() {
			0 => None,
			1 => Some(self.slots[0]),
			n => Some(self.slots[rng.random_range(0..n)]),
		}
	}

	/// Removes every slot holding `fragment`.
	pub fn reject(&mut self, fragment: &str) {
		self.slots.retain(|slot| *slot != fragment);
	}
}

/// Filters applied to every candidate a generator draws.
#[derive(Clone, Copy, Debug, Default)]
pub struct Constraints<'u> {
	/// Minimum fragment length, in characters.
	pub min_length: usize,
	/// Fragments already emitted in this category, when uniqueness is on.
	pub used: Option<&'u HashSet<Fragment>>,
}

impl Constraints<'_> {
	fn is_fresh(&self, fragment: &str) -> bool {
		self.used.is_none_or(|used| !used.contains(fragment))
	}

	fn is_long_enough(&self, fragment: &str) -> bool {
		fragment.chars().count() >= self.min_length
	}
}

/// What to do when the pool runs out before a candidate passes every filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exhaustion {
	/// Give up: nothing is selected.
	Nothing,
	/// Fall back to the last fresh candidate that was only too short.
	LastFresh,
}

/// Draws from `pool` until a candidate passes `constraints`, rejecting the
/// ones that do not.
///
/// Terminates after at most one draw per distinct fragment of the pool.
pub fn select<'a, R: Rng + ?Sized>(
	mut pool: CandidatePool<'a>,
	constraints: &Constraints<'_>,
	exhaustion: Exhaustion,
	rng: &mut R,
) -> Option<&'a str> {
	let mut fallback = None;

	while let Some(candidate) = pool.draw(rng) {
		if constraints.is_fresh(candidate) {
			if constraints.is_long_enough(candidate) {
				return Some(candidate);
			}
			fallback = Some(candidate);
		}
		pool.reject(candidate);
	}

	match exhaustion {
		Exhaustion::Nothing => None,
		Exhaustion::LastFresh => fallback,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn table() -> FrequencyTable {
		[("a", 3), ("ka", 1), ("kor", 2)].into_iter().collect()
	}

	#[test]
	fn test_weighted_pool_expands_counts() {
		let table = table();
		let pool = CandidatePool::weighted(&table);
		assert_eq!(pool.len(), 6);
	}

	#[test]
	fn test_reject_removes_every_copy() {
		let table = table();
		let mut pool = CandidatePool::weighted(&table);
		pool.reject("a");
		assert_eq!(pool.len(), 3);
		pool.reject("ka");
		pool.reject("kor");
		assert!(pool.is_empty());

		let mut rng = StdRng::seed_from_u64(0);
		assert_eq!(pool.draw(&mut rng), None);
	}

	#[test]
	fn test_select_honors_min_length() {
		let table = table();
		let mut rng = StdRng::seed_from_u64(5);
		let constraints = Constraints { min_length: 3, used: None };
		for _ in 0..50 {
			let picked = select(CandidatePool::weighted(&table), &constraints, Exhaustion::Nothing, &mut rng);
			assert_eq!(picked, Some("kor"));
		}
	}

	#[test]
	fn test_select_skips_used_fragments() {
		let table = table();
		let used: HashSet<Fragment> = ["a", "kor"].into_iter().map(String::from).collect();
		let constraints = Constraints { min_length: 0, used: Some(&used) };
		let mut rng = StdRng::seed_from_u64(6);
		for _ in 0..50 {
			let picked = select(CandidatePool::weighted(&table), &constraints, Exhaustion::Nothing, &mut rng);
			assert_eq!(picked, Some("ka"));
		}
	}

	#[test]
	fn test_select_exhaustion() {
		let table = table();
		let mut rng = StdRng::seed_from_u64(7);

		let too_long = Constraints { min_length: 10, used: None };
		assert_eq!(select(CandidatePool::weighted(&table), &too_long, Exhaustion::Nothing, &mut rng), None);
		assert!(select(CandidatePool::weighted(&table), &too_long, Exhaustion::LastFresh, &mut rng).is_some());

		let all_used: HashSet<Fragment> = table.iter().map(|(f, _)| f.to_owned()).collect();
		let none_fresh = Constraints { min_length: 10, used: Some(&all_used) };
		assert_eq!(select(CandidatePool::weighted(&table), &none_fresh, Exhaustion::LastFresh, &mut rng), None);
	}
}
