use log::trace;
use rand::Rng;

use super::Fragment;
use super::frequency_table::FrequencyTable;
use super::sampler::{CandidatePool, Constraints, Exhaustion, select};
use super::usage::{Category, UsageSets};

/// Generates a fragment sequence by drawing once from each table, in order.
///
/// # Behavior
/// - Empty tables are skipped.
/// - Each draw is weighted by count. Candidates shorter than `min_length`,
///   or already used in their category when `usage` is given, are removed
///   from the pool and redrawn.
/// - A position whose pool runs out contributes nothing.
/// - With `usage`, every emitted fragment is recorded in its category.
pub fn generate_parts<R: Rng + ?Sized>(
	tables: &[(Category, &FrequencyTable)],
	min_length: usize,
	mut usage: Option<&mut UsageSets>,
	rng: &mut R,
) -> Vec<Fragment> {
	let mut fragments = Vec::with_capacity(tables.len());

	for &(category, table) in tables {
		if table.is_empty() {
			continue;
		}

		let constraints = Constraints {
			min_length,
			used: usage.as_deref().and_then(|u| u.used(category)),
		};
		let Some(part) = select(CandidatePool::weighted(table), &constraints, Exhaustion::Nothing, rng) else {
			trace!("no usable {category} fragment");
			continue;
		};

		if let Some(usage) = usage.as_deref_mut() {
			usage.record(category, part);
		}
		fragments.push(part.to_owned());
	}

	fragments
}
