use log::trace;
use rand::Rng;

use super::sampler::{CandidatePool, Constraints, Exhaustion, select};
use super::transition_model::TransitionModel;
use super::usage::{Category, UsageSets};
use super::{Fragment, START};

/// Generates a fragment sequence by walking `model` from the start state.
///
/// # Behavior
/// - Draws the first fragment from the start state, then up to `max_steps`
///   more, each from the state of the previous fragment.
/// - Stops early at a dead end (a state with no transitions).
/// - Candidates shorter than `min_length` are redrawn; when every candidate
///   of a state is too short, the last fresh one drawn is kept.
/// - With `usage`, fragments already used in `Category::Transition` are
///   skipped, and every emitted fragment is recorded. A state with no fresh
///   candidate is a dead end.
///
/// # Returns
/// At most `max_steps + 1` fragments. If nothing can be drawn at all, the
/// sequence holds only the empty start fragment.
pub fn generate_markov<R: Rng + ?Sized>(
	model: &TransitionModel,
	max_steps: usize,
	min_length: usize,
	mut usage: Option<&mut UsageSets>,
	rng: &mut R,
) -> Vec<Fragment> {
	let mut fragments = Vec::new();
	let mut current = START;

	for _ in 0..=max_steps {
		let Some(table) = model.transitions(current) else {
			trace!("dead end after {current:?}");
			break;
		};

		let constraints = Constraints {
			min_length,
			used: usage.as_deref().and_then(|u| u.used(Category::Transition)),
		};
		let Some(next) = select(CandidatePool::weighted(table), &constraints, Exhaustion::LastFresh, rng) else {
			trace!("no usable transition after {current:?}");
			break;
		};

		if let Some(usage) = usage.as_deref_mut() {
			usage.record(Category::Transition, next);
		}
		fragments.push(next.to_owned());
		current = next;
	}

	if fragments.is_empty() {
		fragments.push(START.to_owned());
	}
	fragments
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn chain() -> TransitionModel {
		let mut model = TransitionModel::new();
		model.record_transitions(&["ka", "li", "nor"]);
		model
	}

	#[test]
	fn test_empty_model_yields_start_fragment() {
		let mut rng = StdRng::seed_from_u64(0);
		let fragments = generate_markov(&TransitionModel::new(), 5, 0, None, &mut rng);
		assert_eq!(fragments, vec![String::new()]);
	}

	#[test]
	fn test_walks_until_dead_end() {
		let mut rng = StdRng::seed_from_u64(1);
		let fragments = generate_markov(&chain(), 10, 0, None, &mut rng);
		assert_eq!(fragments, vec!["ka", "li", "nor"]);
	}

	#[test]
	fn test_step_bound() {
		let mut model = TransitionModel::new();
		model.record_transitions(&["la", "la", "la"]);
		let mut rng = StdRng::seed_from_u64(2);

		for max_steps in 0..6 {
			let fragments = generate_markov(&model, max_steps, 0, None, &mut rng);
			assert_eq!(fragments.len(), max_steps + 1);
		}
		assert_eq!(generate_markov(&chain(), 1, 0, None, &mut rng), vec!["ka", "li"]);
	}

	#[test]
	fn test_min_length_prefers_long_candidates() {
		let mut model = TransitionModel::new();
		for _ in 0..20 {
			model.record_transitions(&["a"]);
		}
		model.record_transitions(&["kor"]);
		let mut rng = StdRng::seed_from_u64(3);

		for _ in 0..50 {
			assert_eq!(generate_markov(&model, 3, 2, None, &mut rng), vec!["kor"]);
		}
	}

	#[test]
	fn test_min_length_falls_back_to_short_candidate() {
		let mut model = TransitionModel::new();
		model.record_transitions(&["a", "b"]);
		let mut rng = StdRng::seed_from_u64(4);
		assert_eq!(generate_markov(&model, 3, 5, None, &mut rng), vec!["a", "b"]);
	}

	#[test]
	fn test_uniqueness_exhausts_start_state() {
		let mut model = TransitionModel::new();
		for start in ["ka", "mo", "ri"] {
			model.record_transitions(&[start]);
		}
		let mut usage = UsageSets::new();
		let mut rng = StdRng::seed_from_u64(5);

		let mut seen = Vec::new();
		for _ in 0..3 {
			let fragments = generate_markov(&model, 3, 0, Some(&mut usage), &mut rng);
			assert_eq!(fragments.len(), 1);
			assert!(!seen.contains(&fragments[0]));
			seen.push(fragments[0].clone());
		}
		assert_eq!(usage.len(Category::Transition), 3);

		let exhausted = generate_markov(&model, 3, 0, Some(&mut usage), &mut rng);
		assert_eq!(exhausted, vec![String::new()]);
	}

	#[test]
	fn test_uniqueness_applies_within_one_name() {
		let mut model = TransitionModel::new();
		model.record_transitions(&["la", "la", "la"]);
		let mut usage = UsageSets::new();
		let mut rng = StdRng::seed_from_u64(6);

		assert_eq!(generate_markov(&model, 4, 0, Some(&mut usage), &mut rng), vec!["la"]);
	}
}
