use log::{debug, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{NameGenError, Result};

use super::frequency_table::FrequencyTable;
use super::generation_options::GenerationOptions;
use super::markov::generate_markov;
use super::model_set::ModelSet;
use super::parts::generate_parts;
use super::usage::{Category, UsageSets};
use super::{Fragment, START};

/// High-level generator over a learned `ModelSet`.
///
/// # Responsibilities
/// - Own the random source, seeded or from the OS
/// - Dispatch each call to the Markov or part algorithm
/// - Keep the usage sets of the run, so uniqueness spans every call
/// - Check upfront that a unique run can be satisfied
#[derive(Debug)]
pub struct Generator {
	models: ModelSet,
	usage: UsageSets,
	rng: StdRng,
}

impl Generator {
	/// Creates a generator seeded from the operating system.
	pub fn new(models: ModelSet) -> Self {
		Self::with_rng(models, StdRng::from_os_rng())
	}

	/// Creates a reproducible generator.
	pub fn with_seed(models: ModelSet, seed: u64) -> Self {
		Self::with_rng(models, StdRng::seed_from_u64(seed))
	}

	fn with_rng(models: ModelSet, rng: StdRng) -> Self {
		Self {
			models,
			usage: UsageSets::new(),
			rng,
		}
	}

	pub fn models(&self) -> &ModelSet {
		&self.models
	}

	/// Fragments emitted so far by unique calls.
	pub fn usage(&self) -> &UsageSets {
		&self.usage
	}

	/// Verifies that `options.count` unique names can be generated.
	///
	/// Markov algorithms need as many usable fragments out of the start state
	/// as names requested; part algorithms need as many usable fragments in
	/// each non-empty table. Usable means at least `min_fragment_length`
	/// characters long and not used yet. Always succeeds when uniqueness is off.
	///
	/// For Markov algorithms only the first draw is guaranteed. A later state
	/// can run out of unused successors, which ends the name early, and a
	/// state left with nothing fresh at all yields an empty name.
	///
	/// # Errors
	/// Returns `InsufficientFragments` for the first deficient category.
	pub fn check_capacity(&self, options: &GenerationOptions) -> Result<()> {
		if !options.unique {
			return Ok(());
		}

		let min_length = options.min_fragment_length;
		let usable = |category: Category, table: &FrequencyTable| table.count_usable(min_length, self.usage.used(category));

		let mut requirements = Vec::new();
		if let Some(model) = self.models.transition_model(options.algorithm) {
			let available = model.transitions(START).map_or(0, |table| usable(Category::Transition, table));
			requirements.push((Category::Transition, available));
		} else {
			for (category, table) in self.models.part_tables(options.algorithm) {
				if !table.is_empty() {
					requirements.push((category, usable(category, table)));
				}
			}
		}

		for (category, available) in requirements {
			if available < options.count {
				return Err(NameGenError::InsufficientFragments {
					category,
					available,
					required: options.count,
				});
			}
		}
		Ok(())
	}

	/// Generates one name as a fragment sequence.
	///
	/// With `options.unique`, fragments used by earlier calls are skipped.
	pub fn generate(&mut self, options: &GenerationOptions) -> Vec<Fragment> {
		let usage = options.unique.then_some(&mut self.usage);
		let min_length = options.min_fragment_length;

		let fragments = match self.models.transition_model(options.algorithm) {
			Some(model) => generate_markov(model, options.max_steps(), min_length, usage, &mut self.rng),
			None => {
				let tables = self.models.part_tables(options.algorithm);
				generate_parts(&tables, min_length, usage, &mut self.rng)
			}
		};

		debug!("{} generated {:?}", options.algorithm, fragments);
		fragments
	}

	/// Generates `options.count` names after checking capacity.
	///
	/// Names are rendered according to `options.raw_output`. Exactly
	/// `options.count` names are returned, some possibly empty.
	pub fn generate_names(&mut self, options: &GenerationOptions) -> Result<Vec<String>> {
		self.check_capacity(options)?;
		Ok((0..options.count)
			.map(|i| {
				let fragments = self.generate(options);
				let name = options.render(&fragments);
				if name.trim().is_empty() {
					trace!("name {i} is empty: no usable fragment left");
				}
				name
			})
			.collect())
	}
}
