use serde::{Deserialize, Serialize};

use super::Fragment;

/// Where the fragment after a vowel run begins.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VowelBoundary {
	/// The next fragment starts right after the vowel run.
	#[default]
	Exact,
	/// Reproduces the statistics of older corpora: leading vowel runs do not
	/// cut, the character after each cut is dropped, short tails are lost.
	Legacy,
}

/// Strategy used to cut a name into fragments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segmenter {
	/// Consecutive, non-overlapping groups of `n` characters.
	NGram(usize),
	/// Cuts after each maximal run of vowels.
	VowelGroups(VowelBoundary),
}

impl Segmenter {
	/// Splits `name` according to this strategy.
	pub fn split(&self, name: &str) -> Vec<Fragment> {
		match *self {
			Segmenter::NGram(size) => split_ngrams(name, size),
			Segmenter::VowelGroups(boundary) => split_vowel_groups(name, boundary),
		}
	}
}

/// Splits `name` into consecutive groups of `size` characters.
///
/// A trailing group shorter than `size` is dropped, so a name of `L`
/// characters yields exactly `L / size` fragments. A `size` of zero yields
/// nothing.
pub fn split_ngrams(name: &str, size: usize) -> Vec<Fragment> {
	if size == 0 {
		return Vec::new();
	}
	let chars: Vec<char> = name.chars().collect();
	chars.chunks_exact(size).map(|chunk| chunk.iter().collect()).collect()
}

/// Returns true for `a, e, i, o, u, y` in either case.
pub fn is_vowel(c: char) -> bool {
	matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Half-open character ranges of every maximal vowel run in `chars`.
fn vowel_runs(chars: &[char]) -> Vec<(usize, usize)> {
	let mut runs = Vec::new();
	let mut run_start = None;

	for (i, c) in chars.iter().enumerate() {
		match (is_vowel(*c), run_start) {
			(true, None) => run_start = Some(i),
			(false, Some(start)) => {
				runs.push((start, i));
				run_start = None;
			}
			_ => (),
		}
	}
	if let Some(start) = run_start {
		runs.push((start, chars.len()));
	}

	runs
}

/// Splits `name` at the end of each vowel run.
///
/// Each fragment runs from the current start up to and including the next
/// vowel run. Characters left after the last cut are merged into the last
/// fragment, or become a second fragment when only one exists so far. A name
/// without vowels is returned whole.
///
/// Examples (exact boundaries):
/// - `"anna"` → `["a", "nna"]`
/// - `"karl"` → `["ka", "rl"]`
/// - `"kalinor"` → `["ka", "li", "nor"]`
///
/// `VowelBoundary::Legacy` follows `split_legacy_vowel_groups` instead.
pub fn split_vowel_groups(name: &str, boundary: VowelBoundary) -> Vec<Fragment> {
	match boundary {
		VowelBoundary::Exact => split_exact_vowel_groups(name),
		VowelBoundary::Legacy => split_legacy_vowel_groups(name),
	}
}

fn split_exact_vowel_groups(name: &str) -> Vec<Fragment> {
	let chars: Vec<char> = name.chars().collect();
	if chars.is_empty() {
		return Vec::new();
	}

	let runs = vowel_runs(&chars);
	if runs.is_empty() {
		return vec![name.to_owned()];
	}

	let mut fragments: Vec<Fragment> = Vec::with_capacity(runs.len() + 1);
	let mut start = 0;
	for (_, end) in runs {
		fragments.push(chars[start..end].iter().collect());
		start = end;
	}

	if start < chars.len() {
		let tail: String = chars[start..].iter().collect();
		match fragments.len() {
			1 => fragments.push(tail),
			_ => {
				if let Some(last) = fragments.last_mut() {
					last.push_str(&tail);
				}
			}
		}
	}

	fragments
}

/// Vowel-group splitting as older corpora statistics were computed.
///
/// - A vowel run at the very start of the name does not cut
/// - The character right after each cut is dropped
/// - The tail after the last cut becomes its own fragment, and only when it
///   is at least two characters long
///
/// So a name may lose characters, and a one-character name without vowels
/// yields nothing.
///
/// Examples:
/// - `"Anna"` → `["Anna"]`
/// - `"Aurelia"` → `["Aure", "ia"]`
/// - `"kalist"` → `["ka", "i"]`
/// - `"kalinorst"` → `["ka", "i", "o", "st"]`
pub fn split_legacy_vowel_groups(name: &str) -> Vec<Fragment> {
	let chars: Vec<char> = name.chars().collect();
	let mut fragments = Vec::new();
	let mut start = 0;

	// Runs are separated by at least one consonant, so the skipped character
	// never lies past the end of the next run.
	for (run_start, end) in vowel_runs(&chars) {
		if run_start > 0 {
			fragments.push(chars[start..end].iter().collect());
			start = end + 1;
		}
	}
	if start + 1 < chars.len() {
		fragments.push(chars[start..].iter().collect());
	}

	fragments
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_ngram_split_drops_partial_group() {
		assert_eq!(split_ngrams("anna", 2), vec!["an", "na"]);
		assert_eq!(split_ngrams("kalinor", 3), vec!["kal", "ino"]);
		assert!(split_ngrams("ab", 3).is_empty());
		assert!(split_ngrams("abc", 0).is_empty());
	}

	#[test]
	fn test_ngram_split_counts() {
		for name in ["a", "anya", "kalinor", "bartholomew"] {
			for k in 1..5 {
				let fragments = split_ngrams(name, k);
				assert_eq!(fragments.len(), name.chars().count() / k);
				assert!(fragments.iter().all(|f| f.chars().count() == k));
			}
		}
	}

	#[test]
	fn test_ngram_split_is_char_aware() {
		assert_eq!(split_ngrams("éloïse", 2), vec!["él", "oï", "se"]);
	}

	#[test]
	fn test_vowel_groups_exact() {
		assert_eq!(split_vowel_groups("anna", VowelBoundary::Exact), vec!["a", "nna"]);
		assert_eq!(split_vowel_groups("karl", VowelBoundary::Exact), vec!["ka", "rl"]);
		assert_eq!(split_vowel_groups("kalinor", VowelBoundary::Exact), vec!["ka", "li", "nor"]);
		assert_eq!(split_vowel_groups("Aurelia", VowelBoundary::Exact), vec!["Au", "re", "lia"]);
		assert_eq!(split_vowel_groups("Bryn", VowelBoundary::Exact), vec!["Bry", "n"]);
	}

	#[test]
	fn test_vowel_groups_without_vowels() {
		assert_eq!(split_vowel_groups("brr", VowelBoundary::Exact), vec!["brr"]);
		assert_eq!(split_vowel_groups("brr", VowelBoundary::Legacy), vec!["brr"]);
		assert_eq!(split_vowel_groups("b", VowelBoundary::Exact), vec!["b"]);
		assert!(split_vowel_groups("b", VowelBoundary::Legacy).is_empty());
		assert!(split_vowel_groups("", VowelBoundary::Exact).is_empty());
		assert!(split_vowel_groups("", VowelBoundary::Legacy).is_empty());
	}

	#[test]
	fn test_vowel_groups_legacy_matches_older_statistics() {
		assert_eq!(split_vowel_groups("Anna", VowelBoundary::Legacy), vec!["Anna"]);
		assert_eq!(split_vowel_groups("Aurelia", VowelBoundary::Legacy), vec!["Aure", "ia"]);
		assert_eq!(split_vowel_groups("kalist", VowelBoundary::Legacy), vec!["ka", "i"]);
		assert_eq!(split_vowel_groups("kalinors", VowelBoundary::Legacy), vec!["ka", "i", "o"]);
		assert_eq!(split_vowel_groups("kalinorst", VowelBoundary::Legacy), vec!["ka", "i", "o", "st"]);
		assert_eq!(split_vowel_groups("karsten", VowelBoundary::Legacy), vec!["ka", "ste"]);
		assert_eq!(split_vowel_groups("tamara", VowelBoundary::Legacy), vec!["ta", "a", "a"]);
	}

	#[test]
	fn test_vowel_groups_concatenate_back_in_exact_mode() {
		for name in ["anna", "kalinor", "Aurelia", "strength", "oyelowo"] {
			let joined: String = split_vowel_groups(name, VowelBoundary::Exact).concat();
			assert_eq!(joined, name);
		}
	}

	#[test]
	fn test_segmenter_dispatch() {
		assert_eq!(Segmenter::NGram(2).split("anya"), vec!["an", "ya"]);
		assert_eq!(Segmenter::VowelGroups(VowelBoundary::Exact).split("anya"), vec!["a", "nya"]);
	}
}
