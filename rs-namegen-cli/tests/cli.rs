use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

const CORPUS: &str = "Anna\nAnya\n\nKalinor\n  Marisol  \nTeodora\nAurelia\nBrynja\n";

fn write_corpus(dir: &Path, contents: &str) -> PathBuf {
	let path = dir.join("names.txt");
	fs::write(&path, contents).unwrap();
	path
}

fn namegen() -> Command {
	let mut cmd = Command::cargo_bin("namegen").unwrap();
	cmd.env_remove("NAMEGEN_SEED").env_remove("NAMEGEN_ALGORITHM");
	cmd
}

#[test]
fn test_generates_requested_count() {
	let dir = tempfile::tempdir().unwrap();
	let corpus = write_corpus(dir.path(), CORPUS);

	let output = namegen()
		.arg(&corpus)
		.args(["-g", "12", "--seed", "3"])
		.output()
		.unwrap();
	assert!(output.status.success());

	let stdout = String::from_utf8(output.stdout).unwrap();
	let names: Vec<_> = stdout.lines().collect();
	assert_eq!(names.len(), 12);
	assert!(names.iter().all(|name| !name.is_empty()));
}

#[test]
fn test_seed_is_reproducible() {
	let dir = tempfile::tempdir().unwrap();
	let corpus = write_corpus(dir.path(), CORPUS);

	let run = |seed: &str| {
		namegen()
			.arg(&corpus)
			.args(["-g", "8", "-a", "2gr", "--seed", seed])
			.output()
			.unwrap()
			.stdout
	};
	assert_eq!(run("17"), run("17"));
}

#[test]
fn test_raw_output_separates_fragments() {
	let dir = tempfile::tempdir().unwrap();
	let corpus = write_corpus(dir.path(), "kalinor\n");

	namegen()
		.arg(&corpus)
		.args(["-g", "1", "-a", "parts-3", "--raw"])
		.assert()
		.success()
		.stdout("ka li nor\n");
}

#[test]
fn test_unknown_algorithm_fails() {
	let dir = tempfile::tempdir().unwrap();
	let corpus = write_corpus(dir.path(), CORPUS);

	namegen()
		.arg(&corpus)
		.args(["-g", "1", "-a", "markov-9gram"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("unknown algorithm"));
}

#[test]
fn test_unique_preflight_fails_before_generating() {
	let dir = tempfile::tempdir().unwrap();
	let corpus = write_corpus(dir.path(), "kalinor\nmarisol\n");

	namegen()
		.arg(&corpus)
		.args(["-g", "3", "-a", "pt2", "--unique"])
		.assert()
		.failure()
		.stdout("")
		.stderr(predicate::str::contains("not enough unique prefix fragments"));
}

#[test]
fn test_stats_and_export() {
	let dir = tempfile::tempdir().unwrap();
	let corpus = write_corpus(dir.path(), CORPUS);
	let export = dir.path().join("json");

	namegen()
		.arg(&corpus)
		.arg("--stats")
		.arg("--write")
		.arg(&export)
		.assert()
		.success()
		.stdout(predicate::str::contains("names: 7").and(predicate::str::contains("prefixes:")));

	for file in ["twograms.json", "threegrams.json", "vowelgroups.json", "prefixes.json", "joins.json", "suffixes.json"] {
		assert!(export.join(file).exists(), "{file} missing");
	}
}

#[test]
fn test_cache_is_written() {
	let dir = tempfile::tempdir().unwrap();
	let corpus = write_corpus(dir.path(), CORPUS);

	namegen().arg(&corpus).args(["-g", "2", "--cache"]).assert().success();
	assert!(dir.path().join("names.bin").exists());
	namegen().arg(&corpus).args(["-g", "2", "--cache"]).assert().success();
}

#[test]
fn test_missing_corpus_fails() {
	let dir = tempfile::tempdir().unwrap();

	namegen()
		.arg(dir.path().join("missing.txt"))
		.args(["-g", "1"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("failed to load corpus"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
	let dir = tempfile::tempdir().unwrap();
	let corpus = write_corpus(dir.path(), "kalinor\n");

	namegen()
		.env_remove("RUST_LOG")
		.arg(&corpus)
		.args(["-v", "-g", "1", "-a", "parts-3", "--raw"])
		.assert()
		.success()
		.stdout("ka li nor\n")
		.stderr(predicate::str::contains("loaded corpora: names"));
}
