use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{NameGenError, Result};

/// Reads a corpus file and returns its names.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`, trims each line, skips blank lines
pub(crate) fn read_corpus<P: AsRef<Path>>(filename: P) -> Result<Vec<String>> {
	let path = filename.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|e| NameGenError::io(path, e))?;
	Ok(parse_corpus(&contents))
}

/// Splits raw corpus text into trimmed, non-empty names.
pub(crate) fn parse_corpus(contents: &str) -> Vec<String> {
	contents
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect()
}

/// Builds an output path based on an input path and a new extension.
///
/// Example:
/// `data/input.txt` + `"bin"` → `data/input.bin`
pub(crate) fn build_output_path<P: AsRef<Path>>(input_path: P, output_extension: &str) -> Result<PathBuf> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| NameGenError::NotFound(input_path.to_path_buf()))?;

	let mut output = PathBuf::from(parent);
	output.push(file_stem);
	output.set_extension(output_extension);

	Ok(output)
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./data/elves.txt"` → `"elves"`
/// - `"elves.txt"` → `"elves"`
pub(crate) fn get_filename<P: AsRef<Path>>(input_path: P) -> Result<String> {
	let input_path = input_path.as_ref();
	let stem = input_path
		.file_stem()
		.ok_or_else(|| NameGenError::NotFound(input_path.to_path_buf()))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Lists all files with a given extension in a directory.
///
/// Returns full paths, sorted so that merged corpora are built in a stable order.
pub(crate) fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
	let dir = dir.as_ref();
	let mut files = Vec::new();

	for entry in fs::read_dir(dir).map_err(|e| NameGenError::io(dir, e))? {
		let path = entry.map_err(|e| NameGenError::io(dir, e))?.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			files.push(path);
		}
	}

	files.sort();
	Ok(files)
}

/// Returns true if `candidate` exists and was modified no earlier than `reference`.
///
/// Missing timestamps count as stale.
pub(crate) fn is_up_to_date<P: AsRef<Path>, Q: AsRef<Path>>(candidate: P, reference: Q) -> bool {
	let modified = |p: &Path| fs::metadata(p).and_then(|m| m.modified()).ok();
	match (modified(candidate.as_ref()), modified(reference.as_ref())) {
		(Some(candidate), Some(reference)) => candidate >= reference,
		_ => false,
	}
}

/// Serializes `value` as JSON into `path`.
pub(crate) fn write_json<P: AsRef<Path>, T: Serialize + ?Sized>(path: P, value: &T) -> Result<()> {
	let path = path.as_ref();
	let file = File::create(path).map_err(|e| NameGenError::io(path, e))?;
	let mut writer = BufWriter::new(file);
	serde_json::to_writer(&mut writer, value)?;
	// Dropping a BufWriter discards flush errors.
	writer.flush().map_err(|e| NameGenError::io(path, e))

}
