use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::env;

use crate::error::{LoremError, Result};

/// Extension of plain word list files.
pub const WORD_LIST_EXTENSION: &str = "dat";

/// Extension of the postcard cache written next to a word list.
pub const CACHE_EXTENSION: &str = "bin";

/// Splits a word list into words.
///
/// - One word per line (`\n` / `\r\n`)
/// - Surrounding whitespace is trimmed
/// - Blank lines and lines starting with `#` are skipped
pub fn parse_word_list(contents: &str) -> Vec<String> {
	contents
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty() && !line.starts_with('#'))
		.map(str::to_owned)
		.collect()
}

/// Reads a word list file, see [`parse_word_list`].
pub fn read_word_list<P: AsRef<Path>>(filename: P) -> Result<Vec<String>> {
	let contents = fs::read_to_string(filename)?;
	Ok(parse_word_list(&contents))
}

/// Returns the cache path of a word list.
///
/// Example:
/// `data/zh.dat` → `data/zh.bin`
pub fn cache_path<P: AsRef<Path>>(input_path: P) -> Result<PathBuf> {
	let input_path = input_path.as_ref();
	if input_path.file_stem().is_none() {
		return Err(LoremError::InvalidPath(input_path.display().to_string()));
	}
	Ok(input_path.with_extension(CACHE_EXTENSION))
}

/// Extracts the corpus name of a file, its stem.
///
/// Examples:
/// - `"./data/chengyu.dat"` → `"chengyu"`
/// - `"zh.json"` → `"zh"`
pub fn corpus_name<P: AsRef<Path>>(input_path: P) -> Result<String> {
	let input_path = input_path.as_ref();
	let stem = input_path
		.file_stem()
		.ok_or_else(|| LoremError::InvalidPath(input_path.display().to_string()))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub fn normalize_folder(input: &str) -> PathBuf {
	if input == "." || input == "./" {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		PathBuf::from(input)
	}
}

/// Lists the word list files of a directory, sorted by name.
///
/// Returns file names only (no paths).
pub fn list_word_lists<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension() == Some(OsStr::new(WORD_LIST_EXTENSION)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}
