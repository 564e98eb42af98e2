use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use log::{debug, info, warn};

use crate::error::{LoremError, Result};
use crate::io;

/// Name of the built-in corpus.
pub const BUILTIN_NAME: &str = "zh";

static BUILTIN: LazyLock<Corpus> = LazyLock::new(|| Corpus {
	words: dedup(io::parse_word_list(include_str!("../../data/zh.dat"))),
	names: vec![BUILTIN_NAME.to_owned()],
});

/// Immutable vocabulary sampled by the generator.
///
/// # Invariants
/// - `words` is never empty
/// - `words` holds no duplicates, so distinct positions are distinct words
/// - `names` lists the sources the corpus was built from, in load order
#[derive(Clone, Debug, PartialEq)]
pub struct Corpus {
	words: Vec<String>,
	names: Vec<String>,
}

impl Corpus {
	/// Returns the vocabulary compiled into the crate.
	pub fn builtin() -> &'static Corpus {
		&BUILTIN
	}

	/// Builds a corpus from a list of words.
	///
	/// Words are trimmed, blanks dropped and duplicates removed, keeping
	/// first occurrences in order.
	///
	/// # Errors
	/// Returns [`LoremError::EmptyCorpus`] if no word remains.
	pub fn from_words<I, S>(name: &str, words: I) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let words = dedup(
			words
				.into_iter()
				.map(|w| w.as_ref().trim().to_owned())
				.filter(|w| !w.is_empty()),
		);
		if words.is_empty() {
			return Err(LoremError::EmptyCorpus);
		}
		Ok(Self { words, names: vec![name.to_owned()] })
	}

	/// Loads a corpus file.
	///
	/// - `.json` files hold an array of strings.
	/// - Any other file is a word list (see [`io::parse_word_list`]).
	///   A postcard cache (`.bin`) next to it is used when it is at least
	///   as recent as the list, and rewritten otherwise. Failing to write
	///   the cache is logged and does not fail the load.
	///
	/// The corpus is named after the file stem.
	pub fn new<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let path = filepath.as_ref();
		let name = io::corpus_name(path)?;

		let words = if path.extension().is_some_and(|ext| ext == "json") {
			let contents = fs::read_to_string(path)?;
			serde_json::from_str::<Vec<String>>(&contents)?
		} else {
			Self::read_cached_word_list(path)?
		};

		let corpus = Self::from_words(&name, words)?;
		debug!("loaded corpus '{}' ({} words) from {}", name, corpus.len(), path.display());
		Ok(corpus)
	}

	/// Loads and merges every word list of a directory.
	///
	/// Both `"folder"` and `"./"` are accepted; subdirectories are ignored.
	///
	/// # Errors
	/// - [`LoremError::InvalidPath`] if `folder` is not a directory
	/// - [`LoremError::EmptyCorpus`] if it holds no word list
	pub fn load_folder(folder: &str) -> Result<Self> {
		let folder = io::normalize_folder(folder);
		if !folder.is_dir() {
			return Err(LoremError::InvalidPath(format!("expected a directory, got: {}", folder.display())));
		}

		let mut corpus: Option<Corpus> = None;
		for file in io::list_word_lists(&folder)? {
			let partial = Self::new(folder.join(&file))?;
			match corpus.as_mut() {
				Some(existing) => existing.merge(&partial)?,
				None => corpus = Some(partial),
			}
		}
		corpus.ok_or(LoremError::EmptyCorpus)
	}

	fn read_cached_word_list(path: &Path) -> Result<Vec<String>> {
		let cache = io::cache_path(path)?;
		if Self::is_fresh(path, &cache) {
			let bytes = fs::read(&cache)?;
			return Ok(postcard::from_bytes(&bytes)?);
		}

		let words = io::read_word_list(path)?;
		let written = postcard::to_stdvec(&words)
			.map_err(LoremError::from)
			.and_then(|bytes| fs::write(&cache, bytes).map_err(LoremError::from));
		match written {
			Ok(()) => debug!("wrote corpus cache {}", cache.display()),
			Err(e) => warn!("could not write corpus cache {}: {e}", cache.display()),
		}
		Ok(words)
	}

	fn is_fresh(source: &Path, cache: &Path) -> bool {
		let modified = |p: &Path| {
			fs::metadata(p)
				.ok()
				.filter(|m| m.is_file())
				.and_then(|m| m.modified().ok())
		};
		match (modified(source), modified(cache)) {
			(Some(source), Some(cache)) => cache >= source,
			_ => false,
		}
	}

	/// Merges another corpus into this one.
	///
	/// Words not yet present are appended in order; source names are
	/// appended too.
	///
	/// # Errors
	/// Returns [`LoremError::CorpusAlreadyLoaded`] if a source of `other`
	/// is already part of this corpus.
	pub fn merge(&mut self, other: &Self) -> Result<()> {
		if let Some(name) = other.names.iter().find(|n| self.names.contains(n)) {
			return Err(LoremError::CorpusAlreadyLoaded(name.clone()));
		}

		let known: HashSet<&str> = self.words.iter().map(String::as_str).collect();
		let added: Vec<String> = other
			.words
			.iter()
			.filter(|w| !known.contains(w.as_str()))
			.cloned()
			.collect();

		info!("merged corpus {:?} into {:?} (+{} words)", other.names, self.names, added.len());
		self.words.extend(added);
		self.names.extend(other.names.iter().cloned());
		Ok(())
	}

	/// Name of the first source.
	pub fn name(&self) -> &str {
		&self.names[0]
	}

	/// Names of all merged sources, in load order.
	pub fn names(&self) -> &[String] {
		&self.names
	}

	pub fn words(&self) -> &[String] {
		&self.words
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Always false for a constructed corpus.
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}
}

fn dedup<I: IntoIterator<Item = String>>(words: I) -> Vec<String> {
	let mut seen = HashSet::new();
	words.into_iter().filter(|w| seen.insert(w.clone())).collect()
}
