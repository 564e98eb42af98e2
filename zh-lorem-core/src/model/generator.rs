use log::debug;

use crate::error::Result;
use crate::model::assembler::{assemble_paragraph, assemble_sentence};
use crate::model::corpus::Corpus;
use crate::model::length::sample_length;
use crate::model::params::GenerationParams;
use crate::model::random_source::RandomSource;
use crate::model::sampler::sample_words;

/// Generates a paragraph from the built-in corpus.
///
/// Same as `Generator::builtin().generate(params)` without copying the
/// corpus.
pub fn generate(params: &GenerationParams) -> Result<String> {
	paragraph(Corpus::builtin(), params, &mut rand::rng())
}

fn paragraph<R: RandomSource + ?Sized>(corpus: &Corpus, params: &GenerationParams, rng: &mut R) -> Result<String> {
	let resolved = params.resolve();
	debug!(
		"generating {} sentences of ~{} words from {} words",
		resolved.sentence_count,
		resolved.avg_words_per_sentence,
		corpus.len()
	);
	assemble_paragraph(resolved.sentence_count, || {
		sentence(corpus, resolved.avg_words_per_sentence, rng)
	})
}

fn sentence<R: RandomSource + ?Sized>(corpus: &Corpus, avg_words_per_sentence: i64, rng: &mut R) -> Result<String> {
	let length = sample_length(avg_words_per_sentence, rng);
	let words = sample_words(corpus.words(), length, rng)?;
	Ok(assemble_sentence(&words, rng))
}

/// High-level placeholder text generator over one corpus.
///
/// # Responsibilities
/// - Resolve caller parameters, substituting defaults
/// - Sample a length, then distinct words, for every sentence
/// - Assemble sentences and the paragraph with weighted punctuation
///
/// The generator is read-only: it can be shared between threads and every
/// call draws fresh randomness.
#[derive(Clone, Debug)]
pub struct Generator {
	corpus: Corpus,
}

impl Generator {
	pub fn new(corpus: Corpus) -> Self {
		Self { corpus }
	}

	/// Creates a generator over the built-in corpus.
	pub fn builtin() -> Self {
		Self::new(Corpus::builtin().clone())
	}

	/// Creates a generator by loading all `.dat` word lists of a directory.
	///
	/// # Errors
	/// See [`Corpus::load_folder`].
	pub fn from_folder(folder: &str) -> Result<Self> {
		Ok(Self::new(Corpus::load_folder(folder)?))
	}

	pub fn corpus(&self) -> &Corpus {
		&self.corpus
	}

	/// Returns the names of the sources of the active corpus.
	pub fn get_corpus_names(&self) -> Vec<String> {
		self.corpus.names().to_vec()
	}

	/// Generates a paragraph using the thread-local RNG.
	///
	/// # Errors
	/// Returns [`crate::LoremError::InvalidSampleSize`] when a sampled
	/// sentence length exceeds the corpus size.
	pub fn generate(&self, params: &GenerationParams) -> Result<String> {
		self.generate_with(params, &mut rand::rng())
	}

	/// Generates a paragraph drawing from `rng`.
	///
	/// Every sentence re-samples its length, words and punctuation.
	pub fn generate_with<R: RandomSource + ?Sized>(&self, params: &GenerationParams, rng: &mut R) -> Result<String> {
		paragraph(&self.corpus, params, rng)
	}

	/// Generates one sentence of about `avg_words_per_sentence` words.
	pub fn sentence<R: RandomSource + ?Sized>(&self, avg_words_per_sentence: i64, rng: &mut R) -> Result<String> {
		sentence(&self.corpus, avg_words_per_sentence, rng)
	}
}

impl Default for Generator {
	fn default() -> Self {
		Self::builtin()
	}
}
