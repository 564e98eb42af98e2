use thiserror::Error;

/// Errors raised while loading corpora or generating text.
///
/// Malformed numeric parameters are never an error: they resolve to
/// their documented defaults.
#[derive(Error, Debug)]
pub enum LoremError {
	/// More distinct words were requested than the corpus holds.
	#[error("cannot sample {requested} distinct words from a corpus of {available}")]
	InvalidSampleSize { requested: usize, available: usize },

	#[error("corpus contains no words")]
	EmptyCorpus,

	#[error("corpus already loaded: {0}")]
	CorpusAlreadyLoaded(String),

	#[error("invalid corpus path: {0}")]
	InvalidPath(String),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("corpus cache error: {0}")]
	Cache(#[from] postcard::Error),

	#[error("corpus JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LoremError>;
