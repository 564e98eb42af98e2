use clap::Parser;

/// Command line / environment configuration of the HTTP service.
#[derive(Parser, Debug, Clone)]
#[command(name = "zh-lorem-server", about = "Chinese placeholder text HTTP service")]
pub struct Config {
	/// Address to bind.
	#[arg(long, env = "ZH_LOREM_HOST", default_value = "127.0.0.1")]
	pub host: String,

	/// Port to bind.
	#[arg(long, env = "ZH_LOREM_PORT", default_value_t = 5000)]
	pub port: u16,

	/// Directory holding `.dat` word lists.
	#[arg(long, env = "ZH_LOREM_DATA", default_value = "./data")]
	pub data_dir: String,

	/// Default log level when RUST_LOG is unset (error, warn, info, debug, trace).
	#[arg(long, default_value = "info")]
	pub log_level: String,

	/// Largest `sentence` value accepted by `/v1/generate`.
	#[arg(long, env = "ZH_LOREM_MAX_SENTENCES", default_value_t = 1_000)]
	pub max_sentences: i64,

	/// Largest `avgWordsPerSentence` value accepted by `/v1/generate`.
	#[arg(long, env = "ZH_LOREM_MAX_WORDS", default_value_t = 1_000)]
	pub max_words_per_sentence: i64,
}
