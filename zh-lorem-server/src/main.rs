mod config;

use std::path::Path;
use std::sync::RwLock;

use actix_cors::Cors;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use log::{info, warn};
use serde::Deserialize;

use config::Config;
use zh_lorem_core::io::{list_word_lists, WORD_LIST_EXTENSION};
use zh_lorem_core::model::corpus::Corpus;
use zh_lorem_core::{GenerationParams, Generator, LoremError};

#[derive(Deserialize)]
struct CorpusQuery {
	names: Option<String>
}

/// Upper bounds on resolved generation parameters accepted over HTTP.
#[derive(Clone, Copy)]
struct Limits {
	max_sentences: i64,
	max_words_per_sentence: i64
}

impl Limits {
	/// Returns why a request exceeds the limits, if it does.
	fn check(&self, params: &GenerationParams) -> Option<String> {
		let resolved = params.resolve();
		if resolved.sentence_count > self.max_sentences {
			Some(format!("sentence must be at most {}, got {}", self.max_sentences, resolved.sentence_count))
		} else if resolved.avg_words_per_sentence > self.max_words_per_sentence {
			Some(format!(
				"avgWordsPerSentence must be at most {}, got {}",
				self.max_words_per_sentence, resolved.avg_words_per_sentence
			))
		} else {
			None
		}
	}
}

struct SharedData {
	generator: Generator,
	data_dir: String,
	limits: Limits
}

type Shared = web::Data<RwLock<SharedData>>;

/// Names of the word lists in `data_dir`, without extension.
fn available_corpora(data_dir: &str) -> Result<Vec<String>, LoremError> {
	let suffix = format!(".{WORD_LIST_EXTENSION}");
	Ok(list_word_lists(data_dir)?
		.into_iter()
		.map(|f| f.strip_suffix(suffix.as_str()).map(str::to_owned).unwrap_or(f))
		.collect())
}

/// Loads the named word lists from `data_dir` and merges them in order.
///
/// Names must come from [`available_corpora`].
fn load_corpora(data_dir: &str, names: &[&str]) -> Result<Corpus, LoremError> {
	let mut corpus: Option<Corpus> = None;
	for name in names {
		let path = Path::new(data_dir).join(format!("{name}.{WORD_LIST_EXTENSION}"));
		let partial = Corpus::new(path)?;
		match corpus.as_mut() {
			Some(existing) => existing.merge(&partial)?,
			None => corpus = Some(partial),
		}
	}
	corpus.ok_or(LoremError::EmptyCorpus)
}

/// HTTP GET endpoint `/v1/generate`
///
/// Query parameters `sentence` and `avgWordsPerSentence` accept any text;
/// unparseable values fall back to their defaults. Resolved values above
/// the configured limits are rejected with 422.
/// Returns the generated paragraph as the response body.
#[get("/v1/generate")]
async fn get_generated(data: Shared, query: web::Query<GenerationParams>) -> impl Responder {
	let shared_data = match data.read() {
		Ok(d) => d,
		Err(_) => return HttpResponse::InternalServerError().body("Corpus lock failed"),
	};

	if let Some(reason) = shared_data.limits.check(&query) {
		warn!("rejected generation request: {reason}");
		return HttpResponse::UnprocessableEntity().body(reason);
	}

	match shared_data.generator.generate(&query) {
		Ok(paragraph) => HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(paragraph),
		Err(e @ LoremError::InvalidSampleSize { .. }) => {
			warn!("rejected generation request: {e}");
			HttpResponse::UnprocessableEntity().body(e.to_string())
		}
		Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

/// HTTP GET endpoint `/v1/corpora`: word lists available in the data directory.
#[get("/v1/corpora")]
async fn get_corpora(data: Shared) -> impl Responder {
	let data_dir = match data.read() {
		Ok(d) => d.data_dir.clone(),
		Err(_) => return HttpResponse::InternalServerError().body("Corpus lock failed"),
	};

	match available_corpora(&data_dir) {
		Ok(names) => HttpResponse::Ok().body(names.join("\n")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list corpora")
	}
}

/// HTTP GET endpoint `/v1/loaded_corpora`: sources of the active corpus.
#[get("/v1/loaded_corpora")]
async fn get_loaded_corpora(data: Shared) -> impl Responder {
	let shared_data = match data.read() {
		Ok(d) => d,
		Err(_) => return HttpResponse::InternalServerError().body("Corpus lock failed"),
	};
	HttpResponse::Ok().body(shared_data.generator.get_corpus_names().join("\n"))
}

/// HTTP PUT endpoint `/v1/load_corpora?names=a,b`
///
/// Replaces the active corpus with the merge of the named word lists.
/// Only names listed by `/v1/corpora` are accepted (400 otherwise).
/// The active corpus is left untouched if any of them fails to load.
#[put("/v1/load_corpora")]
async fn put_corpora(data: Shared, query: web::Query<CorpusQuery>) -> impl Responder {
	let query_names = match &query.names {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => {
			warn!("load_corpora called without names");
			return HttpResponse::BadRequest().body("Missing or empty corpus name");
		}
	};

	let corpus_names: Vec<&str> = query_names
		.split(',')
		.map(|s| s.trim())
		.filter(|s| !s.is_empty())
		.collect();

	let mut shared_data = match data.write() {
		Ok(d) => d,
		Err(_) => return HttpResponse::InternalServerError().body("Corpus lock failed"),
	};

	let available = match available_corpora(&shared_data.data_dir) {
		Ok(names) => names,
		Err(_) => return HttpResponse::InternalServerError().body("Failed to list corpora"),
	};
	if let Some(unknown) = corpus_names.iter().find(|name| !available.iter().any(|a| a == *name)) {
		warn!("load_corpora called with unknown corpus {unknown:?}");
		return HttpResponse::BadRequest().body(format!("Unknown corpus: {unknown}"));
	}

	match load_corpora(&shared_data.data_dir, &corpus_names) {
		Ok(corpus) => {
			info!("active corpus is now {:?} ({} words)", corpus.names(), corpus.len());
			shared_data.generator = Generator::new(corpus);
			HttpResponse::Ok().body("Corpora loaded successfully")
		}
		Err(e) => HttpResponse::InternalServerError().body(format!("Failed to load corpora: {e}"))
	}
}

/// HTTP PUT endpoint `/v1/reset`: restores the built-in corpus.
#[put("/v1/reset")]
async fn put_reset(data: Shared) -> impl Responder {
	let mut shared_data = match data.write() {
		Ok(d) => d,
		Err(_) => return HttpResponse::InternalServerError().body("Corpus lock failed"),
	};
	shared_data.generator = Generator::builtin();
	HttpResponse::Ok().body("Built-in corpus restored")
}

/// Main entry point for the server.
///
/// Starts with the built-in corpus, shares it behind an `RwLock` (reads
/// for generation, writes on reload) and serves the HTTP API.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let config = Config::parse();

	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level.as_str())).init();

	let shared_data = SharedData {
		generator: Generator::builtin(),
		data_dir: config.data_dir.clone(),
		limits: Limits {
			max_sentences: config.max_sentences,
			max_words_per_sentence: config.max_words_per_sentence,
		},
	};
	let shared = web::Data::new(RwLock::new(shared_data));

	info!("listening on {}:{} (data directory: {})", config.host, config.port, config.data_dir);

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared.clone())
			.service(get_generated)
			.service(get_corpora)
			.service(get_loaded_corpora)
			.service(put_corpora)
			.service(put_reset)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test;
	use std::fs;

	fn shared(data_dir: &str) -> Shared {
		web::Data::new(RwLock::new(SharedData {
			generator: Generator::builtin(),
			data_dir: data_dir.to_owned(),
			limits: Limits { max_sentences: 1_000, max_words_per_sentence: 1_000 },
		}))
	}

	fn scratch_dir(tag: &str) -> String {
		let dir = std::env::temp_dir().join(format!("zh-lorem-server-{}-{}", tag, std::process::id()));
		let _ = fs::remove_dir_all(&dir);
		fs::create_dir_all(&dir).unwrap();
		fs::write(dir.join("seasons.dat"), "春\n夏\n秋\n冬\n").unwrap();
		fs::write(dir.join("colors.dat"), "红\n绿\n蓝\n").unwrap();
		dir.to_string_lossy().to_string()
	}

	#[actix_web::test]
	async fn generate_uses_query_parameters() {
		let app = test::init_service(App::new().app_data(shared("./data")).service(get_generated)).await;

		let req = test::TestRequest::get().uri("/v1/generate?sentence=4&avgWordsPerSentence=5").to_request();
		let body = test::call_and_read_body(&app, req).await;
		let text = String::from_utf8(body.to_vec()).unwrap();
		assert_eq!(text.split(' ').count(), 4);

		let req = test::TestRequest::get().uri("/v1/generate?sentence=abc").to_request();
		let body = test::call_and_read_body(&app, req).await;
		assert_eq!(String::from_utf8(body.to_vec()).unwrap().split(' ').count(), 3);

		let req = test::TestRequest::get().uri("/v1/generate?sentence=0").to_request();
		let body = test::call_and_read_body(&app, req).await;
		assert!(body.is_empty());
	}

	#[actix_web::test]
	async fn oversized_sentences_are_unprocessable() {
		let app = test::init_service(App::new().app_data(shared("./data")).service(get_generated)).await;
		let req = test::TestRequest::get().uri("/v1/generate?avgWordsPerSentence=100000").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
	}

	#[actix_web::test]
	async fn corpora_can_be_listed_loaded_and_reset() {
		let dir = scratch_dir("load");
		let data = shared(&dir);
		let app = test::init_service(
			App::new()
				.app_data(data.clone())
				.service(get_corpora)
				.service(get_loaded_corpora)
				.service(put_corpora)
				.service(put_reset)
				.service(get_generated),
		)
		.await;

		let req = test::TestRequest::get().uri("/v1/corpora").to_request();
		assert_eq!(test::call_and_read_body(&app, req).await, "colors\nseasons");

		let req = test::TestRequest::put().uri("/v1/load_corpora?names=seasons,colors").to_request();
		assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

		let req = test::TestRequest::get().uri("/v1/loaded_corpora").to_request();
		assert_eq!(test::call_and_read_body(&app, req).await, "seasons\ncolors");
		assert_eq!(data.read().unwrap().generator.corpus().len(), 7);

		// sentences of 15 to 25 words cannot be drawn from 7 words
		let req = test::TestRequest::get().uri("/v1/generate?avgWordsPerSentence=20").to_request();
		assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNPROCESSABLE_ENTITY);

		let req = test::TestRequest::put().uri("/v1/reset").to_request();
		assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
		let req = test::TestRequest::get().uri("/v1/loaded_corpora").to_request();
		assert_eq!(test::call_and_read_body(&app, req).await, "zh");

		fs::remove_dir_all(dir).unwrap();
	}

	#[actix_web::test]
	async fn failed_load_keeps_active_corpus() {
		let dir = scratch_dir("fail");
		let app = test::init_service(
			App::new().app_data(shared(&dir)).service(put_corpora).service(get_loaded_corpora),
		)
		.await;

		let req = test::TestRequest::put().uri("/v1/load_corpora?names=seasons,missing").to_request();
		assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

		let req = test::TestRequest::put().uri("/v1/load_corpora?names=%20").to_request();
		assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

		let req = test::TestRequest::get().uri("/v1/loaded_corpora").to_request();
		assert_eq!(test::call_and_read_body(&app, req).await, "zh");

		fs::remove_dir_all(dir).unwrap();
	}

	#[actix_web::test]
	async fn names_outside_data_dir_are_rejected() {
		let root = std::env::temp_dir().join(format!("zh-lorem-server-traversal-{}", std::process::id()));
		let _ = fs::remove_dir_all(&root);
		let data_dir = root.join("data");
		let outside = root.join("outside");
		fs::create_dir_all(&data_dir).unwrap();
		fs::create_dir_all(&outside).unwrap();
		fs::write(data_dir.join("seasons.dat"), "春\n夏\n").unwrap();
		fs::write(outside.join("evil.dat"), "坏\n").unwrap();

		let app = test::init_service(
			App::new()
				.app_data(shared(&data_dir.to_string_lossy()))
				.service(put_corpora)
				.service(get_loaded_corpora),
		)
		.await;

		for names in ["../outside/evil", "seasons,../outside/evil", "%2E%2E%2Foutside%2Fevil"] {
			let req = test::TestRequest::put().uri(&format!("/v1/load_corpora?names={names}")).to_request();
			assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST, "{names}");
		}
		assert!(!outside.join("evil.bin").exists());

		let req = test::TestRequest::get().uri("/v1/loaded_corpora").to_request();
		assert_eq!(test::call_and_read_body(&app, req).await, "zh");

		fs::remove_dir_all(root).unwrap();
	}

	#[actix_web::test]
	async fn counts_above_limits_are_unprocessable() {
		let app = test::init_service(App::new().app_data(shared("./data")).service(get_generated)).await;

		for uri in [
			"/v1/generate?sentence=1000000000",
			"/v1/generate?sentence=9223372036854775807",
			"/v1/generate?avgWordsPerSentence=1001",
		] {
			let req = test::TestRequest::get().uri(uri).to_request();
			assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
		}

		let req = test::TestRequest::get().uri("/v1/generate?sentence=1000&avgWordsPerSentence=2").to_request();
		let body = test::call_and_read_body(&app, req).await;
		assert_eq!(String::from_utf8(body.to_vec()).unwrap().split(' ').count(), 1_000);
	}
}
