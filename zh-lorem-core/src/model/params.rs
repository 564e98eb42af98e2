use serde::Deserialize;
use serde::de::IgnoredAny;

/// Default number of sentences in a paragraph.
pub const DEFAULT_SENTENCE_COUNT: i64 = 3;

/// Default target mean of words per sentence.
pub const DEFAULT_AVG_WORDS_PER_SENTENCE: i64 = 8;

/// A caller-supplied numeric option.
///
/// Options may arrive either as integers or as text containing one
/// (URL query strings, form fields, untyped JSON). Deserialization is
/// untagged so both `3` and `"3"` are accepted; anything else (floats,
/// booleans, numbers outside `i64`, arrays) lands in `Other` and resolves
/// to the default.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ParamValue {
	Int(i64),
	Text(String),
	Other(IgnoredAny),
}

impl From<i64> for ParamValue {
	fn from(value: i64) -> Self {
		ParamValue::Int(value)
	}
}

impl From<i32> for ParamValue {
	fn from(value: i32) -> Self {
		ParamValue::Int(i64::from(value))
	}
}

impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		ParamValue::Text(value.to_owned())
	}
}

impl From<String> for ParamValue {
	fn from(value: String) -> Self {
		ParamValue::Text(value)
	}
}

/// Input parameters of a generation call.
///
/// Both fields are optional; absent or unparseable values resolve to
/// [`DEFAULT_SENTENCE_COUNT`] and [`DEFAULT_AVG_WORDS_PER_SENTENCE`].
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GenerationParams {
	/// Number of sentences in the paragraph.
	pub sentence: Option<ParamValue>,

	/// Target mean of words per sentence.
	#[serde(rename = "avgWordsPerSentence")]
	pub avg_words_per_sentence: Option<ParamValue>,
}

/// Parameters after numeric coercion and default substitution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedParams {
	pub sentence_count: i64,
	pub avg_words_per_sentence: i64,
}

impl GenerationParams {
	pub fn new(sentence: impl Into<ParamValue>, avg_words_per_sentence: impl Into<ParamValue>) -> Self {
		Self {
			sentence: Some(sentence.into()),
			avg_words_per_sentence: Some(avg_words_per_sentence.into()),
		}
	}

	/// Resolves both options, substituting defaults where needed.
	pub fn resolve(&self) -> ResolvedParams {
		ResolvedParams {
			sentence_count: resolve_int(self.sentence.as_ref(), DEFAULT_SENTENCE_COUNT),
			avg_words_per_sentence: resolve_int(
				self.avg_words_per_sentence.as_ref(),
				DEFAULT_AVG_WORDS_PER_SENTENCE,
			),
		}
	}
}

/// Coerces an optional parameter to an integer.
///
/// - Integers are returned unchanged, whatever their sign.
/// - Text is parsed by [`parse_leading_int`].
/// - Missing values, text without a leading numeral and values of any
///   other type yield `fallback`.
pub fn resolve_int(value: Option<&ParamValue>, fallback: i64) -> i64 {
	match value {
		Some(ParamValue::Int(n)) => *n,
		Some(ParamValue::Text(s)) => parse_leading_int(s).unwrap_or(fallback),
		Some(ParamValue::Other(_)) | None => fallback,
	}
}

/// Parses the leading base-10 numeral of `s`.
///
/// Leading whitespace is skipped and one optional sign is accepted.
/// Parsing stops at the first non-digit, so `"12abc"` is 12 and
/// `"1e3"` is 1. Returns `None` when no digit follows.
/// Out-of-range numerals saturate.
pub fn parse_leading_int(s: &str) -> Option<i64> {
	let s = s.trim_start();
	let (negative, digits) = match s.as_bytes().first() {
		Some(b'-') => (true, &s[1..]),
		Some(b'+') => (false, &s[1..]),
		_ => (false, s),
	};

	let digits: Vec<i64> = digits
		.bytes()
		.take_while(u8::is_ascii_digit)
		.map(|b| i64::from(b - b'0'))
		.collect();
	if digits.is_empty() {
		return None;
	}

	let value = digits.iter().fold(0i64, |acc, d| {
		if negative {
			acc.saturating_mul(10).saturating_sub(*d)
		} else {
			acc.saturating_mul(10).saturating_add(*d)
		}
	});
	Some(value)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn integers_pass_through_unchanged() {
		assert_eq!(resolve_int(Some(&ParamValue::Int(5)), 3), 5);
		assert_eq!(resolve_int(Some(&ParamValue::Int(0)), 3), 0);
		assert_eq!(resolve_int(Some(&ParamValue::Int(-4)), 3), -4);
	}

	#[test]
	fn text_uses_leading_numeral() {
		assert_eq!(parse_leading_int("12"), Some(12));
		assert_eq!(parse_leading_int("12abc"), Some(12));
		assert_eq!(parse_leading_int("  7"), Some(7));
		assert_eq!(parse_leading_int("-3"), Some(-3));
		assert_eq!(parse_leading_int("+9"), Some(9));
		assert_eq!(parse_leading_int("1e3"), Some(1));
		assert_eq!(parse_leading_int("4.9"), Some(4));
	}

	#[test]
	fn unparseable_text_falls_back() {
		for text in ["", "abc", "-", "+", " ", "x12", "--1"] {
			assert_eq!(resolve_int(Some(&ParamValue::from(text)), 8), 8, "input {text:?}");
		}
		assert_eq!(resolve_int(None, 8), 8);
	}

	#[test]
	fn huge_numerals_saturate() {
		assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
		assert_eq!(parse_leading_int("-99999999999999999999999"), Some(i64::MIN));
	}

	#[test]
	fn empty_params_resolve_to_defaults() {
		let resolved = GenerationParams::default().resolve();
		assert_eq!(resolved.sentence_count, DEFAULT_SENTENCE_COUNT);
		assert_eq!(resolved.avg_words_per_sentence, DEFAULT_AVG_WORDS_PER_SENTENCE);
	}

	#[test]
	fn unparseable_sentence_matches_omitted() {
		let garbage = GenerationParams { sentence: Some("abc".into()), avg_words_per_sentence: None };
		assert_eq!(garbage.resolve(), GenerationParams::default().resolve());
	}

	#[test]
	fn deserializes_numbers_and_strings() {
		let params: GenerationParams =
			serde_json::from_str(r#"{"sentence": 5, "avgWordsPerSentence": "12"}"#).unwrap();
		assert_eq!(params.sentence, Some(ParamValue::Int(5)));
		assert_eq!(params.avg_words_per_sentence, Some(ParamValue::Text("12".to_owned())));
		assert_eq!(
			params.resolve(),
			ResolvedParams { sentence_count: 5, avg_words_per_sentence: 12 }
		);

		let empty: GenerationParams = serde_json::from_str("{}").unwrap();
		assert_eq!(empty, GenerationParams::default());
	}

	#[test]
	fn other_json_types_fall_back() {
		for body in [
			r#"{"sentence": 2.5}"#,
			r#"{"sentence": true}"#,
			r#"{"sentence": 1e30}"#,
			r#"{"sentence": 18446744073709551615}"#,
			r#"{"sentence": [1, 2]}"#,
			r#"{"sentence": {"n": 4}}"#,
		] {
			let params: GenerationParams = serde_json::from_str(body).unwrap();
			assert!(matches!(params.sentence, Some(ParamValue::Other(_))), "{body}");
			assert_eq!(params.resolve().sentence_count, DEFAULT_SENTENCE_COUNT, "{body}");
		}

		let params: GenerationParams = serde_json::from_str(r#"{"sentence": null}"#).unwrap();
		assert_eq!(params.sentence, None);
	}
}
