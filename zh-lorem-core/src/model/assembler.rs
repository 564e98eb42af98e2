use super::punctuation::{EndPunctuation, MidPunctuation};
use super::random_source::RandomSource;

/// Joins `words` into a sentence.
///
/// An independently drawn [`MidPunctuation`] separates each adjacent pair
/// and one [`EndPunctuation`] closes the sentence. An empty slice yields
/// the terminal mark alone.
pub fn assemble_sentence<S, R>(words: &[S], rng: &mut R) -> String
where
	S: AsRef<str>,
	R: RandomSource + ?Sized,
{
	let mut sentence = String::new();
	for (index, word) in words.iter().enumerate() {
		if index > 0 {
			sentence.push(MidPunctuation::sample(rng).as_char());
		}
		sentence.push_str(word.as_ref());
	}
	sentence.push(EndPunctuation::sample(rng).as_char());
	sentence
}

/// Builds a paragraph from `count` sentences, joined by single spaces.
///
/// `sentence` is invoked once per sentence and its first error is
/// returned unchanged. A `count` of zero or less yields an empty string.
pub fn assemble_paragraph<F, E>(count: i64, mut sentence: F) -> Result<String, E>
where
	F: FnMut() -> Result<String, E>,
{
	let mut paragraph = String::new();
	for index in 0..count.max(0) {
		if index > 0 {
			paragraph.push(' ');
		}
		paragraph.push_str(&sentence()?);
	}
	Ok(paragraph)
}
