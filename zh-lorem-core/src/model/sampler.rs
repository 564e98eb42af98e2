use crate::error::{LoremError, Result};
use super::random_source::RandomSource;

/// Draws `count` distinct words from `words`, in random order.
///
/// Performs a partial Fisher-Yates shuffle over a private copy of the
/// word references: only the first `count` positions are settled, which
/// yields the same uniform distribution over ordered `count`-subsets as a
/// full shuffle followed by truncation. `words` itself is never mutated.
///
/// # Errors
/// Returns [`LoremError::InvalidSampleSize`] if `count > words.len()`.
pub fn sample_words<'a, S, R>(words: &'a [S], count: usize, rng: &mut R) -> Result<Vec<&'a str>>
where
	S: AsRef<str>,
	R: RandomSource + ?Sized,
{
	let available = words.len();
	if count > available {
		return Err(LoremError::InvalidSampleSize { requested: count, available });
	}

	let mut pool: Vec<&str> = words.iter().map(|w| w.as_ref()).collect();
	for i in 0..count {
		let j = i + rng.below(available - i);
		pool.swap(i, j);
	}
	pool.truncate(count);
	Ok(pool)
}
