use super::random_source::RandomSource;

/// Half-width of the length window, as a fraction of the average.
pub const VARIANCE: f64 = 0.25;

/// Returns the spread `ceil(average * VARIANCE)`.
pub fn spread(average: i64) -> i64 {
	(average as f64 * VARIANCE).ceil() as i64
}

/// Inclusive bounds of [`sample_length`] for a given average.
///
/// Both bounds are clamped to 1.
pub fn length_bounds(average: i64) -> (usize, usize) {
	let spread = spread(average);
	let low = average.saturating_sub(spread);
	let high = average.saturating_add(spread);
	(clamp_length(low.min(high)), clamp_length(low.max(high)))
}

/// Draws a randomized length around `average`.
///
/// The value is taken uniformly from `[average - spread, average + spread]`
/// and rounded half-up, so both ends of the window are half as likely as
/// the inner values. Results below 1 are clamped to 1, which makes the
/// distribution asymmetric for averages of 1 or less.
pub fn sample_length<R: RandomSource + ?Sized>(average: i64, rng: &mut R) -> usize {
	let spread = spread(average);
	let min = average.saturating_sub(spread);
	let max = average.saturating_add(spread);
	let offset = (rng.unit() * (max - min) as f64 + 0.5).floor() as i64;
	clamp_length(offset.saturating_add(min))
}

fn clamp_length(length: i64) -> usize {
	usize::try_from(length.max(1)).unwrap_or(usize::MAX)
}
