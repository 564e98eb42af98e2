use std::fmt;

use super::random_source::RandomSource;

/// Separator placed between two words of a sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MidPunctuation {
	/// `，` (U+FF0C), 99% of draws.
	Comma,
	/// `；` (U+FF1B), 1% of draws.
	Semicolon,
}

/// Mark ending a sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EndPunctuation {
	/// `｡` (U+FF61), 95% of draws.
	Period,
	/// `？` (U+FF1F), 4% of draws.
	QuestionMark,
	/// `！` (U+FF01), 1% of draws.
	ExclamationMark,
}

impl MidPunctuation {
	pub const ALL: [MidPunctuation; 2] = [MidPunctuation::Comma, MidPunctuation::Semicolon];

	pub fn as_char(self) -> char {
		match self {
			MidPunctuation::Comma => '\u{ff0c}',
			MidPunctuation::Semicolon => '\u{ff1b}',
		}
	}

	/// Maps a uniform draw in `[0, 1)` to a separator.
	pub fn from_draw(r: f64) -> Self {
		if r > 0.99 {
			MidPunctuation::Semicolon
		} else {
			MidPunctuation::Comma
		}
	}

	pub fn sample<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
		Self::from_draw(rng.unit())
	}
}

impl EndPunctuation {
	pub const ALL: [EndPunctuation; 3] = [
		EndPunctuation::Period,
		EndPunctuation::QuestionMark,
		EndPunctuation::ExclamationMark,
	];

	pub fn as_char(self) -> char {
		match self {
			EndPunctuation::Period => '\u{ff61}',
			EndPunctuation::QuestionMark => '\u{ff1f}',
			EndPunctuation::ExclamationMark => '\u{ff01}',
		}
	}

	/// Maps a uniform draw in `[0, 1)` to a terminal mark.
	pub fn from_draw(r: f64) -> Self {
		if r > 0.99 {
			EndPunctuation::ExclamationMark
		} else if r > 0.95 {
			EndPunctuation::QuestionMark
		} else {
			EndPunctuation::Period
		}
	}

	pub fn sample<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
		Self::from_draw(rng.unit())
	}

	/// Returns the terminal mark represented by `c`, if any.
	pub fn from_char(c: char) -> Option<Self> {
		Self::ALL.into_iter().find(|mark| mark.as_char() == c)
	}
}

impl fmt::Display for MidPunctuation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_char())
	}
}

impl fmt::Display for EndPunctuation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_char())
	}
}
