use rand::Rng;

/// Uniform random source used by every sampling step of the pipeline.
///
/// Every `rand::Rng` implements this trait, so production code passes
/// `rand::rng()` while tests pass a seeded `StdRng` or a scripted source
/// replaying fixed draws.
pub trait RandomSource {
	/// Returns a uniform draw in `[0.0, 1.0)`.
	fn unit(&mut self) -> f64;

	/// Returns a uniform index in `[0, bound)`.
	///
	/// `bound` must be strictly positive.
	fn below(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
	fn unit(&mut self) -> f64 {
		self.random::<f64>()
	}

	fn below(&mut self, bound: usize) -> usize {
		self.random_range(0..bound)
	}
}

#[cfg(test)]
pub(crate) mod testing {
	use super::RandomSource;

	/// Replays a fixed sequence of draws, cycling when exhausted.
	pub(crate) struct Scripted {
		units: Vec<f64>,
		indices: Vec<usize>,
		unit_pos: usize,
		index_pos: usize,
	}

	impl Scripted {
		pub(crate) fn units(units: &[f64]) -> Self {
			Self { units: units.to_vec(), indices: vec![0], unit_pos: 0, index_pos: 0 }
		}

		pub(crate) fn indices(indices: &[usize]) -> Self {
			Self { units: vec![0.0], indices: indices.to_vec(), unit_pos: 0, index_pos: 0 }
		}
	}

	impl RandomSource for Scripted {
		fn unit(&mut self) -> f64 {
			let value = self.units[self.unit_pos % self.units.len()];
			self.unit_pos += 1;
			value
		}

		fn below(&mut self, bound: usize) -> usize {
			let value = self.indices[self.index_pos % self.indices.len()];
			self.index_pos += 1;
			value.min(bound - 1)
		}
	}
}
