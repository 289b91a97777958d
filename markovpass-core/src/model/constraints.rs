use rand::Rng;
use serde::Serialize;

/// Acceptance constraints applied to every candidate token.
///
/// A plain configuration value, never mutated by generation.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConstraints {
	/// Shortest acceptable token, in characters.
	pub min_length: usize,

	/// Longest acceptable token; walks are also cut off at this length.
	pub max_length: usize,

	/// Rejected draws tolerated per token before giving up.
	pub max_attempts: usize,

	/// Accept tokens that are verbatim corpus words.
	pub allow_duplicates: bool,
}

impl Default for GenerationConstraints {
	/// Deterministic library defaults: the lower bound of each reference
	/// range, a budget of 100 attempts, corpus words rejected.
	fn default() -> Self {
		Self {
			min_length: 3,
			max_length: 6,
			max_attempts: 100,
			allow_duplicates: false,
		}
	}
}

impl GenerationConstraints {
	/// Defaults with the length bounds drawn from the reference ranges:
	/// `min_length` 3 or 4 and `max_length` 6 or 7, each with equal
	/// chance.
	///
	/// Interactive hosts use this to vary the shape of the output between
	/// invocations; library callers wanting reproducible behavior stick
	/// with `Default`.
	pub fn sampled<R: Rng + ?Sized>(rng: &mut R) -> Self {
		Self {
			min_length: if rng.random_bool(0.5) { 3 } else { 4 },
			max_length: if rng.random_bool(0.5) { 6 } else { 7 },
			..Self::default()
		}
	}
}

/// Draws a chain order from the reference default range: 3 or 4, with
/// equal chance.
///
/// Same policy as `GenerationConstraints::sampled`: an explicit opt-in
/// for hosts, never applied implicitly.
pub fn sampled_order<R: Rng + ?Sized>(rng: &mut R) -> usize {
	if rng.random_bool(0.5) { 3 } else { 4 }
}
