use std::collections::BTreeMap;

use rand::Rng;

/// Represents a single context of the chain model.
///
/// A `State` corresponds to a fixed-length window of preceding symbols and
/// stores all observed transitions from this context to the next symbol.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate transition occurrences during training
/// - Draw the next symbol using weighted random sampling
///
/// ## Invariants
/// - Each transition occurrence count is strictly positive
/// - Transitions iterate in a stable order across model rebuilds, so a
///   seeded random source reproduces identical draws
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct State {
	/// Outgoing transitions indexed by the next symbol.
	/// The value represents how many times this transition was observed.
	/// Example: { 'e' => 42, 'a' => 3 }
	transitions: BTreeMap<char, usize>,
}

impl State {
	/// Creates a new empty state.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records an occurrence of a transition toward `next_symbol`.
	///
	/// - If the transition already exists, its occurrence count is increased.
	/// - Otherwise, a new transition is created with an initial count of 1.
	pub fn add_transition(&mut self, next_symbol: char) {
		*self.transitions.entry(next_symbol).or_insert(0) += 1;
	}

	/// Draws the next symbol using weighted random sampling.
	///
	/// The probability of selecting a symbol is proportional to its
	/// occurrence count.
	///
	/// This method performs:
	/// - an O(n) scan over the transitions
	/// - a cumulative subtraction to select a bucket
	///
	/// Returns `None` if the state has no transitions.
	pub fn next_symbol<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<char> {
		if self.transitions.is_empty() {
			return None;
		}

		// Compute the total number of occurrences
		let total: usize = self.transitions.values().sum();

		// Randomly select a bucket
		let mut r = rng.random_range(0..total);

		let mut fallback: Option<char> = None;
		for (next_symbol, occurrence) in &self.transitions {
			if r < *occurrence {
				return Some(*next_symbol);
			}
			r -= occurrence;
			fallback = Some(*next_symbol);
		}

		// Fallback: should not happen, but kept for safety.
		fallback
	}
}
