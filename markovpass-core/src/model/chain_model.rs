use std::collections::HashMap;

use rand::Rng;

use super::state::State;
use crate::corpus::Corpus;
use crate::error::BuildError;

/// Marker standing in for the missing symbols before a word starts.
pub const START_CHAR: char = '<';
/// Marker recorded as the symbol following the last character of a word.
pub const END_CHAR: char = '>';

/// A fixed-order character chain model trained on a corpus.
///
/// The `ChainModel` stores one state per observed context (the `order`
/// symbols preceding a position, start markers included) and allows
/// probabilistic prediction of the next symbol.
///
/// # Responsibilities
/// - Build the chain from every corpus word in a single scan
/// - Accumulate transition counts for each context
/// - Predict the next symbol given a context
///
/// # Invariants
/// - `order` is always >= 1
/// - Every context reachable from the start context has at least one
///   outgoing transition (possibly only the end marker)
/// - Immutable after construction
#[derive(Clone, Debug, PartialEq)]
pub struct ChainModel {
	/// Number of preceding symbols that form a context.
	order: usize,

	/// Mapping from a context (length `order`) to its corresponding state.
	states: HashMap<String, State>,
}

impl ChainModel {
	/// Trains a chain model of the given order over a whole corpus.
	///
	/// This is a maximum-likelihood estimate: per context, the next-symbol
	/// distribution is proportional to observed frequency, with no
	/// smoothing. Contexts never observed in the corpus have no entry.
	///
	/// # Errors
	/// - `InvalidOrder` if `order < 1`
	/// - `EmptyCorpus` if the corpus has no words
	pub fn build(corpus: &Corpus, order: usize) -> Result<Self, BuildError> {
		if order < 1 {
			return Err(BuildError::InvalidOrder(order));
		}
		if corpus.is_empty() {
			return Err(BuildError::EmptyCorpus);
		}

		let mut model = Self { order, states: HashMap::new() };
		for word in corpus.words() {
			model.add_word(word);
		}
		Ok(model)
	}

	/// Returns the order of the model.
	pub fn order(&self) -> usize {
		self.order
	}

	/// The fixed context every generation walk starts from.
	pub(crate) fn start_context(&self) -> String {
		std::iter::repeat(START_CHAR).take(self.order).collect()
	}

	/// Adds one word to the model.
	///
	/// The word is augmented with `order` start markers and one end marker,
	/// then an `order`-wide window slides across it, recording the
	/// transition from each window to the symbol immediately following.
	/// Short words and word boundaries are thus represented without
	/// overflow.
	fn add_word(&mut self, word: &str) {
		let mut symbols: Vec<char> = Vec::with_capacity(self.order + word.len() + 1);
		symbols.resize(self.order, START_CHAR);
		symbols.extend(word.chars());
		symbols.push(END_CHAR);

		// For each window position
		for start in 0..symbols.len() - self.order {
			let context: String = symbols[start..start + self.order].iter().collect();
			let next_symbol = symbols[start + self.order];

			let state = self.states.entry(context).or_insert_with(State::new);
			state.add_transition(next_symbol);
		}
	}

	/// Draws the next symbol for a context.
	///
	/// Returns `None` if the context was never observed during training.
	pub(crate) fn next_symbol<R: Rng + ?Sized>(&self, context: &str, rng: &mut R) -> Option<char> {
		self.states.get(context)?.next_symbol(rng)
	}
}
