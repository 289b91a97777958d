use rand::Rng;

use super::chain_model::ChainModel;
use super::constraints::GenerationConstraints;
use super::sampler;
use crate::corpus::Corpus;
use crate::error::{BuildError, ConstraintsUnsatisfiable};

/// Draws candidate tokens from a chain model until one satisfies the
/// acceptance constraints, within a bounded retry budget.
///
/// # Responsibilities
/// - Own the trained model and the corpus it was trained on
/// - Filter candidates by the length bounds
/// - Reject verbatim corpus words unless explicitly permitted
///
/// The model is read-only after construction; one generator can serve any
/// number of generation calls, each with its own constraints and random
/// source.
#[derive(Clone, Debug)]
pub struct ConstrainedGenerator {
	model: ChainModel,
	corpus: Corpus,
}

impl ConstrainedGenerator {
	/// Trains a model of the given order and wraps it for constrained
	/// generation.
	///
	/// # Errors
	/// Fails like `ChainModel::build` for an invalid order or an empty
	/// corpus.
	pub fn new(corpus: Corpus, order: usize) -> Result<Self, BuildError> {
		let model = ChainModel::build(&corpus, order)?;
		Ok(Self { model, corpus })
	}

	/// Returns the order of the underlying model.
	pub fn order(&self) -> usize {
		self.model.order()
	}

	/// Generates one accepted token.
	///
	/// Up to `max_attempts` candidates are drawn; a candidate is accepted
	/// when its length lies within `min_length..=max_length` and, unless
	/// `allow_duplicates` is set, it is not a verbatim corpus word. Walks
	/// that die out mid-draw count toward the same budget.
	///
	/// # Errors
	/// `ConstraintsUnsatisfiable` once the budget is spent without an
	/// accepted candidate. The caller decides whether that aborts the
	/// whole passphrase or just shortens it.
	pub fn generate_one<R: Rng + ?Sized>(
		&self,
		constraints: &GenerationConstraints,
		rng: &mut R,
	) -> Result<String, ConstraintsUnsatisfiable> {
		let mut attempts = 0;
		while attempts < constraints.max_attempts {
			attempts += 1;

			let Some(candidate) = sampler::sample(&self.model, constraints.max_length, rng) else {
				log::trace!("walk reached a dead end, retrying");
				continue;
			};

			let length = candidate.chars().count();
			if length < constraints.min_length || length > constraints.max_length {
				log::trace!("rejected {candidate:?}: length {length} out of bounds");
				continue;
			}

			if !constraints.allow_duplicates && self.corpus.contains(&candidate) {
				log::trace!("rejected {candidate:?}: verbatim corpus word");
				continue;
			}

			return Ok(candidate);
		}

		Err(ConstraintsUnsatisfiable { attempts })
	}
}
