use rand::Rng;
use serde::Serialize;

use super::constraints::GenerationConstraints;
use super::generator::ConstrainedGenerator;

/// Requested token count and model order, echoed alongside the result.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PassphraseOptions {
	pub count: usize,
	pub order: usize,
}

/// Outcome of one passphrase build.
///
/// `result` holds the accepted tokens in generation order and may be
/// shorter than the requested count when some slots could not be filled
/// within their attempt budgets. Shortfall is a data condition, not a
/// fault: callers compare `result.len()` against `options.count`.
#[derive(Serialize, Clone, Debug)]
pub struct PassphraseResult {
	pub constraints: GenerationConstraints,
	pub options: PassphraseOptions,
	pub result: Vec<String>,
}

impl PassphraseResult {
	/// True when every requested slot produced a token.
	pub fn is_complete(&self) -> bool {
		self.result.len() == self.options.count
	}

	/// Joins the tokens with a separator into the final passphrase.
	pub fn join(&self, separator: &str) -> String {
		self.result.join(separator)
	}
}

/// Assembles passphrases by repeated constrained generation.
pub struct PassphraseBuilder {
	generator: ConstrainedGenerator,
	constraints: GenerationConstraints,
}

impl PassphraseBuilder {
	/// Wraps a generator and the constraints every slot will use.
	pub fn new(generator: ConstrainedGenerator, constraints: GenerationConstraints) -> Self {
		Self { generator, constraints }
	}

	/// Generates up to `count` tokens.
	///
	/// A slot whose attempt budget runs out is skipped, not retried (its
	/// budget was already spent), and the remaining slots are still
	/// attempted, so the build always returns whatever it could produce.
	pub fn build<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> PassphraseResult {
		let mut result = Vec::with_capacity(count);
		for slot in 0..count {
			match self.generator.generate_one(&self.constraints, rng) {
				Ok(token) => result.push(token),
				Err(error) => log::debug!("slot {slot} skipped: {error}"),
			}
		}

		PassphraseResult {
			constraints: self.constraints,
			options: PassphraseOptions { count, order: self.generator.order() },
			result,
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::PassphraseBuilder;
	use crate::corpus::Corpus;
	use crate::model::constraints::GenerationConstraints;
	use crate::model::generator::ConstrainedGenerator;

	fn builder(constraints: GenerationConstraints) -> PassphraseBuilder {
		let corpus = Corpus::new(["banana", "bandana", "cabana", "canal", "manana"]);
		PassphraseBuilder::new(ConstrainedGenerator::new(corpus, 2).unwrap(), constraints)
	}

	#[test]
	fn zero_count_builds_an_empty_complete_result() {
		let mut rng = StdRng::seed_from_u64(11);
		let outcome = builder(GenerationConstraints::default()).build(0, &mut rng);

		assert!(outcome.result.is_empty());
		assert!(outcome.is_complete());
	}

	#[test]
	fn result_echoes_count_and_order() {
		let mut rng = StdRng::seed_from_u64(12);
		let outcome = builder(GenerationConstraints::default()).build(3, &mut rng);

		assert_eq!(outcome.options.count, 3);
		assert_eq!(outcome.options.order, 2);
		assert!(outcome.result.len() <= 3);
	}

	#[test]
	fn join_concatenates_with_the_separator() {
		let constraints = GenerationConstraints { allow_duplicates: true, ..Default::default() };
		let mut rng = StdRng::seed_from_u64(13);
		let outcome = builder(constraints).build(2, &mut rng);

		assert!(outcome.is_complete());
		assert_eq!(outcome.join("-"), format!("{}-{}", outcome.result[0], outcome.result[1]));
	}
}
