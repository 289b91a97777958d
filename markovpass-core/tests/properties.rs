use markovpass_core::corpus::Corpus;
use markovpass_core::model::chain_model::ChainModel;
use markovpass_core::model::constraints::GenerationConstraints;
use markovpass_core::model::generator::ConstrainedGenerator;
use markovpass_core::model::passphrase::PassphraseBuilder;
use markovpass_core::model::sampler;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

proptest! {
	/// Every walk over a trained model terminates within the length bound
	/// and emits only corpus alphabet symbols, never boundary markers.
	#[test]
	fn walks_terminate_within_the_length_bound(
		words in proptest::collection::vec("[a-z]{1,9}", 1..40),
		order in 1usize..5,
		max_length in 0usize..12,
		seed in any::<u64>(),
	) {
		let corpus = Corpus::new(words);
		let model = ChainModel::build(&corpus, order).unwrap();
		let mut rng = StdRng::seed_from_u64(seed);

		let token = sampler::sample(&model, max_length, &mut rng)
			.expect("walks from the start context never dead-end");
		prop_assert!(token.chars().count() <= max_length);
		prop_assert!(token.chars().all(|c| c.is_ascii_lowercase()));
	}

	/// A build never over-delivers, and every token it does deliver
	/// satisfies the configured length bounds.
	#[test]
	fn builds_stay_within_count_and_bounds(
		words in proptest::collection::vec("[a-z]{3,9}", 3..30),
		count in 0usize..6,
		seed in any::<u64>(),
	) {
		let constraints = GenerationConstraints::default();
		let generator = ConstrainedGenerator::new(Corpus::new(words), 2).unwrap();
		let builder = PassphraseBuilder::new(generator, constraints);
		let mut rng = StdRng::seed_from_u64(seed);

		let outcome = builder.build(count, &mut rng);
		prop_assert!(outcome.result.len() <= count);
		for token in &outcome.result {
			let length = token.chars().count();
			prop_assert!((constraints.min_length..=constraints.max_length).contains(&length));
		}
	}
}
