use rand::Rng;

use super::chain_model::{ChainModel, END_CHAR};

/// Performs one random walk over a chain model and returns the produced
/// token.
///
/// # Behavior
/// - Starts from the model's fixed start context.
/// - Repeatedly draws the next symbol from the current context's
///   distribution and slides the context window forward by one.
/// - Drawing the end marker terminates the walk and yields the token.
/// - A token reaching `max_length` is returned as-is; whether a truncated
///   token is acceptable is the caller's concern.
///
/// # Returns
/// `None` if a context with no outgoing transitions is reached. Contexts
/// recorded during training always lead to at least the end marker, so
/// this cannot happen when walking from the start context, but unknown
/// contexts are handled rather than assumed away.
pub fn sample<R: Rng + ?Sized>(model: &ChainModel, max_length: usize, rng: &mut R) -> Option<String> {
	let mut token = String::new();
	let mut context = model.start_context();

	while token.chars().count() < max_length {
		let next_symbol = model.next_symbol(&context, rng)?;
		if next_symbol == END_CHAR {
			break;
		}

		token.push(next_symbol);

		// Slide the window: drop the oldest symbol, append the new one
		context.push(next_symbol);
		context = last_n_chars(&context, model.order());
	}

	Some(token)
}

/// Returns the last `n` characters of a string.
///
/// If `n` is greater than the number of characters in `s`, the entire
/// string is returned.
fn last_n_chars(s: &str, n: usize) -> String {
	if n > s.chars().count() {
		return s.to_owned();
	}
	s.chars()
		.rev()
		.take(n)
		.collect::<Vec<_>>()
		.into_iter()
		.rev()
		.collect()
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::{last_n_chars, sample};
	use crate::corpus::Corpus;
	use crate::model::chain_model::ChainModel;

	#[test]
	fn walk_reproduces_single_word_chain() {
		let corpus = Corpus::new(["abc"]);
		let model = ChainModel::build(&corpus, 2).unwrap();
		let mut rng = StdRng::seed_from_u64(6);

		assert_eq!(sample(&model, 10, &mut rng), Some("abc".to_owned()));
	}

	#[test]
	fn walk_is_cut_off_at_max_length() {
		// An order-1 chain over "aaaa" loops on 'a'; the length bound is
		// the only thing stopping the walk early
		let corpus = Corpus::new(["aaaa"]);
		let model = ChainModel::build(&corpus, 1).unwrap();

		for seed in 0..20 {
			let mut rng = StdRng::seed_from_u64(seed);
			let token = sample(&model, 2, &mut rng).unwrap();
			assert!(token.chars().count() <= 2);
		}
	}

	#[test]
	fn zero_max_length_yields_empty_token() {
		let corpus = Corpus::new(["abc"]);
		let model = ChainModel::build(&corpus, 2).unwrap();
		let mut rng = StdRng::seed_from_u64(7);

		assert_eq!(sample(&model, 0, &mut rng), Some(String::new()));
	}

	#[test]
	fn last_n_chars_takes_the_tail() {
		assert_eq!(last_n_chars("abcdef", 3), "def");
		assert_eq!(last_n_chars("ab", 5), "ab");
	}
}
