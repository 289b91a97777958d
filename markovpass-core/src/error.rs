use thiserror::Error;

/// Construction-time failures.
///
/// Fatal to the whole generation session: no valid model can exist.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
	/// The context window must cover at least one preceding symbol.
	#[error("chain order must be at least 1, got {0}")]
	InvalidOrder(usize),

	/// An empty word list leaves nothing to train on.
	#[error("corpus contains no words")]
	EmptyCorpus,
}

/// The per-token retry budget was spent without an accepted candidate.
///
/// Recovered by the passphrase builder, which skips the slot; the caller
/// only ever observes it in aggregate as a shorter result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("no candidate satisfied the constraints after {attempts} attempts")]
pub struct ConstraintsUnsatisfiable {
	/// Draws spent before giving up (equals the configured budget).
	pub attempts: usize,
}
