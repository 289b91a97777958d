//! Top-level module for the chain-based token generation system.
//!
//! This module provides the passphrase generation pipeline, including:
//! - A fixed-order character chain model (`ChainModel`)
//! - Single random walks over a model (`sampler`)
//! - Acceptance constraints (`GenerationConstraints`)
//! - Retry-bounded token generation (`ConstrainedGenerator`)
//! - Passphrase assembly (`PassphraseBuilder`)

/// Fixed-order character chain model (`order >= 1`).
///
/// Handles word ingestion with boundary markers, transition counting,
/// and probabilistic next-symbol prediction.
pub mod chain_model;

/// Acceptance constraints applied to candidate tokens.
///
/// Carries the length bounds, the retry budget, and the novelty policy,
/// together with the documented default-selection constructors.
pub mod constraints;

/// Retry-bounded token generation over a trained model.
///
/// Draws candidates until one satisfies the constraints or the attempt
/// budget is spent.
pub mod generator;

/// Passphrase assembly from repeated constrained generation.
///
/// Collects accepted tokens and reports shortfall as data, not failure.
pub mod passphrase;

/// Single random walk over a chain model.
///
/// Produces one candidate token, bounded by a maximum length.
pub mod sampler;

/// Internal representation of a single chain context.
///
/// Tracks outgoing transitions and supports weighted random sampling.
/// This module is not exposed publicly.
mod state;
