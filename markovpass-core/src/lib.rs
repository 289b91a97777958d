//! Markov-chain passphrase generation library.
//!
//! This crate trains a character-level n-gram chain on a word list and
//! samples random walks through it to produce pronounceable, password-like
//! tokens, assembled into multi-word passphrases under length and novelty
//! constraints:
//! - Fixed-order chain models with explicit word-boundary markers
//! - Weighted random walks with an injectable random source
//! - Constraint-bounded generation with a finite retry budget
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Word list handling (ordered, deduplicated, membership lookup).
pub mod corpus;

/// Error types for model construction and constrained generation.
pub mod error;

/// Core chain model and generation logic.
///
/// This module exposes the high-level generation interface while keeping
/// internal model representations private.
pub mod model;
