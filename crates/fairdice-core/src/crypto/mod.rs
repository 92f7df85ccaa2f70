//! Cryptographic primitives for the fairness protocol.
//!
//! This module provides:
//! - SecretKey and Digest for the keyed commitment
//! - FairRound for the commit-reveal random-value protocol

mod commitment;
mod fair;
#[cfg(test)]
pub(crate) mod test_rng;

pub use commitment::{Digest, SecretKey};
pub use fair::{combine, FairRound, Reveal};

use thiserror::Error;

/// Errors from the fairness protocol
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The OS entropy source failed. Fatal: a weak source silently defeats
    /// the fairness guarantee, so there is no retry and no fallback.
    #[error("secure entropy source unavailable: {0}")]
    EntropySource(rand::Error),

    /// The revealed key and value do not reproduce the published digest.
    #[error("revealed value does not match the published commitment digest")]
    CommitmentMismatch,
}
