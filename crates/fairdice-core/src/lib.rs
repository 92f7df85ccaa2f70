//! Fairdice Core Library
//!
//! This crate provides the commit-reveal fairness protocol, dice validation
//! and win-probability math, and the turn-based session state machine for
//! the provably-fair non-transitive dice game.

pub mod crypto;
pub mod dice;
pub mod session;

pub use crypto::{combine, CryptoError, Digest, FairRound, Reveal, SecretKey};
pub use dice::{
    Die, DieStatus, DiceCatalog, ValidationError, ValidationReport, FACES,
};
pub use session::{
    Choice, FirstMover, GameOutcome, GameSession, Interaction, Phase, PlayerKind,
    ScriptedInteraction, SessionError, SessionOutcome,
};
