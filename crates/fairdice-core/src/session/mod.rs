//! Turn-based game session: turn order, dice selection, rolls, outcome.

mod interaction;
mod machine;
mod outcome;
mod player;
mod roll;
mod turn;

pub use interaction::{Choice, Interaction, ScriptedInteraction};
pub use machine::{GameSession, Phase, SessionOutcome};
pub use outcome::{evaluate, GameOutcome};
pub use player::PlayerKind;
pub use turn::FirstMover;

use crate::crypto::CryptoError;
use thiserror::Error;

/// Fatal session errors.
///
/// Cancellation is not an error: it travels as a value
/// (`SessionOutcome::Cancelled`) so the orchestrator decides the final exit
/// status, never the failing component.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}
