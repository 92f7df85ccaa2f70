//! Win evaluation over the two resolved face values.

use std::fmt;

/// Terminal game outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    AutomatedWins,
    HumanWins,
    /// Ties are a valid terminal outcome; there is no re-roll
    Tie,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::AutomatedWins => write!(f, "automated player wins"),
            GameOutcome::HumanWins => write!(f, "human player wins"),
            GameOutcome::Tie => write!(f, "tie"),
        }
    }
}

/// Pure comparison of the two resolved faces
pub fn evaluate(automated: i64, human: i64) -> GameOutcome {
    if automated > human {
        GameOutcome::AutomatedWins
    } else if automated < human {
        GameOutcome::HumanWins
    } else {
        GameOutcome::Tie
    }
}
