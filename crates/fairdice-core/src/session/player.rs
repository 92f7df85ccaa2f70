//! The two sides of one session.
//!
//! No shared base type: the automated side draws its choices from an
//! internal RNG, the human side from the interaction channel. Both hold a
//! chosen die by catalog index (mutual exclusion is enforced by the die
//! `status`) and a roll result set exactly once.

use std::fmt;

/// Which side a player is on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Automated,
    Human,
}

impl PlayerKind {
    /// The other side
    pub fn opponent(&self) -> PlayerKind {
        match self {
            PlayerKind::Automated => PlayerKind::Human,
            PlayerKind::Human => PlayerKind::Automated,
        }
    }

    /// Possessive for game messages ("My roll" / "Your roll")
    pub fn possessive(&self) -> &'static str {
        match self {
            PlayerKind::Automated => "My",
            PlayerKind::Human => "Your",
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Automated => write!(f, "automated"),
            PlayerKind::Human => write!(f, "human"),
        }
    }
}

/// Per-player session state
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct PlayerState {
    /// Index of the chosen die in the catalog
    pub chosen_die: Option<usize>,
    /// Resolved face value, set exactly once per session
    pub roll_result: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_symmetric() {
        assert_eq!(PlayerKind::Automated.opponent(), PlayerKind::Human);
        assert_eq!(PlayerKind::Human.opponent(), PlayerKind::Automated);
    }

    #[test]
    fn test_possessive_forms() {
        assert_eq!(PlayerKind::Automated.possessive(), "My");
        assert_eq!(PlayerKind::Human.possessive(), "Your");
    }
}
