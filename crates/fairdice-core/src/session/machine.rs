//! The session state machine.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};

use super::interaction::{Choice, Interaction};
use super::outcome::{evaluate, GameOutcome};
use super::player::{PlayerKind, PlayerState};
use super::roll::resolve_roll;
use super::turn::{decide_first_mover, FirstMover};
use super::SessionError;
use crate::dice::DiceCatalog;

/// Phase of the session state machine.
///
/// Phases advance in a fixed order and are never revisited. Cancellation at
/// any suspension point jumps straight to `Terminated`: a half-played
/// session never reports a winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Validating,
    DecidingTurnOrder,
    SelectingDice,
    Rolling(PlayerKind),
    Evaluating,
    Terminated,
}

/// Terminal result of a session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    Finished(GameOutcome),
    /// The human exited at a prompt
    Cancelled,
}

/// One game between the automated player and the human.
///
/// Created per program invocation, destroyed at process end; there is no
/// persistence across runs. Strictly sequential: at most one human-input
/// request is pending and at most one commitment is open at any time.
pub struct GameSession<I, R = OsRng> {
    catalog: DiceCatalog,
    io: I,
    rng: R,
    automated: PlayerState,
    human: PlayerState,
    phase: Phase,
}

impl<I: Interaction> GameSession<I, OsRng> {
    /// Create a session over a validated catalog, using OS entropy
    pub fn new(catalog: DiceCatalog, io: I) -> Self {
        Self::with_rng(catalog, io, OsRng)
    }
}

impl<I, R> GameSession<I, R>
where
    I: Interaction,
    R: RngCore + CryptoRng,
{
    /// Create a session with a caller-supplied secure RNG.
    ///
    /// Tests inject a seeded RNG here to make whole sessions
    /// deterministic.
    pub fn with_rng(catalog: DiceCatalog, io: I, rng: R) -> Self {
        Self {
            catalog,
            io,
            rng,
            automated: PlayerState::default(),
            human: PlayerState::default(),
            phase: Phase::Validating,
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The interaction channel, for inspecting what was said
    pub fn interaction(&self) -> &I {
        &self.io
    }

    /// Run the session to termination.
    ///
    /// Returns the terminal outcome; cancellation is a value, not an
    /// error, so the caller decides the process exit status.
    pub fn run(&mut self) -> Result<SessionOutcome, SessionError> {
        debug_assert_eq!(self.phase, Phase::Validating, "session run twice");
        debug_assert!(self.catalog.len() >= 3, "catalog validated before play");

        self.phase = Phase::DecidingTurnOrder;
        let first = match decide_first_mover(&mut self.io, &mut self.rng)? {
            Some(first) => first,
            None => return Ok(self.cancel()),
        };

        self.phase = Phase::SelectingDice;
        let (automated_die, human_die) = match self.select_dice(first) {
            Some(pair) => pair,
            None => return Ok(self.cancel()),
        };

        for kind in turn_order(first) {
            self.phase = Phase::Rolling(kind);
            let die_index = match kind {
                PlayerKind::Automated => automated_die,
                PlayerKind::Human => human_die,
            };
            let face = match resolve_roll(
                &mut self.io,
                &mut self.rng,
                kind,
                &self.catalog.dice()[die_index],
            )? {
                Some(face) => face,
                None => return Ok(self.cancel()),
            };
            match kind {
                PlayerKind::Automated => self.automated.roll_result = Some(face),
                PlayerKind::Human => self.human.roll_result = Some(face),
            }
        }

        self.phase = Phase::Evaluating;
        let automated = self
            .automated
            .roll_result
            .expect("roll resolved for both players");
        let human = self
            .human
            .roll_result
            .expect("roll resolved for both players");
        let outcome = evaluate(automated, human);
        match outcome {
            GameOutcome::AutomatedWins => {
                self.io.say(&format!("I win ({automated} > {human})!"));
            }
            GameOutcome::HumanWins => {
                self.io.say(&format!("You win ({human} > {automated})!"));
            }
            GameOutcome::Tie => {
                self.io.say(&format!("It's a tie ({automated} = {human})!"));
            }
        }

        self.phase = Phase::Terminated;
        Ok(SessionOutcome::Finished(outcome))
    }

    /// Let each side take a die from the pool, in turn order.
    ///
    /// Returns `(automated die index, human die index)`, or `None` when the
    /// human cancels the selection prompt.
    fn select_dice(&mut self, first: FirstMover) -> Option<(usize, usize)> {
        for kind in turn_order(first) {
            let available = self.catalog.available_indices();
            let index = match kind {
                PlayerKind::Automated => {
                    let index = available[self.rng.gen_range(0..available.len())];
                    let die = &self.catalog.dice()[index];
                    let message = if first == FirstMover::Automated {
                        format!("I make the first move and choose the {die} dice.")
                    } else {
                        format!("I choose the {die} dice.")
                    };
                    self.io.say(&message);
                    index
                }
                PlayerKind::Human => {
                    let labels: Vec<String> = available
                        .iter()
                        .map(|&i| self.catalog.dice()[i].to_string())
                        .collect();
                    match self.io.pick("Your turn to choose the dice.", &labels) {
                        Choice::Picked(position) => {
                            let index = available[position];
                            self.io
                                .say(&format!("You choose the {} dice.", self.catalog.dice()[index]));
                            index
                        }
                        Choice::Cancelled => return None,
                    }
                }
            };
            self.catalog.select(index);
            match kind {
                PlayerKind::Automated => self.automated.chosen_die = Some(index),
                PlayerKind::Human => self.human.chosen_die = Some(index),
            }
        }

        Some((self.automated.chosen_die?, self.human.chosen_die?))
    }

    fn cancel(&mut self) -> SessionOutcome {
        self.phase = Phase::Terminated;
        SessionOutcome::Cancelled
    }
}

/// Both players in acting order: the first mover, then their opponent
fn turn_order(first: FirstMover) -> [PlayerKind; 2] {
    let starter = match first {
        FirstMover::Automated => PlayerKind::Automated,
        FirstMover::Human => PlayerKind::Human,
    };
    [starter, starter.opponent()]
}
