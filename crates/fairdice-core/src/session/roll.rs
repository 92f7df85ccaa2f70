//! Per-player dice-roll resolution built on the fairness protocol.

use rand::{CryptoRng, RngCore};

use super::interaction::{Choice, Interaction};
use super::player::PlayerKind;
use super::SessionError;
use crate::crypto::{combine, FairRound};
use crate::dice::{Die, FACES};

/// Resolve one provably-fair roll of `die` for `player`.
///
/// The human contributes the offset even when the automated side is
/// rolling: fairness requires a human-visible contribution on every roll,
/// not just the human's own. The digest is published before the offset is
/// solicited, so neither party can bias the combined index once both
/// values are fixed.
///
/// Returns `None` when the human cancels at the offset prompt.
pub(super) fn resolve_roll<I, R>(
    io: &mut I,
    rng: &mut R,
    player: PlayerKind,
    die: &Die,
) -> Result<Option<i64>, SessionError>
where
    I: Interaction,
    R: RngCore + CryptoRng,
{
    let round = FairRound::commit_with(FACES as u64, rng)?;

    io.say(&format!("It's time for {} roll.", match player {
        PlayerKind::Automated => "my",
        PlayerKind::Human => "your",
    }));
    io.say(&format!(
        "I selected a random value in the range 0..5 (HMAC={})",
        round.digest()
    ));

    let labels: Vec<String> = (0..FACES).map(|n| n.to_string()).collect();
    let offset = match io.pick("Add your number modulo 6.", &labels) {
        Choice::Picked(index) => index as u64,
        Choice::Cancelled => return Ok(None),
    };

    let reveal = round.reveal()?;
    let fair_index = combine(reveal.secret_value, offset, FACES as u64);
    let result = die.face(fair_index as usize);

    io.say(&format!("Your choice is {offset}."));
    io.say(&format!(
        "My number is {} (KEY={}).",
        reveal.secret_value, reveal.secret_key
    ));
    io.say(&format!(
        "The fair number is {} + {} = {} (mod 6).",
        reveal.secret_value, offset, fair_index
    ));
    io.say(&format!("{} roll result is {result}.", player.possessive()));

    Ok(Some(result))
}
