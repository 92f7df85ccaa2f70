//! Turn-order decision built on the fairness protocol.

use rand::{CryptoRng, RngCore};

use super::interaction::{Choice, Interaction};
use super::SessionError;
use crate::crypto::FairRound;

/// Who makes the first move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstMover {
    Automated,
    Human,
}

/// Run the range-2 commit-reveal guess that decides who moves first.
///
/// The digest is published before the guess is solicited; the human moves
/// first iff the guess equals the committed secret value. The immediate
/// reveal doubles as a public verification step: the human can check the
/// digest before any die is chosen.
///
/// Returns `None` when the human cancels at the guess prompt. The session
/// must then terminate; falling back to a default turn order would let a
/// cancelled prompt decide the game.
pub fn decide_first_mover<I, R>(
    io: &mut I,
    rng: &mut R,
) -> Result<Option<FirstMover>, SessionError>
where
    I: Interaction,
    R: RngCore + CryptoRng,
{
    let round = FairRound::commit_with(2, rng)?;

    io.say("Let's determine who makes the first move.");
    io.say(&format!(
        "I selected a random value in the range 0..1 (HMAC={})",
        round.digest()
    ));

    let labels = ["0".to_string(), "1".to_string()];
    let guess = match io.pick("Try to guess my selection.", &labels) {
        Choice::Picked(index) => index as u64,
        Choice::Cancelled => return Ok(None),
    };

    let reveal = round.reveal()?;
    let first = if guess == reveal.secret_value {
        FirstMover::Human
    } else {
        FirstMover::Automated
    };

    io.say(&format!("Your selection: {guess}"));
    io.say(&format!("My selection: {}", reveal.secret_value));
    io.say(&format!("(KEY={})", reveal.secret_key));

    Ok(Some(first))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::test_rng::FixedRng;
    use crate::session::interaction::ScriptedInteraction;

    #[test]
    fn test_correct_guess_puts_human_first() {
        let mut io = ScriptedInteraction::new([Choice::Picked(1)]);
        let first = decide_first_mover(&mut io, &mut FixedRng::new(1)).unwrap();

        assert_eq!(first, Some(FirstMover::Human));
    }

    #[test]
    fn test_wrong_guess_puts_automated_first() {
        let mut io = ScriptedInteraction::new([Choice::Picked(0)]);
        let first = decide_first_mover(&mut io, &mut FixedRng::new(1)).unwrap();

        assert_eq!(first, Some(FirstMover::Automated));
    }

    #[test]
    fn test_digest_published_before_guess_and_key_after() {
        let mut io = ScriptedInteraction::new([Choice::Picked(0)]);
        decide_first_mover(&mut io, &mut FixedRng::new(0)).unwrap();

        let transcript = io.transcript();
        let digest_line = transcript
            .iter()
            .position(|line| line.contains("HMAC="))
            .unwrap();
        let key_line = transcript
            .iter()
            .position(|line| line.contains("KEY="))
            .unwrap();
        assert!(digest_line < key_line);
    }

    #[test]
    fn test_cancellation_propagates() {
        let mut io = ScriptedInteraction::new([Choice::Cancelled]);
        let first = decide_first_mover(&mut io, &mut FixedRng::new(1)).unwrap();

        // No default turn order on cancellation.
        assert_eq!(first, None);
        assert!(io.transcript().iter().all(|line| !line.contains("KEY=")));
    }
}
