//! End-to-end session tests over the public API.
//!
//! A scripted interaction channel plays the human and a seeded RNG makes
//! every commitment deterministic, so whole games run without a terminal.

use fairdice_core::{
    combine, Choice, DiceCatalog, Digest, FairRound, GameSession, Phase, ScriptedInteraction,
    SessionOutcome, ValidationError,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn classic_dice() -> Vec<String> {
    vec![
        "2,2,4,4,9,9".to_string(),
        "1,1,6,6,8,8".to_string(),
        "3,3,5,5,7,7".to_string(),
    ]
}

fn play(choices: Vec<Choice>, seed: u64) -> GameSession<ScriptedInteraction, StdRng> {
    let catalog = DiceCatalog::parse(&classic_dice()).unwrap();
    GameSession::with_rng(
        catalog,
        ScriptedInteraction::new(choices),
        StdRng::seed_from_u64(seed),
    )
}

#[test]
fn full_game_terminates_with_an_outcome() {
    let mut session = play(
        vec![
            Choice::Picked(1), // turn-order guess
            Choice::Picked(0), // die selection
            Choice::Picked(3), // offset, first roll
            Choice::Picked(5), // offset, second roll
        ],
        42,
    );

    let outcome = session.run().unwrap();
    assert!(matches!(outcome, SessionOutcome::Finished(_)));
    assert_eq!(session.phase(), Phase::Terminated);

    let transcript = session.interaction().transcript();
    // One published digest per protocol round: turn order plus two rolls.
    assert_eq!(
        transcript.iter().filter(|l| l.contains("HMAC=")).count(),
        3
    );
    // Every published digest is followed by a key reveal.
    assert_eq!(transcript.iter().filter(|l| l.contains("KEY=")).count(), 3);
    assert_eq!(
        transcript
            .iter()
            .filter(|l| l.contains("roll result"))
            .count(),
        2
    );
}

#[test]
fn session_is_reproducible_for_a_fixed_seed_and_script() {
    let script = vec![
        Choice::Picked(0),
        Choice::Picked(1),
        Choice::Picked(2),
        Choice::Picked(4),
    ];

    let mut first = play(script.clone(), 7);
    let mut second = play(script, 7);

    assert_eq!(first.run().unwrap(), second.run().unwrap());
    assert_eq!(
        first.interaction().transcript(),
        second.interaction().transcript()
    );
}

#[test]
fn cancellation_during_rolling_reports_no_winner() {
    let mut session = play(
        vec![
            Choice::Picked(0),
            Choice::Picked(0),
            Choice::Picked(0),
            Choice::Cancelled,
        ],
        42,
    );

    assert_eq!(session.run().unwrap(), SessionOutcome::Cancelled);
    assert_eq!(session.phase(), Phase::Terminated);

    let transcript = session.interaction().transcript();
    assert!(transcript.iter().all(|l| !l.contains("win")));
    assert!(transcript.iter().all(|l| !l.contains("tie")));
}

#[test]
fn cancellation_at_the_guess_terminates_immediately() {
    let mut session = play(vec![Choice::Cancelled], 42);

    assert_eq!(session.run().unwrap(), SessionOutcome::Cancelled);
    // Nothing was revealed and no die was offered.
    let transcript = session.interaction().transcript();
    assert!(transcript.iter().all(|l| !l.contains("KEY=")));
    assert!(transcript.iter().all(|l| !l.contains("choose")));
}

#[test]
fn invalid_dice_never_reach_a_session() {
    let report = DiceCatalog::parse(&[
        "1,2,3".to_string(),
        "1,1,1,1,1,1".to_string(),
        "2,2,2,2,2,2".to_string(),
    ])
    .unwrap_err();

    assert!(matches!(
        report.errors()[0],
        ValidationError::WrongFaceCount {
            die_index: 0,
            found: 3,
            ..
        }
    ));
}

#[test]
fn published_digests_verify_against_their_reveals() {
    // An outside verifier can recompute every digest from the revealed
    // key and value alone.
    let round = FairRound::commit(6).unwrap();
    let digest = round.digest();
    let reveal = round.reveal().unwrap();

    let recomputed = Digest::new(&reveal.secret_key, reveal.secret_value);
    assert_eq!(recomputed, digest);

    // The digest binds the value: a swapped value no longer verifies.
    let tampered = (reveal.secret_value + 1) % 6;
    assert_ne!(Digest::new(&reveal.secret_key, tampered), digest);
}

#[test]
fn combined_output_is_order_independent() {
    for x in 0..6 {
        for y in 0..6 {
            assert_eq!(combine(x, y, 6), combine(y, x, 6));
            assert!(combine(x, y, 6) < 6);
        }
    }
}
