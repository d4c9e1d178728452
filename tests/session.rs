use pixel_runner::game::session::{elapsed_seconds, GameSession};
use pretty_assertions::assert_eq;

#[test]
fn test_elapsed_seconds_floors() {
    assert_eq!(elapsed_seconds(999, 0), 0);
    assert_eq!(elapsed_seconds(1000, 0), 1);
    assert_eq!(elapsed_seconds(2500, 0), 2);
}

#[test]
fn test_elapsed_seconds_relative_to_start() {
    assert_eq!(elapsed_seconds(3500, 2000), 1);
    // A clock running behind the recorded start never underflows.
    assert_eq!(elapsed_seconds(500, 1000), 0);
}

#[test]
fn test_new_session_is_inactive_with_zero_score() {
    let session = GameSession::new();
    assert!(!session.active());
    assert_eq!(session.score(), 0);
}

#[test]
fn test_begin_activates_and_zeroes_score() {
    let mut session = GameSession::new();
    session.begin(5_000);
    session.update_score(9_200);
    assert_eq!(session.score(), 4);

    // Restarting rebases the clock.
    session.begin(20_000);
    assert!(session.active());
    assert_eq!(session.score(), 0);
    session.update_score(21_000);
    assert_eq!(session.score(), 1);
}

#[test]
fn test_score_is_monotonic_while_active() {
    let mut session = GameSession::new();
    session.begin(0);

    let mut last = 0;
    for now in (0..10_000u64).step_by(170) {
        session.update_score(now);
        assert!(session.score() >= last);
        last = session.score();
    }
}

#[test]
fn test_score_freezes_once_ended() {
    let mut session = GameSession::new();
    session.begin(0);
    session.update_score(5_400);
    session.end();

    assert!(!session.active());
    assert_eq!(session.score(), 5);
}
