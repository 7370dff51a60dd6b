use assert_matches::assert_matches;

use super::*;
use crate::war::notify::{Notification, Recorder};
use crate::war::{GamePhase, Shuffler};

const SECOND: Duration = Duration::from_secs(1);

fn manager(seed: u64) -> (GameManager, Arc<Recorder>) {
    let recorder = Recorder::new();
    let manager = GameManager::new(
        GameConfig::default(),
        Shuffler::seeded(seed),
        recorder.clone(),
    );
    (manager, recorder)
}

#[test]
fn opponent_is_always_present() {
    let (manager, _) = manager(1);
    let opponent = manager.game().player2().unwrap();
    assert_eq!(opponent.name, "AI Opponent");
    assert!(manager.game().player1().is_none());
    assert_eq!(manager.game().phase(), GamePhase::Setup);
}

#[test]
fn setup_player_takes_opposite_sides() {
    let (mut manager, _) = manager(2);
    let location = Coordinate::new(30.0, 34.8);
    assert!(manager.setup_player("  Ada ", location.side(), Some(location)));
    let player = manager.game().player1().unwrap();
    assert_eq!(player.name, "Ada");
    assert_eq!(player.side, Side::West);
    assert_eq!(player.location, Some(location));
    assert_eq!(manager.game().player2().unwrap().side, Side::East);
    assert_eq!(manager.game().phase(), GamePhase::LocationSetup);
}

#[test]
fn setup_player_requires_a_name() {
    let (mut manager, _) = manager(3);
    assert!(!manager.setup_player("   ", Side::East, None));
    assert!(manager.game().player1().is_none());
    assert_eq!(manager.game().phase(), GamePhase::Setup);
}

#[test]
fn start_without_player_is_ignored() {
    let (mut manager, recorder) = manager(4);
    let before = manager.snapshot();
    assert!(!manager.start_game());
    assert_eq!(manager.snapshot(), before);
    assert!(!manager.is_running());
    assert!(recorder.take().is_empty());
}

#[test]
fn full_match() {
    let (mut manager, recorder) = manager(5);
    assert!(manager.begin_location_setup());
    assert!(manager.setup_player("Ada", Side::East, None));
    assert!(manager.start_game());
    assert_eq!(manager.game().current_round(), 1);
    assert_matches!(manager.pop_event(), Some(Event::Started));
    assert_matches!(manager.pop_event(), Some(Event::Round(r)) if r.number == 1);
    assert_eq!(recorder.take()[0], Notification::GameStart);

    manager.tick(SECOND * 45);
    let snapshot = manager.snapshot();
    assert_eq!(snapshot.game.phase, GamePhase::Results);
    assert_eq!(snapshot.game.current_round, 10);
    assert_eq!(snapshot.stats.rounds, 10);
    assert!(!snapshot.counting_down);
    assert!(!snapshot.paused);

    let notes = recorder.take();
    assert_eq!(
        notes.last(),
        Some(&Notification::GameEnd {
            player_won: manager.player_won()
        })
    );
    let events: Vec<_> = std::iter::from_fn(|| manager.pop_event()).collect();
    assert_eq!(events.len(), 10);
    assert_matches!(events.last(), Some(Event::Finished(_)));
}

#[test]
fn pause_resume_reports_paused() {
    let (mut manager, _) = manager(6);
    manager.setup_player("Ada", Side::East, None);
    manager.start_game();
    manager.pause_game();
    assert!(manager.snapshot().paused);
    manager.tick(SECOND * 30);
    assert_eq!(manager.game().current_round(), 1);
    assert!(manager.resume_game());
    assert!(!manager.snapshot().paused);
    assert_eq!(manager.game().current_round(), 2);
}

#[test]
fn reset_cancels_timers() {
    let (mut manager, _) = manager(7);
    manager.setup_player("Ada", Side::East, None);
    manager.start_game();
    manager.tick(SECOND * 7);
    manager.reset_game();
    assert!(!manager.is_running());

    // A stale timer must not touch the fresh match.
    manager.tick(SECOND * 60);
    let snapshot = manager.snapshot();
    assert_eq!(snapshot.game.phase, GamePhase::Setup);
    assert_eq!(snapshot.game.current_round, 0);
    assert_eq!(snapshot.game.deck_remaining, 52);
    assert!(snapshot.game.player1.is_none());
    assert_eq!(snapshot.game.player2.as_ref().unwrap().side, Side::West);
}

#[test]
fn reset_twice_matches_reset_once() {
    let (mut manager, _) = manager(8);
    manager.setup_player("Ada", Side::West, None);
    manager.start_game();
    manager.reset_game();
    let mut once = manager.snapshot();
    manager.reset_game();
    let mut twice = manager.snapshot();
    // The opponent is created afresh, with a new identity.
    once.game.player2 = None;
    twice.game.player2 = None;
    assert_eq!(once, twice);
}

#[test]
fn play_again_after_results() {
    let (mut manager, _) = manager(9);
    manager.setup_player("Ada", Side::East, None);
    manager.start_game();
    manager.tick(SECOND * 3600);
    assert_eq!(manager.game().phase(), GamePhase::Results);
    assert!(!manager.start_game());
    assert!(!manager.resume_game());

    manager.reset_game();
    assert!(manager.setup_player("Ada", Side::East, None));
    assert!(manager.start_game());
    assert_eq!(manager.game().current_round(), 1);
    let game = manager.game();
    let scored = game.player1().unwrap().score() + game.player2().unwrap().score();
    assert_eq!(scored + game.stats().ties, 1);
}
