use assert_matches::assert_matches;
use proptest::prelude::*;

use super::*;
use crate::war::dealer::{stacked, PLAYER1_SWEEP};
use crate::war::{Shuffler, Side};

fn card(s: &str) -> Card {
    s.parse().unwrap()
}

/// Every pair drawn in the first ten rounds is of equal rank.
const ALL_TIES: [&str; 20] = [
    "2s", "2h", "2d", "2c", "3s", "3h", "3d", "3c", "4s", "4h", "4d", "4c", "5s", "5h", "5d",
    "5c", "6s", "6h", "6d", "6c",
];

fn ready_game<D: Dealer + 'static>(dealer: D) -> GameState {
    let mut game = GameState::new(GameConfig::default(), dealer);
    assert!(game.assign_player1(Player::new("Ada", Side::East)));
    assert!(game.assign_player2(Player::new("AI Opponent", Side::West)));
    game
}

fn drain(game: &mut GameState) -> Vec<Event> {
    std::iter::from_fn(|| game.pop_event()).collect()
}

#[test]
fn new_game_is_in_setup() {
    let game = GameState::new(GameConfig::default(), Shuffler::seeded(1));
    assert_eq!(game.phase(), GamePhase::Setup);
    assert!(!game.is_active());
    assert_eq!(game.deck().len(), 52);
    assert!(game.player1().is_none());
    assert!(game.winner().is_none());
}

#[test]
fn start_requires_both_players() {
    let mut game = GameState::new(GameConfig::default(), Shuffler::seeded(1));
    assert!(!game.start_game());
    assert!(game.assign_player1(Player::new("Ada", Side::East)));
    let before = game.snapshot();
    assert!(!game.start_game());
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.phase(), GamePhase::LocationSetup);
}

#[test]
fn location_setup_only_from_setup() {
    let mut game = ready_game(Shuffler::seeded(1));
    assert_eq!(game.phase(), GamePhase::LocationSetup);
    assert!(!game.begin_location_setup());
    game.reset_game();
    assert!(game.begin_location_setup());
    assert_eq!(game.phase(), GamePhase::LocationSetup);
}

#[test]
fn start_resets_match_state() {
    let mut game = ready_game(Shuffler::seeded(2));
    assert!(game.start_game());
    assert_eq!(game.phase(), GamePhase::Playing);
    assert!(game.is_active());
    assert_eq!(game.current_round(), 0);
    assert!(game.history().is_empty());
    assert_eq!(game.player1().unwrap().score(), 0);
    assert_eq!(drain(&mut game), vec![Event::Started]);

    // Starting again mid-match is ignored.
    game.play_round().unwrap();
    assert!(!game.start_game());
    assert_eq!(game.current_round(), 1);
}

#[test]
fn players_cannot_change_mid_match() {
    let mut game = ready_game(Shuffler::seeded(2));
    game.start_game();
    assert!(!game.assign_player1(Player::new("Eve", Side::West)));
    assert!(!game.assign_player2(Player::new("Eve", Side::West)));
    assert_eq!(game.player1().unwrap().name, "Ada");
}

#[test]
fn play_round_draws_from_the_top() {
    let mut game = ready_game(stacked(&["7h", "9c"]));
    game.start_game();
    let round = game.play_round().unwrap();
    assert_eq!(round.number, 1);
    assert_eq!(round.player1_card, card("7h"));
    assert_eq!(round.player2_card, card("9c"));
    assert_eq!(round.outcome, RoundOutcome::Player2Wins);
    assert_eq!(game.current_cards(), Some((card("7h"), card("9c"))));
    assert_eq!(game.deck().len(), 50);
    assert_eq!(game.player2().unwrap().score(), 1);
    assert_eq!(game.player1().unwrap().score(), 0);
}

#[test]
fn play_round_inactive_changes_nothing() {
    let mut game = ready_game(Shuffler::seeded(3));
    let before = game.snapshot();
    let deck = game.deck().clone();
    assert_eq!(game.play_round(), None);
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.deck(), &deck);
    assert!(drain(&mut game).is_empty());
}

#[test]
fn player1_sweep() {
    let mut game = ready_game(stacked(&PLAYER1_SWEEP));
    game.start_game();
    for _ in 0..10 {
        assert!(game.play_round().is_some());
    }
    assert_eq!(game.phase(), GamePhase::Results);
    assert!(!game.is_active());
    assert_eq!(game.player1().unwrap().score(), 10);
    assert_eq!(game.player2().unwrap().score(), 0);
    let winner = game.winner().unwrap().clone();
    assert_eq!(winner.name, "Ada");

    let events = drain(&mut game);
    assert_eq!(events.len(), 12);
    assert_matches!(events.last(), Some(Event::Finished(Some(id))) if *id == winner.id);

    // The match is over; further rounds are refused.
    let before = game.snapshot();
    assert_eq!(game.play_round(), None);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn all_ties_nobody_scores() {
    let mut game = ready_game(stacked(&ALL_TIES));
    game.start_game();
    while game.play_round().is_some() {}
    assert_eq!(game.current_round(), 10);
    assert_eq!(game.phase(), GamePhase::Results);
    assert_eq!(game.player1().unwrap().score(), 0);
    assert_eq!(game.player2().unwrap().score(), 0);
    assert!(game.winner().is_none());
    assert_eq!(game.stats().ties, 10);
    assert_matches!(drain(&mut game).last(), Some(Event::Finished(None)));
}

#[test]
fn short_deck_ends_match() {
    let deck: Deck = ["as", "2s", "kh"].iter().map(|s| card(s)).collect();
    let mut game = ready_game(move || deck.clone());
    game.start_game();
    assert!(game.play_round().is_some());
    assert_eq!(game.phase(), GamePhase::Results);
    assert!(!game.is_active());
    assert_eq!(game.play_round(), None);
    assert_eq!(game.current_round(), 1);
}

#[test]
fn reset_is_idempotent() {
    let mut game = ready_game(Shuffler::seeded(4));
    game.start_game();
    game.play_round();
    game.reset_game();
    let once = game.snapshot();
    game.reset_game();
    assert_eq!(game.snapshot(), once);
    assert_eq!(once.phase, GamePhase::Setup);
    assert!(once.player1.is_none());
    assert!(once.player2.is_none());
    assert!(once.history.is_empty());
    assert_eq!(once.deck_remaining, 52);
    assert!(!once.is_active);
    assert!(game.pop_event().is_none());
}

#[test]
fn recent_rounds_newest_first() {
    let mut game = ready_game(Shuffler::seeded(5));
    game.start_game();
    for _ in 0..7 {
        game.play_round();
    }
    let numbers: Vec<_> = game.recent_rounds(5).map(|r| r.number).collect();
    assert_eq!(numbers, vec![7, 6, 5, 4, 3]);
}

proptest! {
    #[test]
    fn scores_account_for_every_round(seed in any::<u64>(), rounds in 0usize..15) {
        let mut game = ready_game(Shuffler::seeded(seed));
        game.start_game();
        for _ in 0..rounds {
            game.play_round();
        }
        let played = game.current_round();
        prop_assert_eq!(played as usize, game.history().len());
        prop_assert!(played <= game.max_rounds());
        prop_assert_eq!(played as usize, rounds.min(10));
        let p1 = game.player1().unwrap().score();
        let p2 = game.player2().unwrap().score();
        prop_assert_eq!(p1 + p2 + game.stats().ties, played);
        prop_assert_eq!(game.deck().len(), 52 - 2 * played as usize);
    }
}
