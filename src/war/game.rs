//! Game state management.
//!
//! A match consists of a fixed number of rounds, drawn from a single shared deck. Each round,
//! both players draw a card from the top of the deck and the stronger card scores a point for
//! its owner. The match ends when the round limit is reached, or when the deck can no longer
//! supply a full round.

use std::collections::VecDeque;
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{Card, Dealer, Deck, GameConfig, Player, PlayerId, RoundOutcome, RoundRecord, Stats};

#[cfg(test)]
mod test;

/// The phase of a match. Exactly one is active at any time.
///
/// ```text
/// Setup -> LocationSetup -> Playing -> Results
///   ^                                     |
///   +------------- reset_game ------------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the human player.
    Setup,
    /// Waiting for the human player's side to be confirmed.
    LocationSetup,
    /// Rounds are being played.
    Playing,
    /// The match is over.
    Results,
}
impl Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GamePhase::Setup => "setup",
            GamePhase::LocationSetup => "location setup",
            GamePhase::Playing => "playing",
            GamePhase::Results => "results",
        })
    }
}

/// An event that occurs during the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The match started.
    Started,
    /// A round was played.
    Round(RoundRecord),
    /// The match is over. Carries the winner, or `None` for a tie.
    Finished(Option<PlayerId>),
}

/// A point-in-time view of the match, for presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub player1: Option<Player>,
    pub player2: Option<Player>,
    pub current_round: u32,
    pub max_rounds: u32,
    pub is_active: bool,
    pub current_cards: Option<(Card, Card)>,
    pub history: Vec<RoundRecord>,
    pub deck_remaining: usize,
}

/// Owns every piece of mutable match state.
pub struct GameState {
    config: GameConfig,
    dealer: Box<dyn Dealer>,
    phase: GamePhase,
    player1: Option<Player>,
    player2: Option<Player>,
    current_round: u32,
    history: Vec<RoundRecord>,
    deck: Deck,
    active: bool,
    /// The most recently drawn pair, for display.
    current_cards: Option<(Card, Card)>,
    events: VecDeque<Event>,
}

impl GameState {
    /// Creates a new game in the setup phase.
    pub fn new<D: Dealer + 'static>(config: GameConfig, dealer: D) -> Self {
        let mut dealer: Box<dyn Dealer> = Box::new(dealer);
        let deck = dealer.deal();
        Self {
            config,
            dealer,
            phase: GamePhase::Setup,
            player1: None,
            player2: None,
            current_round: 0,
            history: vec![],
            deck,
            active: false,
            current_cards: None,
            events: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The human player.
    pub fn player1(&self) -> Option<&Player> {
        self.player1.as_ref()
    }

    /// The scripted opponent.
    pub fn player2(&self) -> Option<&Player> {
        self.player2.as_ref()
    }

    /// The number of rounds played so far.
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn max_rounds(&self) -> u32 {
        self.config.max_rounds
    }

    /// Rounds played so far, oldest first.
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// The `n` most recent rounds, newest first.
    pub fn recent_rounds(&self, n: usize) -> impl Iterator<Item = &RoundRecord> {
        self.history.iter().rev().take(n)
    }

    pub fn stats(&self) -> Stats {
        self.history.iter().collect()
    }

    /// The shared deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns true while rounds may be played.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The cards drawn in the most recent round.
    pub fn current_cards(&self) -> Option<(Card, Card)> {
        self.current_cards
    }

    /// Pops the oldest event from the queue of events.
    pub fn pop_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Captures the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            player1: self.player1.clone(),
            player2: self.player2.clone(),
            current_round: self.current_round,
            max_rounds: self.config.max_rounds,
            is_active: self.active,
            current_cards: self.current_cards,
            history: self.history.clone(),
            deck_remaining: self.deck.len(),
        }
    }

    /// Moves from setup to location setup. Ignored in any other phase.
    pub fn begin_location_setup(&mut self) -> bool {
        if self.phase != GamePhase::Setup {
            debug!(phase = %self.phase, "ignoring location setup");
            return false;
        }
        self.phase = GamePhase::LocationSetup;
        true
    }

    /// Assigns the human player. Only allowed before the match starts.
    pub fn assign_player1(&mut self, player: Player) -> bool {
        if !self.in_setup() {
            debug!(phase = %self.phase, "ignoring player assignment");
            return false;
        }
        self.player1 = Some(player);
        self.phase = GamePhase::LocationSetup;
        true
    }

    /// Assigns the opponent. Only allowed before the match starts.
    pub fn assign_player2(&mut self, player: Player) -> bool {
        if !self.in_setup() {
            debug!(phase = %self.phase, "ignoring opponent assignment");
            return false;
        }
        self.player2 = Some(player);
        true
    }

    fn in_setup(&self) -> bool {
        matches!(self.phase, GamePhase::Setup | GamePhase::LocationSetup)
    }

    /// Starts the match with a fresh deck. Does nothing unless both players are assigned and
    /// the match is still being set up.
    pub fn start_game(&mut self) -> bool {
        if !self.in_setup() {
            debug!(phase = %self.phase, "ignoring start");
            return false;
        }
        let (Some(p1), Some(p2)) = (self.player1.as_mut(), self.player2.as_mut()) else {
            debug!("ignoring start without both players");
            return false;
        };
        p1.reset_score();
        p2.reset_score();
        self.deck = self.dealer.deal();
        self.current_round = 0;
        self.history.clear();
        self.current_cards = None;
        self.active = true;
        self.phase = GamePhase::Playing;
        self.events.push_back(Event::Started);
        debug!(max_rounds = self.config.max_rounds, "match started");
        true
    }

    /// Plays a single round. Returns `None` without touching any state if a round cannot be
    /// played right now.
    pub fn play_round(&mut self) -> Option<RoundRecord> {
        if !self.active || self.current_round >= self.config.max_rounds || self.deck.len() < 2 {
            return None;
        }
        let (Some(p1), Some(p2)) = (self.player1.as_mut(), self.player2.as_mut()) else {
            return None;
        };

        let [card1, card2] = self.deck.take(2)[..] else {
            return None;
        };
        self.current_round += 1;
        let round = RoundRecord::new(self.current_round, card1, card2);
        match round.outcome {
            RoundOutcome::Player1Wins => p1.increment_score(),
            RoundOutcome::Player2Wins => p2.increment_score(),
            RoundOutcome::Tie => (),
        }
        self.history.push(round);
        self.current_cards = Some((card1, card2));
        self.events.push_back(Event::Round(round));
        debug!(
            round = round.number,
            player1 = %card1,
            player2 = %card2,
            outcome = %round.outcome,
            "round played"
        );

        if self.current_round >= self.config.max_rounds || self.deck.len() < 2 {
            self.end_game();
        }
        Some(round)
    }

    fn end_game(&mut self) {
        self.active = false;
        self.phase = GamePhase::Results;
        let winner = self.winner().map(|p| p.id);
        self.events.push_back(Event::Finished(winner));
        info!(
            rounds = self.current_round,
            player1 = self.player1.as_ref().map_or(0, Player::score),
            player2 = self.player2.as_ref().map_or(0, Player::score),
            "match finished"
        );
    }

    /// Returns to setup with no players, no history and a fresh deck.
    pub fn reset_game(&mut self) {
        self.phase = GamePhase::Setup;
        self.player1 = None;
        self.player2 = None;
        self.current_round = 0;
        self.history.clear();
        self.deck = self.dealer.deal();
        self.active = false;
        self.current_cards = None;
        self.events.clear();
    }

    /// The player with the strictly higher score, or `None` on a tie.
    pub fn winner(&self) -> Option<&Player> {
        let p1 = self.player1.as_ref()?;
        let p2 = self.player2.as_ref()?;
        match p1.score().cmp(&p2.score()) {
            std::cmp::Ordering::Greater => Some(p1),
            std::cmp::Ordering::Less => Some(p2),
            std::cmp::Ordering::Equal => None,
        }
    }
}
