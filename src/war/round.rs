//! Round resolution.

use std::cmp::Ordering;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::Card;

/// The outcome of a single battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    Player1Wins,
    Player2Wins,
    /// Ties go to the house: nobody scores.
    Tie,
}
impl Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RoundOutcome::Player1Wins => "player 1 wins",
            RoundOutcome::Player2Wins => "player 2 wins",
            RoundOutcome::Tie => "tie",
        })
    }
}

/// Compares two cards by strength. The higher card wins; suits never matter.
pub fn resolve(a: Card, b: Card) -> RoundOutcome {
    match a.strength().cmp(&b.strength()) {
        Ordering::Greater => RoundOutcome::Player1Wins,
        Ordering::Less => RoundOutcome::Player2Wins,
        Ordering::Equal => RoundOutcome::Tie,
    }
}

/// A round that has been played. Records are never modified once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// One-based round number.
    pub number: u32,
    pub player1_card: Card,
    pub player2_card: Card,
    pub outcome: RoundOutcome,
}

impl RoundRecord {
    /// Plays the two cards against each other.
    pub fn new(number: u32, player1_card: Card, player2_card: Card) -> Self {
        Self {
            number,
            player1_card,
            player2_card,
            outcome: resolve(player1_card, player2_card),
        }
    }
}

/// Aggregate figures over a round history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub rounds: u32,
    pub player1_wins: u32,
    pub player2_wins: u32,
    pub ties: u32,
}

impl<'a> FromIterator<&'a RoundRecord> for Stats {
    fn from_iter<T: IntoIterator<Item = &'a RoundRecord>>(iter: T) -> Self {
        iter.into_iter().fold(Stats::default(), |mut stats, round| {
            stats.rounds += 1;
            match round.outcome {
                RoundOutcome::Player1Wins => stats.player1_wins += 1,
                RoundOutcome::Player2Wins => stats.player2_wins += 1,
                RoundOutcome::Tie => stats.ties += 1,
            }
            stats
        })
    }
}
