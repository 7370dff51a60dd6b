//! Match participants.

use std::fmt::Display;

use rand::distributions::{Distribution, Standard};
use serde::{Deserialize, Serialize};

use super::{Coordinate, Side};

/// An opaque identifier for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u64);
impl Distribution<PlayerId> for Standard {
    fn sample<R: rand::prelude::Rng + ?Sized>(&self, rng: &mut R) -> PlayerId {
        PlayerId(rng.gen())
    }
}
impl Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// A score-bearing participant, bound to a side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub side: Side,
    score: u32,
    /// Where the player was when they joined, if known.
    pub location: Option<Coordinate>,
}

impl Player {
    /// Creates a new [`Player`] with a zero score.
    pub fn new(name: &str, side: Side) -> Self {
        Self {
            id: rand::random(),
            name: name.to_string(),
            side,
            score: 0,
            location: None,
        }
    }

    /// Sets the player's origin location.
    pub fn with_location(mut self, location: Option<Coordinate>) -> Self {
        self.location = location;
        self
    }

    /// The number of rounds won.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub(super) fn increment_score(&mut self) {
        self.score += 1;
    }

    pub(super) fn reset_score(&mut self) {
        self.score = 0;
    }
}
