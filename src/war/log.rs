//! A serializable record of a match.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{GameConfig, GameState, LogError, Player, RoundRecord, Stats};

/// Players, configuration and every round played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchLog {
    pub config: GameConfig,
    pub player1: Player,
    pub player2: Player,
    pub rounds: Vec<RoundRecord>,
}

impl TryFrom<&GameState> for MatchLog {
    type Error = LogError;

    fn try_from(game: &GameState) -> Result<Self, Self::Error> {
        let (Some(player1), Some(player2)) = (game.player1(), game.player2()) else {
            return Err(LogError::NoPlayers);
        };
        Ok(Self {
            config: game.config().clone(),
            player1: player1.clone(),
            player2: player2.clone(),
            rounds: game.history().to_vec(),
        })
    }
}

impl MatchLog {
    pub fn stats(&self) -> Stats {
        self.rounds.iter().collect()
    }

    /// The player with the strictly higher final score, or `None` on a tie.
    pub fn winner(&self) -> Option<&Player> {
        match self.player1.score().cmp(&self.player2.score()) {
            std::cmp::Ordering::Greater => Some(&self.player1),
            std::cmp::Ordering::Less => Some(&self.player2),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), LogError> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LogError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_json_file(&self, path: &Path) -> Result<(), LogError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn from_json_file(path: &Path) -> Result<Self, LogError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }
}
