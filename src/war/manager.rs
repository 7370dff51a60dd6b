//! The command surface offered to presentation layers.

use std::sync::Arc;
use std::time::Duration;

use delegate::delegate;
use serde::Serialize;
use tracing::debug;

use super::{
    Coordinate, Dealer, Event, GameConfig, GameLoop, GameSnapshot, GameState, Notifier, Player,
    Side, Stats,
};

#[cfg(test)]
mod test;

/// Everything a presentation layer needs to render the match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub game: GameSnapshot,
    pub stats: Stats,
    /// Time units until the next flip.
    pub countdown: u32,
    pub counting_down: bool,
    /// True while the match is active but the timers are stopped.
    pub paused: bool,
}

/// A single-player match against a scripted opponent.
///
/// The opponent is always present, and always fights for the side opposite the human player.
/// Commands that are not valid in the current phase are ignored, and report `false`.
pub struct GameManager {
    game_loop: GameLoop,
}

impl GameManager {
    /// Creates a new match in the setup phase.
    pub fn new<D: Dealer + 'static>(
        config: GameConfig,
        dealer: D,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let game = GameState::new(config, dealer);
        let mut manager = Self {
            game_loop: GameLoop::new(game, notifier),
        };
        manager.setup_opponent(Side::West);
        manager
    }

    delegate! {
        to self.game_loop {
            pub fn game(&self) -> &GameState;
            pub fn countdown(&self) -> u32;
            pub fn is_counting_down(&self) -> bool;
            pub fn is_running(&self) -> bool;
            pub fn tick(&mut self, elapsed: Duration);
        }
    }

    /// Pops the oldest event from the match.
    pub fn pop_event(&mut self) -> Option<Event> {
        self.game_loop.game_mut().pop_event()
    }

    /// Returns true if the match is active, but the timers have been paused.
    pub fn is_paused(&self) -> bool {
        self.game().is_active() && !self.is_running()
    }

    fn setup_opponent(&mut self, side: Side) {
        let game = self.game_loop.game_mut();
        let opponent = Player::new(&game.config().opponent_name, side);
        game.assign_player2(opponent);
    }

    /// Moves the match on to side selection.
    pub fn begin_location_setup(&mut self) -> bool {
        self.game_loop.game_mut().begin_location_setup()
    }

    /// Assigns the human player, and moves the opponent to the other side.
    pub fn setup_player(&mut self, name: &str, side: Side, location: Option<Coordinate>) -> bool {
        let name = name.trim();
        if name.is_empty() {
            debug!("ignoring player without a name");
            return false;
        }
        let player = Player::new(name, side).with_location(location);
        if !self.game_loop.game_mut().assign_player1(player) {
            return false;
        }
        self.setup_opponent(side.opposite());
        true
    }

    /// Starts the match and its timers. The first round is played right away.
    pub fn start_game(&mut self) -> bool {
        if !self.game_loop.game_mut().start_game() {
            return false;
        }
        self.game_loop.notifier().game_start();
        self.game_loop.start();
        true
    }

    /// Stops the timers. The match keeps its progress.
    pub fn pause_game(&mut self) {
        self.game_loop.pause();
    }

    /// Restarts the timers if the match can still progress.
    pub fn resume_game(&mut self) -> bool {
        self.game_loop.resume()
    }

    /// Abandons the match, and returns to setup with a fresh opponent.
    pub fn reset_game(&mut self) {
        self.game_loop.stop();
        self.game_loop.game_mut().reset_game();
        self.setup_opponent(Side::West);
    }

    /// Captures the current state.
    pub fn snapshot(&self) -> Snapshot {
        let game = self.game();
        Snapshot {
            game: game.snapshot(),
            stats: game.stats(),
            countdown: self.countdown(),
            counting_down: self.is_counting_down(),
            paused: self.is_paused(),
        }
    }

    /// Returns true if the human player won the finished match.
    pub fn player_won(&self) -> bool {
        let game = self.game();
        match (game.winner(), game.player1()) {
            (Some(winner), Some(player)) => winner.id == player.id,
            _ => false,
        }
    }
}
