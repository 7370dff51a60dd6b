//! East against West: a timed game of war.
//!
//! Each round, both players draw the top card of a single shared deck, and the stronger card
//! scores a point. Ties go to the house. The human player's side is chosen by their latitude,
//! and a scripted opponent fights for the other side. Rounds are flipped automatically on a
//! timer until the round limit is reached.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

mod config;
mod console;
mod dealer;
mod error;
mod game;
mod location;
mod log;
mod manager;
mod notify;
mod player;
mod round;
mod scheduler;
mod side;
#[cfg(feature = "tui")]
mod tui;
pub use self::config::GameConfig;
use self::console::Console;
use self::dealer::{Dealer, Shuffler};
use self::error::{ConfigError, LocationError, LogError};
use self::game::{Event, GamePhase, GameSnapshot, GameState};
pub use self::location::{locator, Locator};
use self::log::MatchLog;
use self::manager::GameManager;
use self::notify::{Bell, Notifier, Silent};
use self::player::{Player, PlayerId};
use self::round::{RoundOutcome, RoundRecord, Stats};
use self::scheduler::GameLoop;
pub use self::side::Coordinate;
use self::side::Side;
pub use crate::french::{Card, Deck};

/// Everything needed to launch a match from the command line.
pub struct Launch {
    pub config: GameConfig,
    /// The human player's name, if known up front.
    pub name: Option<String>,
    pub locator: Box<dyn Locator>,
    /// Seed for reproducible shuffles.
    pub seed: Option<u64>,
    /// Where to write the match log once the match is over.
    pub save: Option<PathBuf>,
    /// Start with sound effects off.
    pub mute: bool,
}

impl Launch {
    fn manager(&self, notifier: Arc<dyn Notifier>) -> GameManager {
        let shuffler = match self.seed {
            Some(seed) => Shuffler::seeded(seed),
            None => Shuffler::from_entropy(),
        };
        GameManager::new(self.config.clone(), shuffler, notifier)
    }
}

/// Writes the match log, if a path was requested.
fn save_log(game: &GameState, path: Option<&PathBuf>) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let log = MatchLog::try_from(game)?;
    log.to_json_file(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Runs the match with a simple command-line interface.
pub fn cli_main(launch: Launch) -> anyhow::Result<()> {
    let notifier: Arc<dyn Notifier> = if launch.mute {
        Silent.into_notifier()
    } else {
        Arc::new(Bell::default())
    };
    let mut manager = launch.manager(notifier);
    let console = Console::default();
    console.play(&mut manager, &launch)?;
    save_log(manager.game(), launch.save.as_ref())
}

/// Prints a match log saved by an earlier run.
pub fn replay_main(path: &Path) -> anyhow::Result<()> {
    let log = MatchLog::from_json_file(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Console::default().replay(&log);
    Ok(())
}

/// Runs the match in a rich terminal UI.
#[cfg(feature = "tui")]
pub fn tui_main(launch: Launch) -> anyhow::Result<()> {
    let bell = Arc::new(Bell::default());
    if launch.mute {
        bell.toggle_mute();
    }
    let manager = launch.manager(bell.clone());
    let app = tui::Tui::new(manager, bell, &launch);
    let terminal = tui::tui_init()?;
    let result = app.run(terminal);
    tui::tui_restore()?;
    result
}
