//! Fire-and-forget match notifications, such as sound effects.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::warn;

/// Receives lifecycle notifications from the game loop.
///
/// Implementations must not block, and must never fail: errors are logged and swallowed. The
/// game state is never affected by a notifier.
pub trait Notifier {
    /// A match started.
    fn game_start(&self);

    /// Cards were flipped for a new round.
    fn card_flip(&self);

    /// A round was resolved, from the human player's point of view.
    fn round_result(&self, player_won: bool, is_tie: bool);

    /// The match is over, from the human player's point of view.
    fn game_end(&self, player_won: bool);
}

/// A notifier that does nothing.
#[derive(Debug, Default)]
pub struct Silent;

impl Silent {
    pub fn into_notifier(self) -> Arc<dyn Notifier> {
        Arc::new(self)
    }
}

impl Notifier for Silent {
    fn game_start(&self) {}
    fn card_flip(&self) {}
    fn round_result(&self, _: bool, _: bool) {}
    fn game_end(&self, _: bool) {}
}

/// The sound effects a [`Bell`] can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// A neutral cue: the match starting, or a tied round.
    Flip,
    Win,
    Lose,
}

impl Sound {
    /// The sound for a resolved round.
    pub fn for_round(player_won: bool, is_tie: bool) -> Self {
        match (is_tie, player_won) {
            (true, _) => Sound::Flip,
            (false, true) => Sound::Win,
            (false, false) => Sound::Lose,
        }
    }

    /// The sound for the end of a match.
    pub fn for_game_end(player_won: bool) -> Self {
        if player_won {
            Sound::Win
        } else {
            Sound::Lose
        }
    }

    /// Each sound is a distinct number of bell rings.
    fn rings(self) -> usize {
        match self {
            Sound::Flip => 1,
            Sound::Win => 2,
            Sound::Lose => 3,
        }
    }
}

/// Sound effects via the terminal bell.
///
/// Card flips are silent, since every flip is followed at once by the round's result.
#[derive(Debug, Default)]
pub struct Bell {
    muted: AtomicBool,
}

impl Bell {
    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::Relaxed)
    }

    /// Toggles the mute switch, returning the new state.
    pub fn toggle_mute(&self) -> bool {
        !self.muted.fetch_xor(true, Ordering::Relaxed)
    }

    fn play(&self, sound: Sound) {
        if self.is_muted() {
            return;
        }
        let mut stderr = std::io::stderr();
        let result = stderr
            .write_all("\x07".repeat(sound.rings()).as_bytes())
            .and_then(|()| stderr.flush());
        if let Err(err) = result {
            warn!(%err, ?sound, "failed to ring terminal bell");
        }
    }
}

impl Notifier for Bell {
    fn game_start(&self) {
        self.play(Sound::Flip);
    }

    fn card_flip(&self) {}

    fn round_result(&self, player_won: bool, is_tie: bool) {
        self.play(Sound::for_round(player_won, is_tie));
    }

    fn game_end(&self, player_won: bool) {
        self.play(Sound::for_game_end(player_won));
    }
}

#[cfg(test)]
pub use recorder::{Notification, Recorder};
