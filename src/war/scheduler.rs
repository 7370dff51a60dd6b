//! The timed game loop.
//!
//! Rounds are played automatically at a fixed cadence, while a countdown shows the human how
//! long until the next flip. Time is supplied by the host through [`GameLoop::tick`], so the
//! loop never reads a wall clock and can be driven deterministically.
//!
//! Two repeating timers run while the loop is started: a display timer firing every time unit,
//! and a round timer firing every `cadence` units. When both fire at the same instant, the
//! display timer goes first.

use std::sync::Arc;
use std::time::Duration;

use tracing::trace;

use super::{GamePhase, GameState, Notifier, RoundOutcome, RoundRecord};


/// A repeating timer, advanced by a logical clock.
#[derive(Debug, Clone, Copy)]
struct Timer {
    period: Duration,
    elapsed: Duration,
}

impl Timer {
    fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    /// Time left until the timer fires.
    fn remaining(&self) -> Duration {
        self.period.saturating_sub(self.elapsed)
    }

    /// Advances the timer, returning true if it fired. Never steps past more than one period.
    fn advance(&mut self, step: Duration) -> bool {
        self.elapsed += step;
        if self.elapsed >= self.period {
            self.elapsed -= self.period;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Timers {
    display: Timer,
    round: Timer,
}

/// Drives a [`GameState`] on a timer.
pub struct GameLoop {
    game: GameState,
    notifier: Arc<dyn Notifier>,
    unit: Duration,
    timers: Option<Timers>,
    countdown: u32,
    counting_down: bool,
}

impl GameLoop {
    /// Wraps a game. The loop starts out stopped.
    pub fn new(game: GameState, notifier: Arc<dyn Notifier>) -> Self {
        let unit = game.config().unit();
        Self {
            game,
            notifier,
            unit,
            timers: None,
            countdown: 0,
            counting_down: false,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    /// Time units until the next flip, for display.
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn is_counting_down(&self) -> bool {
        self.counting_down
    }

    /// Returns true while the timers are running.
    pub fn is_running(&self) -> bool {
        self.timers.is_some()
    }

    fn cadence(&self) -> u32 {
        self.game.config().cadence
    }

    /// (Re)starts both timers, and plays a round right away.
    pub fn start(&mut self) {
        self.stop();
        let cadence = self.cadence();
        self.countdown = cadence;
        self.counting_down = true;
        self.timers = Some(Timers {
            display: Timer::new(self.unit),
            round: Timer::new(self.unit.saturating_mul(cadence)),
        });
        trace!(cadence, "timers started");
        self.trigger_round();
    }

    /// Cancels both timers. Safe to call at any time.
    pub fn stop(&mut self) {
        if self.timers.take().is_some() {
            trace!("timers stopped");
        }
        self.countdown = 0;
        self.counting_down = false;
    }

    /// Stops the timers without touching the match.
    pub fn pause(&mut self) {
        self.stop();
    }

    /// Restarts the timers, if the match can still progress.
    pub fn resume(&mut self) -> bool {
        if self.game.is_active() && self.game.current_round() < self.game.max_rounds() {
            self.start();
            true
        } else {
            false
        }
    }

    /// Advances the logical clock, firing timers in chronological order.
    pub fn tick(&mut self, elapsed: Duration) {
        let mut remaining = elapsed;
        while let Some(timers) = self.timers.as_mut() {
            if remaining.is_zero() {
                break;
            }
            let step = remaining
                .min(timers.display.remaining())
                .min(timers.round.remaining());
            remaining -= step;
            let display_due = timers.display.advance(step);
            let round_due = timers.round.advance(step);
            if display_due {
                self.update_countdown();
            }
            if round_due {
                self.trigger_round();
            }
        }
    }

    fn update_countdown(&mut self) {
        if self.countdown > 0 {
            self.countdown -= 1;
        } else {
            self.countdown = self.cadence();
        }
    }

    fn trigger_round(&mut self) {
        if !self.game.is_active() {
            self.stop();
            return;
        }
        let Some(round) = self.game.play_round() else {
            self.stop();
            return;
        };
        self.notify_round(&round);
        if self.game.phase() == GamePhase::Results {
            self.stop();
            self.notify_end();
        } else if self.game.current_round() >= self.game.max_rounds() {
            self.stop();
        } else {
            self.countdown = self.cadence();
        }
    }

    fn notify_round(&self, round: &RoundRecord) {
        self.notifier.card_flip();
        let player_won = round.outcome == RoundOutcome::Player1Wins;
        let is_tie = round.outcome == RoundOutcome::Tie;
        self.notifier.round_result(player_won, is_tie);
    }

    fn notify_end(&self) {
        let player1 = self.game.player1().map(|p| p.id);
        let winner = self.game.winner().map(|p| p.id);
        let player_won = winner.is_some() && winner == player1;
        self.notifier.game_end(player_won);
    }
}
