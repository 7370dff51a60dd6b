//! Rich terminal UI.

use std::io::{self, stdout, Stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyCode, KeyEventKind};
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::crossterm::{event, ExecutableCommand};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

mod arena;
mod feed;
mod scoreboard;
use self::arena::Arena;
use self::feed::Feed;
use self::scoreboard::Scoreboard;

use super::{
    save_log, Bell, Coordinate, Event, GameManager, GamePhase, Launch, RoundOutcome, Side,
};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Where the log is saved when no path was given on the command line.
const DEFAULT_SAVE_PATH: &str = "war.json";

/// Rounds shown in the in-game feed.
const FEED_LEN: usize = 5;

/// Initializes the terminal for the TUI.
pub fn tui_init() -> io::Result<Term> {
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;
    Ok(terminal)
}

/// Restores the original terminal mode.
pub fn tui_restore() -> io::Result<()> {
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Converts a console colour into its terminal UI equivalent.
fn tui_color(colour: ansi_term::Colour) -> Color {
    use ansi_term::Colour as Ansi;
    match colour {
        Ansi::Black => Color::Black,
        Ansi::Red => Color::Red,
        Ansi::Green => Color::Green,
        Ansi::Yellow => Color::Yellow,
        Ansi::Blue => Color::Blue,
        Ansi::Purple => Color::Magenta,
        Ansi::Cyan => Color::Cyan,
        Ansi::White => Color::White,
        Ansi::Fixed(n) => Color::Indexed(n),
        Ansi::RGB(r, g, b) => Color::Rgb(r, g, b),
    }
}

/// The display colour for a side.
fn side_color(side: Side) -> Color {
    tui_color(side.color())
}

/// Terminal UI state.
pub struct Tui {
    /// The match being played.
    manager: GameManager,
    /// Sound effects, kept for the mute switch.
    bell: Arc<Bell>,
    /// The human player's name, as typed so far.
    name: String,
    /// The human player's side, once known.
    side: Option<Side>,
    /// The human player's position, if the locator found one.
    location: Option<Coordinate>,
    /// Why the locator failed, if it did.
    location_error: Option<String>,
    /// Where to write the match log automatically when the match is over.
    save: Option<PathBuf>,
    /// The most recent match event.
    last_event: Option<Event>,
    /// An error message to display to the user.
    error: Option<String>,
    /// A debug message to display to the user.
    debug: Option<String>,
    /// Set to true to exit the main loop.
    exit: bool,
}

impl Tui {
    pub fn new(mut manager: GameManager, bell: Arc<Bell>, launch: &Launch) -> Self {
        manager.begin_location_setup();
        let (location, location_error) = match launch.locator.locate() {
            Ok(coord) => (Some(coord), None),
            Err(err) => (None, Some(err.to_string())),
        };
        Self {
            manager,
            bell,
            name: launch.name.clone().unwrap_or_default(),
            side: location.map(Coordinate::side),
            location,
            location_error,
            save: launch.save.clone(),
            last_event: None,
            error: None,
            debug: None,
            exit: false,
        }
    }

    /// Runs the terminal UI until the user exits.
    ///
    /// Key presses and timer ticks are handled on this thread only, so match state is never
    /// touched concurrently.
    pub fn run(mut self, mut terminal: Term) -> anyhow::Result<()> {
        let redraw = self.manager.game().config().unit() / 4;
        let mut last_tick = Instant::now();
        while !self.exit {
            terminal.draw(|frame| self.render_frame(frame))?;
            if event::poll(redraw.max(Duration::from_millis(10)))? {
                let was_running = self.manager.is_running();
                self.handle_events()?;
                if !was_running && self.manager.is_running() {
                    last_tick = Instant::now();
                }
            }
            let now = Instant::now();
            self.manager.tick(now - last_tick);
            last_tick = now;
            self.drain_events();
        }
        Ok(())
    }

    /// Drains match events, saving the log when the match is over.
    fn drain_events(&mut self) {
        while let Some(event) = self.manager.pop_event() {
            if matches!(event, Event::Finished(_)) && self.save.is_some() {
                self.save_match();
            }
            self.last_event = Some(event);
        }
    }

    // Top-level frame renderer.
    fn render_frame(&self, frame: &mut Frame) {
        let [main, message, help] = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(10),   // phase screen
                Constraint::Length(3), // messages
                Constraint::Length(1), // key help
            ],
        )
        .areas(frame.area());
        match self.manager.game().phase() {
            GamePhase::Setup | GamePhase::LocationSetup => self.render_setup(frame, main),
            GamePhase::Playing => self.render_playing(frame, main),
            GamePhase::Results => self.render_results(frame, main),
        }
        let mut lines: Vec<Line> = self.event_line().into_iter().collect();
        if let Some(error) = self.error.clone() {
            lines.push(Line::from(error).red().bold());
        }
        if let Some(debug) = self.debug.clone() {
            lines.push(Line::from(debug).blue().bold());
        }
        frame.render_widget(Paragraph::new(lines), message);
        frame.render_widget(Line::from(self.help()).dark_gray(), help);
    }

    /// Describes the most recent match event, from the human player's point of view.
    fn event_line(&self) -> Option<Line<'static>> {
        let line = match self.last_event.as_ref()? {
            Event::Started => Line::from("Battle begins!"),
            Event::Round(round) => {
                let text = format!("Round {}: ", round.number);
                match round.outcome {
                    RoundOutcome::Player1Wins => Line::from(text + "you take it").green(),
                    RoundOutcome::Player2Wins => Line::from(text + "your opponent takes it").red(),
                    RoundOutcome::Tie => Line::from(text + "a tie").yellow(),
                }
            }
            Event::Finished(_) => Line::from("Battle complete!").bold(),
        };
        Some(line)
    }

    fn help(&self) -> &'static str {
        match self.manager.game().phase() {
            GamePhase::Setup | GamePhase::LocationSetup => {
                "type name · ←/→ side · enter start · esc quit"
            }
            GamePhase::Playing => "p pause/resume · r reset · m mute · s save · q quit",
            GamePhase::Results => "enter play again · s save · q quit",
        }
    }

    fn render_setup(&self, frame: &mut Frame, area: Rect) {
        let side = match self.side {
            Some(side) => Span::raw(side.to_string()).fg(side_color(side)),
            None => Span::raw("choose with ←/→").italic(),
        };
        let location = match (self.location, &self.location_error) {
            (Some(coord), _) => {
                Line::from(format!("Location: {:.4}, {:.4}", coord.lat, coord.lng))
            }
            (None, Some(err)) => Line::from(format!("Location unavailable: {err}")).yellow(),
            (None, None) => Line::default(),
        };
        let lines = vec![
            Span::raw("East vs West").bold().into_centered_line(),
            Line::default(),
            Line::from(vec![Span::raw("Name: "), Span::raw(self.name.as_str()), "_".into()]),
            location,
            Line::from(vec![Span::raw("Side: "), side]),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(Block::bordered().title("Setup")),
            area,
        );
    }

    fn render_playing(&self, frame: &mut Frame, area: Rect) {
        let [arena_score, feed] = Layout::new(
            Direction::Vertical,
            [Constraint::Length(7), Constraint::Min(FEED_LEN as u16 + 2)],
        )
        .areas(area);
        let [arena, score] = Layout::new(
            Direction::Horizontal,
            [Constraint::Min(30), Constraint::Length(36)],
        )
        .areas(arena_score);
        let game = self.manager.game();
        frame.render_widget(Arena::new(&self.manager), arena);
        frame.render_widget(Scoreboard::new(game), score);
        frame.render_widget(
            Feed::new(game, game.recent_rounds(FEED_LEN)).with_title("Recent rounds"),
            feed,
        );
    }

    fn render_results(&self, frame: &mut Frame, area: Rect) {
        let [banner_score, feed] = Layout::new(
            Direction::Vertical,
            [Constraint::Length(7), Constraint::Min(4)],
        )
        .areas(area);
        let [banner, score] = Layout::new(
            Direction::Horizontal,
            [Constraint::Min(30), Constraint::Length(36)],
        )
        .areas(banner_score);
        let game = self.manager.game();
        let headline = match game.winner() {
            Some(winner) if self.manager.player_won() => {
                Line::from(format!("Victory! {} wins.", winner.name)).green().bold()
            }
            Some(winner) => Line::from(format!("Defeat. {} wins.", winner.name)).red().bold(),
            None => Line::from("It's a tie!").yellow().bold(),
        };
        let stats = game.stats();
        let lines = vec![
            headline.centered(),
            Line::default(),
            Line::from(format!("Total rounds: {}", stats.rounds)),
            Line::from(format!(
                "Round wins: {} / {}",
                stats.player1_wins, stats.player2_wins
            )),
            Line::from(format!("Ties: {}", stats.ties)),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(Block::bordered().title("Battle complete")),
            banner,
        );
        frame.render_widget(Scoreboard::new(game), score);
        frame.render_widget(
            Feed::new(game, game.history().iter()).with_title("Round details"),
            feed,
        );
    }

    /// Top-level event handler.
    fn handle_events(&mut self) -> io::Result<()> {
        let event::Event::Key(key) = event::read()? else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Output messages only persist until the next key press.
        self.error = None;
        self.debug = None;

        match (self.manager.game().phase(), key.code) {
            // Setup: name entry and side selection
            (GamePhase::Setup | GamePhase::LocationSetup, KeyCode::Esc) => self.exit = true,
            (GamePhase::Setup | GamePhase::LocationSetup, KeyCode::Enter) => self.start(),
            (GamePhase::Setup | GamePhase::LocationSetup, KeyCode::Backspace) => {
                self.name.pop();
            }
            (GamePhase::Setup | GamePhase::LocationSetup, KeyCode::Left | KeyCode::Right) => {
                self.toggle_side();
            }
            (GamePhase::Setup | GamePhase::LocationSetup, KeyCode::Char(c)) => self.name.push(c),

            // Quit
            (_, KeyCode::Char('q') | KeyCode::Esc) => self.exit = true,

            // Playing
            (GamePhase::Playing, KeyCode::Char('p' | ' ')) => self.toggle_pause(),
            (GamePhase::Playing, KeyCode::Char('r')) => self.reset(),
            (GamePhase::Playing, KeyCode::Char('m')) => self.toggle_mute(),

            // Results
            (GamePhase::Results, KeyCode::Enter | KeyCode::Char('n')) => self.reset(),

            // Save the match log
            (GamePhase::Playing | GamePhase::Results, KeyCode::Char('s')) => self.save_match(),

            _ => (),
        }
        Ok(())
    }

    /// Chooses a side by hand, when no location is available.
    fn toggle_side(&mut self) {
        if self.location.is_some() {
            self.error = Some("Side is fixed by your location".into());
            return;
        }
        self.side = Some(self.side.map_or(Side::East, Side::opposite));
    }

    /// Assigns the player and starts the match.
    fn start(&mut self) {
        let Some(side) = self.side else {
            self.error = Some("Choose a side first".into());
            return;
        };
        if !self.manager.setup_player(&self.name, side, self.location) {
            self.error = Some("Enter your name first".into());
            return;
        }
        self.last_event = None;
        self.manager.start_game();
    }

    fn toggle_pause(&mut self) {
        if self.manager.is_running() {
            self.manager.pause_game();
            self.debug = Some("Paused".into());
        } else if !self.manager.resume_game() {
            self.error = Some("Nothing to resume".into());
        }
    }

    /// Returns to setup. The player's name and side are kept for the next match.
    fn reset(&mut self) {
        self.manager.reset_game();
        self.manager.begin_location_setup();
        self.last_event = None;
    }

    fn toggle_mute(&mut self) {
        let muted = self.bell.toggle_mute();
        self.debug = Some(format!("Sound {}", if muted { "muted" } else { "on" }));
    }

    /// Saves the match log to a file.
    fn save_match(&mut self) {
        let path = self
            .save
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_PATH));
        match save_log(self.manager.game(), Some(&path)) {
            Ok(()) => self.debug = Some(format!("Wrote to {}", path.display())),
            Err(err) => self.error = Some(format!("{err:#}")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::war::{locator, GameConfig};

    fn tui() -> Tui {
        let launch = Launch {
            config: GameConfig::default(),
            name: Some("Ada".into()),
            locator: locator(Some(Coordinate::new(35.0, 32.8))),
            seed: Some(1),
            save: None,
            mute: true,
        };
        let bell = Arc::new(Bell::default());
        bell.toggle_mute();
        let manager = launch.manager(bell.clone());
        Tui::new(manager, bell, &launch)
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn side_colors_follow_the_console() {
        assert_eq!(side_color(Side::East), Color::Blue);
        assert_eq!(side_color(Side::West), Color::Red);
    }

    #[test]
    fn last_event_is_shown() {
        let mut tui = tui();
        assert_eq!(tui.side, Some(Side::East));
        assert!(tui.event_line().is_none());

        tui.start();
        tui.drain_events();
        let line = tui.event_line().unwrap();
        assert!(text(&line).starts_with("Round 1: "));

        tui.reset();
        assert!(tui.event_line().is_none());
    }
}
