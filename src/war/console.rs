//! Simple console front end.

use std::fmt::Display;
use std::io::Write;
use std::str::FromStr;

use ansi_term::{ANSIString, ANSIStrings};
use anyhow::bail;

use super::{
    Event, GameManager, GamePhase, Launch, MatchLog, Player, RoundOutcome, RoundRecord, Side,
    Stats,
};

pub struct Console {
    color: bool,
}
impl Default for Console {
    fn default() -> Self {
        Self::new(true)
    }
}

fn prompt<T: FromStr, S: Display>(prompt: S) -> anyhow::Result<T> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        let mut buffer = String::new();
        print!("{prompt}");
        stdout.flush()?;
        if stdin.read_line(&mut buffer)? == 0 {
            bail!("input closed");
        }
        let trimmed = buffer.trim();
        if !trimmed.is_empty() {
            if let Ok(obj) = T::from_str(trimmed) {
                return Ok(obj);
            }
            println!("Invalid input, try again");
        }
    }
}

impl Console {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn format(&self, s: &ANSIStrings) -> String {
        if self.color {
            s.to_string()
        } else {
            ansi_term::unstyle(s)
        }
    }

    fn format_player(&self, player: Option<&Player>) -> String {
        let Some(player) = player else {
            return String::from("?");
        };
        let name: ANSIString = player.side.color().paint(player.name.clone());
        self.format(&ANSIStrings(&[name, format!(" ({})", player.side).into()]))
    }

    fn format_round(
        &self,
        players: [&Player; 2],
        max_rounds: u32,
        round: &RoundRecord,
    ) -> String {
        let winner = match round.outcome {
            RoundOutcome::Player1Wins => self.format_player(Some(players[0])),
            RoundOutcome::Player2Wins => self.format_player(Some(players[1])),
            RoundOutcome::Tie => String::from("nobody, it's a tie"),
        };
        let cards = self.format(&ANSIStrings(&[
            round.player1_card.to_ansi_string(),
            " vs ".into(),
            round.player2_card.to_ansi_string(),
        ]));
        format!("Round {}/{max_rounds}: {cards} -> {winner}", round.number)
    }

    /// Plays a full match: setup, the timed rounds, and the results.
    pub fn play(&self, manager: &mut GameManager, launch: &Launch) -> anyhow::Result<()> {
        let name = match &launch.name {
            Some(name) => name.clone(),
            None => prompt::<String, _>("Name? ")?,
        };
        manager.begin_location_setup();
        let location = launch.locator.locate();
        let side = match &location {
            Ok(coord) => {
                let side = coord.side();
                println!(
                    "Your location ({:.4}, {:.4}) puts you in the {side}",
                    coord.lat, coord.lng
                );
                side
            }
            Err(err) => {
                println!("Location unavailable: {err}");
                prompt::<Side, _>("Side (east/west)? ")?
            }
        };
        if !manager.setup_player(&name, side, location.ok()) {
            bail!("invalid player name {name:?}");
        }
        manager.start_game();
        println!(
            "{} vs {}",
            self.format_player(manager.game().player1()),
            self.format_player(manager.game().player2())
        );

        let unit = manager.game().config().unit();
        loop {
            while let Some(event) = manager.pop_event() {
                self.notify(manager, &event);
            }
            if manager.game().phase() != GamePhase::Playing || !manager.is_running() {
                break;
            }
            std::thread::sleep(unit);
            manager.tick(unit);
        }
        self.results(manager);
        Ok(())
    }

    fn notify(&self, manager: &GameManager, event: &Event) {
        let game = manager.game();
        match event {
            Event::Started => println!("Battle begins!"),
            Event::Round(round) => {
                if let (Some(p1), Some(p2)) = (game.player1(), game.player2()) {
                    println!("{}", self.format_round([p1, p2], game.max_rounds(), round));
                }
            }
            Event::Finished(_) => println!("Battle complete!"),
        }
    }

    fn results(&self, manager: &GameManager) {
        let game = manager.game();
        if let (Some(p1), Some(p2)) = (game.player1(), game.player2()) {
            self.summary([p1, p2], &game.stats(), game.winner());
        }
    }

    /// Prints the final scores. The first player is the human.
    fn summary(&self, players: [&Player; 2], stats: &Stats, winner: Option<&Player>) {
        for player in players {
            println!(
                "{}: {} points",
                self.format_player(Some(player)),
                player.score()
            );
        }
        println!("Rounds: {}, ties: {}", stats.rounds, stats.ties);
        match winner {
            Some(winner) if winner.id == players[0].id => {
                println!("Victory! {} wins the battle.", winner.name)
            }
            Some(winner) => println!("Defeat. {} wins the battle.", winner.name),
            None => println!("It's a tie!"),
        }
    }

    /// Prints a saved match, round by round.
    pub fn replay(&self, log: &MatchLog) {
        let players = [&log.player1, &log.player2];
        println!(
            "{} vs {}",
            self.format_player(Some(players[0])),
            self.format_player(Some(players[1]))
        );
        for round in &log.rounds {
            println!("{}", self.format_round(players, log.config.max_rounds, round));
        }
        self.summary(players, &log.stats(), log.winner());
    }
}
