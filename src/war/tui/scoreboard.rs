use ratatui::layout::Constraint;
use ratatui::style::Stylize;
use ratatui::text::Span;
use ratatui::widgets::{Block, Row, Table, Widget};

use crate::war::{GameState, Player};

use super::side_color;

pub struct Scoreboard {
    player1: Option<Player>,
    player2: Option<Player>,
}

impl Scoreboard {
    pub fn new(game: &GameState) -> Self {
        Self {
            player1: game.player1().cloned(),
            player2: game.player2().cloned(),
        }
    }
}

fn name(player: &Option<Player>) -> Span<'static> {
    match player {
        Some(p) => Span::raw(p.name.clone()).fg(side_color(p.side)),
        None => Span::raw("?"),
    }
}

fn side(player: &Option<Player>) -> String {
    player.as_ref().map(|p| p.side.to_string()).unwrap_or_default()
}

fn score(player: &Option<Player>) -> String {
    player.as_ref().map(|p| p.score().to_string()).unwrap_or_default()
}

impl Widget for Scoreboard {
    fn render(self, area: ratatui::prelude::Rect, buf: &mut ratatui::prelude::Buffer)
    where
        Self: Sized,
    {
        Table::default()
            .widths([
                Constraint::Length(6),
                Constraint::Fill(1),
                Constraint::Fill(1),
            ])
            .header(Row::new([
                Span::raw(""),
                name(&self.player1),
                name(&self.player2),
            ]))
            .rows([
                Row::new([
                    String::from("Side"),
                    side(&self.player1),
                    side(&self.player2),
                ]),
                Row::new([
                    String::from("Score"),
                    score(&self.player1),
                    score(&self.player2),
                ]),
            ])
            .block(Block::bordered().title("Score"))
            .render(area, buf)
    }
}
