//! Widget listing played rounds

use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::war::{GameState, RoundOutcome, RoundRecord};

use super::side_color;

pub struct Feed {
    title: &'static str,
    lines: Vec<Line<'static>>,
}

impl Feed {
    pub fn new<'a, I>(game: &GameState, rounds: I) -> Self
    where
        I: IntoIterator<Item = &'a RoundRecord>,
    {
        let lines = rounds
            .into_iter()
            .map(|round| Self::round_line(game, round))
            .collect();
        Self { title: "", lines }
    }

    pub fn with_title(mut self, title: &'static str) -> Self {
        self.title = title;
        self
    }

    fn round_line(game: &GameState, round: &RoundRecord) -> Line<'static> {
        let winner = match round.outcome {
            RoundOutcome::Player1Wins => game.player1(),
            RoundOutcome::Player2Wins => game.player2(),
            RoundOutcome::Tie => None,
        };
        let result = match winner {
            Some(player) => Span::raw(player.name.clone()).fg(side_color(player.side)),
            None => Span::raw("Tie").yellow(),
        };
        Line::from(vec![
            Span::raw(format!("#{:<3}", round.number)),
            round.player1_card.to_span(),
            Span::raw(" vs "),
            round.player2_card.to_span(),
            Span::raw("  "),
            result,
        ])
    }
}

impl Widget for Feed {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Paragraph::new(self.lines)
            .block(Block::bordered().title(self.title))
            .render(area, buf)
    }
}
