//! Widget for the battle arena

use ratatui::widgets::{Block, Widget};
use ratatui::{prelude::*, widgets::Paragraph};

use crate::war::{Card, GameManager, Player, RoundOutcome};

use super::side_color;

pub struct Arena {
    round: u32,
    max_rounds: u32,
    countdown: Option<u32>,
    paused: bool,
    players: [Option<Player>; 2],
    cards: Option<(Card, Card)>,
    outcome: Option<RoundOutcome>,
}

impl Arena {
    pub fn new(manager: &GameManager) -> Self {
        let game = manager.game();
        Self {
            round: game.current_round(),
            max_rounds: game.max_rounds(),
            countdown: manager.is_counting_down().then(|| manager.countdown()),
            paused: manager.is_paused(),
            players: [game.player1().cloned(), game.player2().cloned()],
            cards: game.current_cards(),
            outcome: game.history().last().map(|r| r.outcome),
        }
    }

    fn name_span(&self, index: usize) -> Span<'_> {
        match &self.players[index] {
            Some(player) => Span::raw(player.name.as_str()).fg(side_color(player.side)),
            None => Span::raw("?"),
        }
    }

    fn card_span(card: Option<Card>, won: bool) -> Span<'static> {
        let span = card.map(Card::to_span).unwrap_or(Span::raw("??"));
        if won {
            span.bold().underlined()
        } else {
            span
        }
    }

    fn status_line(&self) -> Line<'_> {
        match (self.paused, self.countdown) {
            (true, _) => Line::from("Paused").yellow(),
            (false, Some(secs)) => Line::from(format!("Next flip: {secs}")),
            (false, None) => Line::default(),
        }
    }

    fn to_lines(&self) -> Vec<Line<'_>> {
        let first = self.cards.map(|(c, _)| c);
        let second = self.cards.map(|(_, c)| c);
        vec![
            Line::from(format!("Round {}/{}", self.round, self.max_rounds)).centered(),
            self.status_line().centered(),
            Line::default(),
            Line::from(vec![
                self.name_span(0),
                Span::raw("  "),
                Self::card_span(first, self.outcome == Some(RoundOutcome::Player1Wins)),
                Span::raw("  vs  "),
                Self::card_span(second, self.outcome == Some(RoundOutcome::Player2Wins)),
                Span::raw("  "),
                self.name_span(1),
            ])
            .centered(),
        ]
    }
}

impl Widget for Arena {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let lines = self.to_lines();
        Paragraph::new(lines)
            .block(Block::bordered().title("Battle"))
            .render(area, buf)
    }
}
