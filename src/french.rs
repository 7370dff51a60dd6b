//! The standard French-suited deck.

use std::fmt::Display;
use std::str::FromStr;

use ansi_term::ANSIString;
use itertools::iproduct;
use serde::{Deserialize, Serialize};

use crate::deck;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Card suit. Suits play no part in ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Heart,
    Diamond,
    Club,
    Spade,
}
impl Suit {
    /// All suits.
    pub fn all_suits() -> &'static [Suit] {
        static SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];
        &SUITS
    }

    pub fn color(self) -> Color {
        match self {
            Suit::Diamond | Suit::Heart => Color::Red,
            Suit::Club | Suit::Spade => Color::Black,
        }
    }
}
impl Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sym = match self {
            Suit::Club => "♣",
            Suit::Diamond => "♦",
            Suit::Heart => "♥",
            Suit::Spade => "♠",
        };
        f.write_str(sym)
    }
}
impl TryFrom<char> for Suit {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            'h' | 'H' | '♥' => Suit::Heart,
            'd' | 'D' | '♦' => Suit::Diamond,
            'c' | 'C' | '♣' => Suit::Club,
            's' | 'S' | '♠' => Suit::Spade,
            _ => return Err(()),
        })
    }
}

/// Card rank, from two up to ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}
impl Rank {
    /// All ranks, lowest first.
    pub fn all_ranks() -> &'static [Rank] {
        static RANKS: [Rank; 13] = [
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ];
        &RANKS
    }

    /// The strength of the rank in a battle. Aces are high.
    pub fn strength(self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
        }
    }
}
impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sym = match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        };
        f.write_str(sym)
    }
}
impl FromStr for Rank {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "t" | "T" => Rank::Ten,
            "j" | "J" => Rank::Jack,
            "q" | "Q" => Rank::Queen,
            "k" | "K" => Rank::King,
            "a" | "A" => Rank::Ace,
            _ => return Err(()),
        })
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Card rank.
    pub rank: Rank,
    /// Card suit.
    pub suit: Suit,
}
impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
impl FromStr for Card {
    type Err = ();

    /// Parses a rank followed by a single suit character, e.g. `"as"`, `"10h"`, `"Q♦"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit = s.chars().last().ok_or(())?;
        let rank = &s[..s.len() - suit.len_utf8()];
        Ok(Card {
            rank: rank.parse()?,
            suit: Suit::try_from(suit)?,
        })
    }
}
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Card::from_str(&s).map_err(|()| serde::de::Error::custom(format!("invalid card {s:?}")))
    }
}
impl Card {
    /// Creates a new [`Card`].
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// The strength of the card, derived from its rank.
    pub fn strength(self) -> u8 {
        self.rank.strength()
    }

    /// Returns a string representation of the card, decorated with ANSI color codes.
    pub fn to_ansi_string(self) -> ANSIString<'static> {
        use ansi_term::Colour::Red;
        match self.suit.color() {
            Color::Black => self.to_string().into(),
            Color::Red => Red.paint(self.to_string()),
        }
    }

    /// Returns a [`ratatui::text::Span`] for the card.
    #[cfg(feature = "tui")]
    pub fn to_span(self) -> ratatui::text::Span<'static> {
        use ratatui::style::Color as TuiColor;
        use ratatui::text::Span;
        match self.suit.color() {
            Color::Black => Span::raw(self.to_string()),
            Color::Red => Span::raw(self.to_string()).style(TuiColor::Red),
        }
    }
}

/// A 52-card French deck.
pub type Deck = deck::Deck<Card>;

impl deck::Deck<Card> {
    /// Every suit and rank combination, in suit order, unshuffled.
    pub fn standard() -> Self {
        iproduct!(Suit::all_suits(), Rank::all_ranks())
            .map(|(&suit, &rank)| Card { rank, suit })
            .collect()
    }
}
