//! A deck of cards.

use std::collections::VecDeque;
use std::iter::FromIterator;

use rand::seq::SliceRandom;
use rand::Rng;

/// A deck of cards. Cards are drawn from the top (front) of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck<C> {
    cards: VecDeque<C>,
}

impl<C> Default for Deck<C> {
    fn default() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }
}

impl<C> FromIterator<C> for Deck<C> {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        let cards = iter.into_iter().collect();
        Self { cards }
    }
}

impl<C> Deck<C> {
    /// The number of cards remaining in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Shuffles the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes up to `n` cards from the top of the deck, in draw order.
    pub fn take(&mut self, n: usize) -> Vec<C> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Iterates over the remaining cards, in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &C> {
        self.cards.iter()
    }
}
