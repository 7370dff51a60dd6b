//! Deck factories.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Deck;

/// Produces a fresh deck at the start of every match.
pub trait Dealer {
    fn deal(&mut self) -> Deck;
}

/// Deals a uniformly shuffled standard deck.
#[derive(Debug, Clone)]
pub struct Shuffler<R> {
    rng: R,
}

impl Shuffler<StdRng> {
    /// A shuffler seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// A shuffler that repeats the same sequence of decks for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Shuffler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Dealer for Shuffler<R> {
    fn deal(&mut self) -> Deck {
        let mut deck = Deck::standard();
        deck.shuffle(&mut self.rng);
        deck
    }
}

impl<F> Dealer for F
where
    F: FnMut() -> Deck,
{
    fn deal(&mut self) -> Deck {
        self()
    }
}

#[cfg(test)]
pub use stacked::{stacked, PLAYER1_SWEEP};

#[cfg(test)]
mod stacked {
    use std::collections::HashSet;

    use super::Dealer;
    use crate::war::{Card, Deck};

    /// Player one draws the higher card in each of the first ten rounds.
    pub const PLAYER1_SWEEP: [&str; 20] = [
        "as", "2s", "ah", "2h", "ad", "2d", "ac", "2c", "ks", "3s", "kh", "3h", "kd", "3d", "kc",
        "3c", "qs", "4s", "qh", "4h",
    ];

    /// A dealer that always deals `top` first, followed by the rest of a standard deck.
    pub fn stacked(top: &[&str]) -> impl Dealer {
        let top: Vec<Card> = top.iter().map(|s| s.parse().unwrap()).collect();
        let seen: HashSet<Card> = top.iter().copied().collect();
        let deck: Deck = top
            .iter()
            .copied()
            .chain(Deck::standard().iter().copied().filter(|c| !seen.contains(c)))
            .collect();
        move || deck.clone()
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn seeded_shuffles_repeat() {
        let a = Shuffler::seeded(7).deal();
        let b = Shuffler::seeded(7).deal();
        assert_eq!(a, b);
        assert_ne!(a, Deck::standard());
    }

    proptest! {
        #[test]
        fn shuffled_deck_is_a_permutation(seed in any::<u64>()) {
            let deck = Shuffler::seeded(seed).deal();
            prop_assert_eq!(deck.len(), 52);
            let unique: HashSet<_> = deck.iter().copied().collect();
            let standard: HashSet<_> = Deck::standard().iter().copied().collect();
            prop_assert_eq!(unique, standard);
        }
    }

    #[test]
    fn stacked_deals_the_top_then_the_rest() {
        let mut dealer = stacked(&["7h", "as"]);
        let deck = dealer.deal();
        assert_eq!(deck.len(), 52);
        let top: Vec<String> = deck.iter().take(2).map(|c| c.to_string()).collect();
        assert_eq!(top, ["7♥", "A♠"]);
        assert_eq!(dealer.deal(), deck);
    }
}
