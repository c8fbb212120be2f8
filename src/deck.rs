use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A 52-card deck, optionally with jokers.
///
/// The evaluator never deals; this is a convenience card source for demos,
/// benches and tests.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use casino_hands::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        Self::with_jokers(0)
    }

    /// A standard deck plus `jokers` wild cards.
    ///
    /// ```
    /// use casino_hands::deck::Deck;
    ///
    /// let deck = Deck::with_jokers(1);
    /// assert_eq!(deck.len(), 53);
    /// ```
    pub fn with_jokers(jokers: usize) -> Self {
        let mut cards = Vec::with_capacity(52 + jokers);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        cards.extend(std::iter::repeat(Card::wild()).take(jokers));
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw up to `n` cards from the top of the deck.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.draw()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        let set: HashSet<Card> = d.cards.iter().copied().collect();
        assert_eq!(set.len(), 52);
        assert!(d.cards.iter().all(|c| !c.is_wild()));
    }

    #[test]
    fn jokers_are_appended_as_wild_cards() {
        let d = Deck::with_jokers(2);
        assert_eq!(d.len(), 54);
        assert_eq!(d.cards.iter().filter(|c| c.is_wild()).count(), 2);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::with_jokers(1);
        let mut d2 = Deck::with_jokers(1);
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn deal_reduces_length_and_stops_when_empty() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let c1 = d.draw().unwrap();
        let c2 = d.draw().unwrap();
        assert_ne!(c1, c2);
        assert_eq!(d.len(), 50);
        let hand = d.deal(5);
        assert_eq!(hand.len(), 5);
        assert_eq!(d.len(), 45);
        let rest = d.deal(100);
        assert_eq!(rest.len(), 45);
        assert!(d.is_empty());
    }
}
