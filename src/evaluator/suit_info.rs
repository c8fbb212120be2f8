use crate::cards::{Card, Suit};

/// Whether every card of a hand shares one suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    /// Detect a flush over the whole hand (5 cards for poker, 3 for three-card).
    /// Wild cards never count towards a suit.
    pub fn detect(cards: &[Card]) -> Self {
        let mut counts = [0usize; 4];
        for c in cards.iter().filter(|c| !c.is_wild()) {
            counts[c.suit() as usize] += 1;
        }
        let flush_suit = Suit::ALL
            .into_iter()
            .find(|&s| !cards.is_empty() && counts[s as usize] == cards.len());
        SuitInfo { is_flush: flush_suit.is_some(), flush_suit }
    }
}
