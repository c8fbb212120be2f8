use crate::cards::{parse_cards, Card, CardParseError};
use std::fmt;

/// Which family of hands a pool is ranked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Three Card Poker style: exactly 3 cards, 3-card ordering.
    ThreeCard,
    /// Best five of 5, 6 or 7 cards, standard poker ordering.
    FiveCard,
}

impl Mode {
    /// Whether a pool of `len` cards is well formed for this mode.
    pub const fn accepts(self, len: usize) -> bool {
        match self {
            Mode::ThreeCard => len == 3,
            Mode::FiveCard => matches!(len, 5..=7),
        }
    }

    /// Human readable pool size requirement, used in error messages.
    pub const fn expected(self) -> &'static str {
        match self {
            Mode::ThreeCard => "exactly 3",
            Mode::FiveCard => "5 to 7",
        }
    }

    pub(crate) fn check(self, len: usize) -> Result<(), PoolError> {
        if self.accepts(len) {
            Ok(())
        } else {
            Err(PoolError::InvalidPoolSize { mode: self, got: len })
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::ThreeCard => f.write_str("three-card"),
            Mode::FiveCard => f.write_str("five-card"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PoolError {
    #[error("{mode} pools need {} cards, got {got}", .mode.expected())]
    InvalidPoolSize { mode: Mode, got: usize },
    #[error("card parse error: {0}")]
    CardParse(#[from] CardParseError),
}

/// A card pool whose size has been checked against its [`Mode`].
///
/// Duplicate cards are not rejected: a pool may legitimately hold the same
/// concrete card twice once wilds are substituted, and multi-deck shoes exist.
///
/// ```
/// use casino_hands::pool::{Mode, Pool};
///
/// let pool = Pool::parse("As Ah W W Kd", Mode::FiveCard).unwrap();
/// assert_eq!(pool.len(), 5);
/// assert_eq!(pool.wild_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    cards: Vec<Card>,
    mode: Mode,
}

impl Pool {
    pub fn try_new(cards: Vec<Card>, mode: Mode) -> Result<Self, PoolError> {
        mode.check(cards.len())?;
        Ok(Self { cards, mode })
    }

    /// Parse whitespace or comma separated cards into a pool.
    pub fn parse(input: &str, mode: Mode) -> Result<Self, PoolError> {
        let cards = parse_cards(input)?;
        Self::try_new(cards, mode)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn wild_count(&self) -> usize {
        wild_count(&self.cards)
    }

    pub fn has_wilds(&self) -> bool {
        self.wild_count() > 0
    }
}

pub(crate) fn wild_count(cards: &[Card]) -> usize {
    cards.iter().filter(|c| c.is_wild()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn mode_accepts_supported_sizes_only() {
        assert!(Mode::ThreeCard.accepts(3));
        assert!(!Mode::ThreeCard.accepts(5));
        for n in 5..=7 {
            assert!(Mode::FiveCard.accepts(n));
        }
        assert!(!Mode::FiveCard.accepts(4));
        assert!(!Mode::FiveCard.accepts(8));
    }

    #[test]
    fn try_new_rejects_wrong_size() {
        let cards = vec![Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::King, Suit::Spades)];
        let err = Pool::try_new(cards, Mode::ThreeCard).unwrap_err();
        assert_eq!(err, PoolError::InvalidPoolSize { mode: Mode::ThreeCard, got: 2 });
        assert_eq!(err.to_string(), "three-card pools need exactly 3 cards, got 2");
    }

    #[test]
    fn parse_counts_wilds() {
        let pool = Pool::parse("2c 3c Jk", Mode::ThreeCard).unwrap();
        assert_eq!(pool.mode(), Mode::ThreeCard);
        assert_eq!(pool.wild_count(), 1);
        assert!(pool.has_wilds());
        assert!(!pool.is_empty());
        assert_eq!(pool.as_slice()[0], Card::new(Rank::Two, Suit::Clubs));
    }

    #[test]
    fn parse_surfaces_card_errors() {
        let err = Pool::parse("2c 3c 1x", Mode::ThreeCard).unwrap_err();
        assert!(matches!(err, PoolError::CardParse(_)));
    }
}
