use core::fmt;

/// Shared interface of the 5-card and 3-card category enums.
///
/// Each category fixes the number of kickers its results carry, so two
/// results in the same category always compare kicker lists of equal length.
pub trait HandCategory: Copy + Ord + fmt::Debug + fmt::Display {
    /// Position in the category order, 0 = weakest.
    fn ordinal(self) -> u8;

    /// Number of tie-break ranks a result in this category carries.
    fn kicker_count(self) -> usize;
}

/// Five-card poker category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
    /// Only reachable when wild cards are in play.
    FiveOfAKind = 10,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
        Category::FiveOfAKind,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
            Category::FiveOfAKind => "Five of a Kind",
        }
    }
}

impl HandCategory for Category {
    fn ordinal(self) -> u8 {
        self as u8
    }

    fn kicker_count(self) -> usize {
        match self {
            Category::FiveOfAKind => 1,
            Category::FullHouse | Category::FourOfAKind => 2,
            Category::TwoPair | Category::ThreeOfAKind => 3,
            Category::Pair => 4,
            Category::HighCard
            | Category::Straight
            | Category::Flush
            | Category::StraightFlush
            | Category::RoyalFlush => 5,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Three-card category from weakest to strongest.
///
/// The order differs from [`Category`] on purpose: with only three cards a
/// straight is rarer than a flush and trips are rarer than a straight flush,
/// so Flush < Straight < StraightFlush < ThreeOfAKind. The mini-royal
/// (Q-K-A suited) sits on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum ThreeCardCategory {
    HighCard = 0,
    Pair = 1,
    Flush = 2,
    Straight = 3,
    StraightFlush = 4,
    ThreeOfAKind = 5,
    MiniRoyal = 6,
}

impl ThreeCardCategory {
    pub const ALL: [ThreeCardCategory; 7] = [
        ThreeCardCategory::HighCard,
        ThreeCardCategory::Pair,
        ThreeCardCategory::Flush,
        ThreeCardCategory::Straight,
        ThreeCardCategory::StraightFlush,
        ThreeCardCategory::ThreeOfAKind,
        ThreeCardCategory::MiniRoyal,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            ThreeCardCategory::HighCard => "High Card",
            ThreeCardCategory::Pair => "Pair",
            ThreeCardCategory::Flush => "Flush",
            ThreeCardCategory::Straight => "Straight",
            ThreeCardCategory::StraightFlush => "Straight Flush",
            ThreeCardCategory::ThreeOfAKind => "Three of a Kind",
            ThreeCardCategory::MiniRoyal => "Mini Royal",
        }
    }
}

impl HandCategory for ThreeCardCategory {
    fn ordinal(self) -> u8 {
        self as u8
    }

    fn kicker_count(self) -> usize {
        match self {
            ThreeCardCategory::ThreeOfAKind => 1,
            ThreeCardCategory::Pair => 2,
            ThreeCardCategory::HighCard
            | ThreeCardCategory::Flush
            | ThreeCardCategory::Straight
            | ThreeCardCategory::StraightFlush
            | ThreeCardCategory::MiniRoyal => 3,
        }
    }
}

impl fmt::Display for ThreeCardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
