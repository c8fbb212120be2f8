use super::category::Category;
use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;

/// Strategy pattern: each detector recognizes one category and, when it
/// matches, produces that category's kicker list.
pub trait CategoryDetector: Sync {
    fn category(&self) -> Category;
    fn kickers(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Five of a Kind: five equal ranks, only possible through wild substitution
pub struct FiveOfAKindDetector;

impl CategoryDetector for FiveOfAKindDetector {
    fn category(&self) -> Category {
        Category::FiveOfAKind
    }

    fn kickers(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        analysis.rank_groups.quint().map(|r| vec![r])
    }
}

/// Royal Flush: Ace-high straight flush
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn category(&self) -> Category {
        Category::RoyalFlush
    }

    fn kickers(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        if !analysis.suit_info.is_flush || analysis.straight_info.top_rank() != Some(Rank::Ace) {
            return None;
        }
        analysis.straight_info.run().map(|run| run.to_vec())
    }
}

/// Straight Flush: five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn kickers(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        if !analysis.suit_info.is_flush {
            return None;
        }
        analysis.straight_info.run().map(|run| run.to_vec())
    }
}

/// Four of a Kind: [quad, kicker]
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn kickers(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        let groups = &analysis.rank_groups;
        // Without Five of a Kind in the rules, five equal ranks play as quads.
        if let Some(quint) = groups.quint() {
            return Some(vec![quint, quint]);
        }
        Some(vec![groups.quad()?, groups.kickers().next()?])
    }
}

/// Full House: [trips, pair]
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn kickers(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        let groups = &analysis.rank_groups;
        if !groups.has_full_house() {
            return None;
        }
        Some(vec![groups.trips()?, groups.pairs().next()?])
    }
}

/// Flush: all five ranks descending
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn kickers(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        analysis.suit_info.is_flush.then(|| analysis.ranks.to_vec())
    }
}

/// Straight: the run in play order
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn kickers(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        analysis.straight_info.run().map(|run| run.to_vec())
    }
}

/// Three of a Kind: [trips, k1, k2]
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn kickers(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        let trips = analysis.rank_groups.trips()?;
        let mut kickers = analysis.rank_groups.kickers();
        match (kickers.next(), kickers.next()) {
            (Some(k1), Some(k2)) => Some(vec![trips, k1, k2]),
            _ => None,
        }
    }
}

/// Two Pair: [high pair, low pair, kicker]
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn kickers(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        let mut pairs = analysis.rank_groups.pairs();
        match (pairs.next(), pairs.next(), analysis.rank_groups.kickers().next()) {
            (Some(high), Some(low), Some(kicker)) => Some(vec![high, low, kicker]),
            _ => None,
        }
    }
}

/// One Pair: [pair, k1, k2, k3]
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn kickers(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        let pair = analysis.rank_groups.pairs().next()?;
        let mut kickers = analysis.rank_groups.kickers();
        match (kickers.next(), kickers.next(), kickers.next()) {
            (Some(k1), Some(k2), Some(k3)) => Some(vec![pair, k1, k2, k3]),
            _ => None,
        }
    }
}

/// High Card: all five ranks descending
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn kickers(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        Some(analysis.ranks.to_vec())
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 11] = [
    &FiveOfAKindDetector,
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
