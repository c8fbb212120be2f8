use super::category::Category;
use super::rank_groups::RankGroups;
use super::result::HandResult;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};

/// Pre-computed analysis of a concrete 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: [Card; 5],
    /// Ranks of `sorted_cards`, descending.
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));
        let ranks = sorted_cards.map(Card::rank);

        let rank_groups = RankGroups::from_ranks(&ranks);
        let suit_info = SuitInfo::detect(&sorted_cards);
        // Paired hands cannot hold a straight; detection would only report
        // the degenerate input.
        let straight_info = if rank_groups.distinct() == 5 {
            StraightInfo::detect(&ranks).unwrap_or(StraightInfo::NONE)
        } else {
            StraightInfo::NONE
        };

        Self { sorted_cards, ranks, rank_groups, suit_info, straight_info }
    }

    pub fn build(&self, category: Category, kickers: Vec<Rank>) -> HandResult<Category> {
        HandResult::new(category, kickers, self.sorted_cards.to_vec())
    }
}
