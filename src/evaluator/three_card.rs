use super::category::ThreeCardCategory;
use super::rank_groups::RankGroups;
use super::result::HandResult;
use super::suit_info::SuitInfo;
use super::EvalError;
use crate::cards::{Card, Rank};
use crate::pool::{Mode, PoolError};

/// Classify exactly three concrete cards under three-card rules.
///
/// ```
/// use casino_hands::cards::parse_cards;
/// use casino_hands::evaluator::{classify_three, ThreeCardCategory};
///
/// let hand = classify_three(&parse_cards("Qh Ah Kh").unwrap()).unwrap();
/// assert_eq!(hand.category, ThreeCardCategory::MiniRoyal);
/// ```
pub fn classify_three(cards: &[Card]) -> Result<HandResult<ThreeCardCategory>, EvalError> {
    let three: &[Card; 3] = cards
        .try_into()
        .map_err(|_| PoolError::InvalidPoolSize { mode: Mode::ThreeCard, got: cards.len() })?;
    if three.iter().any(|c| c.is_wild()) {
        return Err(EvalError::UnresolvedWild);
    }
    Ok(classify_concrete(three))
}

pub(crate) fn classify_concrete(cards: &[Card; 3]) -> HandResult<ThreeCardCategory> {
    let mut sorted = *cards;
    sorted.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));
    let ranks = sorted.map(Card::rank);

    let groups = RankGroups::from_ranks(&ranks);
    let suited = SuitInfo::detect(&sorted).is_flush;
    let run = if groups.distinct() == 3 { run_of_three(&ranks) } else { None };

    let (category, kickers) = match (suited, run) {
        (true, Some(run)) if ranks == [Rank::Ace, Rank::King, Rank::Queen] => {
            (ThreeCardCategory::MiniRoyal, run.to_vec())
        }
        (true, Some(run)) => (ThreeCardCategory::StraightFlush, run.to_vec()),
        _ => {
            if let Some(trips) = groups.trips() {
                (ThreeCardCategory::ThreeOfAKind, vec![trips])
            } else if let Some(run) = run {
                (ThreeCardCategory::Straight, run.to_vec())
            } else if suited {
                (ThreeCardCategory::Flush, ranks.to_vec())
            } else if let (Some(pair), Some(odd)) =
                (groups.pairs().next(), groups.kickers().next())
            {
                (ThreeCardCategory::Pair, vec![pair, odd])
            } else {
                (ThreeCardCategory::HighCard, ranks.to_vec())
            }
        }
    };
    HandResult::new(category, kickers, sorted.to_vec())
}

/// Three distinct descending ranks forming a run, in play order.
/// A-2-3 counts, scoring 3-high with the ace last.
fn run_of_three(ranks: &[Rank; 3]) -> Option<[Rank; 3]> {
    let [hi, mid, lo] = ranks.map(Rank::value);
    if hi == mid + 1 && mid == lo + 1 {
        return Some(*ranks);
    }
    if *ranks == [Rank::Ace, Rank::Three, Rank::Two] {
        return Some([Rank::Three, Rank::Two, Rank::Ace]);
    }
    None
}
