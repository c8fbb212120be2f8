use super::category::HandCategory;
use super::result::HandResult;
use super::EvalError;
use crate::cards::{Card, Rank, Suit};

/// Most wild cards a single pool may carry. The search is exponential in the
/// number of wilds and every supported game deals at most two.
pub const MAX_WILDS: usize = 2;

/// Concrete cards a wild may stand in for, given the concrete part of the
/// pool. Suits that cannot complete a flush even with every wild are
/// interchangeable, so only the first of them is offered alongside each
/// live suit: 13 candidates with no flush in reach, at most 26 otherwise.
fn candidates(pool: &[Card], wilds: usize) -> Vec<Card> {
    let needed = pool.len().min(5);
    let mut per_suit = [0usize; 4];
    for card in pool.iter().filter(|c| !c.is_wild()) {
        per_suit[card.suit() as usize] += 1;
    }
    let live = |s: &Suit| per_suit[*s as usize] + wilds >= needed;
    let dead = Suit::ALL.into_iter().find(|s| !live(s));
    Suit::ALL
        .into_iter()
        .filter(live)
        .chain(dead)
        .flat_map(|s| Rank::ALL.into_iter().map(move |r| Card::new(r, s)))
        .collect()
}

/// Resolve the wild cards in `pool` to the substitution that scores best
/// under `classify`.
///
/// Each wild may become any concrete card, including copies of cards
/// already in the pool: a wild names a rank and suit, not a physical card.
/// Wild slots are interchangeable, so assignments are enumerated as
/// multisets, and suits that cannot make a flush collapse into one. The
/// classifier must therefore only care about suits through flushes. The
/// returned result lists, in pool order, what every wild resolved to.
///
/// A pool without wilds is classified as is.
///
/// ```
/// use casino_hands::cards::{parse_cards, Rank};
/// use casino_hands::evaluator::{best_of, resolve_wilds, Category};
///
/// let pool = parse_cards("As Ah W W Kd").unwrap();
/// let hand = resolve_wilds(&pool, best_of).unwrap();
/// assert_eq!(hand.category, Category::FourOfAKind);
/// assert_eq!(hand.kickers, vec![Rank::Ace, Rank::King]);
/// ```
pub fn resolve_wilds<C, F>(pool: &[Card], classify: F) -> Result<HandResult<C>, EvalError>
where
    C: HandCategory,
    F: Fn(&[Card]) -> Result<HandResult<C>, EvalError>,
{
    let (result, visited) = search(pool, classify)?;
    if !result.wild_substitutions.is_empty() {
        log::trace!(
            "resolved {} wild(s) over {visited} substitutions to {} via {:?}",
            result.wild_substitutions.len(),
            result.category,
            result.wild_substitutions
        );
    }
    Ok(result)
}

/// [`resolve_wilds`] plus the number of substitutions classified.
pub(crate) fn search<C, F>(pool: &[Card], classify: F) -> Result<(HandResult<C>, usize), EvalError>
where
    C: HandCategory,
    F: Fn(&[Card]) -> Result<HandResult<C>, EvalError>,
{
    let slots: Vec<usize> =
        pool.iter().enumerate().filter(|(_, c)| c.is_wild()).map(|(i, _)| i).collect();
    if slots.is_empty() {
        return Ok((classify(pool)?, 1));
    }
    if slots.len() > MAX_WILDS {
        return Err(EvalError::TooManyWilds { got: slots.len(), max: MAX_WILDS });
    }

    let candidates = candidates(pool, slots.len());
    let mut concrete = pool.to_vec();
    let mut choice = vec![0usize; slots.len()];
    let mut best: Option<(HandResult<C>, Vec<usize>)> = None;
    let mut visited = 0usize;

    loop {
        for (&slot, &pick) in slots.iter().zip(&choice) {
            concrete[slot] = candidates[pick];
        }
        let eval = classify(&concrete)?;
        visited += 1;
        if best.as_ref().map_or(true, |(b, _)| eval > *b) {
            best = Some((eval, choice.clone()));
        }
        if !advance_multiset(&mut choice, candidates.len()) {
            break;
        }
    }

    let (result, picks) = best.ok_or(EvalError::UnresolvedWild)?;
    let substitutions = picks.into_iter().map(|pick| candidates[pick]).collect();
    Ok((result.with_substitutions(substitutions), visited))
}

/// Step `choice` to the next non-decreasing tuple over `0..base`.
/// Returns false once every tuple has been visited.
fn advance_multiset(choice: &mut [usize], base: usize) -> bool {
    for i in (0..choice.len()).rev() {
        if choice[i] + 1 < base {
            let next = choice[i] + 1;
            for c in &mut choice[i..] {
                *c = next;
            }
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::best_of::{best_of, classify_five, classify_five_under};
    use crate::evaluator::profile::RuleProfile;
    use crate::evaluator::category::{Category, ThreeCardCategory};
    use crate::evaluator::three_card::classify_three;
    use crate::cards::parse_cards;

    fn pool(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    #[test]
    fn candidates_keep_one_dead_suit() {
        let c = candidates(&pool("2c 7d 9h Js W W 4c"), 2);
        assert_eq!(c.len(), 13);
        assert!(c.iter().all(|card| card.suit() == Suit::Clubs));

        // Spades can still flush; clubs stand in for every other suit.
        let c = candidates(&pool("Ts Js Qs Ks W"), 1);
        assert_eq!(c.len(), 26);
        assert!(c.contains(&Card::new(Rank::Ace, Suit::Spades)));
        assert!(c.iter().all(|card| matches!(card.suit(), Suit::Spades | Suit::Clubs)));

        // Three-card flushes need only three suited cards.
        assert_eq!(candidates(&pool("W W Ad"), 2).len(), 26);
        assert_eq!(candidates(&pool("Qd W Ad"), 1).len(), 26);
    }

    #[test]
    fn one_wild_without_a_flush_draw_tries_thirteen_cards() {
        let (hand, visited) = search(&pool("2c 7d 9h Js W"), classify_five).unwrap();
        assert_eq!(visited, 13);
        assert_eq!(hand.category, Category::Pair);
        assert_eq!(hand.kickers, vec![Rank::Jack, Rank::Nine, Rank::Seven, Rank::Two]);
        assert!(!hand.wild_substitutions[0].is_wild());
    }

    #[test]
    fn multiset_enumeration_counts() {
        let count = |k: usize| {
            let mut choice = vec![0; k];
            let mut n = 1;
            while advance_multiset(&mut choice, 52) {
                n += 1;
            }
            n
        };
        assert_eq!(count(1), 52);
        // C(52 + 1, 2)
        assert_eq!(count(2), 1378);
    }

    #[test]
    fn two_wilds_complete_four_aces() {
        let hand = resolve_wilds(&pool("As Ah W W Kd"), best_of).unwrap();
        assert_eq!(hand.category, Category::FourOfAKind);
        assert_eq!(hand.kickers, vec![Rank::Ace, Rank::King]);
        assert_eq!(hand.wild_substitutions.len(), 2);
        assert!(hand.wild_substitutions.iter().all(|c| c.rank() == Rank::Ace));
    }

    #[test]
    fn wild_can_duplicate_a_card_already_present() {
        let rules = |cards: &[Card]| classify_five_under(cards, RuleProfile::WildFive);
        let hand = resolve_wilds(&pool("Ac Ad Ah As W"), rules).unwrap();
        assert_eq!(hand.category, Category::FiveOfAKind);
        assert_eq!(hand.kickers, vec![Rank::Ace]);

        // Standard rules read the fifth ace as a second quad rank.
        let hand = resolve_wilds(&pool("Ac Ad Ah As W"), best_of).unwrap();
        assert_eq!(hand.category, Category::FourOfAKind);
        assert_eq!(hand.kickers, vec![Rank::Ace, Rank::Ace]);
    }

    #[test]
    fn single_wild_fills_a_royal() {
        let hand = resolve_wilds(&pool("Ts Js Qs Ks W 2d 3c"), best_of).unwrap();
        assert_eq!(hand.category, Category::RoyalFlush);
        assert_eq!(hand.wild_substitutions, vec![Card::new(Rank::Ace, Suit::Spades)]);
    }

    #[test]
    fn three_card_wilds() {
        let hand = resolve_wilds(&pool("Qd W Ad"), classify_three).unwrap();
        assert_eq!(hand.category, ThreeCardCategory::MiniRoyal);
        assert_eq!(hand.wild_substitutions, vec![Card::new(Rank::King, Suit::Diamonds)]);

        // Trips outrank any straight flush the wilds could build around the five.
        let hand = resolve_wilds(&pool("W 5c W"), classify_three).unwrap();
        assert_eq!(hand.category, ThreeCardCategory::ThreeOfAKind);
        assert_eq!(hand.kickers, vec![Rank::Five]);
    }

    #[test]
    fn no_wilds_passes_through() {
        let hand = resolve_wilds(&pool("2c 7d 9h Js Kc"), best_of).unwrap();
        assert!(hand.wild_substitutions.is_empty());
        assert_eq!(hand.category, Category::HighCard);
    }

    #[test]
    fn too_many_wilds_is_rejected() {
        let err = resolve_wilds(&pool("W W W 2c 3d"), best_of).unwrap_err();
        assert!(matches!(err, EvalError::TooManyWilds { got: 3, max: MAX_WILDS }));
    }
}
