use super::category::Category;
use super::combinations::{choose, Combinations};
use super::detector::DETECTORS;
use super::hand_analysis::HandAnalysis;
use super::profile::RuleProfile;
use super::result::HandResult;
use super::wildcard::{search, MAX_WILDS};
use super::EvalError;
use crate::cards::Card;
use crate::pool::{Mode, PoolError};

/// Classify exactly five concrete cards under standard rules.
///
/// ```
/// use casino_hands::cards::{parse_cards, Rank};
/// use casino_hands::evaluator::{classify_five, Category};
///
/// let hand = classify_five(&parse_cards("2s 2h 2d 5c 9d").unwrap()).unwrap();
/// assert_eq!(hand.category, Category::ThreeOfAKind);
/// assert_eq!(hand.kickers, vec![Rank::Two, Rank::Nine, Rank::Five]);
/// ```
pub fn classify_five(cards: &[Card]) -> Result<HandResult<Category>, EvalError> {
    classify_five_under(cards, RuleProfile::Standard5)
}

pub(crate) fn classify_five_under(
    cards: &[Card],
    profile: RuleProfile,
) -> Result<HandResult<Category>, EvalError> {
    let five: &[Card; 5] = cards
        .try_into()
        .map_err(|_| PoolError::InvalidPoolSize { mode: Mode::FiveCard, got: cards.len() })?;
    if five.iter().any(|c| c.is_wild()) {
        return Err(EvalError::UnresolvedWild);
    }
    Ok(classify_concrete(five, profile))
}

pub(crate) fn classify_concrete(cards: &[Card; 5], profile: RuleProfile) -> HandResult<Category> {
    let analysis = HandAnalysis::new(cards);
    DETECTORS
        .iter()
        .filter(|d| d.category() != Category::FiveOfAKind || profile.ranks_five_of_a_kind())
        .find_map(|d| d.kickers(&analysis).map(|k| analysis.build(d.category(), k)))
        // HighCard always matches; this only satisfies the type.
        .unwrap_or_else(|| analysis.build(Category::HighCard, analysis.ranks.to_vec()))
}

/// Best five-card hand out of 5, 6 or 7 concrete cards under standard rules.
///
/// Every five-card subset is classified and the strongest kept; on exact
/// ties the first subset in lexicographic order is reported.
pub fn best_of(cards: &[Card]) -> Result<HandResult<Category>, EvalError> {
    Mode::FiveCard.check(cards.len())?;
    if cards.iter().any(|c| c.is_wild()) {
        return Err(EvalError::UnresolvedWild);
    }
    Ok(best_of_concrete(cards, RuleProfile::Standard5))
}

pub(crate) fn best_of_concrete(cards: &[Card], profile: RuleProfile) -> HandResult<Category> {
    log::trace!("best of {} cards over {} subsets", cards.len(), choose(cards.len(), 5));
    let mut best: Option<HandResult<Category>> = None;
    for idx in Combinations::<5>::new(cards.len()) {
        let eval = classify_concrete(&idx.map(|i| cards[i]), profile);
        if best.as_ref().map_or(true, |b| eval > *b) {
            best = Some(eval);
        }
    }
    // Callers check the pool size, so at least one subset exists.
    best.unwrap_or_else(|| {
        classify_concrete(&[cards[0], cards[1], cards[2], cards[3], cards[4]], profile)
    })
}

/// Best five-card hand out of 5, 6 or 7 cards holding up to
/// [`MAX_WILDS`](super::MAX_WILDS) wilds, ranked under wild rules (Five of a
/// Kind included).
///
/// A wild can always copy the card it would push out of the hand, so some
/// best hand plays every wild. Only subsets keeping all wilds are searched:
/// at most 10 subsets of the concrete cards for a seven-card pool.
///
/// ```
/// use casino_hands::cards::{parse_cards, Rank};
/// use casino_hands::evaluator::{best_of_wild, Category};
///
/// let hand = best_of_wild(&parse_cards("2c 7d 9h Js 4c W W").unwrap()).unwrap();
/// assert_eq!(hand.category, Category::Straight);
/// assert_eq!(hand.high_rank(), Some(Rank::Jack));
/// ```
pub fn best_of_wild(cards: &[Card]) -> Result<HandResult<Category>, EvalError> {
    let (hand, visited) = best_of_wild_counted(cards)?;
    log::trace!(
        "best of {} cards with {} wild(s): {} after {visited} classifications",
        cards.len(),
        hand.wild_substitutions.len(),
        hand.category
    );
    Ok(hand)
}

/// [`best_of_wild`] plus the number of five-card classifications it ran.
pub(crate) fn best_of_wild_counted(
    cards: &[Card],
) -> Result<(HandResult<Category>, usize), EvalError> {
    Mode::FiveCard.check(cards.len())?;
    let concrete: Vec<Card> = cards.iter().copied().filter(|c| !c.is_wild()).collect();
    match cards.len() - concrete.len() {
        0 => Ok((best_of_concrete(cards, RuleProfile::WildFive), choose(cards.len(), 5))),
        1 => best_with_wilds::<4>(&concrete),
        2 => best_with_wilds::<3>(&concrete),
        got => Err(EvalError::TooManyWilds { got, max: MAX_WILDS }),
    }
}

/// Search every `K`-subset of `concrete` topped up with `5 - K` wilds.
fn best_with_wilds<const K: usize>(
    concrete: &[Card],
) -> Result<(HandResult<Category>, usize), EvalError> {
    let classify = |five: &[Card]| classify_five_under(five, RuleProfile::WildFive);
    let mut best: Option<HandResult<Category>> = None;
    let mut visited = 0;
    for idx in Combinations::<K>::new(concrete.len()) {
        // Wilds trail the concrete cards, so substitutions stay in wild order.
        let mut five = [Card::wild(); 5];
        for (slot, i) in five.iter_mut().zip(idx) {
            *slot = concrete[i];
        }
        let (eval, n) = search(&five, classify)?;
        visited += n;
        if best.as_ref().map_or(true, |b| eval > *b) {
            best = Some(eval);
        }
    }
    best.map(|hand| (hand, visited)).ok_or(EvalError::UnresolvedWild)
}
