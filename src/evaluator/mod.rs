//! Hand ranking: classifiers, best-of-N selection, wild-card resolution and
//! the comparator tying them together.
//!
//! Most callers only need [`evaluate`] (or the typed [`evaluate_five_card`]
//! and [`evaluate_three_card`]) and compare the results.

pub(crate) mod best_of;
pub(crate) mod category;
pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod profile;
pub(crate) mod rank_groups;
pub(crate) mod result;
pub(crate) mod straight_info;
pub(crate) mod suit_info;
pub(crate) mod three_card;
pub(crate) mod wildcard;

pub use best_of::{best_of, best_of_wild, classify_five};
pub use category::{Category, HandCategory, ThreeCardCategory};
pub use profile::RuleProfile;
pub use result::{compare_hands, compare_kickers, winners, HandResult, HandValue};
pub use straight_info::StraightInfo;
pub use three_card::classify_three;
pub use wildcard::{resolve_wilds, MAX_WILDS};

use crate::cards::{Card, Rank};
use crate::pool::{wild_count, Mode, Pool, PoolError};
use core::cmp::Ordering;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid pool: {0}")]
    Pool(#[from] PoolError),
    #[error("straight detection needs five distinct ranks, got {distinct}")]
    DegenerateInput { distinct: usize },
    #[error("wild card passed to a concrete classifier")]
    UnresolvedWild,
    #[error("{profile} rules do not accept wild cards")]
    WildNotAllowed { profile: RuleProfile },
    #[error("{got} wild cards in one pool, at most {max} supported")]
    TooManyWilds { got: usize, max: usize },
}

/// A result from either hand family, as returned by [`evaluate`].
///
/// Results of different modes are unordered: `partial_cmp` returns `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    Three(HandResult<ThreeCardCategory>),
    Five(HandResult<Category>),
}

impl Evaluation {
    pub fn mode(&self) -> Mode {
        match self {
            Evaluation::Three(_) => Mode::ThreeCard,
            Evaluation::Five(_) => Mode::FiveCard,
        }
    }

    pub fn category_name(&self) -> &'static str {
        match self {
            Evaluation::Three(r) => r.category.name(),
            Evaluation::Five(r) => r.category.name(),
        }
    }

    pub fn kickers(&self) -> &[Rank] {
        match self {
            Evaluation::Three(r) => &r.kickers,
            Evaluation::Five(r) => &r.kickers,
        }
    }

    pub fn used_cards(&self) -> &[Card] {
        match self {
            Evaluation::Three(r) => &r.used_cards,
            Evaluation::Five(r) => &r.used_cards,
        }
    }

    pub fn wild_substitutions(&self) -> &[Card] {
        match self {
            Evaluation::Three(r) => &r.wild_substitutions,
            Evaluation::Five(r) => &r.wild_substitutions,
        }
    }

    pub fn display_order(&self) -> Vec<Card> {
        match self {
            Evaluation::Three(r) => r.display_order(),
            Evaluation::Five(r) => r.display_order(),
        }
    }

    pub fn as_five(&self) -> Option<&HandResult<Category>> {
        match self {
            Evaluation::Five(r) => Some(r),
            Evaluation::Three(_) => None,
        }
    }

    pub fn as_three(&self) -> Option<&HandResult<ThreeCardCategory>> {
        match self {
            Evaluation::Three(r) => Some(r),
            Evaluation::Five(_) => None,
        }
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Evaluation::Three(a), Evaluation::Three(b)) => Some(compare_hands(a, b)),
            (Evaluation::Five(a), Evaluation::Five(b)) => Some(compare_hands(a, b)),
            _ => None,
        }
    }
}

/// Evaluate a pool in the given mode, resolving any wild cards.
///
/// `pool.len()` must be 3 for [`Mode::ThreeCard`] and 5, 6 or 7 for
/// [`Mode::FiveCard`].
///
/// ```
/// use casino_hands::cards::{parse_cards, Rank};
/// use casino_hands::evaluator::evaluate;
/// use casino_hands::pool::Mode;
///
/// let eval = evaluate(&parse_cards("As Ah W W Kd").unwrap(), Mode::FiveCard).unwrap();
/// assert_eq!(eval.category_name(), "Four of a Kind");
/// assert_eq!(eval.kickers(), &[Rank::Ace, Rank::King]);
/// ```
pub fn evaluate(pool: &[Card], mode: Mode) -> Result<Evaluation, EvalError> {
    evaluate_with_profile(pool, RuleProfile::select(mode, wild_count(pool) > 0))
}

/// Evaluate a pool under an explicit rule profile.
pub fn evaluate_with_profile(pool: &[Card], profile: RuleProfile) -> Result<Evaluation, EvalError> {
    let mode = profile.mode();
    mode.check(pool.len())?;
    let wilds = wild_count(pool);
    log::debug!("evaluating {} cards ({wilds} wild) under {profile} rules", pool.len());
    if wilds > 0 && !profile.allows_wilds() {
        return Err(EvalError::WildNotAllowed { profile });
    }
    match profile {
        RuleProfile::ThreeCard => resolve_wilds(pool, classify_three).map(Evaluation::Three),
        RuleProfile::Standard5 => best_of(pool).map(Evaluation::Five),
        RuleProfile::WildFive => best_of_wild(pool).map(Evaluation::Five),
    }
}

/// Evaluate a checked [`Pool`] in its own mode.
pub fn evaluate_pool(pool: &Pool) -> Result<Evaluation, EvalError> {
    evaluate(pool.as_slice(), pool.mode())
}

/// Evaluate a 5 to 7 card pool, wild cards allowed. Wild pools play under
/// [`RuleProfile::WildFive`], others under [`RuleProfile::Standard5`].
pub fn evaluate_five_card(pool: &[Card]) -> Result<HandResult<Category>, EvalError> {
    Mode::FiveCard.check(pool.len())?;
    if wild_count(pool) > 0 {
        best_of_wild(pool)
    } else {
        best_of(pool)
    }
}

/// Evaluate a 3 card pool, wild cards allowed.
pub fn evaluate_three_card(pool: &[Card]) -> Result<HandResult<ThreeCardCategory>, EvalError> {
    Mode::ThreeCard.check(pool.len())?;
    resolve_wilds(pool, classify_three)
}

/// Evaluate two pools in the same mode and order them.
///
/// ```
/// use casino_hands::cards::parse_cards;
/// use casino_hands::evaluator::compare;
/// use casino_hands::pool::Mode;
/// use std::cmp::Ordering;
///
/// let dealer = parse_cards("Qc 6d 4h").unwrap();
/// let player = parse_cards("2s 2d 9c").unwrap();
/// assert_eq!(compare(&player, &dealer, Mode::ThreeCard).unwrap(), Ordering::Greater);
/// ```
pub fn compare(a: &[Card], b: &[Card], mode: Mode) -> Result<Ordering, EvalError> {
    Ok(match mode {
        Mode::ThreeCard => compare_hands(&evaluate_three_card(a)?, &evaluate_three_card(b)?),
        Mode::FiveCard => compare_hands(&evaluate_five_card(a)?, &evaluate_five_card(b)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    #[test]
    fn routes_by_mode() {
        let three = evaluate(&cards("Qh Kh Ah"), Mode::ThreeCard).unwrap();
        assert_eq!(three.mode(), Mode::ThreeCard);
        assert_eq!(three.as_three().map(|r| r.category), Some(ThreeCardCategory::MiniRoyal));

        let five = evaluate(&cards("Th Jh Qh Kh Ah 2c"), Mode::FiveCard).unwrap();
        assert_eq!(five.as_five().map(|r| r.category), Some(Category::RoyalFlush));
        assert!(five.as_three().is_none());
    }

    #[test]
    fn wrong_pool_size_fails_fast() {
        let err = evaluate(&cards("Qh Kh Ah Jh"), Mode::ThreeCard).unwrap_err();
        assert_eq!(
            err,
            EvalError::Pool(PoolError::InvalidPoolSize { mode: Mode::ThreeCard, got: 4 })
        );
        assert!(evaluate(&cards("Qh Kh Ah"), Mode::FiveCard).is_err());
        assert!(evaluate_five_card(&cards("Qh Kh Ah")).is_err());
        assert!(evaluate_three_card(&cards("Qh Kh Ah Jh Th")).is_err());
    }

    #[test]
    fn standard_profile_rejects_wilds() {
        let err = evaluate_with_profile(&cards("As Ah W 9c 2d"), RuleProfile::Standard5).unwrap_err();
        assert_eq!(err, EvalError::WildNotAllowed { profile: RuleProfile::Standard5 });
        let ok = evaluate_with_profile(&cards("As Ah W 9c 2d"), RuleProfile::WildFive).unwrap();
        assert_eq!(ok.category_name(), "Three of a Kind");
    }

    #[test]
    fn five_of_a_kind_belongs_to_wild_rules() {
        let shoe = cards("7c 7d 7h 7s 7c 2d");
        let standard = evaluate_with_profile(&shoe, RuleProfile::Standard5).unwrap();
        assert_eq!(standard.category_name(), "Four of a Kind");
        assert_eq!(standard.kickers(), &[Rank::Seven, Rank::Seven]);
        assert_eq!(evaluate_five_card(&shoe).unwrap().category, Category::FourOfAKind);

        let wild = evaluate_with_profile(&shoe, RuleProfile::WildFive).unwrap();
        assert_eq!(wild.category_name(), "Five of a Kind");
        assert_eq!(wild.kickers(), &[Rank::Seven]);
    }

    #[test]
    fn seven_card_two_wild_pool() {
        let hand = evaluate_five_card(&cards("2c 7d 9h Js 4c W W")).unwrap();
        assert_eq!(hand.category, Category::Straight);
        assert_eq!(hand.kickers, vec![Rank::Jack, Rank::Ten, Rank::Nine, Rank::Eight, Rank::Seven]);
        assert_eq!(hand.wild_substitutions.len(), 2);
    }

    #[test]
    fn cross_mode_results_are_unordered() {
        let three = evaluate(&cards("2c 2d 2h"), Mode::ThreeCard).unwrap();
        let five = evaluate(&cards("2c 2d 2h 5s 9d"), Mode::FiveCard).unwrap();
        assert_eq!(three.partial_cmp(&five), None);
        assert_ne!(three, five);
        assert_eq!(five.partial_cmp(&five.clone()), Some(Ordering::Equal));
    }

    #[test]
    fn evaluate_pool_uses_pool_mode() {
        let pool = Pool::parse("9s 9h W", Mode::ThreeCard).unwrap();
        let eval = evaluate_pool(&pool).unwrap();
        assert_eq!(eval.category_name(), "Three of a Kind");
        assert_eq!(eval.wild_substitutions().len(), 1);
        assert_eq!(eval.wild_substitutions()[0].rank(), Rank::Nine);
    }

    #[test]
    fn error_messages_read_well() {
        assert_eq!(
            EvalError::TooManyWilds { got: 3, max: 2 }.to_string(),
            "3 wild cards in one pool, at most 2 supported"
        );
        assert_eq!(
            EvalError::WildNotAllowed { profile: RuleProfile::Standard5 }.to_string(),
            "standard five-card rules do not accept wild cards"
        );
    }
}
