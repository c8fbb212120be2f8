use super::category::HandCategory;
use crate::cards::{Card, Rank};
use core::cmp::Ordering;

/// Compact, comparable hand strength. Higher is better.
/// Encodes category ordinal and ranked tiebreakers; its order agrees with
/// [`compare_hands`] for results of the same category type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct HandValue(u64);

impl HandValue {
    /// Return the packed comparable value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack a category and up to five rank tiebreakers into a comparable value.
    /// Uses 6 bits per rank to be generous (supports up to 63).
    pub fn from_parts<C: HandCategory>(category: C, kickers: &[Rank]) -> Self {
        // Layout (most significant -> least):
        // [ category (16 bits, 48..=63) | r0 (6) | r1 (6) | r2 (6) | r3 (6) | r4 (6) | 18 zero bits ]
        // Missing kickers pack as zero, below every real rank.
        const CAT_SHIFT: u32 = 48;
        const RANK_STRIDE: u32 = 6;
        let mut v: u64 = u64::from(category.ordinal()) << CAT_SHIFT;
        for (i, r) in kickers.iter().take(5).enumerate() {
            let offset = CAT_SHIFT - RANK_STRIDE * (i as u32 + 1);
            v |= u64::from(r.value()) << offset;
        }
        HandValue(v)
    }
}

/// Outcome of evaluating a pool: category, tie-break kickers, the concrete
/// cards that make the hand and what any wild cards stood in for.
///
/// Ordering and equality look only at `category` and `kickers`; two results
/// built from different cards with the same strength are equal.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct HandResult<C> {
    pub category: C,
    /// Ranks compared left to right when categories tie.
    pub kickers: Vec<Rank>,
    /// The concrete cards producing the category, wild substitutions included.
    pub used_cards: Vec<Card>,
    /// Concrete cards the pool's wild cards resolved to, in pool order.
    pub wild_substitutions: Vec<Card>,
    value: HandValue,
}

impl<C: HandCategory> HandResult<C> {
    pub(crate) fn new(category: C, kickers: Vec<Rank>, used_cards: Vec<Card>) -> Self {
        debug_assert_eq!(
            kickers.len(),
            category.kicker_count(),
            "kicker shape mismatch for {category:?}"
        );
        let value = HandValue::from_parts(category, &kickers);
        Self { category, kickers, used_cards, wild_substitutions: Vec::new(), value }
    }

    pub(crate) fn with_substitutions(mut self, substitutions: Vec<Card>) -> Self {
        self.wild_substitutions = substitutions;
        self
    }

    /// Return the packed comparable value for ordering/caching.
    pub const fn value(&self) -> HandValue {
        self.value
    }

    /// The first kicker: the rank the hand is named after (pair rank,
    /// straight top, flush high card, ...).
    pub fn high_rank(&self) -> Option<Rank> {
        self.kickers.first().copied()
    }

    /// Used cards ordered for display: bigger rank groups first, then in
    /// kicker order. Straights follow their run, so the wheel shows its ace
    /// last.
    ///
    /// ```
    /// use casino_hands::cards::parse_cards;
    /// use casino_hands::evaluator::classify_five;
    ///
    /// let hand = classify_five(&parse_cards("9d 2s 5c 2h 2d").unwrap()).unwrap();
    /// let shown: Vec<String> = hand.display_order().iter().map(|c| c.to_string()).collect();
    /// assert_eq!(shown, ["2s", "2h", "2d", "9d", "5c"]);
    /// ```
    pub fn display_order(&self) -> Vec<Card> {
        let group_size =
            |rank: Rank| self.used_cards.iter().filter(|c| c.rank() == rank).count();
        let kicker_pos = |rank: Rank| {
            self.kickers.iter().position(|&k| k == rank).unwrap_or(self.kickers.len())
        };
        let mut cards = self.used_cards.clone();
        cards.sort_by(|a, b| {
            group_size(b.rank())
                .cmp(&group_size(a.rank()))
                .then(kicker_pos(a.rank()).cmp(&kicker_pos(b.rank())))
                .then(b.suit().cmp(&a.suit()))
        });
        cards
    }
}

impl<C: HandCategory> Ord for HandResult<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_hands(self, other)
    }
}

impl<C: HandCategory> PartialOrd for HandResult<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: HandCategory> PartialEq for HandResult<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: HandCategory> Eq for HandResult<C> {}

/// Order two results of the same family: category first, then kickers.
/// `Equal` is an exact tie; pushing or splitting is up to the caller.
pub fn compare_hands<C: HandCategory>(a: &HandResult<C>, b: &HandResult<C>) -> Ordering {
    a.category.cmp(&b.category).then_with(|| compare_kickers(&a.kickers, &b.kickers))
}

/// Compare raw kicker lists element-wise; the first difference decides.
/// A list that is a strict prefix of the other ranks lower.
pub fn compare_kickers(a: &[Rank], b: &[Rank]) -> Ordering {
    a.iter().cmp(b.iter())
}

/// Indices of every result tied for best. Empty input gives an empty list.
///
/// ```
/// use casino_hands::cards::parse_cards;
/// use casino_hands::evaluator::{classify_five, winners};
///
/// let a = classify_five(&parse_cards("Ah Ad 9c 7s 2h").unwrap()).unwrap();
/// let b = classify_five(&parse_cards("Kh Kd Qc Js Th").unwrap()).unwrap();
/// let c = classify_five(&parse_cards("As Ac 9d 7h 2s").unwrap()).unwrap();
/// assert_eq!(winners(&[a, b, c]), vec![0, 2]);
/// ```
pub fn winners<C: HandCategory>(results: &[HandResult<C>]) -> Vec<usize> {
    let Some(best) = results.iter().max() else {
        return Vec::new();
    };
    results.iter().enumerate().filter(|(_, r)| *r == best).map(|(i, _)| i).collect()
}
