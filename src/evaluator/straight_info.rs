use crate::cards::Rank;
use crate::evaluator::EvalError;

/// The highest five-card run among a set of ranks, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StraightInfo {
    run: Option<[Rank; 5]>,
}

impl StraightInfo {
    pub const NONE: StraightInfo = StraightInfo { run: None };

    /// Find the highest straight among `ranks`, duplicates allowed.
    ///
    /// The run comes back in play order, highest first. For the wheel
    /// (A-2-3-4-5) that is `[5, 4, 3, 2, A]`: the ace plays low and trails.
    /// Fewer than five distinct ranks is a caller error.
    ///
    /// ```
    /// use casino_hands::cards::Rank;
    /// use casino_hands::evaluator::StraightInfo;
    ///
    /// let wheel = StraightInfo::detect(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]).unwrap();
    /// assert_eq!(wheel.top_rank(), Some(Rank::Five));
    /// ```
    pub fn detect(ranks: &[Rank]) -> Result<Self, EvalError> {
        let mut values: Vec<u8> = ranks.iter().map(|r| r.value()).collect();
        values.sort_unstable_by(|a, b| b.cmp(a));
        values.dedup();
        if values.len() < 5 {
            return Err(EvalError::DegenerateInput { distinct: values.len() });
        }
        if values[0] == Rank::Ace.value() {
            values.push(1);
        }

        // Values are distinct and descending, so a span of 4 means consecutive.
        let run = values.windows(5).find(|w| w[0] - w[4] == 4).and_then(|w| {
            Some([
                Rank::from_value(w[0])?,
                Rank::from_value(w[1])?,
                Rank::from_value(w[2])?,
                Rank::from_value(w[3])?,
                Rank::from_value(w[4])?,
            ])
        });
        Ok(StraightInfo { run })
    }

    pub fn is_straight(&self) -> bool {
        self.run.is_some()
    }

    pub fn top_rank(&self) -> Option<Rank> {
        self.run.map(|r| r[0])
    }

    /// The run's five ranks, highest first.
    pub fn run(&self) -> Option<[Rank; 5]> {
        self.run
    }
}
