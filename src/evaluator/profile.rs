use crate::pool::Mode;
use core::fmt;

/// The rule set a pool is ranked under.
///
/// Games differ in small, easy-to-miss ways. Those differences live here
/// instead of in per-game copies of the classifier:
///
/// | profile     | ordering | wild cards | notes                                   |
/// |-------------|----------|------------|-----------------------------------------|
/// | `Standard5` | 5-card   | rejected   | Hold'em, Let It Ride, Video Poker       |
/// | `WildFive`  | 5-card   | resolved   | Five of a Kind becomes reachable        |
/// | `ThreeCard` | 3-card   | resolved   | trips over straight flush, Q-K-A royal  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleProfile {
    Standard5,
    ThreeCard,
    WildFive,
}

impl RuleProfile {
    /// Profile used by [`evaluate`](super::evaluate) for a pool of the given
    /// mode.
    pub const fn select(mode: Mode, has_wilds: bool) -> Self {
        match (mode, has_wilds) {
            (Mode::ThreeCard, _) => RuleProfile::ThreeCard,
            (Mode::FiveCard, false) => RuleProfile::Standard5,
            (Mode::FiveCard, true) => RuleProfile::WildFive,
        }
    }

    pub const fn mode(self) -> Mode {
        match self {
            RuleProfile::ThreeCard => Mode::ThreeCard,
            RuleProfile::Standard5 | RuleProfile::WildFive => Mode::FiveCard,
        }
    }

    pub const fn allows_wilds(self) -> bool {
        !matches!(self, RuleProfile::Standard5)
    }

    /// Whether five equal ranks score as Five of a Kind. Elsewhere they play
    /// as quads, which only matters for multi-deck input.
    pub const fn ranks_five_of_a_kind(self) -> bool {
        matches!(self, RuleProfile::WildFive)
    }
}

impl fmt::Display for RuleProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleProfile::Standard5 => f.write_str("standard five-card"),
            RuleProfile::ThreeCard => f.write_str("three-card"),
            RuleProfile::WildFive => f.write_str("wild five-card"),
        }
    }
}
