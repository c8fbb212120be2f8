use crate::cards::Rank;

/// Ranks of a hand grouped by multiplicity, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
///
/// Stored inline: classification runs thousands of times per wild search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankGroups {
    groups: [(Rank, u8); 13],
    len: usize,
}

impl RankGroups {
    /// Group any number of ranks. Works for 3-card and 5-card hands alike.
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; 15];
        for r in ranks {
            counts[r.value() as usize] += 1;
        }
        Self::from_counts(&counts)
    }

    /// Create RankGroups from a rank count array indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups = [(Rank::Two, 0u8); 13];
        let mut len = 0;
        for rank in Rank::ALL {
            let count = rank_counts[rank.value() as usize];
            if count > 0 {
                groups[len] = (rank, count);
                len += 1;
            }
        }
        groups[..len].sort_unstable_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { groups, len }
    }

    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups[..self.len]
    }

    fn of_size(&self, size: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups().iter().filter(move |(_, count)| *count == size).map(|(rank, _)| *rank)
    }

    /// Rank appearing five times; only possible once wilds are substituted.
    pub fn quint(&self) -> Option<Rank> {
        self.of_size(5).next()
    }

    pub fn quad(&self) -> Option<Rank> {
        self.of_size(4).next()
    }

    pub fn trips(&self) -> Option<Rank> {
        self.of_size(3).next()
    }

    /// All pair ranks, descending.
    pub fn pairs(&self) -> impl Iterator<Item = Rank> + '_ {
        self.of_size(2)
    }

    /// All singleton (kicker) ranks, descending.
    pub fn kickers(&self) -> impl Iterator<Item = Rank> + '_ {
        self.of_size(1)
    }

    pub fn has_full_house(&self) -> bool {
        self.trips().is_some() && self.pairs().next().is_some()
    }

    /// Number of distinct ranks.
    pub fn distinct(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_counts(pairs: &[(u8, u8)]) -> [u8; 15] {
        let mut counts = [0u8; 15];
        for &(rank_val, count) in pairs {
            counts[rank_val as usize] = count;
        }
        counts
    }

    fn collect(it: impl Iterator<Item = Rank>) -> Vec<Rank> {
        it.collect()
    }

    #[test]
    fn test_quint_from_substituted_ranks() {
        let groups = RankGroups::from_ranks(&[Rank::Nine; 5]);
        assert_eq!(groups.quint(), Some(Rank::Nine));
        assert_eq!(groups.quad(), None);
        assert_eq!(groups.distinct(), 1);
    }

    #[test]
    fn test_quad() {
        let groups = RankGroups::from_counts(&make_counts(&[(14, 4), (13, 1)]));
        assert_eq!(groups.quad(), Some(Rank::Ace));
        assert_eq!(groups.trips(), None);
        assert!(groups.pairs().next().is_none());
        assert_eq!(collect(groups.kickers()), vec![Rank::King]);
    }

    #[test]
    fn test_full_house() {
        let groups = RankGroups::from_counts(&make_counts(&[(14, 3), (13, 2)]));
        assert!(groups.has_full_house());
        assert_eq!(groups.trips(), Some(Rank::Ace));
        assert_eq!(collect(groups.pairs()), vec![Rank::King]);
    }

    #[test]
    fn test_two_pair() {
        let groups = RankGroups::from_ranks(&[Rank::King, Rank::Ten, Rank::Ace, Rank::King, Rank::Ace]);
        assert_eq!(collect(groups.pairs()), vec![Rank::Ace, Rank::King]);
        assert_eq!(collect(groups.kickers()), vec![Rank::Ten]);
        assert!(!groups.has_full_house());
    }

    #[test]
    fn test_three_card_pair() {
        let groups = RankGroups::from_ranks(&[Rank::Four, Rank::Jack, Rank::Four]);
        assert_eq!(collect(groups.pairs()), vec![Rank::Four]);
        assert_eq!(collect(groups.kickers()), vec![Rank::Jack]);
        assert_eq!(groups.distinct(), 2);
    }

    #[test]
    fn test_sorting() {
        let groups = RankGroups::from_counts(&make_counts(&[(5, 1), (14, 1), (10, 2)]));
        let ranks: Vec<Rank> = groups.groups().iter().map(|(r, _)| *r).collect();
        assert_eq!(ranks, vec![Rank::Ten, Rank::Ace, Rank::Five]);
    }

    #[test]
    fn test_every_rank_fits_inline() {
        let groups = RankGroups::from_ranks(&Rank::ALL);
        assert_eq!(groups.distinct(), 13);
        assert_eq!(groups.groups()[0], (Rank::Ace, 1));
        assert_eq!(groups.groups()[12], (Rank::Two, 1));
    }
}
