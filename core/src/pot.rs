use std::collections::BTreeMap;

/// Identifies a player across the pot, states, and tree.
pub type PlayerId = usize;

/// Per-player contribution ledger with a denormalized running total.
///
/// `total == Σ contributions` holds after every operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pot {
    contributions: BTreeMap<PlayerId, u32>,
    total: u32,
}

impl Pot {
    pub fn new() -> Pot {
        Pot::default()
    }

    pub fn add_contribution(&mut self, id: PlayerId, chips: u32) {
        *self.contributions.entry(id).or_insert(0) += chips;
        self.total += chips;
    }

    pub fn contribution(&self, id: PlayerId) -> u32 {
        self.contributions.get(&id).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Resolves a showdown win for `id` and removes the paid chips from the
    /// ledger. The winner collects their own contribution plus at most that
    /// amount from each other player, so callers can settle side-pots by
    /// invoking this for each winner from best hand to worst.
    pub fn winnings_for(&mut self, id: PlayerId) -> u32 {
        let cap = self.contribution(id);
        self.contributions.insert(id, 0);

        let mut winnings = cap;
        for (&pid, chips) in self.contributions.iter_mut() {
            if pid != id {
                let share = (*chips).min(cap);
                *chips -= share;
                winnings += share;
            }
        }

        self.total -= winnings;
        winnings
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn clear(&mut self) {
        self.contributions.clear();
        self.total = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_tracks_contributions() {
        let mut pot = Pot::new();
        pot.add_contribution(1, 100);
        pot.add_contribution(2, 50);
        pot.add_contribution(1, 25);

        assert_eq!(pot.contribution(1), 125);
        assert_eq!(pot.contribution(2), 50);
        assert_eq!(pot.total(), 175);
    }

    #[test]
    fn equal_contributions_pay_out_whole_pot() {
        let mut pot = Pot::new();
        pot.add_contribution(1, 100);
        pot.add_contribution(2, 100);
        pot.add_contribution(3, 100);

        assert_eq!(pot.winnings_for(1), 300);
        assert!(pot.is_empty());
    }

    #[test]
    fn short_stack_win_leaves_side_pot() {
        let mut pot = Pot::new();
        pot.add_contribution(1, 100);
        pot.add_contribution(2, 200);
        pot.add_contribution(3, 200);

        assert_eq!(pot.winnings_for(1), 300);
        assert!(!pot.is_empty());
        assert_eq!(pot.total(), 200);

        assert_eq!(pot.winnings_for(2), 200);
        assert!(pot.is_empty());
    }

    #[test]
    fn winnings_for_unknown_player_is_zero() {
        let mut pot = Pot::new();
        pot.add_contribution(1, 100);

        assert_eq!(pot.winnings_for(9), 0);
        assert_eq!(pot.total(), 100);
    }

    #[test]
    fn clear_empties_the_ledger() {
        let mut pot = Pot::new();
        pot.add_contribution(1, 10);
        pot.clear();
        assert!(pot.is_empty());
        assert_eq!(pot.contribution(1), 0);
    }
}
