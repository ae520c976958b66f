use rand::Rng;
use rand::RngExt;

use crate::card::Card;
use crate::error::EngineError;
use crate::hand::Hand;

/// One specific unordered pair of hole cards with a sampling weight.
///
/// The cards are normalized so `first < second`. Equality ignores weight.
#[derive(Debug, Clone, Copy)]
pub struct Combo {
    pub first: Card,
    pub second: Card,
    pub weight: f64,
}

impl Combo {
    /// Weight must be positive and finite; sampling treats it as a relative
    /// frequency.
    pub fn new(c1: Card, c2: Card, weight: f64) -> Result<Combo, EngineError> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(EngineError::InvalidArgument(format!(
                "combo weight must be positive, got {}",
                weight
            )));
        }
        Ok(Combo::ordered(c1, c2, weight))
    }

    fn ordered(c1: Card, c2: Card, weight: f64) -> Combo {
        let (first, second) = if c2 < c1 { (c2, c1) } else { (c1, c2) };
        Combo {
            first,
            second,
            weight,
        }
    }

    pub fn cards(&self) -> [Card; 2] {
        [self.first, self.second]
    }

    pub fn hand(&self) -> Hand {
        Hand::new(self.first, self.second)
    }
}

impl PartialEq for Combo {
    fn eq(&self, other: &Combo) -> bool {
        self.first == other.first && self.second == other.second
    }
}

impl Eq for Combo {}

/// A weighted set of hole-card combos, unique up to card identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Range {
    combos: Vec<Combo>,
}

impl Range {
    pub fn new() -> Range {
        Range::default()
    }

    /// Adds a combo with weight 1. No-op when an equal combo is present.
    pub fn add_combo(&mut self, c1: Card, c2: Card) {
        self.insert(Combo::ordered(c1, c2, 1.0));
    }

    /// Adds a weighted combo; the weight must be positive and finite.
    pub fn add_combo_weighted(
        &mut self,
        c1: Card,
        c2: Card,
        weight: f64,
    ) -> Result<(), EngineError> {
        self.insert(Combo::new(c1, c2, weight)?);
        Ok(())
    }

    fn insert(&mut self, combo: Combo) {
        if !self.combos.contains(&combo) {
            self.combos.push(combo);
        }
    }

    pub fn add_hand(&mut self, hand: Hand) {
        self.add_combo(hand.low(), hand.high());
    }

    /// Deletes every combo containing any of the `known` cards.
    pub fn remove_blocked(&mut self, known: &[Card]) {
        self.combos
            .retain(|c| !known.contains(&c.first) && !known.contains(&c.second));
    }

    /// Weighted sampling proportional to each combo's weight.
    ///
    /// Draws `uniform(0, Σw)` and walks the combo list subtracting weights;
    /// accumulated floating-point drift falls back to the last combo. Returns
    /// `None` on an empty range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Combo> {
        if self.combos.is_empty() {
            return None;
        }

        let total: f64 = self.combos.iter().map(|c| c.weight).sum();
        let mut pick = rng.random_range(0.0..total);
        for combo in &self.combos {
            pick -= combo.weight;
            if pick <= 0.0 {
                return Some(*combo);
            }
        }
        self.combos.last().copied()
    }

    pub fn combos(&self) -> &[Combo] {
        &self.combos
    }

    pub fn len(&self) -> usize {
        self.combos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn combo_normalizes_card_order() {
        let a = Combo::new(card("Ah"), card("Kd"), 1.0).unwrap();
        let b = Combo::new(card("Kd"), card("Ah"), 2.5).unwrap();
        assert_eq!(a, b);
        assert!(a.first < a.second);
    }

    #[test]
    fn non_positive_weights_are_rejected() {
        for weight in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Combo::new(card("Ah"), card("Kd"), weight);
            assert!(matches!(result, Err(EngineError::InvalidArgument(_))));
        }

        let mut range = Range::new();
        let err = range
            .add_combo_weighted(card("Ah"), card("Kd"), -2.0)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
        assert!(range.is_empty());
    }

    #[test]
    fn duplicate_combos_are_ignored() {
        let mut range = Range::new();
        range.add_combo(card("Ah"), card("Kd"));
        range.add_combo(card("Kd"), card("Ah"));
        range
            .add_combo_weighted(card("Ah"), card("Kd"), 3.0)
            .unwrap();
        assert_eq!(range.len(), 1);

        range.add_combo(card("Ah"), card("Qs"));
        assert_eq!(range.len(), 2);
    }

    #[test]
    fn remove_blocked_drops_combos_touching_known_cards() {
        let mut range = Range::new();
        range.add_combo(card("Ah"), card("Kd"));
        range.add_combo(card("Ah"), card("Qs"));
        range.add_combo(card("Kd"), card("Qs"));

        range.remove_blocked(&[card("Ah")]);
        assert_eq!(range.len(), 1);
        assert_eq!(
            range.combos()[0],
            Combo::new(card("Kd"), card("Qs"), 1.0).unwrap()
        );
    }

    #[test]
    fn sampling_respects_weights() {
        let mut range = Range::new();
        range
            .add_combo_weighted(card("Ah"), card("Kd"), 1.0)
            .unwrap();
        range
            .add_combo_weighted(card("Qs"), card("Jc"), 3.0)
            .unwrap();

        let mut rng = SmallRng::seed_from_u64(42);
        let heavy = Combo::new(card("Qs"), card("Jc"), 3.0).unwrap();

        let mut count_light = 0u32;
        let mut count_heavy = 0u32;
        for _ in 0..10_000 {
            match range.sample(&mut rng) {
                Some(c) if c == heavy => count_heavy += 1,
                Some(_) => count_light += 1,
                None => unreachable!("range is non-empty"),
            }
        }

        let ratio = f64::from(count_heavy) / f64::from(count_light);
        assert!((ratio - 3.0).abs() < 0.3, "observed ratio {}", ratio);
    }

    #[test]
    fn sampling_empty_range_yields_none() {
        let range = Range::new();
        let mut rng = SmallRng::seed_from_u64(42);
        assert_eq!(range.sample(&mut rng), None);
    }

    #[test]
    fn sampling_single_combo_always_returns_it() {
        let mut range = Range::new();
        range.add_combo(card("Ah"), card("Kd"));

        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..10 {
            let sampled = range.sample(&mut rng).unwrap();
            assert_eq!(sampled, Combo::new(card("Ah"), card("Kd"), 1.0).unwrap());
        }
    }
}
