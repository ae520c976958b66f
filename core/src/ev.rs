//! Weighted-outcome expectation helpers for presentation layers.

/// One outcome with a relative weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedOutcome {
    pub weight: f64,
    pub value: f64,
}

/// Weighted mean of the outcomes; 0 when the total weight is 0.
pub fn expected_value(outcomes: &[WeightedOutcome]) -> f64 {
    let (weighted_sum, total_weight) = outcomes.iter().fold((0.0, 0.0), |(sum, total), o| {
        (sum + o.weight * o.value, total + o.weight)
    });

    if total_weight != 0.0 {
        weighted_sum / total_weight
    } else {
        0.0
    }
}

/// Heads-up, single-street EV of calling a bet with the given equity.
pub fn call_ev(equity: f64, pot: u32, call_amount: u32) -> f64 {
    expected_value(&[
        WeightedOutcome {
            weight: equity,
            value: f64::from(pot + call_amount),
        },
        WeightedOutcome {
            weight: 1.0 - equity,
            value: -f64::from(call_amount),
        },
    ])
}

/// Heads-up, single-street EV of raising and getting called.
pub fn raise_ev(equity: f64, pot: u32, raise_amount: u32, opponent_call: u32) -> f64 {
    expected_value(&[
        WeightedOutcome {
            weight: equity,
            value: f64::from(pot + raise_amount + opponent_call),
        },
        WeightedOutcome {
            weight: 1.0 - equity,
            value: -f64::from(raise_amount),
        },
    ])
}

/// Folding forfeits nothing beyond chips already committed.
pub fn fold_ev() -> f64 {
    0.0
}
