use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::card::Card;
use crate::deck::Deck;
use crate::error::EngineError;
use crate::evaluator::evaluate;
use crate::range::Range;

/// Normalized showdown frequencies for the hero. `win + tie + loss == 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimResult {
    pub win: f64,
    pub tie: f64,
    pub loss: f64,
}

impl SimResult {
    /// Pot share approximation: full credit for wins, half for chops.
    pub fn equity(&self) -> f64 {
        self.win + 0.5 * self.tie
    }
}

/// Monte-Carlo equity engine for No-Limit Hold'em showdowns.
///
/// Each iteration samples the hero's hand from a weighted range, deals
/// opponents from their (blocker-filtered) ranges, completes the board, and
/// scores the showdown. All randomness flows through the seed, so equal
/// seeds and inputs give bit-identical results (`SmallRng` is the PRNG).
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator;

impl Simulator {
    pub fn new() -> Simulator {
        Simulator
    }

    /// Runs with an entropy seed. Deterministic callers use [`Simulator::run_seeded`].
    #[allow(clippy::too_many_arguments)]
    pub fn run(
        &self,
        hero_range: &Range,
        board: &Board,
        num_opponents: usize,
        deck: &Deck,
        opponent_ranges: &[Range],
        iterations: usize,
    ) -> Result<SimResult, EngineError> {
        self.run_seeded(
            hero_range,
            board,
            num_opponents,
            deck,
            opponent_ranges,
            iterations,
            rand::random(),
        )
    }

    /// Runs `iterations` seeded showdown simulations.
    ///
    /// The deck must exclude cards already on the board (board cards are
    /// stripped defensively). Fails with `NoAvailableCombo` when any range
    /// runs dry after blocker removal mid-simulation; no partial results are
    /// reported in that case.
    #[allow(clippy::too_many_arguments)]
    pub fn run_seeded(
        &self,
        hero_range: &Range,
        board: &Board,
        num_opponents: usize,
        deck: &Deck,
        opponent_ranges: &[Range],
        iterations: usize,
        seed: u64,
    ) -> Result<SimResult, EngineError> {
        if opponent_ranges.len() != num_opponents {
            return Err(EngineError::InvalidArgument(format!(
                "expected {} opponent ranges, got {}",
                num_opponents,
                opponent_ranges.len()
            )));
        }
        if iterations == 0 {
            return Err(EngineError::InvalidArgument(
                "iterations must be positive".to_string(),
            ));
        }
        if board.len() > 5 {
            return Err(EngineError::InvalidArgument(format!(
                "board holds {} cards, at most 5 allowed",
                board.len()
            )));
        }

        let mut rng = SmallRng::seed_from_u64(seed);
        let mut base_deck = deck.clone();
        base_deck.remove_all(board.cards());

        let mut wins = 0u64;
        let mut ties = 0u64;
        let mut losses = 0u64;

        for _ in 0..iterations {
            let mut sim_deck = base_deck.clone();
            sim_deck.shuffle_with(&mut rng);

            let hero = hero_range
                .sample(&mut rng)
                .ok_or(EngineError::NoAvailableCombo)?;
            sim_deck.remove_all(&hero.cards());

            // Opponents are dealt in input order; every card dealt blocks
            // all later ranges.
            let mut opp_ranges = opponent_ranges.to_vec();
            for range in &mut opp_ranges {
                range.remove_blocked(&hero.cards());
            }

            let mut opp_hands = Vec::with_capacity(num_opponents);
            for i in 0..num_opponents {
                let combo = opp_ranges[i]
                    .sample(&mut rng)
                    .ok_or(EngineError::NoAvailableCombo)?;
                sim_deck.remove_all(&combo.cards());
                for later in opp_ranges[i + 1..].iter_mut() {
                    later.remove_blocked(&combo.cards());
                }
                opp_hands.push(combo);
            }

            let drawn = sim_deck.draw_n(5 - board.len())?;
            let mut community = board.cards().to_vec();
            community.extend(drawn);

            let hero_score = evaluate(&with_board(&hero.cards(), &community))?.score;
            let mut best_score = hero_score;
            let mut opp_scores = Vec::with_capacity(num_opponents);
            for combo in &opp_hands {
                let score = evaluate(&with_board(&combo.cards(), &community))?.score;
                best_score = best_score.max(score);
                opp_scores.push(score);
            }

            let opponents_at_best = opp_scores.iter().filter(|&&s| s == best_score).count();
            if hero_score == best_score && opponents_at_best == 0 {
                wins += 1;
            } else if hero_score == best_score {
                ties += 1;
            } else {
                losses += 1;
            }
        }

        let total = iterations as f64;
        Ok(SimResult {
            win: wins as f64 / total,
            tie: ties as f64 / total,
            loss: losses as f64 / total,
        })
    }
}

fn with_board(hole: &[Card], community: &[Card]) -> Vec<Card> {
    let mut cards = Vec::with_capacity(hole.len() + community.len());
    cards.extend_from_slice(hole);
    cards.extend_from_slice(community);
    cards
}
