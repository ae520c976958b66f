use std::cmp::Ordering;

use crate::card::{Card, Rank, Suit};
use crate::error::EngineError;
use crate::mask::{
    cards_mask, flush_suit, mask_to_cards, rank_counts, rank_mask, straight_high, suit_mask,
    HandMask,
};

/// Hand categories, weakest first. The discriminant is the top field of the
/// packed score, so category comparison falls out of integer comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum HandCategory {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl HandCategory {
    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

/// The evaluation of one 5-7 card hand.
///
/// `score` totally orders hands: higher beats lower, equal means a chopped
/// pot. It packs the category above the five best-hand ranks, most
/// significant first, so tie-breaks within a category need no extra data.
#[derive(Debug, Clone)]
pub struct HandRank {
    pub category: HandCategory,
    pub best_five: [Card; 5],
    pub score: u64,
}

impl PartialEq for HandRank {
    fn eq(&self, other: &HandRank) -> bool {
        self.score == other.score
    }
}

impl Eq for HandRank {}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &HandRank) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &HandRank) -> Ordering {
        self.score.cmp(&other.score)
    }
}

fn compute_score(category: HandCategory, best_five: &[Card; 5]) -> u64 {
    let mut score = (category as u64) << 20;
    for (i, card) in best_five.iter().enumerate() {
        score |= u64::from(card.rank().value()) << (16 - i * 4);
    }
    score
}

fn hand_rank(category: HandCategory, best_five: [Card; 5]) -> HandRank {
    let score = compute_score(category, &best_five);
    HandRank {
        category,
        best_five,
        score,
    }
}

/// Rank/count pairs sorted by count descending, rank descending.
fn sorted_rank_counts(mask: HandMask) -> Vec<(Rank, u8)> {
    let counts = rank_counts(mask);
    let mut sorted: Vec<(Rank, u8)> = Rank::ALL
        .into_iter()
        .rev()
        .filter_map(|r| {
            let count = counts[r.index()];
            (count > 0).then_some((r, count))
        })
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
    sorted
}

/// Up to `n` cards of `rank`, in suit order.
fn pick_rank(mask: HandMask, rank: Rank, n: usize) -> Vec<Card> {
    mask_to_cards(mask)
        .into_iter()
        .filter(|c| c.rank() == rank)
        .take(n)
        .collect()
}

/// The `n` highest cards in the mask outside `exclude`.
fn pick_highest(exclude: &[Card], mask: HandMask, n: usize) -> Vec<Card> {
    let mut rest: Vec<Card> = mask_to_cards(mask)
        .into_iter()
        .filter(|c| !exclude.contains(c))
        .collect();
    rest.sort_by(|a, b| b.cmp(a));
    rest.truncate(n);
    rest
}

fn five(cards: Vec<Card>) -> [Card; 5] {
    <[Card; 5]>::try_from(cards).expect("category builders assemble exactly five cards")
}

/// Rank sequence of a straight, highest first; the wheel runs 5-4-3-2-A.
fn straight_ranks(high: Rank) -> [Rank; 5] {
    if high == Rank::Five {
        [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace]
    } else {
        let mut ranks = [high; 5];
        for (i, slot) in ranks.iter_mut().enumerate() {
            *slot = Rank::from_index(high.index() - i).expect("straight spans valid ranks");
        }
        ranks
    }
}

fn check_straight_flush(mask: HandMask, flush: Option<Suit>) -> Option<HandRank> {
    let suit = flush?;
    let high = straight_high(suit_mask(mask, suit))?;

    let category = if high == Rank::Ace {
        HandCategory::RoyalFlush
    } else {
        HandCategory::StraightFlush
    };
    let best = straight_ranks(high).map(|r| Card::new(r, suit));
    Some(hand_rank(category, best))
}

fn check_four_of_a_kind(mask: HandMask, counts: &[(Rank, u8)]) -> Option<HandRank> {
    let &(rank, count) = counts.first()?;
    if count != 4 {
        return None;
    }

    let mut best = pick_rank(mask, rank, 4);
    best.extend(pick_highest(&best, mask, 1));
    Some(hand_rank(HandCategory::FourOfAKind, five(best)))
}

fn check_full_house(mask: HandMask, counts: &[(Rank, u8)]) -> Option<HandRank> {
    let (&(trips, trips_count), &(pair, pair_count)) = (counts.first()?, counts.get(1)?);
    if trips_count != 3 || pair_count < 2 {
        return None;
    }

    let mut best = pick_rank(mask, trips, 3);
    best.extend(pick_rank(mask, pair, 2));
    Some(hand_rank(HandCategory::FullHouse, five(best)))
}

fn check_flush(mask: HandMask, flush: Option<Suit>) -> Option<HandRank> {
    let suit = flush?;
    let block = suit_mask(mask, suit);

    let best: Vec<Card> = Rank::ALL
        .into_iter()
        .rev()
        .filter(|r| block & (1 << r.index()) != 0)
        .take(5)
        .map(|r| Card::new(r, suit))
        .collect();
    Some(hand_rank(HandCategory::Flush, five(best)))
}

fn check_straight(mask: HandMask) -> Option<HandRank> {
    let high = straight_high(rank_mask(mask))?;
    let best = straight_ranks(high).map(|r| pick_rank(mask, r, 1)[0]);
    Some(hand_rank(HandCategory::Straight, best))
}

fn check_three_of_a_kind(mask: HandMask, counts: &[(Rank, u8)]) -> Option<HandRank> {
    let &(rank, count) = counts.first()?;
    if count != 3 {
        return None;
    }

    let mut best = pick_rank(mask, rank, 3);
    best.extend(pick_highest(&best, mask, 2));
    Some(hand_rank(HandCategory::ThreeOfAKind, five(best)))
}

fn check_two_pair(mask: HandMask, counts: &[(Rank, u8)]) -> Option<HandRank> {
    let (&(hi, hi_count), &(lo, lo_count)) = (counts.first()?, counts.get(1)?);
    if hi_count != 2 || lo_count != 2 {
        return None;
    }

    let mut best = pick_rank(mask, hi, 2);
    best.extend(pick_rank(mask, lo, 2));
    let kicker = pick_highest(&best, mask, 1);
    best.extend(kicker);
    Some(hand_rank(HandCategory::TwoPair, five(best)))
}

fn check_one_pair(mask: HandMask, counts: &[(Rank, u8)]) -> Option<HandRank> {
    let &(rank, count) = counts.first()?;
    if count != 2 {
        return None;
    }

    let mut best = pick_rank(mask, rank, 2);
    best.extend(pick_highest(&best, mask, 3));
    Some(hand_rank(HandCategory::OnePair, five(best)))
}

/// Classifies the best five-card poker hand among 5 to 7 cards.
///
/// # Example
/// ```rust
/// use oddsmith_core::{evaluate, parse_cards, HandCategory};
///
/// let cards = parse_cards("As Ks Qs Js Ts").unwrap();
/// let rank = evaluate(&cards).unwrap();
/// assert_eq!(rank.category, HandCategory::RoyalFlush);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandRank, EngineError> {
    if cards.len() < 5 || cards.len() > 7 {
        return Err(EngineError::InvalidHand(format!(
            "expected 5-7 cards, got {}",
            cards.len()
        )));
    }

    let mask = cards_mask(cards);
    if mask.count_ones() as usize != cards.len() {
        return Err(EngineError::InvalidHand(
            "duplicate card in evaluated hand".to_string(),
        ));
    }

    let flush = flush_suit(mask);
    if let Some(rank) = check_straight_flush(mask, flush) {
        return Ok(rank);
    }

    let counts = sorted_rank_counts(mask);
    let result = check_four_of_a_kind(mask, &counts)
        .or_else(|| check_full_house(mask, &counts))
        .or_else(|| check_flush(mask, flush))
        .or_else(|| check_straight(mask))
        .or_else(|| check_three_of_a_kind(mask, &counts))
        .or_else(|| check_two_pair(mask, &counts))
        .or_else(|| check_one_pair(mask, &counts))
        .unwrap_or_else(|| {
            let best = pick_highest(&[], mask, 5);
            hand_rank(HandCategory::HighCard, five(best))
        });

    Ok(result)
}
