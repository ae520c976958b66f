//! Bitmask primitives for hand evaluation.
//!
//! A hand embeds into the low 52 bits of a `u64`: bit `suit * 13 + rank_index`
//! is set iff the card is present. A 13-bit rank mask ORs the four suit
//! blocks together.

use crate::card::{Card, Rank, Suit};

pub type HandMask = u64;
pub type RankMask = u16;

const SUIT_BLOCK: HandMask = 0x1FFF;
const STRAIGHT_WINDOW: RankMask = 0b11111;
const WHEEL_MASK: RankMask = 0b1_0000_0000_1111;

pub fn card_mask(card: Card) -> HandMask {
    1 << (card.suit().index() * 13 + card.rank().index())
}

pub fn cards_mask(cards: &[Card]) -> HandMask {
    cards.iter().fold(0, |mask, &c| mask | card_mask(c))
}

/// The 13-bit rank block of a single suit.
pub fn suit_mask(mask: HandMask, suit: Suit) -> RankMask {
    ((mask >> (suit.index() * 13)) & SUIT_BLOCK) as RankMask
}

/// Ranks present in any suit.
pub fn rank_mask(mask: HandMask) -> RankMask {
    Suit::ALL
        .into_iter()
        .fold(0, |ranks, s| ranks | suit_mask(mask, s))
}

/// Occurrence count (0..=4) per rank, indexed by [`Rank::index`].
pub fn rank_counts(mask: HandMask) -> [u8; 13] {
    let mut counts = [0u8; 13];
    for suit in Suit::ALL {
        let block = suit_mask(mask, suit);
        for (rank_index, count) in counts.iter_mut().enumerate() {
            if block & (1 << rank_index) != 0 {
                *count += 1;
            }
        }
    }
    counts
}

/// The first suit holding five or more cards, if any.
pub fn flush_suit(mask: HandMask) -> Option<Suit> {
    Suit::ALL
        .into_iter()
        .find(|&s| suit_mask(mask, s).count_ones() >= 5)
}

/// Highest straight in a rank mask, the wheel (A-2-3-4-5) counting as
/// five-high. A straight ending higher always wins over the wheel.
pub fn straight_high(ranks: RankMask) -> Option<Rank> {
    for start in (0..=8).rev() {
        if (ranks >> start) & STRAIGHT_WINDOW == STRAIGHT_WINDOW {
            return Rank::from_index(start + 4);
        }
    }
    if ranks & WHEEL_MASK == WHEEL_MASK {
        return Some(Rank::Five);
    }
    None
}

/// Reconstructs the cards in a mask, suit-major, ranks ascending.
pub fn mask_to_cards(mask: HandMask) -> Vec<Card> {
    let mut cards = Vec::with_capacity(mask.count_ones() as usize);
    for suit in Suit::ALL {
        let block = suit_mask(mask, suit);
        for rank in Rank::ALL {
            if block & (1 << rank.index()) != 0 {
                cards.push(Card::new(rank, suit));
            }
        }
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::parse_cards;

    #[test]
    fn single_card_sets_one_bit() {
        let card = "Ah".parse().unwrap();
        assert_eq!(card_mask(card).count_ones(), 1);
    }

    #[test]
    fn mask_round_trips_cards() {
        let cards = parse_cards("2h Ad Tc Js 7h").unwrap();
        let mask = cards_mask(&cards);
        let rebuilt = mask_to_cards(mask);

        assert_eq!(rebuilt.len(), cards.len());
        for card in &cards {
            assert!(rebuilt.contains(card));
        }
    }

    #[test]
    fn detects_normal_straight() {
        let mask = cards_mask(&parse_cards("6c 2h 3d 4s 5d").unwrap());
        assert_eq!(straight_high(rank_mask(mask)), Some(Rank::Six));
    }

    #[test]
    fn detects_wheel_as_five_high() {
        let mask = cards_mask(&parse_cards("Ac 2h 3d 4s 5d").unwrap());
        assert_eq!(straight_high(rank_mask(mask)), Some(Rank::Five));
    }

    #[test]
    fn prefers_higher_straight_over_wheel() {
        let mask = cards_mask(&parse_cards("Ac 2h 3d 4s 5d 6c").unwrap());
        assert_eq!(straight_high(rank_mask(mask)), Some(Rank::Six));
    }

    #[test]
    fn rejects_broken_straight() {
        let mask = cards_mask(&parse_cards("2h 3d 4s 5d Qd").unwrap());
        assert_eq!(straight_high(rank_mask(mask)), None);
    }

    #[test]
    fn counts_rank_occurrences() {
        let mask = cards_mask(&parse_cards("2h 2d Td Qh Qd").unwrap());
        let counts = rank_counts(mask);

        let expected = [2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 0];
        assert_eq!(counts, expected);
    }

    #[test]
    fn finds_flush_suit() {
        let mask = cards_mask(&parse_cards("2h 5h 9h Jh Kh Ad").unwrap());
        assert_eq!(flush_suit(mask), Some(Suit::Hearts));

        let mask = cards_mask(&parse_cards("2h 5h 9h Jh Kd Ad").unwrap());
        assert_eq!(flush_suit(mask), None);
    }
}
