use std::fmt;
use std::str::FromStr;

use crate::card::{parse_cards, Card};
use crate::error::EngineError;

/// Two hole cards. Storage is normalized so equality and ordering are
/// independent of the order the cards were given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hand {
    cards: [Card; 2],
}

impl Hand {
    pub fn new(a: Card, b: Card) -> Hand {
        let cards = if b < a { [b, a] } else { [a, b] };
        Hand { cards }
    }

    pub fn cards(&self) -> [Card; 2] {
        self.cards
    }

    pub fn low(&self) -> Card {
        self.cards[0]
    }

    pub fn high(&self) -> Card {
        self.cards[1]
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards[0] == card || self.cards[1] == card
    }
}

impl FromStr for Hand {
    type Err = EngineError;

    /// Parses exactly two cards, e.g. `"AhKh"` or `"Ah Kh"`.
    fn from_str(s: &str) -> Result<Hand, EngineError> {
        let cards = parse_cards(s)?;
        match cards.as_slice() {
            [a, b] if a != b => Ok(Hand::new(*a, *b)),
            [a, b] if a == b => Err(EngineError::InvalidHand(format!(
                "hand contains duplicate card {}",
                a
            ))),
            _ => Err(EngineError::InvalidHand(format!(
                "expected exactly 2 cards, got {}",
                cards.len()
            ))),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.cards[0], self.cards[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn equality_ignores_card_order() {
        let a = Hand::new(card("Ah"), card("Kh"));
        let b = Hand::new(card("Kh"), card("Ah"));
        assert_eq!(a, b);
        assert_eq!(a.cards(), b.cards());
    }

    #[test]
    fn parses_two_card_strings() {
        let hand: Hand = "AhKh".parse().unwrap();
        assert!(hand.contains(card("Ah")));
        assert!(hand.contains(card("Kh")));

        assert!("Ah".parse::<Hand>().is_err());
        assert!("AhKhQh".parse::<Hand>().is_err());
        assert!("AhAh".parse::<Hand>().is_err());
    }

    #[test]
    fn hands_sort_consistently() {
        let mut hands = vec![
            "AhKh".parse::<Hand>().unwrap(),
            "2c3c".parse::<Hand>().unwrap(),
            "KhAh".parse::<Hand>().unwrap(),
        ];
        hands.sort();
        hands.dedup();
        assert_eq!(hands.len(), 2);
        assert_eq!(hands[0], "2c3c".parse::<Hand>().unwrap());
    }
}
