use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// Card rank, Ace high. Discriminants match pip values (`Two = 2` .. `Ace = 14`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }

    pub fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Pip value, 2..=14.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Zero-based index into rank-ordered tables (Two = 0 .. Ace = 12).
    pub fn index(self) -> usize {
        (self as u8 - 2) as usize
    }

    /// Inverse of [`Rank::index`].
    pub fn from_index(index: usize) -> Option<Rank> {
        Rank::ALL.get(index).copied()
    }
}

/// Card suit. The discriminant doubles as the suit block index in bitmasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn from_char(c: char) -> Option<Suit> {
        let suit = match c {
            'h' => Suit::Hearts,
            'd' => Suit::Diamonds,
            'c' => Suit::Clubs,
            's' => Suit::Spades,
            _ => return None,
        };
        Some(suit)
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// One playing card. Ordered by rank first, suit as tie-breaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    pub fn rank(self) -> Rank {
        self.rank
    }

    pub fn suit(self) -> Suit {
        self.suit
    }
}

impl FromStr for Card {
    type Err = EngineError;

    /// Parses standard two-character notation, e.g. `Kh` for the King of Hearts.
    fn from_str(s: &str) -> Result<Card, EngineError> {
        let mut chars = s.chars();
        let (Some(rank_char), Some(suit_char), None) =
            (chars.next(), chars.next(), chars.next())
        else {
            return Err(EngineError::InvalidCard(s.to_string()));
        };

        let rank =
            Rank::from_char(rank_char).ok_or_else(|| EngineError::InvalidCard(s.to_string()))?;
        let suit =
            Suit::from_char(suit_char).ok_or_else(|| EngineError::InvalidCard(s.to_string()))?;
        Ok(Card::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

/// Parses multiple cards from a single string.
///
/// Accepted layouts:
/// - concatenated: `"AhKsQd"`
/// - space-separated: `"Ah Ks Qd"`
/// - comma-separated: `"Ah,Ks,Qd"`
///
/// # Example
/// ```rust
/// use oddsmith_core::parse_cards;
///
/// let cards = parse_cards("Ah Ks Qd").unwrap();
/// assert_eq!(cards.len(), 3);
/// assert_eq!(cards[0].to_string(), "Ah");
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, EngineError> {
    let cleaned: String = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();

    if cleaned.is_empty() {
        return Err(EngineError::InvalidCard("empty card string".to_string()));
    }
    if cleaned.len() % 2 != 0 {
        return Err(EngineError::InvalidCard(s.to_string()));
    }

    cleaned
        .as_bytes()
        .chunks(2)
        .map(|chunk| std::str::from_utf8(chunk).expect("ASCII card notation").parse())
        .collect()
}
