use std::fmt;
use std::str::FromStr;

use crate::card::{Card, Rank, Suit};
use crate::error::EngineError;
use crate::hand::Hand;
use crate::range::Range;

/// How a range token maps rank pairs onto concrete suit combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Every suit combination of two distinct ranks (16 combos).
    Normal,
    /// The 6 unordered suit pairs of one rank.
    Pair,
    /// Same-suit combos only (4).
    Suited,
    /// Different-suit combos only (12).
    Offsuit,
}

/// One textual range token, e.g. `TT+`, `AKs`, `Q9o`.
///
/// `plus` expands pairs upward to aces and non-pair kickers downward to,
/// but not below, ten (`AKs+` covers AKs, AQs, AJs, ATs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeToken {
    pub rank1: Rank,
    pub rank2: Rank,
    pub kind: TokenKind,
    pub plus: bool,
}

impl RangeToken {
    /// Expands the token into concrete two-card hands.
    pub fn hands(&self) -> Vec<Hand> {
        match self.kind {
            TokenKind::Pair => self
                .pair_ranks()
                .flat_map(pair_hands)
                .collect(),
            TokenKind::Suited => self
                .kicker_ranks()
                .flat_map(|k| suited_hands(self.rank1, k))
                .collect(),
            TokenKind::Offsuit => self
                .kicker_ranks()
                .flat_map(|k| offsuit_hands(self.rank1, k))
                .collect(),
            TokenKind::Normal => self
                .kicker_ranks()
                .flat_map(|k| {
                    suited_hands(self.rank1, k).chain(offsuit_hands(self.rank1, k))
                })
                .collect(),
        }
    }

    fn pair_ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        let base = self.rank1;
        let plus = self.plus;
        Rank::ALL
            .into_iter()
            .filter(move |&r| r == base || (plus && r > base))
    }

    fn kicker_ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        let top = self.rank2;
        let floor = if self.plus { top.min(Rank::Ten) } else { top };
        Rank::ALL
            .into_iter()
            .filter(move |&r| r >= floor && r <= top)
    }
}

fn pair_hands(rank: Rank) -> impl Iterator<Item = Hand> {
    (0..4).flat_map(move |i| {
        ((i + 1)..4).map(move |j| {
            Hand::new(
                Card::new(rank, Suit::ALL[i]),
                Card::new(rank, Suit::ALL[j]),
            )
        })
    })
}

fn suited_hands(r1: Rank, r2: Rank) -> impl Iterator<Item = Hand> {
    Suit::ALL
        .into_iter()
        .map(move |s| Hand::new(Card::new(r1, s), Card::new(r2, s)))
}

fn offsuit_hands(r1: Rank, r2: Rank) -> impl Iterator<Item = Hand> {
    Suit::ALL.into_iter().flat_map(move |s1| {
        Suit::ALL
            .into_iter()
            .filter(move |&s2| s2 != s1)
            .map(move |s2| Hand::new(Card::new(r1, s1), Card::new(r2, s2)))
    })
}

impl FromStr for RangeToken {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<RangeToken, EngineError> {
        let token = s.trim();
        if token.len() < 2 || token.len() > 4 {
            return Err(EngineError::InvalidRange(token.to_string()));
        }

        let (body, plus) = match token.strip_suffix('+') {
            Some(body) => (body, true),
            None => (token, false),
        };

        let chars: Vec<char> = body.chars().collect();
        if chars.len() < 2 || chars.len() > 3 {
            return Err(EngineError::InvalidRange(token.to_string()));
        }

        let a = Rank::from_char(chars[0])
            .ok_or_else(|| EngineError::InvalidRange(token.to_string()))?;
        let b = Rank::from_char(chars[1])
            .ok_or_else(|| EngineError::InvalidRange(token.to_string()))?;
        let (rank1, rank2) = if b > a { (b, a) } else { (a, b) };

        let kind = match chars.get(2).copied() {
            None if a == b => TokenKind::Pair,
            None => TokenKind::Normal,
            Some(_) if a == b => {
                return Err(EngineError::InvalidRange(format!(
                    "pair token {} cannot carry a suitedness suffix",
                    token
                )))
            }
            Some('s') => TokenKind::Suited,
            Some('o') => TokenKind::Offsuit,
            Some(_) => return Err(EngineError::InvalidRange(token.to_string())),
        };

        Ok(RangeToken {
            rank1,
            rank2,
            kind,
            plus,
        })
    }
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank1.to_char(), self.rank2.to_char())?;
        match self.kind {
            TokenKind::Suited => write!(f, "s")?,
            TokenKind::Offsuit => write!(f, "o")?,
            TokenKind::Normal | TokenKind::Pair => {}
        }
        if self.plus {
            write!(f, "+")?;
        }
        Ok(())
    }
}

/// Parses a comma-separated token list, tolerating whitespace.
pub fn parse_notation(s: &str) -> Result<Vec<RangeToken>, EngineError> {
    if s.trim().is_empty() {
        return Err(EngineError::InvalidRange("empty range".to_string()));
    }
    s.split(',').map(str::parse).collect()
}

/// Parses notation like `"TT+, AKs, Q9o"` into a [`Range`] with unit weights.
///
/// # Example
/// ```rust
/// use oddsmith_core::parse_range;
///
/// let range = parse_range("TT+").unwrap();
/// assert_eq!(range.len(), 30);
/// ```
pub fn parse_range(s: &str) -> Result<Range, EngineError> {
    let mut range = Range::new();
    for token in parse_notation(s)? {
        for hand in token.hands() {
            range.add_hand(hand);
        }
    }
    Ok(range)
}
