use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::card::{Card, Rank, Suit};
use crate::error::EngineError;

/// An ordered collection of cards plus a snapshot of its original contents.
///
/// Cards are drawn from the back. [`Deck::reset`] restores the snapshot
/// exactly, including order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    original: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Deck {
        Deck {
            original: cards.clone(),
            cards,
        }
    }

    /// All 52 cards in suit-major order (hearts, diamonds, clubs, spades).
    pub fn standard() -> Deck {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck::new(cards)
    }

    /// Shuffles with a nondeterministic source.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut rand::rng());
    }

    /// Shuffles with `SmallRng` seeded from `seed`. Equal seeds produce
    /// equal orderings for a given `rand` version.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffles with a caller-provided RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Restores the deck to its original contents and order.
    pub fn reset(&mut self) {
        self.cards = self.original.clone();
    }

    /// Draws the top (last) card.
    pub fn draw(&mut self) -> Result<Card, EngineError> {
        self.cards
            .pop()
            .ok_or_else(|| EngineError::OutOfRange("cannot draw from empty deck".to_string()))
    }

    /// Draws the top `n` cards, preserving their in-deck order. Asking for
    /// more cards than the deck holds is an invalid argument.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, EngineError> {
        if n > self.cards.len() {
            return Err(EngineError::InvalidArgument(format!(
                "cannot draw {} cards from a deck of {}",
                n,
                self.cards.len()
            )));
        }
        Ok(self.cards.split_off(self.cards.len() - n))
    }

    /// Removes `card` if present; absent cards are a no-op.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|&c| c != card);
    }

    /// Removes every listed card that is present.
    pub fn remove_all(&mut self, cards: &[Card]) {
        self.cards.retain(|c| !cards.contains(c));
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}
