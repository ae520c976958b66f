//! Oddsmith Core - offline No-Limit Texas Hold'em analysis.
//!
//! Three subsystems do the heavy lifting: a 5-7 card hand evaluator that
//! packs every hand into a totally ordered integer score, a Monte-Carlo
//! equity simulator over weighted hand ranges, and a game-tree builder that
//! expands a decision point under a bet-sizing abstraction.

pub mod board;
pub mod card;
pub mod combinatorics;
pub mod deck;
mod error;
pub mod ev;
pub mod evaluator;
pub mod hand;
pub mod mask;
pub mod notation;
pub mod pot;
pub mod range;
pub mod simulator;
pub mod stack;
pub mod state;
pub mod tree;

pub use board::Board;
pub use card::{parse_cards, Card, Rank, Suit};
pub use combinatorics::{combination_count, generate_combinations, Combinations};
pub use deck::Deck;
pub use error::EngineError;
pub use ev::{call_ev, expected_value, fold_ev, raise_ev, WeightedOutcome};
pub use evaluator::{evaluate, HandCategory, HandRank};
pub use hand::Hand;
pub use notation::{parse_notation, parse_range, RangeToken, TokenKind};
pub use pot::{PlayerId, Pot};
pub use range::{Combo, Range};
pub use simulator::{SimResult, Simulator};
pub use stack::Stack;
pub use state::{DecisionState, PlayerState, RoundState, Street};
pub use tree::{Action, BuilderConfig, GameTreeBuilder, GameTreeNode, NodeKind};
