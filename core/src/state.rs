use crate::board::Board;
use crate::deck::Deck;
use crate::hand::Hand;
use crate::pot::{PlayerId, Pot};
use crate::stack::Stack;

/// Betting round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }

    /// Board size the next street requires, or `None` after the river.
    pub fn next_board_target(self) -> Option<usize> {
        match self {
            Street::Preflop => Some(3),
            Street::Flop => Some(4),
            Street::Turn => Some(5),
            Street::River => None,
        }
    }
}

/// One player's view within a decision state.
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub id: PlayerId,
    pub stack: Stack,
    pub hand: Hand,
    pub current_bet: u32,
    pub folded: bool,
    pub still_to_act: bool,
}

impl PlayerState {
    pub fn new(id: PlayerId, stack: Stack, hand: Hand) -> PlayerState {
        PlayerState {
            id,
            stack,
            hand,
            current_bet: 0,
            folded: false,
            still_to_act: true,
        }
    }
}

/// Turn-order bookkeeping for the current betting round.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub street: Street,
    pub current: usize,
    pub last_aggressor: Option<usize>,
    pub first_to_act: usize,
}

impl RoundState {
    pub fn new(street: Street) -> RoundState {
        RoundState {
            street,
            current: 0,
            last_aggressor: None,
            first_to_act: 0,
        }
    }

    pub fn advance_turn(&mut self, num_players: usize) {
        self.current = (self.current + 1) % num_players;
    }

    pub fn reset_for_next_round(&mut self, num_players: usize) {
        self.current = self.first_to_act % num_players;
        self.last_aggressor = None;
    }
}

/// Snapshot of a decision point. Tree expansion copies states; parents and
/// children never alias.
#[derive(Debug, Clone)]
pub struct DecisionState {
    pub round: RoundState,
    pub players: Vec<PlayerState>,
    pub pot: Pot,
    pub board: Board,
    pub deck: Deck,
    pub terminal: bool,
}

impl DecisionState {
    pub fn new(
        round: RoundState,
        players: Vec<PlayerState>,
        pot: Pot,
        board: Board,
        deck: Deck,
    ) -> DecisionState {
        DecisionState {
            round,
            players,
            pot,
            board,
            deck,
            terminal: false,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// A round has ended when no live player still has the option to act.
    pub fn round_ended(&self) -> bool {
        !self
            .players
            .iter()
            .any(|p| !p.folded && p.still_to_act)
    }

    pub fn active_players(&self) -> usize {
        self.players.iter().filter(|p| !p.folded).count()
    }

    pub fn max_bet(&self) -> u32 {
        self.players
            .iter()
            .filter(|p| !p.folded)
            .map(|p| p.current_bet)
            .max()
            .unwrap_or(0)
    }

    pub fn current_player(&self) -> &PlayerState {
        &self.players[self.round.current]
    }

    /// Community cards must be dealt before play continues: the betting
    /// round has ended, the next street's cards are missing, and the hand
    /// is not over. River states never become chance nodes.
    pub fn is_chance_node(&self) -> bool {
        if self.terminal || !self.round_ended() {
            return false;
        }
        match self.round.street.next_board_target() {
            Some(target) => self.board.len() < target,
            None => false,
        }
    }

    /// Sweeps outstanding bets into the pot and rearms the round after a
    /// deal: street advanced, action back on the first seat, aggressor
    /// cleared, every live player due to act.
    pub fn begin_next_round(&mut self, next_street: Street) {
        for p in &mut self.players {
            self.pot.add_contribution(p.id, p.current_bet);
            p.current_bet = 0;
            p.still_to_act = !p.folded;
        }
        self.round.street = next_street;
        let num_players = self.players.len();
        self.round.reset_for_next_round(num_players);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::parse_cards;

    fn heads_up_state(street: Street, board: &str) -> DecisionState {
        let board = if board.is_empty() {
            Board::default()
        } else {
            Board::new(parse_cards(board).unwrap())
        };
        let players = vec![
            PlayerState::new(0, Stack::new(100), "KhQh".parse().unwrap()),
            PlayerState::new(1, Stack::new(100), "8c6c".parse().unwrap()),
        ];
        let mut deck = Deck::standard();
        deck.remove_all(board.cards());
        for p in &players {
            deck.remove_all(&p.hand.cards());
        }
        DecisionState::new(RoundState::new(street), players, Pot::new(), board, deck)
    }

    #[test]
    fn fresh_round_has_not_ended() {
        let state = heads_up_state(Street::Flop, "Ad 7h 5c");
        assert!(!state.round_ended());
        assert!(!state.is_chance_node());
    }

    #[test]
    fn cleared_players_end_the_round() {
        let mut state = heads_up_state(Street::Flop, "Ad 7h 5c");
        for p in &mut state.players {
            p.still_to_act = false;
        }
        assert!(state.round_ended());
        assert!(state.is_chance_node());
    }

    #[test]
    fn folded_players_do_not_keep_the_round_open() {
        let mut state = heads_up_state(Street::Flop, "Ad 7h 5c");
        state.players[0].still_to_act = false;
        state.players[1].folded = true;
        state.players[1].still_to_act = false;
        assert!(state.round_ended());
        assert_eq!(state.active_players(), 1);
    }

    #[test]
    fn river_is_never_a_chance_node() {
        let mut state = heads_up_state(Street::River, "Ad 7h 5c Tc 2s");
        for p in &mut state.players {
            p.still_to_act = false;
        }
        assert!(!state.is_chance_node());
    }

    #[test]
    fn terminal_states_are_never_chance_nodes() {
        let mut state = heads_up_state(Street::Flop, "Ad 7h 5c");
        for p in &mut state.players {
            p.still_to_act = false;
        }
        state.terminal = true;
        assert!(!state.is_chance_node());
    }

    #[test]
    fn begin_next_round_sweeps_bets_and_rearms_players() {
        let mut state = heads_up_state(Street::Flop, "Ad 7h 5c");
        state.players[0].current_bet = 10;
        state.players[1].current_bet = 10;
        state.players[0].still_to_act = false;
        state.players[1].still_to_act = false;
        state.round.current = 1;
        state.round.last_aggressor = Some(1);

        state.begin_next_round(Street::Turn);

        assert_eq!(state.pot.total(), 20);
        assert_eq!(state.round.street, Street::Turn);
        assert_eq!(state.round.current, 0);
        assert_eq!(state.round.last_aggressor, None);
        for p in &state.players {
            assert_eq!(p.current_bet, 0);
            assert!(p.still_to_act);
        }
    }

    #[test]
    fn max_bet_ignores_folded_players() {
        let mut state = heads_up_state(Street::Flop, "Ad 7h 5c");
        state.players[0].current_bet = 30;
        state.players[0].folded = true;
        state.players[1].current_bet = 10;
        assert_eq!(state.max_bet(), 10);
    }
}
