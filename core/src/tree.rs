use crate::combinatorics::generate_combinations;
use crate::state::{DecisionState, Street};

/// What a tree node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Decision,
    Chance,
    Terminal,
}

/// Edge label from a node to a successor state. Bet and raise amounts are
/// chip counts derived from the configured pot fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fold,
    Check,
    Call,
    Bet(u32),
    Raise(u32),
    Deal,
}

/// One node of the built tree. A node owns its state snapshot and its
/// children; edges point parent-to-child only.
#[derive(Debug, Clone)]
pub struct GameTreeNode {
    pub state: DecisionState,
    pub kind: NodeKind,
    pub children: Vec<(Action, GameTreeNode)>,
}

impl GameTreeNode {
    /// Total node count including this node.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(|(_, c)| c.size()).sum::<usize>()
    }
}

/// Bet-sizing abstraction and expansion cap.
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Pot fractions tried for bets and raises, in enumeration order.
    pub bet_fractions: Vec<f64>,
    /// Maximum expansion depth; nodes at the cap become terminal.
    pub max_depth: usize,
}

impl Default for BuilderConfig {
    fn default() -> BuilderConfig {
        BuilderConfig {
            bet_fractions: vec![0.25, 0.5, 1.0],
            max_depth: 3,
        }
    }
}

/// Expands a decision point into the tree of future play.
///
/// Decision nodes branch over the legal actions of the player to act under
/// the bet-sizing abstraction; chance nodes branch over every combination of
/// undealt community cards in the lexicographic order of the deck.
pub struct GameTreeBuilder {
    config: BuilderConfig,
}

impl GameTreeBuilder {
    pub fn new(config: BuilderConfig) -> GameTreeBuilder {
        GameTreeBuilder { config }
    }

    pub fn build(&self, root: &DecisionState) -> GameTreeNode {
        self.expand(root.clone(), 0)
    }

    fn expand(&self, state: DecisionState, depth: usize) -> GameTreeNode {
        if state.is_terminal() || depth >= self.config.max_depth {
            return GameTreeNode {
                state,
                kind: NodeKind::Terminal,
                children: Vec::new(),
            };
        }

        if state.is_chance_node() {
            return self.expand_chance(state, depth);
        }

        let mut children = Vec::new();
        for action in self.legal_actions(&state) {
            let next = self.apply_action(&state, action);
            children.push((action, self.expand(next, depth + 1)));
        }

        GameTreeNode {
            state,
            kind: NodeKind::Decision,
            children,
        }
    }

    fn expand_chance(&self, state: DecisionState, depth: usize) -> GameTreeNode {
        let (next_street, target) = match (state.round.street.next(), state.round.street.next_board_target()) {
            (Some(street), Some(target)) => (street, target),
            _ => {
                // River round-end; callers mark this terminal before we get here.
                return GameTreeNode {
                    state,
                    kind: NodeKind::Terminal,
                    children: Vec::new(),
                };
            }
        };

        let cards_to_deal = target - state.board.len();
        let mut children = Vec::new();
        for cards in generate_combinations(state.deck.cards(), cards_to_deal) {
            let mut next = state.clone();
            next.deck.remove_all(&cards);
            next.board.extend(&cards);
            next.begin_next_round(next_street);
            children.push((Action::Deal, self.expand(next, depth + 1)));
        }

        GameTreeNode {
            state,
            kind: NodeKind::Chance,
            children,
        }
    }

    /// Actions open to the player to act, in stable enumeration order.
    pub fn legal_actions(&self, state: &DecisionState) -> Vec<Action> {
        let Some(player) = state.players.get(state.round.current) else {
            return Vec::new();
        };
        if player.folded {
            return Vec::new();
        }

        let max_bet = state.max_bet();
        let pot_total = state.pot.total();
        let mut actions = Vec::new();

        if player.current_bet < max_bet {
            if state.active_players() > 1 {
                actions.push(Action::Fold);
            }
            actions.push(Action::Call);

            for &fraction in &self.config.bet_fractions {
                let mut amount = (fraction * f64::from(pot_total)).floor() as u32;
                if amount <= player.current_bet {
                    continue;
                }
                if player.stack.can_afford(amount) {
                    actions.push(Action::Raise(amount));
                } else {
                    // Substitute the all-in and stop: one all-in is enough.
                    amount = player.stack.chips();
                    if amount > 0 {
                        actions.push(Action::Raise(amount));
                    }
                    break;
                }
            }
        } else {
            actions.push(Action::Check);

            let mut emitted_min = false;
            for &fraction in &self.config.bet_fractions {
                let mut amount = ((fraction * f64::from(pot_total)).floor() as u32).max(1);
                if amount <= player.current_bet {
                    continue;
                }
                if amount == 1 {
                    if emitted_min {
                        continue;
                    }
                    emitted_min = true;
                }
                if player.stack.can_afford(amount) {
                    actions.push(Action::Bet(amount));
                } else {
                    amount = player.stack.chips();
                    if amount > 0 {
                        actions.push(Action::Bet(amount));
                    }
                    break;
                }
            }
        }

        actions
    }

    /// Applies `action` to a copy of `state`, advances the turn to the next
    /// live player, and flags terminal states.
    pub fn apply_action(&self, state: &DecisionState, action: Action) -> DecisionState {
        let mut next = state.clone();
        let current = next.round.current;

        match action {
            Action::Fold => {
                let p = &mut next.players[current];
                p.folded = true;
                p.still_to_act = false;
            }
            Action::Call => {
                let max_bet = next.max_bet();
                let p = &mut next.players[current];
                let to_call = (max_bet - p.current_bet).min(p.stack.chips());
                let paid = p.stack.remove_chips(to_call);
                p.current_bet += paid;
                p.still_to_act = false;
            }
            Action::Check => {
                next.players[current].still_to_act = false;
            }
            Action::Bet(amount) | Action::Raise(amount) => {
                let max_bet = next.max_bet();
                let p = &mut next.players[current];
                let target = max_bet + amount.min(p.stack.chips());
                let paid = p.stack.remove_chips(target - p.current_bet);
                p.current_bet += paid;

                next.round.last_aggressor = Some(current);
                let aggressor_id = next.players[current].id;
                for q in &mut next.players {
                    if q.id != aggressor_id && !q.folded {
                        q.still_to_act = true;
                    }
                }
                next.players[current].still_to_act = false;
            }
            Action::Deal => {}
        }

        let num_players = next.players.len();
        let start = next.round.current;
        loop {
            next.round.advance_turn(num_players);
            if next.round.current == start {
                break;
            }
            if !next.players[next.round.current].folded {
                break;
            }
        }

        if next.active_players() <= 1
            || (next.round.street == Street::River && next.round_ended())
        {
            next.terminal = true;
        }

        next
    }
}
