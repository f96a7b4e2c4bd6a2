use log::debug;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{GameState, Move};

use super::agent::Agent;

/// An agent that selects uniformly at random from legal board moves.
///
/// Like the greedy agent it never drops pieces from its hand.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic agent for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, state: &GameState) -> Option<Move> {
        let moves = state.board_moves();
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..moves.len());
        debug!("random agent picked {} of {} moves", moves[idx], moves.len());
        Some(moves[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(RandomAgent {
            rng: self.rng.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{sq, Board, Cell, Piece, PieceKind, Side};

    #[test]
    fn test_random_agent_selects_legal_move() {
        let mut agent = RandomAgent::new();
        let mut state = GameState::initial();
        state.play(Move::Normal { from: sq(1, 3), to: sq(0, 2) }).unwrap();
        let legal = state.board_moves();

        for _ in 0..100 {
            let mv = agent.select_move(&state).unwrap();
            assert!(legal.contains(&mv), "Move {} is not legal", mv);
        }
    }

    #[test]
    fn test_random_agent_never_drops() {
        let mut board = Board::new();
        board.set(sq(0, 0), Cell::Occupied(Piece::new(PieceKind::Lion, Side::Cpu)));
        board.set(sq(2, 3), Cell::Occupied(Piece::new(PieceKind::Lion, Side::Player)));
        let mut hands: [crate::game::Hand; 2] = Default::default();
        hands[1].push(PieceKind::Giraffe);
        let state = GameState::from_position(board, hands, Side::Cpu);

        let mut agent = RandomAgent::with_seed(7);
        for _ in 0..50 {
            assert!(!agent.select_move(&state).unwrap().is_drop());
        }
    }

    #[test]
    fn test_seeded_agents_agree() {
        let mut state = GameState::initial();
        state.play(Move::Normal { from: sq(1, 3), to: sq(2, 2) }).unwrap();

        let mut a = RandomAgent::with_seed(42);
        let mut b = RandomAgent::with_seed(42);
        for _ in 0..20 {
            assert_eq!(a.select_move(&state), b.select_move(&state));
        }
    }

    #[test]
    fn test_random_agents_play_full_game() {
        let mut agent = RandomAgent::with_seed(3);
        let mut state = GameState::initial();

        let mut plies = 0;
        while !state.is_terminal() && plies < 500 {
            match agent.select_move(&state) {
                Some(mv) => state.play(mv).unwrap(),
                None => state.forfeit().unwrap(),
            }
            plies += 1;
        }

        assert!(plies > 0);
        if state.is_terminal() {
            assert!(state.outcome().is_some());
        }
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
        assert_eq!(agent.clone_agent().name(), "Random");
    }
}
