use log::{debug, trace};

use crate::game::{rules, Board, GameState, Move, Side};

use super::agent::Agent;

/// Trait for evaluating a board position from a side's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, side: Side) -> i32;

    /// Clone into a boxed trait object, so agents can be cloned with their
    /// heuristic.
    fn box_clone(&self) -> Box<dyn Heuristic>;
}

/// Sum of piece values, own pieces positive and the opponent's negative.
/// Pieces in hand are not counted.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialHeuristic;

impl Heuristic for MaterialHeuristic {
    fn evaluate(&self, board: &Board, side: Side) -> i32 {
        board.pieces().map(|(_, piece)| piece.signed_value(side)).sum()
    }

    fn box_clone(&self) -> Box<dyn Heuristic> {
        Box::new(*self)
    }
}

/// One-ply greedy agent: plays the board move whose resulting position
/// scores highest, keeping the first one found on ties. The opponent's
/// reply is not searched.
pub struct GreedyAgent {
    heuristic: Box<dyn Heuristic>,
}

impl GreedyAgent {
    pub fn new() -> Self {
        GreedyAgent {
            heuristic: Box::new(MaterialHeuristic),
        }
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        GreedyAgent { heuristic }
    }

    fn best_move(&self, state: &GameState) -> Option<Move> {
        let side = state.side_to_move();
        let mut best: Option<(Move, i32)> = None;

        for mv in state.board_moves() {
            let Move::Normal { from, to } = mv else {
                continue;
            };
            let score = self
                .heuristic
                .evaluate(&rules::simulate(state.board(), from, to), side);
            trace!("greedy candidate {mv} scores {score}");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        if let Some((mv, score)) = best {
            debug!("greedy agent picked {mv} ({score})");
        }
        best.map(|(mv, _)| mv)
    }
}

impl Default for GreedyAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for GreedyAgent {
    fn select_move(&mut self, state: &GameState) -> Option<Move> {
        self.best_move(state)
    }

    fn name(&self) -> &str {
        "Greedy"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(GreedyAgent::with_heuristic(self.heuristic.box_clone()))
    }
}
