use crate::game::{GameState, Move};

/// Interface for CPU opponents.
pub trait Agent {
    /// Pick a move for the side to move, or `None` if it has no legal move.
    fn select_move(&mut self, state: &GameState) -> Option<Move>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Clone the agent into a boxed trait object.
    fn clone_agent(&self) -> Box<dyn Agent>;
}
