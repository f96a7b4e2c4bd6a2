//! Core Animal Shogi game logic: board, pieces, hands, movement rules and the
//! game state machine that executes moves.

mod board;
mod hand;
mod moves;
mod piece;
pub mod rules;
mod side;
mod state;

pub use board::{Board, Cell, Square, COLS, ROWS};
pub use hand::Hand;
pub use moves::Move;
pub use piece::{Piece, PieceKind};
pub use side::Side;
pub use state::{GameOutcome, GameState, MoveError, Turn};

#[cfg(test)]
pub(crate) use board::sq;
