use std::fmt;

use super::board::Square;
use super::piece::PieceKind;

/// A move on the board or a drop from hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Step a piece from one square to another. Promotion is implied by the
    /// destination.
    Normal { from: Square, to: Square },
    /// Place a captured piece of `kind` on an empty square.
    Drop { kind: PieceKind, to: Square },
}

impl Move {
    /// Returns the destination square of this move.
    pub fn to(&self) -> Square {
        match *self {
            Move::Normal { to, .. } => to,
            Move::Drop { to, .. } => to,
        }
    }

    /// Returns the origin square, if this is not a drop.
    pub fn from(&self) -> Option<Square> {
        match *self {
            Move::Normal { from, .. } => Some(from),
            Move::Drop { .. } => None,
        }
    }

    /// Returns true if this is a drop move.
    pub fn is_drop(&self) -> bool {
        matches!(self, Move::Drop { .. })
    }
}

/// `b3b2` for board moves, `C*a2` for drops.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Move::Normal { from, to } => write!(f, "{from}{to}"),
            Move::Drop { kind, to } => write!(f, "{}*{to}", kind.letter()),
        }
    }
}
