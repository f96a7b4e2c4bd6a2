use std::fmt;

use super::side::Side;

/// The five animals. Each has one fixed movement rule, see
/// [`can_step`](super::rules::can_step).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// Capturing it ends the game.
    Lion,
    Chick,
    /// A promoted chick.
    Hen,
    Giraffe,
    Elephant,
}

impl PieceKind {
    pub const ALL: [PieceKind; 5] = [
        PieceKind::Lion,
        PieceKind::Chick,
        PieceKind::Hen,
        PieceKind::Giraffe,
        PieceKind::Elephant,
    ];

    /// Material value used by the static evaluation.
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Lion => 1000,
            PieceKind::Elephant => 3,
            PieceKind::Giraffe => 3,
            PieceKind::Hen => 2,
            PieceKind::Chick => 1,
        }
    }

    /// Kind that enters the capturer's hand. Hens go back to chicks.
    pub fn demoted(self) -> PieceKind {
        match self {
            PieceKind::Hen => PieceKind::Chick,
            other => other,
        }
    }

    /// Single-letter abbreviation used in move notation and the terminal board.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Lion => 'L',
            PieceKind::Chick => 'C',
            PieceKind::Hen => 'H',
            PieceKind::Giraffe => 'G',
            PieceKind::Elephant => 'E',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Lion => "Lion",
            PieceKind::Chick => "Chick",
            PieceKind::Hen => "Hen",
            PieceKind::Giraffe => "Giraffe",
            PieceKind::Elephant => "Elephant",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Side,
}

impl Piece {
    pub fn new(kind: PieceKind, owner: Side) -> Self {
        Piece { kind, owner }
    }

    /// The piece as it stands after arriving on `row`: a chick reaching its
    /// owner's far rank becomes a hen. Nothing else changes.
    pub fn arriving_at(self, row: usize) -> Piece {
        if self.kind == PieceKind::Chick && row == self.owner.back_rank() {
            Piece::new(PieceKind::Hen, self.owner)
        } else {
            self
        }
    }

    /// Material value signed from `side`'s point of view.
    pub fn signed_value(self, side: Side) -> i32 {
        if self.owner == side {
            self.kind.value()
        } else {
            -self.kind.value()
        }
    }
}
