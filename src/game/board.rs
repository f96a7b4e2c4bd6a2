use std::fmt;

use super::piece::{Piece, PieceKind};
use super::side::Side;

pub const COLS: usize = 3;
pub const ROWS: usize = 4;

/// A coordinate on the board. Column 0 is the left file, row 0 is the CPU's
/// back rank. A `Square` is always in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Starting square of the CPU's chick, b2.
    pub const CPU_CHICK_HOME: Square = Square { row: 1, col: 1 };
    /// Starting square of the player's chick, b3.
    pub const PLAYER_CHICK_HOME: Square = Square { row: 2, col: 1 };

    /// Returns `None` outside the 3×4 grid.
    pub fn new(col: usize, row: usize) -> Option<Square> {
        if col < COLS && row < ROWS {
            Some(Square {
                col: col as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    /// The square `dcol` columns and `drow` rows away, if it is on the board.
    pub fn offset(self, dcol: i8, drow: i8) -> Option<Square> {
        let col = self.col as i8 + dcol;
        let row = self.row as i8 + drow;
        if col < 0 || row < 0 {
            return None;
        }
        Square::new(col as usize, row as usize)
    }

    /// All squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..ROWS).flat_map(|row| {
            (0..COLS).map(move |col| Square {
                col: col as u8,
                row: row as u8,
            })
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Piece),
}

impl Cell {
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// True if the cell holds a piece owned by `side`.
    pub fn is_owned_by(self, side: Side) -> bool {
        matches!(self, Cell::Occupied(piece) if piece.owner == side)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// The starting position.
    ///
    /// ```text
    ///   a b c
    /// 1 E L G   CPU
    /// 2 . C .
    /// 3 . C .
    /// 4 G L E   Player
    /// ```
    pub fn initial() -> Self {
        use PieceKind::*;

        let mut board = Board::new();
        let back_rows = [
            (0, Side::Cpu, [Elephant, Lion, Giraffe]),
            (ROWS - 1, Side::Player, [Giraffe, Lion, Elephant]),
        ];
        for (row, owner, kinds) in back_rows {
            for (col, kind) in kinds.into_iter().enumerate() {
                board.cells[row][col] = Cell::Occupied(Piece::new(kind, owner));
            }
        }
        board.set(Square::CPU_CHICK_HOME, Cell::Occupied(Piece::new(Chick, Side::Cpu)));
        board.set(Square::PLAYER_CHICK_HOME, Cell::Occupied(Piece::new(Chick, Side::Player)));
        board
    }

    /// Get the cell at a square
    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.row()][sq.col()]
    }

    pub fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.row()][sq.col()] = cell;
    }

    /// Empty the square, returning what was there.
    pub fn take(&mut self, sq: Square) -> Cell {
        std::mem::replace(&mut self.cells[sq.row()][sq.col()], Cell::Empty)
    }

    /// Move the piece on `from` to `to`, promoting it on arrival if it is a
    /// chick reaching its far rank. Returns the piece that stood on `to`.
    ///
    /// No legality checks are made; an empty `from` leaves the board as is.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let Cell::Occupied(piece) = self.take(from) else {
            return None;
        };
        let captured = self.take(to).piece();
        self.set(to, Cell::Occupied(piece.arriving_at(to.row())));
        captured
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).piece().map(|piece| (sq, piece)))
    }

    /// Where `side`'s lion stands, if it is still on the board.
    pub fn lion(&self, side: Side) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceKind::Lion && piece.owner == side)
            .map(|(sq, _)| sq)
    }

    pub fn empty_squares(&self) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(|&sq| self.get(sq).is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) fn sq(col: usize, row: usize) -> Square {
    Square::new(col, row).unwrap()
}
