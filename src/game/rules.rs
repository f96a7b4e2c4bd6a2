//! Movement rules, move enumeration, lion detection and side-effect free
//! move simulation. Everything here only reads the board it is given.

use super::board::{Board, Cell, Square};
use super::hand::Hand;
use super::moves::Move;
use super::piece::PieceKind;
use super::side::Side;

/// Scan order for neighbouring squares: row delta outer, column delta inner.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Whether a `kind` owned by `owner` may step by (`dcol`, `drow`).
pub fn can_step(kind: PieceKind, owner: Side, dcol: i8, drow: i8) -> bool {
    let forward = owner.forward();
    match kind {
        PieceKind::Lion => dcol.abs() <= 1 && drow.abs() <= 1 && (dcol, drow) != (0, 0),
        PieceKind::Chick => dcol == 0 && drow == forward,
        PieceKind::Hen => {
            (dcol.abs() <= 1 && drow == forward) || (drow == 0 && dcol.abs() == 1)
        }
        PieceKind::Elephant => dcol.abs() == 1 && drow.abs() == 1,
        PieceKind::Giraffe => dcol.abs() + drow.abs() == 1,
    }
}

/// Whether `mover` may move the piece on `from` to `to`.
///
/// Fails if `from` is empty or not `mover`'s, or if `to` holds one of
/// `mover`'s own pieces.
pub fn is_legal(board: &Board, from: Square, to: Square, mover: Side) -> bool {
    let Cell::Occupied(piece) = board.get(from) else {
        return false;
    };
    if piece.owner != mover || board.get(to).is_owned_by(mover) {
        return false;
    }
    let dcol = to.col() as i8 - from.col() as i8;
    let drow = to.row() as i8 - from.row() as i8;
    can_step(piece.kind, piece.owner, dcol, drow)
}

/// Any hand piece may be dropped on any empty square.
pub fn is_legal_drop(board: &Board, to: Square) -> bool {
    board.get(to).is_empty()
}

/// All board moves for `side`: pieces in row-major order, each probing its
/// neighbours in [`DIRECTIONS`] order.
pub fn board_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, piece) in board.pieces() {
        if piece.owner != side {
            continue;
        }
        for &(dcol, drow) in &DIRECTIONS {
            let Some(to) = from.offset(dcol, drow) else {
                continue;
            };
            if is_legal(board, from, to, side) {
                moves.push(Move::Normal { from, to });
            }
        }
    }
    moves
}

/// One drop per distinct kind in `hand` per empty square.
pub fn drop_moves(board: &Board, hand: &Hand) -> Vec<Move> {
    let kinds = hand.kinds();
    board
        .empty_squares()
        .flat_map(|to| kinds.iter().map(move |&kind| Move::Drop { kind, to }))
        .collect()
}

/// The side whose opponent no longer has a lion on the board.
pub fn winner(board: &Board) -> Option<Side> {
    if board.lion(Side::Cpu).is_none() {
        Some(Side::Player)
    } else if board.lion(Side::Player).is_none() {
        Some(Side::Cpu)
    } else {
        None
    }
}

/// The board after moving `from` → `to`, computed on a copy.
///
/// Captures and promotion behave exactly as in play; a captured lion simply
/// disappears from the copy.
pub fn simulate(board: &Board, from: Square, to: Square) -> Board {
    let mut scratch = *board;
    scratch.relocate(from, to);
    scratch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::sq;
    use crate::game::piece::Piece;

    fn place(board: &mut Board, col: usize, row: usize, kind: PieceKind, owner: Side) {
        board.set(sq(col, row), Cell::Occupied(Piece::new(kind, owner)));
    }

    /// Offsets each kind may take when moving for the player (forward = -1).
    fn player_offsets(kind: PieceKind) -> Vec<(i8, i8)> {
        match kind {
            PieceKind::Lion => DIRECTIONS.to_vec(),
            PieceKind::Chick => vec![(0, -1)],
            PieceKind::Hen => vec![(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0)],
            PieceKind::Elephant => vec![(-1, -1), (1, -1), (-1, 1), (1, 1)],
            PieceKind::Giraffe => vec![(0, -1), (-1, 0), (1, 0), (0, 1)],
        }
    }

    #[test]
    fn test_movement_table_all_kinds_owners_offsets() {
        let centre = sq(1, 1);
        for owner in Side::ALL {
            for kind in PieceKind::ALL {
                let mut board = Board::new();
                place(&mut board, 1, 1, kind, owner);
                let allowed: Vec<(i8, i8)> = player_offsets(kind)
                    .into_iter()
                    .map(|(dc, dr)| if owner == Side::Cpu { (dc, -dr) } else { (dc, dr) })
                    .collect();

                for &(dcol, drow) in &DIRECTIONS {
                    let to = centre.offset(dcol, drow).unwrap();
                    let expected = allowed.contains(&(dcol, drow));
                    assert_eq!(
                        is_legal(&board, centre, to, owner),
                        expected,
                        "{kind:?} of {owner:?} by ({dcol}, {drow})"
                    );
                    assert_eq!(can_step(kind, owner, dcol, drow), expected);
                }
            }
        }
    }

    #[test]
    fn test_no_piece_moves_two_squares() {
        for kind in PieceKind::ALL {
            assert!(!can_step(kind, Side::Player, 0, -2));
            assert!(!can_step(kind, Side::Player, 2, 0));
            assert!(!can_step(kind, Side::Cpu, 2, 2));
        }
    }

    #[test]
    fn test_empty_source_is_illegal() {
        let board = Board::initial();
        assert!(!is_legal(&board, sq(0, 2), sq(0, 1), Side::Player));
    }

    #[test]
    fn test_moving_opponents_piece_is_illegal() {
        let board = Board::initial();
        assert!(!is_legal(&board, sq(1, 1), sq(1, 2), Side::Player));
        assert!(is_legal(&board, sq(1, 1), sq(1, 2), Side::Cpu));
    }

    #[test]
    fn test_self_capture_is_illegal() {
        let board = Board::initial();
        // player lion onto player giraffe
        assert!(!is_legal(&board, sq(1, 3), sq(0, 3), Side::Player));
        assert!(!is_legal(&board, sq(1, 3), sq(1, 2), Side::Player));
        assert!(!is_legal(&board, sq(1, 3), sq(1, 3), Side::Player));
    }

    #[test]
    fn test_opening_examples() {
        let mut board = Board::initial();
        // chick straight ahead onto the cpu chick
        assert!(is_legal(&board, sq(1, 2), sq(1, 1), Side::Player));
        // giraffe diagonally is not allowed
        assert!(!is_legal(&board, sq(0, 3), sq(1, 2), Side::Player));

        board.take(sq(1, 1));
        assert!(is_legal(&board, sq(1, 2), sq(1, 1), Side::Player));

        board.take(sq(0, 3));
        assert!(is_legal(&board, sq(1, 3), sq(0, 3), Side::Player));
    }

    #[test]
    fn test_drop_legality_depends_only_on_emptiness() {
        let board = Board::initial();
        for square in Square::all() {
            assert_eq!(is_legal_drop(&board, square), board.get(square).is_empty());
        }
    }

    #[test]
    fn test_initial_board_moves_in_scan_order() {
        let board = Board::initial();
        let moves = board_moves(&board, Side::Cpu);
        // elephant a1 can only go to b2, which holds its own chick
        assert!(!moves.iter().any(|m| m.from() == Some(sq(0, 0))));

        let notation: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        assert_eq!(notation, vec!["b1a2", "b1c2", "c1c2", "b2b3"]);
    }

    #[test]
    fn test_drop_moves_cover_each_kind_once_per_square() {
        let board = Board::initial();
        let mut hand = Hand::new();
        hand.push(PieceKind::Chick);
        hand.push(PieceKind::Chick);
        hand.push(PieceKind::Giraffe);

        let drops = drop_moves(&board, &hand);
        assert_eq!(drops.len(), 4 * 2);
        assert!(drops.iter().all(|m| m.is_drop() && board.get(m.to()).is_empty()));
    }

    #[test]
    fn test_winner_detection() {
        let mut board = Board::initial();
        assert_eq!(winner(&board), None);

        board.take(sq(1, 0));
        assert_eq!(winner(&board), Some(Side::Player));

        let mut board = Board::initial();
        board.take(sq(1, 3));
        assert_eq!(winner(&board), Some(Side::Cpu));
    }

    #[test]
    fn test_simulate_leaves_live_board_untouched() {
        let board = Board::initial();
        let after = simulate(&board, sq(1, 2), sq(1, 1));

        assert_eq!(board, Board::initial());
        assert_eq!(after.get(sq(1, 2)), Cell::Empty);
        assert_eq!(
            after.get(sq(1, 1)),
            Cell::Occupied(Piece::new(PieceKind::Chick, Side::Player))
        );
    }

    #[test]
    fn test_simulate_promotes_cpu_chick() {
        let mut board = Board::new();
        place(&mut board, 0, 2, PieceKind::Chick, Side::Cpu);
        let after = simulate(&board, sq(0, 2), sq(0, 3));
        assert_eq!(
            after.get(sq(0, 3)),
            Cell::Occupied(Piece::new(PieceKind::Hen, Side::Cpu))
        );
    }
}
