use log::{debug, info};

use super::board::{Board, Cell, Square};
use super::hand::Hand;
use super::moves::Move;
use super::piece::{Piece, PieceKind};
use super::rules;
use super::side::Side;

/// Whose turn it is. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Player,
    Cpu,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// `winner` captured the opposing lion.
    LionCaptured { winner: Side },
    /// The loser had no legal move on its turn.
    NoLegalMoves { winner: Side },
}

impl GameOutcome {
    pub fn winner(self) -> Side {
        match self {
            GameOutcome::LionCaptured { winner } | GameOutcome::NoLegalMoves { winner } => winner,
        }
    }
}

/// Why a move was rejected. A rejected move leaves the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,
    #[error("it is not your turn")]
    NotYourTurn,
    #[error("there is no piece on {0}")]
    NoPiece(Square),
    #[error("the piece on {0} is not yours")]
    NotYourPiece(Square),
    #[error("you already have a piece on {0}")]
    OwnPieceAtTarget(Square),
    #[error("that piece cannot move from {from} to {to}")]
    IllegalStep { from: Square, to: Square },
    #[error("no {0} in hand")]
    NotInHand(PieceKind),
    #[error("{0} is occupied")]
    TargetOccupied(Square),
}

/// Authoritative game state: board, both hands, side to move and result.
///
/// Only [`GameState::play`] and friends mutate it, and only after the move
/// has been validated for the side to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    hands: [Hand; 2],
    to_move: Side,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::initial(),
            hands: [Hand::new(), Hand::new()],
            to_move: Side::Player, // player starts
            outcome: None,
        }
    }

    /// A state built from an arbitrary position, `to_move` to play.
    ///
    /// If a lion is already missing the game starts out finished.
    pub fn from_position(board: Board, hands: [Hand; 2], to_move: Side) -> Self {
        let mut state = GameState {
            board,
            hands,
            to_move,
            outcome: None,
        };
        state.detect_winner();
        state
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hand(&self, side: Side) -> &Hand {
        &self.hands[side.index()]
    }

    pub fn side_to_move(&self) -> Side {
        self.to_move
    }

    pub fn turn(&self) -> Turn {
        match (self.outcome, self.to_move) {
            (Some(_), _) => Turn::GameOver,
            (None, Side::Player) => Turn::Player,
            (None, Side::Cpu) => Turn::Cpu,
        }
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Board moves for the side to move, in enumeration order.
    pub fn board_moves(&self) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        rules::board_moves(&self.board, self.to_move)
    }

    /// Board moves followed by drops for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        let mut moves = rules::board_moves(&self.board, self.to_move);
        moves.extend(rules::drop_moves(&self.board, self.hand(self.to_move)));
        moves
    }

    /// Check `mv` for the side to move without applying it.
    pub fn validate(&self, mv: Move) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        match mv {
            Move::Normal { from, to } => self.validate_step(from, to),
            Move::Drop { kind, to } => self.resolve_drop(kind, None, to).map(|_| ()),
        }
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.validate(mv).is_ok()
    }

    /// Apply a move for the side to move.
    pub fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        self.play_as(self.to_move, mv)
    }

    /// Apply a move on behalf of `side`, rejecting it if `side` is not to move.
    pub fn play_as(&mut self, side: Side, mv: Move) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if side != self.to_move {
            return Err(MoveError::NotYourTurn);
        }
        match mv {
            Move::Normal { from, to } => {
                self.validate_step(from, to)?;
                debug!("{} plays {}", side.name(), mv);
                self.execute_step(from, to);
            }
            Move::Drop { kind, to } => self.drop_piece(kind, None, to)?,
        }
        Ok(())
    }

    /// Drop a `kind` from the mover's hand onto `to`. `hint` is an index into
    /// the hand remembered by the caller; see [`Hand::resolve`].
    pub fn drop_piece(
        &mut self,
        kind: PieceKind,
        hint: Option<usize>,
        to: Square,
    ) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let index = self.resolve_drop(kind, hint, to)?;
        debug!("{} plays {}", self.to_move.name(), Move::Drop { kind, to });
        self.execute_drop(index, to);
        Ok(())
    }

    /// Apply a move and return new state (immutable)
    pub fn after(&self, mv: Move) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.play(mv)?;
        Ok(next)
    }

    /// End the game as a loss for the side to move, which has no move.
    pub fn forfeit(&mut self) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let winner = self.to_move.other();
        info!("{} cannot move, {} wins", self.to_move.name(), winner.name());
        self.outcome = Some(GameOutcome::NoLegalMoves { winner });
        Ok(())
    }

    fn validate_step(&self, from: Square, to: Square) -> Result<(), MoveError> {
        let piece = self.board.get(from).piece().ok_or(MoveError::NoPiece(from))?;
        if piece.owner != self.to_move {
            return Err(MoveError::NotYourPiece(from));
        }
        if self.board.get(to).is_owned_by(self.to_move) {
            return Err(MoveError::OwnPieceAtTarget(to));
        }
        if !rules::is_legal(&self.board, from, to, self.to_move) {
            return Err(MoveError::IllegalStep { from, to });
        }
        Ok(())
    }

    fn resolve_drop(
        &self,
        kind: PieceKind,
        hint: Option<usize>,
        to: Square,
    ) -> Result<usize, MoveError> {
        let index = self
            .hand(self.to_move)
            .resolve(kind, hint)
            .ok_or(MoveError::NotInHand(kind))?;
        if !rules::is_legal_drop(&self.board, to) {
            return Err(MoveError::TargetOccupied(to));
        }
        Ok(index)
    }

    /// Capture, promote and relocate. The move must already be legal.
    ///
    /// Taking the lion ends the game on the spot and the capturing piece
    /// stays where it was.
    fn execute_step(&mut self, from: Square, to: Square) {
        let mover = self.to_move;
        if let Cell::Occupied(target) = self.board.get(to) {
            if target.kind == PieceKind::Lion {
                self.finish(GameOutcome::LionCaptured { winner: mover });
                return;
            }
        }

        if let Some(captured) = self.board.relocate(from, to) {
            self.hands[mover.index()].push(captured.kind);
        }

        if !self.detect_winner() {
            self.to_move = mover.other();
        }
    }

    fn execute_drop(&mut self, index: usize, to: Square) {
        let mover = self.to_move;
        if let Some(kind) = self.hands[mover.index()].remove(index) {
            self.board.set(to, Cell::Occupied(Piece::new(kind, mover)));
        }
        if !self.detect_winner() {
            self.to_move = mover.other();
        }
    }

    /// Scan for missing lions. Returns true if the game just ended.
    fn detect_winner(&mut self) -> bool {
        match rules::winner(&self.board) {
            Some(winner) => {
                self.finish(GameOutcome::LionCaptured { winner });
                true
            }
            None => false,
        }
    }

    fn finish(&mut self, outcome: GameOutcome) {
        info!("{} wins: {:?}", outcome.winner().name(), outcome);
        self.outcome = Some(outcome);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
