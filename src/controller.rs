//! The single owner of a match. A front-end calls into [`Match`] for every
//! player action and polls [`Match::tick`] so the CPU replies after its
//! delay. All mutation goes through `&mut self`, one call at a time.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::ai::{Agent, Difficulty};
use crate::config::GameConfig;
use crate::game::{
    Board, GameOutcome, GameState, Hand, Move, MoveError, PieceKind, Side, Square, Turn,
};

pub struct Match {
    state: GameState,
    difficulty: Difficulty,
    cpu: Box<dyn Agent>,
    cpu_delay: Duration,
    seed: Option<u64>,
    /// When the pending CPU reply may run.
    cpu_due: Option<Instant>,
    last_moves: [Option<Move>; 2],
}

impl Match {
    pub fn new(config: &GameConfig) -> Self {
        Self::from_state(GameState::initial(), config)
    }

    /// Resume from an arbitrary state. If the CPU is to move its reply is
    /// scheduled right away.
    pub fn from_state(state: GameState, config: &GameConfig) -> Self {
        let mut game = Match {
            state,
            difficulty: config.difficulty,
            cpu: config.difficulty.agent(config.seed),
            cpu_delay: config.cpu_delay(),
            seed: config.seed,
            cpu_due: None,
            last_moves: [None, None],
        };
        if game.state.turn() == Turn::Cpu {
            game.schedule_cpu(Instant::now());
        }
        game
    }

    /// Reset board and hands and give the player the first move.
    pub fn new_game(&mut self, difficulty: Difficulty) {
        info!("new game, difficulty {difficulty}");
        self.state = GameState::initial();
        self.set_difficulty(difficulty);
        self.cpu_due = None;
        self.last_moves = [None, None];
    }

    /// Swap the CPU agent without touching the position.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.cpu = difficulty.agent(self.seed);
    }

    pub fn attempt_player_move(&mut self, from: Square, to: Square) -> Result<(), MoveError> {
        self.attempt_player_move_at(from, to, Instant::now())
    }

    /// Like [`Match::attempt_player_move`], with the CPU reply scheduled
    /// relative to `now`.
    pub fn attempt_player_move_at(
        &mut self,
        from: Square,
        to: Square,
        now: Instant,
    ) -> Result<(), MoveError> {
        self.check_player_turn()?;
        let mv = Move::Normal { from, to };
        self.state.play_as(Side::Player, mv)?;
        self.after_player_action(mv, now);
        Ok(())
    }

    /// Drop a `kind` from the player's hand. `pool_index` is where the
    /// front-end saw the piece; it is re-checked against `kind` here.
    pub fn attempt_player_drop(
        &mut self,
        kind: PieceKind,
        pool_index: usize,
        to: Square,
    ) -> Result<(), MoveError> {
        self.attempt_player_drop_at(kind, pool_index, to, Instant::now())
    }

    pub fn attempt_player_drop_at(
        &mut self,
        kind: PieceKind,
        pool_index: usize,
        to: Square,
        now: Instant,
    ) -> Result<(), MoveError> {
        self.check_player_turn()?;
        self.state.drop_piece(kind, Some(pool_index), to)?;
        self.after_player_action(Move::Drop { kind, to }, now);
        Ok(())
    }

    /// Run the CPU's reply if it is due. Returns the move it played, if any.
    pub fn tick(&mut self, now: Instant) -> Option<Result<Option<Move>, MoveError>> {
        match self.cpu_due {
            Some(due) if now >= due => Some(self.run_cpu_turn()),
            _ => None,
        }
    }

    /// Let the CPU play now. `Ok(None)` means it had no move and lost.
    pub fn run_cpu_turn(&mut self) -> Result<Option<Move>, MoveError> {
        match self.state.turn() {
            Turn::GameOver => return Err(MoveError::GameOver),
            Turn::Player => return Err(MoveError::NotYourTurn),
            Turn::Cpu => {}
        }
        self.cpu_due = None;

        let Some(mv) = self.cpu.select_move(&self.state) else {
            self.state.forfeit()?;
            return Ok(None);
        };
        debug!("{} agent chose {mv}", self.cpu.name());
        self.state.play_as(Side::Cpu, mv)?;
        self.last_moves[Side::Cpu.index()] = Some(mv);

        if self.state.turn() == Turn::Player && self.state.legal_moves().is_empty() {
            self.state.forfeit()?;
        }
        Ok(Some(mv))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn hand(&self, side: Side) -> &Hand {
        self.state.hand(side)
    }

    pub fn turn(&self) -> Turn {
        self.state.turn()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn cpu_name(&self) -> &str {
        self.cpu.name()
    }

    pub fn last_move(&self, side: Side) -> Option<Move> {
        self.last_moves[side.index()]
    }

    /// True while a CPU reply is waiting for its delay.
    pub fn cpu_pending(&self) -> bool {
        self.cpu_due.is_some()
    }

    /// One-line summary of where the game stands.
    pub fn status_message(&self) -> String {
        match self.state.outcome() {
            Some(GameOutcome::LionCaptured {
                winner: Side::Player,
            }) => "You win! (captured the lion)".to_string(),
            Some(GameOutcome::LionCaptured { winner: Side::Cpu }) => {
                "CPU wins! (captured the lion)".to_string()
            }
            Some(GameOutcome::NoLegalMoves {
                winner: Side::Player,
            }) => "CPU cannot move. You win!".to_string(),
            Some(GameOutcome::NoLegalMoves { winner: Side::Cpu }) => {
                "You cannot move. CPU wins!".to_string()
            }
            None => match self.state.side_to_move() {
                Side::Player => "Your turn".to_string(),
                Side::Cpu => "CPU is thinking...".to_string(),
            },
        }
    }

    fn check_player_turn(&self) -> Result<(), MoveError> {
        match self.state.turn() {
            Turn::Player => Ok(()),
            Turn::Cpu => Err(MoveError::NotYourTurn),
            Turn::GameOver => Err(MoveError::GameOver),
        }
    }

    fn after_player_action(&mut self, mv: Move, now: Instant) {
        self.last_moves[Side::Player.index()] = Some(mv);
        if self.state.turn() == Turn::Cpu {
            self.schedule_cpu(now);
        }
    }

    fn schedule_cpu(&mut self, now: Instant) {
        self.cpu_due = Some(now + self.cpu_delay);
    }
}
