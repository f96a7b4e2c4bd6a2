use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

use crate::ai::Difficulty;
use crate::config::GameConfig;
use crate::controller::Match;
use crate::game::{PieceKind, Side, Square};

/// What the player has picked up, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Selection {
    None,
    Piece(Square),
    /// A hand entry, remembered by position and kind.
    Hand { index: usize, kind: PieceKind },
}

pub struct App {
    game: Match,
    cursor: Square,
    selection: Selection,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &GameConfig) -> Self {
        App {
            game: Match::new(config),
            cursor: start_cursor(),
            selection: Selection::None,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.run_due_cpu_turn();
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                if self.selection == Selection::None {
                    self.should_quit = true;
                } else {
                    self.selection = Selection::None;
                }
            }
            KeyCode::Left => self.move_cursor(-1, 0),
            KeyCode::Right => self.move_cursor(1, 0),
            KeyCode::Up => self.move_cursor(0, -1),
            KeyCode::Down => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.activate();
            }
            KeyCode::Char(c @ '1'..='9') => {
                self.select_hand(c as usize - '1' as usize);
            }
            KeyCode::Char('e') => self.change_difficulty(Difficulty::Easy),
            KeyCode::Char('h') => self.change_difficulty(Difficulty::Hard),
            KeyCode::Char('r') => {
                // Reset game
                self.game.new_game(self.game.difficulty());
                self.cursor = start_cursor();
                self.selection = Selection::None;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn move_cursor(&mut self, dcol: i8, drow: i8) {
        if let Some(next) = self.cursor.offset(dcol, drow) {
            self.cursor = next;
        }
    }

    fn select_hand(&mut self, index: usize) {
        match self.game.hand(Side::Player).get(index) {
            Some(kind) => {
                self.selection = Selection::Hand { index, kind };
                self.message = Some(format!("Drop {kind}: pick an empty square"));
            }
            None => {
                self.message = Some(format!("No piece #{} in your hand", index + 1));
            }
        }
    }

    /// Act on the square under the cursor
    fn activate(&mut self) {
        let target = self.cursor;
        let result = match self.selection {
            Selection::Hand { index, kind } => {
                self.game.attempt_player_drop(kind, index, target)
            }
            Selection::Piece(from) if from == target => {
                self.selection = Selection::None;
                return;
            }
            Selection::Piece(from) if !self.game.board().get(target).is_owned_by(Side::Player) => {
                self.game.attempt_player_move(from, target)
            }
            _ => {
                if self.game.board().get(target).is_owned_by(Side::Player) {
                    self.selection = Selection::Piece(target);
                } else {
                    self.message = Some("Select one of your pieces".to_string());
                }
                return;
            }
        };

        // any attempt spends the selection; the hand may have changed
        self.selection = Selection::None;
        if let Err(err) = result {
            self.message = Some(capitalize(&err.to_string()));
        }
    }

    fn change_difficulty(&mut self, difficulty: Difficulty) {
        self.game.set_difficulty(difficulty);
        self.message = Some(format!("Difficulty set to {difficulty}"));
    }

    fn run_due_cpu_turn(&mut self) {
        match self.game.tick(Instant::now()) {
            Some(Ok(Some(mv))) => {
                self.selection = Selection::None;
                self.message = Some(format!("CPU played {mv}"));
            }
            Some(Ok(None)) | None => {}
            Some(Err(err)) => {
                self.message = Some(capitalize(&err.to_string()));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game, self.cursor, self.selection, &self.message);
    }
}

/// The cursor starts on the player's chick.
fn start_cursor() -> Square {
    Square::PLAYER_CHICK_HOME
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{sq, Turn};
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app() -> App {
        App::new(&GameConfig {
            cpu_delay_ms: 10_000,
            ..GameConfig::default()
        })
    }

    #[test]
    fn test_select_and_move_with_keys() {
        let mut app = app();
        // cursor starts on b3, the player's chick
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selection, Selection::Piece(sq(1, 2)));

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selection, Selection::None);
        assert_eq!(app.game.turn(), Turn::Cpu);
        assert_eq!(app.game.hand(Side::Player).len(), 1);
    }

    #[test]
    fn test_illegal_move_reports_error() {
        let mut app = app();
        press(&mut app, KeyCode::Down); // b4, the lion
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up); // b2, two squares away
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game.turn(), Turn::Player);
        assert_eq!(
            app.message.as_deref(),
            Some("That piece cannot move from b4 to b2")
        );
    }

    #[test]
    fn test_cursor_starts_on_player_chick() {
        let app = app();
        assert_eq!(app.cursor, sq(1, 2));
        assert!(app.game.board().get(app.cursor).is_owned_by(Side::Player));
    }

    #[test]
    fn test_cursor_stays_on_board() {
        let mut app = app();
        for _ in 0..5 {
            press(&mut app, KeyCode::Left);
            press(&mut app, KeyCode::Up);
        }
        assert_eq!(app.cursor, sq(0, 0));
    }

    #[test]
    fn test_empty_hand_selection() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.selection, Selection::None);
        assert_eq!(app.message.as_deref(), Some("No piece #1 in your hand"));
    }

    #[test]
    fn test_difficulty_and_restart_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.game.difficulty(), Difficulty::Hard);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game.turn(), Turn::Player);
        assert_eq!(app.game.difficulty(), Difficulty::Hard);
        assert_eq!(app.cursor, sq(1, 2));
    }

    #[test]
    fn test_escape_clears_then_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.selection, Selection::None);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("no chick in hand"), "No chick in hand");
        assert_eq!(capitalize(""), "");
    }
}
