//! Terminal UI: board, hands and status for a game against the CPU.

mod app;
mod game_view;

pub use app::App;
