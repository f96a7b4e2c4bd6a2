//! # Animal Shogi
//!
//! Animal Shogi (dōbutsu shōgi) on a 3×4 board against a CPU opponent.
//! Captured pieces change sides and can be dropped back in, chicks promote
//! to hens on the far rank, and taking the opposing lion wins.
//!
//! ## Modules
//!
//! - [`game`] — Rules engine: board, pieces, hands, move validation and execution
//! - [`ai`] — CPU opponents: random (easy) and one-ply greedy (hard)
//! - [`controller`] — A match between the player and the CPU, with the delayed CPU reply
//! - [`ui`] — Terminal UI built with Ratatui
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod controller;
pub mod error;
pub mod game;
pub mod ui;
