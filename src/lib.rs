//! Connect Four
//!
//! A Rust implementation of the classic two-player Connect Four game,
//! played over a text console.
//!
//! # Overview
//!
//! Two players take turns dropping tokens into a 7-column, 6-row grid.
//! A token settles into the lowest open cell of its column; the first
//! player to line up four tokens horizontally, vertically, or
//! diagonally wins, and a full board with no winner is a draw.
//!
//! # Modules
//!
//! - [`models`] - Board state machine, constants, and error types
//! - [`services`] - Turn loop and player move selection
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Presentation of prompts, messages, and the board
//!
//! # Example
//!
//! ```rust,no_run
//! use connect4::io::TerminalIO;
//! use connect4::models::board::{Board, BoardConfig};
//! use connect4::services::player::Player;
//! use connect4::Game;
//!
//! let board = Board::new(BoardConfig { rows: 6, columns: 7 });
//! let player1 = Player::new("Player 1", 'X', TerminalIO, TerminalIO);
//! let player2 = Player::new("Player 2", 'O', TerminalIO, TerminalIO);
//!
//! let mut game = Game::new(player1, player2, board, TerminalIO);
//! game.run().expect("placement invariant violated");
//! ```

pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use services::game::{Game, GameState};
