//! Player move selection
//!
//! A player owns its input source and output sink and keeps no game
//! state between turns beyond its identity.

use crate::io::{InputReader, OutputWriter};
use crate::models::board::GameBoard;
use crate::ui::presenters::PlayerPresenter;

pub struct Player<I: InputReader, O: OutputWriter> {
    name: String,
    token: char,
    input: I,
    output: O,
}

impl<I: InputReader, O: OutputWriter> Player<I, O> {
    pub fn new(name: &str, token: char, input: I, output: O) -> Self {
        Player {
            name: name.to_string(),
            token,
            input,
            output,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token(&self) -> char {
        self.token
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Prompt until the player enters a column the board will accept,
    /// then return its 0-based index.
    ///
    /// Blocks on the input source. Every failure kind re-prompts with
    /// its own message; nothing propagates out of this loop.
    pub fn get_move(&mut self, board: &dyn GameBoard) -> usize {
        loop {
            PlayerPresenter::show_turn_prompt(&self.name, &mut self.output);

            let line = match self.input.read_line() {
                Ok(line) => line,
                Err(_) => {
                    PlayerPresenter::show_read_failure(&mut self.output);
                    continue;
                }
            };

            let column: i32 = match line.trim().parse() {
                Ok(column) => column,
                Err(_) => {
                    PlayerPresenter::show_invalid_input(&mut self.output);
                    continue;
                }
            };

            // Input is 1-based; the board indexes columns from 0.
            let index = column - 1;

            if board.is_valid_move(index) {
                return index as usize;
            }

            PlayerPresenter::show_invalid_move(&mut self.output);
        }
    }
}
