//! Turn orchestration
//!
//! Alternates two players' turns against one board until a win or a
//! draw, then announces the result.

use crate::io::{InputReader, OutputWriter};
use crate::models::board::GameBoard;
use crate::models::errors::GameResult;
use crate::services::player::Player;
use crate::ui::presenters::{BoardPresenter, GamePresenter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Draw,
}

pub struct Game<I: InputReader, O: OutputWriter, B: GameBoard> {
    board: B,
    players: [Player<I, O>; 2],
    /// Index of the player whose turn it is. Always 0 or 1.
    current: usize,
    state: GameState,
    output: O,
}

impl<I: InputReader, O: OutputWriter, B: GameBoard> Game<I, O, B> {
    pub fn new(player1: Player<I, O>, player2: Player<I, O>, board: B, output: O) -> Self {
        Game {
            board,
            players: [player1, player2],
            current: 0,
            state: GameState::InProgress,
            output,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn players(&self) -> &[Player<I, O>; 2] {
        &self.players
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Run the turn loop until the game reaches a terminal state.
    ///
    /// Players only return moves the board validated, so placement
    /// cannot fail here under single-owner use; if it ever does, the
    /// error propagates out as fatal rather than being retried.
    pub fn run(&mut self) -> GameResult<()> {
        BoardPresenter::show(&self.board, &mut self.output);

        while self.state == GameState::InProgress {
            let player = &mut self.players[self.current];
            let column = player.get_move(&self.board);
            let row = self.board.place_counter(column, player.token())?;

            BoardPresenter::show(&self.board, &mut self.output);

            if self.board.is_winning_move(row, column) {
                GamePresenter::show_victory(self.players[self.current].name(), &mut self.output);
                self.state = GameState::Won;
            } else if self.board.is_board_full() {
                GamePresenter::show_draw(&mut self.output);
                self.state = GameState::Draw;
            } else {
                self.current = 1 - self.current;
            }
        }

        GamePresenter::show_game_over(&mut self.output);
        Ok(())
    }
}
