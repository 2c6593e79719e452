//! Board state machine
//!
//! Owns the grid, validates and applies placements, detects wins and
//! full boards, and renders the text view of the game.

use crate::models::constants::{Axis, EMPTY_CELL, WINNING_RUN};
use crate::models::errors::{GameError, GameResult};

/// Board dimensions, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
}

/// A single cell: empty, or holding a player's token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Token(char),
}

impl Cell {
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => EMPTY_CELL,
            Cell::Token(token) => *token,
        }
    }
}

/// Capability interface to the board.
///
/// Players and the game loop only see the board through this trait,
/// so tests can substitute a scripted double.
pub trait GameBoard {
    /// Whether a counter can currently be dropped into `column`.
    ///
    /// Fail-safe: returns false for any column outside the board.
    /// The input is signed so a 1-based "0" entry arrives as -1.
    fn is_valid_move(&self, column: i32) -> bool;

    /// Drop a counter into `column` and return the row it settled in.
    ///
    /// Callers must have validated the move first; an out-of-range or
    /// full column is an internal invariant violation surfaced as an
    /// error.
    fn place_counter(&mut self, column: usize, token: char) -> GameResult<usize>;

    /// Whether the cell just played at (`row`, `column`) completes a
    /// winning run.
    fn is_winning_move(&self, row: usize, column: usize) -> bool;

    /// Whether every cell on the board is occupied.
    fn is_board_full(&self) -> bool;

    /// The text view of the grid with its column-number footer.
    fn render(&self) -> String;
}

/// The production board.
pub struct Board {
    config: BoardConfig,
    /// Grid of cells, indexed cells[row][column] with row 0 at the top.
    cells: Vec<Vec<Cell>>,
    /// Counters placed so far. Always equals the number of non-empty
    /// cells, so the full-board check never rescans the grid.
    moves: usize,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Board {
            cells: vec![vec![Cell::Empty; config.columns]; config.rows],
            moves: 0,
            config,
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Length of the same-token run through (`row`, `column`) along
    /// `axis`: the cell itself plus consecutive matches walking each of
    /// the axis's step vectors until a mismatch or the board edge.
    fn run_length(&self, row: usize, column: usize, axis: Axis) -> usize {
        let token = self.cells[row][column];
        let mut count = 1;

        for &(row_step, column_step) in axis.directions() {
            let mut r = row as i32 + row_step;
            let mut c = column as i32 + column_step;

            while r >= 0
                && r < self.config.rows as i32
                && c >= 0
                && c < self.config.columns as i32
                && self.cells[r as usize][c as usize] == token
            {
                count += 1;
                r += row_step;
                c += column_step;
            }
        }

        count
    }
}

impl GameBoard for Board {
    fn is_valid_move(&self, column: i32) -> bool {
        if column < 0 || column >= self.config.columns as i32 {
            return false;
        }

        // Counters settle to the lowest open cell, so a column with an
        // empty top cell always has room.
        self.cells[0][column as usize] == Cell::Empty
    }

    fn place_counter(&mut self, column: usize, token: char) -> GameResult<usize> {
        if column >= self.config.columns {
            return Err(GameError::ColumnOutOfRange(column));
        }

        // Scan upward from the bottom row for the first empty cell.
        for row in (0..self.config.rows).rev() {
            if self.cells[row][column] == Cell::Empty {
                self.cells[row][column] = Cell::Token(token);
                self.moves += 1;
                return Ok(row);
            }
        }

        Err(GameError::ColumnFull(column))
    }

    fn is_winning_move(&self, row: usize, column: usize) -> bool {
        if self.cells[row][column] == Cell::Empty {
            return false;
        }

        Axis::ALL
            .iter()
            .any(|&axis| self.run_length(row, column, axis) >= WINNING_RUN)
    }

    fn is_board_full(&self) -> bool {
        self.moves == self.config.rows * self.config.columns
    }

    fn render(&self) -> String {
        let mut out = String::from("\n");

        for row in &self.cells {
            out.push('|');
            for cell in row {
                out.push_str(&format!(" {} ", cell.symbol()));
            }
            out.push_str("|\n");
        }

        out.push(' ');
        for column in 1..=self.config.columns {
            out.push_str(&format!(" {} ", column));
        }
        out.push_str(" \n");

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CONFIG: BoardConfig = BoardConfig {
        rows: 6,
        columns: 7,
    };

    /// Token runs laid along an axis, and whether they should win from
    /// every cell of the run.
    const WIN_CASES: [(&[char], bool); 3] = [
        (&['X', 'X', 'X', 'X'], true),         // player win
        (&['X', 'O', 'X', 'X'], false),        // blocked by opponent
        (&['X', 'X', 'X'], false),             // not 4 in a row
    ];

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(TEST_CONFIG);

        assert_eq!(board.config(), TEST_CONFIG);
        assert_eq!(board.cells.len(), TEST_CONFIG.rows);
        assert_eq!(board.cells[0].len(), TEST_CONFIG.columns);
        assert_eq!(board.moves(), 0);

        for row in 0..TEST_CONFIG.rows {
            for column in 0..TEST_CONFIG.columns {
                assert_eq!(board.get(row, column), Cell::Empty);
            }
        }
    }

    #[test]
    fn valid_move_checks_range_and_top_cell() {
        let mut board = Board::new(TEST_CONFIG);

        // Fill column 0 completely.
        for row in 0..TEST_CONFIG.rows {
            board.cells[row][0] = Cell::Token('X');
        }

        assert!(board.is_valid_move(1));
        assert!(!board.is_valid_move(-1));
        assert!(!board.is_valid_move(7));
        assert!(!board.is_valid_move(0));
    }

    #[test]
    fn counters_fill_a_column_bottom_up() {
        let mut board = Board::new(TEST_CONFIG);

        let row = board.place_counter(0, 'X').unwrap();
        assert_eq!(row, TEST_CONFIG.rows - 1);
        assert_eq!(board.get(row, 0), Cell::Token('X'));
        assert_eq!(board.moves(), 1);

        let row = board.place_counter(0, 'O').unwrap();
        assert_eq!(row, TEST_CONFIG.rows - 2);
        assert_eq!(board.get(row, 0), Cell::Token('O'));
        assert_eq!(board.moves(), 2);
    }

    #[test]
    fn placing_into_a_full_column_fails() {
        let mut board = Board::new(TEST_CONFIG);

        for _ in 0..TEST_CONFIG.rows {
            board.place_counter(2, 'X').unwrap();
        }

        assert_eq!(board.place_counter(2, 'O'), Err(GameError::ColumnFull(2)));
        assert_eq!(board.moves(), TEST_CONFIG.rows);
    }

    #[test]
    fn placing_outside_the_board_fails() {
        let mut board = Board::new(TEST_CONFIG);

        assert_eq!(
            board.place_counter(7, 'X'),
            Err(GameError::ColumnOutOfRange(7))
        );
    }

    #[test]
    fn horizontal_runs_win_from_every_cell() {
        for (tokens, expected) in WIN_CASES {
            let mut board = Board::new(TEST_CONFIG);

            for (column, &token) in tokens.iter().enumerate() {
                board.cells[0][column] = Cell::Token(token);
            }

            for column in 0..tokens.len() {
                assert_eq!(
                    board.is_winning_move(0, column),
                    expected,
                    "tokens {:?} checked at column {}",
                    tokens,
                    column
                );
            }
        }
    }

    #[test]
    fn vertical_runs_win_from_the_top_cell() {
        for (tokens, expected) in WIN_CASES {
            let mut board = Board::new(TEST_CONFIG);

            for (row, &token) in tokens.iter().enumerate() {
                board.cells[row][0] = Cell::Token(token);
            }

            assert_eq!(
                board.is_winning_move(0, 0),
                expected,
                "tokens {:?} checked vertically",
                tokens
            );
        }
    }

    #[test]
    fn diagonal_left_runs_win_from_every_cell() {
        for (tokens, expected) in WIN_CASES {
            let mut board = Board::new(TEST_CONFIG);

            for (row, &token) in tokens.iter().enumerate() {
                board.cells[row][row] = Cell::Token(token);
            }

            for row in 0..tokens.len() {
                assert_eq!(
                    board.is_winning_move(row, row),
                    expected,
                    "tokens {:?} checked at row {}",
                    tokens,
                    row
                );
            }
        }
    }

    #[test]
    fn diagonal_right_runs_win_from_every_cell() {
        for (tokens, expected) in WIN_CASES {
            let mut board = Board::new(TEST_CONFIG);

            for (row, &token) in tokens.iter().enumerate() {
                board.cells[row][3 - row] = Cell::Token(token);
            }

            for row in 0..tokens.len() {
                assert_eq!(
                    board.is_winning_move(row, 3 - row),
                    expected,
                    "tokens {:?} checked at row {}",
                    tokens,
                    row
                );
            }
        }
    }

    #[test]
    fn win_check_on_an_empty_cell_is_false() {
        let board = Board::new(TEST_CONFIG);
        assert!(!board.is_winning_move(5, 3));
    }

    #[test]
    fn board_full_tracks_the_move_count() {
        let mut board = Board::new(TEST_CONFIG);
        assert!(!board.is_board_full());

        board.moves = TEST_CONFIG.rows * TEST_CONFIG.columns;
        assert!(board.is_board_full());
    }

    #[test]
    fn renders_the_empty_board() {
        let board = Board::new(TEST_CONFIG);

        let empty_row = "\n| _  _  _  _  _  _  _ |";
        let footer = "\n  1  2  3  4  5  6  7  \n";
        let expected = empty_row.repeat(TEST_CONFIG.rows) + footer;

        assert_eq!(board.render(), expected);
    }

    #[test]
    fn renders_placed_tokens() {
        let mut board = Board::new(TEST_CONFIG);

        for (column, token) in ['X', 'O', 'X', 'O', 'X', 'O', 'X'].into_iter().enumerate() {
            board.cells[0][column] = Cell::Token(token);
        }

        let top_row = "\n| X  O  X  O  X  O  X |";
        let empty_row = "\n| _  _  _  _  _  _  _ |";
        let footer = "\n  1  2  3  4  5  6  7  \n";
        let expected =
            top_row.to_string() + &empty_row.repeat(TEST_CONFIG.rows - 1) + footer;

        assert_eq!(board.render(), expected);
    }
}
