use connect4::io::TerminalIO;
use connect4::models::board::{Board, BoardConfig};
use connect4::models::constants::{BOARD_COLUMNS, BOARD_ROWS, PLAYER1_TOKEN, PLAYER2_TOKEN};
use connect4::services::player::Player;
use connect4::Game;

fn main() {
    let config = BoardConfig {
        rows: BOARD_ROWS,
        columns: BOARD_COLUMNS,
    };
    let board = Board::new(config);

    let player1 = Player::new("Player 1", PLAYER1_TOKEN, TerminalIO, TerminalIO);
    let player2 = Player::new("Player 2", PLAYER2_TOKEN, TerminalIO, TerminalIO);

    let mut game = Game::new(player1, player2, board, TerminalIO);

    if let Err(e) = game.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
