use crate::io::OutputWriter;
use crate::models::board::GameBoard;

pub struct BoardPresenter;

impl BoardPresenter {
    pub fn show(board: &dyn GameBoard, output: &mut dyn OutputWriter) {
        output.write(&board.render());
    }
}

pub struct GamePresenter;

impl GamePresenter {
    pub fn show_victory(name: &str, output: &mut dyn OutputWriter) {
        output.writeln(&format!("Congratulations {}, you have won!", name));
    }

    pub fn show_draw(output: &mut dyn OutputWriter) {
        output.writeln("It's a draw!");
    }

    pub fn show_game_over(output: &mut dyn OutputWriter) {
        output.writeln("Game Over!");
    }
}

pub struct PlayerPresenter;

impl PlayerPresenter {
    pub fn show_turn_prompt(name: &str, output: &mut dyn OutputWriter) {
        output.write(&format!("{}, it's your turn, please enter a column: ", name));
    }

    pub fn show_read_failure(output: &mut dyn OutputWriter) {
        output.writeln("Failed to read input. Please try again.");
    }

    pub fn show_invalid_input(output: &mut dyn OutputWriter) {
        output.writeln("Invalid input. Please enter a valid column number.");
    }

    pub fn show_invalid_move(output: &mut dyn OutputWriter) {
        output.writeln("Invalid move, please try again.");
    }
}
