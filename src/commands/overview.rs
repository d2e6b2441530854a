//! Overview command - prints every lane as a column of numbered tasks.

use crate::render;
use crate::Board;

/// Print the board as a bordered grid.
pub fn overview(board: &Board) {
    let output = render::render_board(board.lanes(), board.config().max_width);
    print!("{}", output);
}
