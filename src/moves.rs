//! Legal move enumeration

use crate::board::{Cell, GameState, Move};
use crate::WIDTH;

/// The row a tile dropped into `column` lands on, `None` if the column is
/// full or not on the board
pub fn landing_row(state: &GameState, column: usize) -> Option<usize> {
    landing_cell(state, column).map(|cell| cell.row)
}

fn landing_cell(state: &GameState, column: usize) -> Option<Cell> {
    state.height(column).and_then(|row| Cell::new(row, column))
}

/// One move per column that still has room, ordered left to right
///
/// The moves belong to the player on turn. A full board has no moves.
pub fn next_moves(state: &GameState) -> Vec<Move> {
    let player = state.next_player();
    (0..WIDTH)
        .filter_map(|column| landing_cell(state, column))
        .map(|cell| Move::new(cell, player))
        .collect()
}
