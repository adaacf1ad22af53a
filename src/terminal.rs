//! Win and draw detection
//!
//! Only the most recent move can complete a new four-in-a-row, so the checks
//! look at the windows of four cells that contain the last tile played.

use std::fmt;

use crate::board::{Cell, GameState, Player};
use crate::MIN_MOVES_FOR_WIN;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Direction {
    Vertical,
    /// Rising to the right, "/"
    RisingDiagonal,
    /// Falling to the right, "\"
    FallingDiagonal,
    Horizontal,
}

impl Direction {
    // (row step, column step) between neighbouring cells of a line
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Vertical => (1, 0),
            Direction::RisingDiagonal => (1, 1),
            Direction::FallingDiagonal => (1, -1),
            Direction::Horizontal => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Vertical => "Vertical",
            Direction::RisingDiagonal | Direction::FallingDiagonal => "Diagonal",
            Direction::Horizontal => "Horizontal",
        };
        write!(f, "{}", name)
    }
}

/// Explanation of a won game
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Win {
    pub player: Player,
    pub direction: Direction,
    /// The four aligned cells, ordered along the direction's step
    pub cells: [Cell; 4],
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Outcome {
    Ongoing,
    Win(Win),
    /// The board is full and nobody has four in a row
    Draw,
}

impl Outcome {
    pub fn is_final(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win(_))
    }
}

// offsets of the four windows along a line that include the last move
const WINDOW_STARTS: [isize; 4] = [0, -1, -2, -3];

/// Finds a four-in-a-row completed by the most recent move
pub fn find_win(state: &GameState) -> Option<Win> {
    if state.len() < MIN_MOVES_FOR_WIN {
        return None;
    }
    let last = state.last_move()?;
    let owned = |cell: Option<Cell>| cell.and_then(|cell| state.get(cell)) == Some(last.player);

    // the last tile is always on top of its column, so only look down
    let depths: [isize; 3] = [1, 2, 3];
    let below = depths.iter().map(|&k| last.cell.offset(-k, 0));
    if below.clone().all(owned) {
        let mut cells = [last.cell; 4];
        for (slot, cell) in cells.iter_mut().zip(below.rev()) {
            // all three cells exist, otherwise `owned` would have failed
            if let Some(cell) = cell {
                *slot = cell;
            }
        }
        return Some(Win {
            player: last.player,
            direction: Direction::Vertical,
            cells,
        });
    }

    for &direction in [
        Direction::RisingDiagonal,
        Direction::FallingDiagonal,
        Direction::Horizontal,
    ]
    .iter()
    {
        let (row_step, column_step) = direction.step();
        for &start in WINDOW_STARTS.iter() {
            let mut cells = [last.cell; 4];
            let mut aligned = true;
            for (i, slot) in cells.iter_mut().enumerate() {
                let k = start + i as isize;
                if k == 0 {
                    continue;
                }
                let cell = last.cell.offset(k * row_step, k * column_step);
                match cell {
                    Some(cell) if owned(Some(cell)) => *slot = cell,
                    _ => {
                        aligned = false;
                        break;
                    }
                }
            }
            if aligned {
                return Some(Win {
                    player: last.player,
                    direction,
                    cells,
                });
            }
        }
    }

    None
}

/// Did the most recent move complete four in a row?
pub fn is_win(state: &GameState) -> bool {
    find_win(state).is_some()
}

/// The game is won or the board is full
pub fn is_final(state: &GameState) -> bool {
    is_win(state) || state.is_full()
}

/// Classifies `state`; a win on the last free cell is a win, not a draw
pub fn outcome(state: &GameState) -> Outcome {
    match find_win(state) {
        Some(win) => Outcome::Win(win),
        None if state.is_full() => Outcome::Draw,
        None => Outcome::Ongoing,
    }
}
