//! The canonical representation of a game: the ordered list of its moves

use std::fmt;

use crate::error::MoveError;
use crate::{HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    /// The player making the first move (red)
    One,
    /// The player making the second move (blue)
    Two,
}

impl Player {
    /// The player making the move at the zero-based index `move_index`
    pub fn for_move(move_index: usize) -> Self {
        if move_index % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    /// 0 for the first player, 1 for the second
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "R"),
            Player::Two => write!(f, "B"),
        }
    }
}

/// A tile position, row 0 is the bottom of the board
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    /// Returns `None` if the position is not on the board
    pub fn new(row: usize, column: usize) -> Option<Self> {
        if row < HEIGHT && column < WIDTH {
            Some(Self { row, column })
        } else {
            None
        }
    }

    /// The cell `rows` up and `columns` right of this one, if it is on the board
    pub fn offset(self, rows: isize, columns: isize) -> Option<Self> {
        let row = self.row as isize + rows;
        let column = self.column as isize + columns;
        if row < 0 || column < 0 {
            return None;
        }
        Self::new(row as usize, column as usize)
    }
}

impl fmt::Display for Cell {
    // one-indexed, as shown to players
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.column + 1)
    }
}

/// A single tile placement
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    pub cell: Cell,
    pub player: Player,
}

impl Move {
    pub fn new(cell: Cell, player: Player) -> Self {
        Self { cell, player }
    }
}

/// An in-progress or finished game
///
/// The moves are kept in the order they were played, which is what encodes
/// the game back into a move sequence. Alongside them the state keeps an
/// occupancy grid and the column heights so that lookups don't scan the moves.
/// A state only ever grows by appending a move that respects gravity and
/// turn order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GameState {
    moves: Vec<Move>,
    // cells are stored bottom-to-top, left-to-right
    grid: [[Option<Player>; WIDTH]; HEIGHT],
    heights: [usize; WIDTH],
}

impl GameState {
    pub fn new() -> Self {
        Self {
            moves: Vec::new(),
            grid: [[None; WIDTH]; HEIGHT],
            heights: [0; WIDTH],
        }
    }

    /// Number of moves played so far
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// No tile can be added
    pub fn is_full(&self) -> bool {
        self.moves.len() == WIDTH * HEIGHT
    }

    /// The moves of the game in the order they were played
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// Who occupies `cell`, if anyone
    pub fn get(&self, cell: Cell) -> Option<Player> {
        self.grid.get(cell.row)?.get(cell.column).copied().flatten()
    }

    /// Number of tiles in `column`, which is also the row the next tile lands on.
    /// `None` if the column is not on the board
    pub fn height(&self, column: usize) -> Option<usize> {
        self.heights.get(column).copied()
    }

    /// The player on turn
    pub fn next_player(&self) -> Player {
        Player::for_move(self.moves.len())
    }

    /// Appends a move, leaving the state untouched if the move is not the
    /// next tile the player on turn can drop
    pub fn push(&mut self, next: Move) -> Result<(), MoveError> {
        if next.player != self.next_player() {
            return Err(MoveError::WrongPlayer);
        }
        let column = next.cell.column;
        let row = self.height(column).ok_or(MoveError::ColumnOutOfRange {
            selector: selector(column),
        })?;
        if row >= HEIGHT {
            return Err(MoveError::ColumnFull {
                selector: column as u8 + 1,
            });
        }
        if next.cell.row != row {
            return Err(MoveError::CellMismatch {
                expected: Cell { row, column },
                found: next.cell,
            });
        }

        self.grid[row][column] = Some(next.player);
        self.heights[column] += 1;
        self.moves.push(next);
        Ok(())
    }

    /// Returns a copy of this state extended by one move
    pub fn with_move(&self, next: Move) -> Result<Self, MoveError> {
        let mut child = self.clone();
        child.push(next)?;
        Ok(child)
    }

    /// Drops a tile for the player on turn into the zero-indexed `column`
    pub fn play(&mut self, column: usize) -> Result<Move, MoveError> {
        let row = self.height(column).ok_or(MoveError::ColumnOutOfRange {
            selector: selector(column),
        })?;
        let cell = Cell::new(row, column).ok_or(MoveError::ColumnFull {
            selector: column as u8 + 1,
        })?;
        let next = Move::new(cell, self.next_player());
        self.push(next)?;
        Ok(next)
    }
}

// one-indexed column as typed by a player, saturating for columns far off the board
fn selector(column: usize) -> u8 {
    column.saturating_add(1).min(u8::MAX as usize) as u8
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..HEIGHT).rev() {
            write!(f, " |")?;
            for column in 0..WIDTH {
                match self.grid[row][column] {
                    Some(player) => write!(f, " {} ", player)?,
                    None => write!(f, "   ")?,
                }
            }
            writeln!(f, "| {}", row + 1)?;
        }
        write!(f, " +")?;
        for column in 1..=WIDTH {
            write!(f, "-{}-", column)?;
        }
        write!(f, "+")
    }
}
