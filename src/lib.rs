//! A game-state engine for the board game 'Connect 4'
//!
//! A game is stored as the ordered list of its moves. Move sequences
//! (one column digit per move) decode into that state and encode back,
//! and a bounded look-ahead ranks the moves available to the player on turn.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{codec::decode_str, evaluate::best_moves, terminal::is_win};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let replay = decode_str("121212")?;
//! assert!(replay.rejection.is_none());
//! assert!(!is_win(&replay.state));
//!
//! // the first player completes the column
//! let ranking = best_moves(&replay.state, 4);
//! assert_eq!(ranking[0].score, 1);
//! assert_eq!(ranking[0].moves[0].cell.column, 0);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod codec;

pub mod terminal;

pub mod moves;

pub mod tree;

pub mod evaluate;

pub mod sink;


pub use board::{Cell, GameState, Move, Player};
pub use codec::{decode, decode_str, encode, MoveSequence, Replay};
pub use error::{CodecError, MoveError};
pub use evaluate::{best_moves, recommend, ScoredMoves, DEFAULT_LOOKAHEAD};
pub use moves::next_moves;
pub use terminal::{is_final, is_win, outcome, Outcome};
pub use tree::{expand, expand_with};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of tiles on the board, and so the length of the longest game
pub const CELLS: usize = WIDTH * HEIGHT;

/// The first player cannot complete four tiles before the 7th move
pub const MIN_MOVES_FOR_WIN: usize = 7;

// a column selector must fit in 3 bits of a packed record, and a full game in 128
const_assert!(WIDTH < 8);
const_assert!(CELLS * 3 <= 128);
// four tiles of the first player and three of the second
const_assert_eq!(MIN_MOVES_FOR_WIN, 2 * 4 - 1);
