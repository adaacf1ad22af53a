//! Conversion between move sequences and game states
//!
//! A move sequence is a string of column digits '1'..'7', one per move,
//! leftmost digit first. It carries the same information as a `GameState`:
//! replaying the digits under gravity rebuilds the state, and reading the
//! columns of a state in move order gives back the digits.

use log::warn;

use std::fmt;
use std::str::FromStr;

use crate::board::GameState;
use crate::error::{CodecError, MoveError};
use crate::terminal::is_win;
use crate::{CELLS, HEIGHT, WIDTH};

const PACK_BITS: u32 = 3;
const PACK_MASK: u128 = (1 << PACK_BITS) - 1;

/// One-indexed column selectors in move order
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct MoveSequence(Vec<u8>);

impl MoveSequence {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_selectors(selectors: Vec<u8>) -> Self {
        Self(selectors)
    }

    pub fn selectors(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Packs the selectors into 3 bits each, first move in the lowest bits.
    /// A zero selector marks the end, so only sequences of in-range selectors
    /// no longer than a full game can be packed.
    pub fn pack(&self) -> Result<u128, CodecError> {
        if self.0.len() > CELLS {
            return Err(CodecError::InvalidRecord(format!(
                "{} moves do not fit on the board",
                self.0.len()
            )));
        }
        let mut packed = 0u128;
        for (index, &selector) in self.0.iter().enumerate() {
            if selector == 0 || selector as usize > WIDTH {
                return Err(CodecError::InvalidRecord(format!(
                    "selector {} at position {} cannot be packed",
                    selector, index
                )));
            }
            packed |= (selector as u128) << (index as u32 * PACK_BITS);
        }
        Ok(packed)
    }

    pub fn unpack(mut packed: u128) -> Result<Self, CodecError> {
        let mut selectors = Vec::new();
        while packed != 0 {
            let selector = (packed & PACK_MASK) as u8;
            if selector == 0 || selector as usize > WIDTH {
                return Err(CodecError::InvalidRecord(format!(
                    "selector {} at position {}",
                    selector,
                    selectors.len()
                )));
            }
            selectors.push(selector);
            packed >>= PACK_BITS;
        }
        Ok(Self(selectors))
    }
}

impl FromStr for MoveSequence {
    type Err = CodecError;

    fn from_str(moves: &str) -> Result<Self, Self::Err> {
        moves
            .chars()
            .enumerate()
            .map(|(index, found)| match found.to_digit(10) {
                Some(digit) => Ok(digit as u8),
                None => Err(CodecError::MalformedSelector { index, found }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for selector in self.0.iter() {
            write!(f, "{}", selector)?;
        }
        Ok(())
    }
}

/// The move that stopped a replay
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Rejection {
    /// Zero-based position of the move in the sequence
    pub index: usize,
    pub selector: u8,
    pub reason: MoveError,
}

/// The outcome of replaying a move sequence
///
/// When a move cannot be played the replay stops there: `state` holds every
/// move before it and `rejection` says why.
#[derive(Clone, Debug)]
pub struct Replay {
    pub state: GameState,
    pub rejection: Option<Rejection>,
}

impl Replay {
    pub fn is_complete(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Replays `sequence` from an empty board
pub fn decode(sequence: &MoveSequence) -> Replay {
    let mut state = GameState::new();

    for (index, &selector) in sequence.selectors().iter().enumerate() {
        let played = check_move(&state, selector)
            .and_then(|_| state.play(selector as usize - 1).map(|_| ()));
        if let Err(reason) = played {
            warn!(
                "Sequence '{}' stops at move {}: {}",
                MoveSequence(sequence.selectors()[..=index].to_vec()),
                index + 1,
                reason
            );
            return Replay {
                state,
                rejection: Some(Rejection {
                    index,
                    selector,
                    reason,
                }),
            };
        }
    }

    Replay {
        state,
        rejection: None,
    }
}

/// Parses and replays a digit string
pub fn decode_str(moves: &str) -> Result<Replay, CodecError> {
    Ok(decode(&moves.parse()?))
}

/// Reads the columns of `state` in the order they were played
pub fn encode(state: &GameState) -> MoveSequence {
    MoveSequence(
        state
            .moves()
            .iter()
            .map(|played| played.cell.column as u8 + 1)
            .collect(),
    )
}

fn check_move(state: &GameState, selector: u8) -> Result<(), MoveError> {
    // a won game takes no more moves
    if is_win(state) {
        return Err(MoveError::GameOver);
    }
    if selector == 0 || selector as usize > WIDTH {
        return Err(MoveError::ColumnOutOfRange { selector });
    }
    if state.height(selector as usize - 1).unwrap_or(HEIGHT) >= HEIGHT {
        return Err(MoveError::ColumnFull { selector });
    }
    Ok(())
}
