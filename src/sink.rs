//! Consumers for the leaves of a tree expansion
//!
//! Large expansions are better written out as they are generated than
//! collected in memory. A [`Sink`] plugs into [`crate::tree::expand_with`]:
//!
//! ```
//! use connect4_engine::{sink::{LineSink, Sink}, tree::expand_with, GameState};
//!
//!# fn main() -> anyhow::Result<()> {
//! let mut sink = LineSink::new(Vec::new());
//! let count = expand_with(&GameState::new(), 1, |state, outcome| sink.emit(&state, &outcome))?;
//! assert_eq!(count, 7);
//! assert!(String::from_utf8(sink.into_inner())?.starts_with("7 [Final: false"));
//!# Ok(())
//!# }
//! ```

use anyhow::{anyhow, Result};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use std::io::{ErrorKind, Read, Write};

use crate::board::GameState;
use crate::codec::{encode, MoveSequence};
use crate::terminal::Outcome;

pub trait Sink {
    fn emit(&mut self, state: &GameState, outcome: &Outcome) -> Result<()>;

    /// Flushes anything buffered
    fn finish(&mut self) -> Result<()>;
}

/// Writes one line per game:
/// `<sequence> [Final: <bool>, Win: <bool>, Player: <player to move>]`
pub struct LineSink<W: Write> {
    writer: W,
}

impl<W: Write> LineSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for LineSink<W> {
    fn emit(&mut self, state: &GameState, outcome: &Outcome) -> Result<()> {
        writeln!(
            self.writer,
            "{} [Final: {}, Win: {}, Player: {}]",
            encode(state),
            outcome.is_final(),
            outcome.is_win(),
            state.next_player().index()
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes each game as a move count byte followed by the big endian packed
/// sequence (17 bytes per game)
pub struct RecordSink<W: Write> {
    writer: W,
}

impl<W: Write> RecordSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for RecordSink<W> {
    fn emit(&mut self, state: &GameState, _outcome: &Outcome) -> Result<()> {
        let sequence = encode(state);
        self.writer.write_u8(sequence.len() as u8)?;
        self.writer.write_u128::<BigEndian>(sequence.pack()?)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Reads back the games written by a [`RecordSink`]
pub struct RecordReader<R: Read> {
    reader: R,
}

impl<R: Read> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_record(&mut self) -> Result<Option<MoveSequence>> {
        let len = match self.reader.read_u8() {
            Ok(len) => len as usize,
            // a clean end of input between records
            Err(err) if err.kind() == ErrorKind::UnexpectedEof => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let sequence = MoveSequence::unpack(self.reader.read_u128::<BigEndian>()?)?;
        if sequence.len() != len {
            return Err(anyhow!(
                "record length {} does not match its {} packed moves",
                len,
                sequence.len()
            ));
        }
        Ok(Some(sequence))
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<MoveSequence>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}
