//! Line source with one line of pushback
//!
//! Provides a streaming sequence of text lines from any buffered reader.
//! The aggregator pulls lines itself and, when a transaction block ends at the
//! start of the next block, hands that line back so the next read replays it.
//!
//! # Design
//!
//! - Lines are read one at a time; the file is never loaded into memory
//! - The line terminator and trailing whitespace are removed
//! - Bytes that are not valid UTF-8 are replaced rather than rejected, since
//!   QIF exports are often written in a legacy code page
//! - A UTF-8 byte-order mark at the start of the stream is dropped
//! - The pushback slot holds at most one line
//!
//! ```
//! use qif2csv::io::LineSource;
//!
//! let mut source = LineSource::new("!Type:Bank\nT10\n".as_bytes());
//! let header = source.next_line().unwrap().unwrap();
//! source.push_back(header).unwrap();
//! assert_eq!(source.next_line().unwrap().as_deref(), Some("!Type:Bank"));
//! assert_eq!(source.lines_read(), 1);
//! ```

use crate::types::QifError;
use std::io::BufRead;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Pushback slot
#[derive(Debug, Default)]
enum Pushback {
    #[default]
    Empty,
    Holds(String),
}

/// Streaming line reader
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
    pushback: Pushback,
    lines_read: u64,
    buf: Vec<u8>,
}

impl<R: BufRead> LineSource<R> {
    /// Create a new LineSource over a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pushback: Pushback::Empty,
            lines_read: 0,
            buf: Vec::with_capacity(256),
        }
    }

    /// Get the next line
    ///
    /// A pushed-back line is returned first and the slot is cleared.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(line))` - The next line, without terminator
    /// * `Ok(None)` - End of stream
    /// * `Err(QifError::Io)` - The underlying reader failed
    pub fn next_line(&mut self) -> Result<Option<String>, QifError> {
        if let Pushback::Holds(line) = std::mem::take(&mut self.pushback) {
            return Ok(Some(line));
        }

        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.lines_read += 1;

        let text = String::from_utf8_lossy(&self.buf);
        let mut line = text.trim_end();
        if self.lines_read == 1 {
            line = line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(line);
        }
        Ok(Some(line.to_string()))
    }

    /// Store one line to be returned by the next call to [`next_line`](Self::next_line)
    ///
    /// # Errors
    ///
    /// Returns `QifError::PushbackOccupied` if a line is already waiting to be
    /// replayed. The slot keeps the earlier line in that case.
    pub fn push_back(&mut self, line: String) -> Result<(), QifError> {
        match self.pushback {
            Pushback::Empty => {
                self.pushback = Pushback::Holds(line);
                Ok(())
            }
            Pushback::Holds(_) => Err(QifError::PushbackOccupied),
        }
    }

    /// Number of physical lines read so far (replayed lines are not counted)
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = Result<String, QifError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
