//! Line reader for RxPacketTrace files.
//!
//! Trace files are plain text, one record per line. Lines are decoded lossily
//! so a stray non-UTF-8 byte only spoils the line it appears in.

use crate::utils::error::ParseError;
use log::debug;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Buffered, line-at-a-time reader over a trace file
///
/// **Public** - used by the aggregator for both scan passes
pub struct TraceReader {
    reader: BufReader<File>,
    buf: Vec<u8>,
    lines_read: usize,
}

impl TraceReader {
    /// Open a trace file for reading
    ///
    /// # Errors
    /// * `ParseError::OpenFailed` - file missing or unreadable
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        debug!("Opening trace file: {}", path.display());

        let file = File::open(path).map_err(|source| ParseError::OpenFailed {
            path: path.display().to_string(),
            source,
        })?;

        Ok(Self {
            reader: BufReader::new(file),
            buf: Vec::with_capacity(256),
            lines_read: 0,
        })
    }

    /// Read the next line, without its terminator
    ///
    /// Returns `Ok(None)` at end of file.
    pub fn next_line(&mut self) -> Result<Option<Cow<'_, str>>, ParseError> {
        self.buf.clear();
        let n = self.reader.read_until(b'\n', &mut self.buf)?;
        if n == 0 {
            return Ok(None);
        }
        self.lines_read += 1;

        while matches!(self.buf.last(), Some(b'\n' | b'\r')) {
            self.buf.pop();
        }

        Ok(Some(String::from_utf8_lossy(&self.buf)))
    }

    /// Number of lines returned so far
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}

/// Count the lines of a trace file
///
/// **Public** - pre-scan used to turn line numbers into a progress percentage
///
/// A final line without a trailing newline still counts.
pub fn count_lines(path: impl AsRef<Path>) -> Result<usize, ParseError> {
    let mut reader = TraceReader::open(path)?;
    while reader.next_line()?.is_some() {}
    Ok(reader.lines_read())
}
