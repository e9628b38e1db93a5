use crate::options::DEFAULT_MAX_LINE_LENGTH;
use std::borrow::Cow;
use std::io::{BufRead, Read};

/// A source of raw input lines for the parser.
pub trait LineSource {
    /// Returns the next line without its terminator, or `None` once the input is exhausted.
    fn next_line(&mut self) -> std::io::Result<Option<Cow<'_, str>>>;
}

/// Reads lines from a stream, such as a file.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected. A line is read up to a
/// bound derived from the maximum line length; anything longer is returned cut off, which is still
/// long enough for the parser to reject it.
pub struct ReaderSource<R> {
    reader: R,
    buf: Vec<u8>,
    limit: u64,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self::with_max_line_length(reader, DEFAULT_MAX_LINE_LENGTH)
    }

    pub fn with_max_line_length(reader: R, max_line_length: usize) -> Self {
        // Up to four bytes per character, plus a CR LF terminator
        let limit = max_line_length.saturating_add(1).saturating_mul(4).saturating_add(2);
        Self {
            reader,
            buf: vec![],
            limit: limit as u64,
        }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> std::io::Result<Option<Cow<'_, str>>> {
        self.buf.clear();
        let read = (&mut self.reader)
            .take(self.limit)
            .read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }

        if self.buf.ends_with(b"\n") {
            self.buf.pop();
            if self.buf.ends_with(b"\r") {
                self.buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&self.buf)))
    }
}

/// Splits an in-memory buffer on line feeds
pub struct StrSource<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> StrSource<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { lines: src.lines() }
    }
}

impl<'a> From<&'a str> for StrSource<'a> {
    fn from(src: &'a str) -> Self {
        Self::new(src)
    }
}

impl<'a> LineSource for StrSource<'a> {
    fn next_line(&mut self) -> std::io::Result<Option<Cow<'_, str>>> {
        Ok(self.lines.next().map(Cow::Borrowed))
    }
}
