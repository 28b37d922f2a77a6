//! Line splitting over decoded text spans.
//!
//! The splitter is fed consecutive spans of decoded text, one per block, and
//! reports every completed line to a [`LineSink`]. `\n`, `\r` and `\r\n` all
//! terminate a line, and a file may mix them freely.
//!
//! Two pieces of state survive between spans:
//! - `accumulator` holds the unterminated tail of the current line. A line
//!   that starts and ends inside a single span never touches it and is lent
//!   to the sink as a slice of the span.
//! - `pending_cr` is set when a span ends with `\r`. The line has already
//!   been emitted; if the next non-empty span starts with `\n`, that `\n`
//!   belongs to the same terminator and is skipped.
//!
//! A terminator at the very end of the input never produces an extra empty
//! line, and an unterminated last line is flushed by [`LineSplitter::finish`].

use crate::sink::LineSink;

/// Incremental CR / LF / CRLF line splitter.
#[derive(Debug, Default)]
pub struct LineSplitter {
    accumulator: String,
    pending_cr: bool,
    emitted: u64,
}

impl LineSplitter {
    /// Creates a splitter with an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines handed to a sink so far.
    #[must_use]
    pub fn lines_emitted(&self) -> u64 {
        self.emitted
    }

    /// Text of the current, not yet terminated line.
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.accumulator
    }

    /// Splits `span` and emits every line it completes.
    ///
    /// # Errors
    ///
    /// Stops at, and returns, the first error of `sink`.
    pub fn push<S>(&mut self, span: &str, sink: &mut S) -> Result<(), S::Error>
    where
        S: LineSink + ?Sized,
    {
        if span.is_empty() {
            return Ok(());
        }

        let bytes = span.as_bytes();
        let mut start = 0;
        if core::mem::take(&mut self.pending_cr) && bytes[0] == b'\n' {
            start = 1;
        }

        // Terminators are ASCII, so byte positions always fall on char
        // boundaries of `span`.
        let mut pos = start;
        while pos < bytes.len() {
            match bytes[pos] {
                b'\n' => {
                    self.emit(&span[start..pos], sink)?;
                    start = pos + 1;
                }
                b'\r' => {
                    self.emit(&span[start..pos], sink)?;
                    match bytes.get(pos + 1) {
                        Some(b'\n') => pos += 1,
                        Some(_) => {}
                        None => self.pending_cr = true,
                    }
                    start = pos + 1;
                }
                _ => {}
            }
            pos += 1;
        }

        if start < bytes.len() {
            self.accumulator.push_str(&span[start..]);
        }
        Ok(())
    }

    /// Flushes the last line if it was not terminated.
    ///
    /// # Errors
    ///
    /// Returns the error of `sink`, if any.
    pub fn finish<S>(mut self, sink: &mut S) -> Result<u64, S::Error>
    where
        S: LineSink + ?Sized,
    {
        if !self.accumulator.is_empty() {
            self.emit("", sink)?;
        }
        Ok(self.emitted)
    }

    fn emit<S>(&mut self, tail: &str, sink: &mut S) -> Result<(), S::Error>
    where
        S: LineSink + ?Sized,
    {
        self.emitted += 1;
        if self.accumulator.is_empty() {
            return sink.accept(tail);
        }

        self.accumulator.push_str(tail);
        let result = sink.accept(&self.accumulator);
        self.accumulator.clear();
        result
    }
}

/// Splits a complete string the way [`LineSplitter`] splits a stream.
///
/// ```rust
/// assert_eq!(
///     blocklines::split_lines("abc\r\ndef\rghi\n"),
///     vec!["abc", "def", "ghi"],
/// );
/// ```
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut splitter = LineSplitter::new();
    match splitter.push(text, &mut lines) {
        Ok(()) => {}
        Err(never) => match never {},
    }
    match splitter.finish(&mut lines) {
        Ok(_) => {}
        Err(never) => match never {},
    }
    lines
}
