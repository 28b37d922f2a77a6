//! Consumers of emitted lines.

use core::convert::Infallible;
use std::collections::VecDeque;

/// Receives the lines of a stream, one call per line, in order.
///
/// The line is lent to the sink with its terminator removed; a sink that
/// needs to keep it must copy it. Returning an error stops the stream and the
/// error is handed back to the caller as
/// [`StreamError::Sink`](crate::StreamError::Sink).
pub trait LineSink {
    /// Error returned when the sink rejects a line.
    type Error;

    /// Accepts the next line.
    ///
    /// # Errors
    ///
    /// Whatever the implementation decides; the stream stops on the first
    /// error.
    fn accept(&mut self, line: &str) -> Result<(), Self::Error>;
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    type Error = S::Error;

    #[inline]
    fn accept(&mut self, line: &str) -> Result<(), Self::Error> {
        (**self).accept(line)
    }
}

impl LineSink for Vec<String> {
    type Error = Infallible;

    fn accept(&mut self, line: &str) -> Result<(), Self::Error> {
        self.push(line.to_owned());
        Ok(())
    }
}

impl LineSink for VecDeque<String> {
    type Error = Infallible;

    fn accept(&mut self, line: &str) -> Result<(), Self::Error> {
        self.push_back(line.to_owned());
        Ok(())
    }
}

/// A sink built from a closure. See [`from_fn`].
#[derive(Debug, Clone)]
pub struct FnSink<F>(F);

/// Wraps a fallible closure as a [`LineSink`].
///
/// ```rust
/// use blocklines::{LineSink, sink};
///
/// let mut longest = 0;
/// let mut s = sink::from_fn(|line: &str| {
///     longest = longest.max(line.len());
///     Ok::<_, core::convert::Infallible>(())
/// });
/// s.accept("hello").unwrap();
/// drop(s);
/// assert_eq!(longest, 5);
/// ```
pub fn from_fn<F, E>(f: F) -> FnSink<F>
where
    F: FnMut(&str) -> Result<(), E>,
{
    FnSink(f)
}

impl<F, E> LineSink for FnSink<F>
where
    F: FnMut(&str) -> Result<(), E>,
{
    type Error = E;

    #[inline]
    fn accept(&mut self, line: &str) -> Result<(), Self::Error> {
        (self.0)(line)
    }
}

/// Counts lines and their total length without keeping them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Number of lines seen.
    pub lines: u64,
    /// Sum of the byte lengths of all lines, terminators excluded.
    pub bytes: u64,
    /// Byte length of the longest line.
    pub longest: usize,
}

impl LineSink for Tally {
    type Error = Infallible;

    fn accept(&mut self, line: &str) -> Result<(), Self::Error> {
        self.lines += 1;
        self.bytes += line.len() as u64;
        self.longest = self.longest.max(line.len());
        Ok(())
    }
}
