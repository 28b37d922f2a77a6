use core::convert::Infallible;
use std::io;

use thiserror::Error;

/// What kind of malformed input the decoder ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// A byte sequence that can never be valid in the configured charset.
    Invalid,
    /// The input ended in the middle of a multi-byte sequence.
    Truncated,
}

impl core::fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Invalid => f.write_str("invalid byte sequence"),
            Self::Truncated => f.write_str("truncated multi-byte sequence"),
        }
    }
}

/// Failures raised while reading, decoding or buffering a file.
#[derive(Error, Debug)]
pub enum Error {
    /// The underlying open, read, write or close failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The bytes could not be decoded.
    #[error("malformed input at byte {offset}: {kind}")]
    Malformed {
        /// Stream offset of the first offending byte.
        offset: u64,
        /// Whether the sequence was invalid or cut short.
        kind: MalformedKind,
    },
    /// A whole-file read was refused because the file exceeds the configured
    /// in-memory limit.
    #[error("file is too big ({size} bytes) to fit in memory (limit {limit} bytes)")]
    TooLarge {
        /// Size of the file in bytes.
        size: u64,
        /// The limit that was exceeded.
        limit: u64,
    },
}

impl Error {
    /// Returns the offset of a malformed-input failure, if this is one.
    #[must_use]
    pub fn malformed_offset(&self) -> Option<u64> {
        match self {
            Self::Malformed { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

/// Failure of a streaming operation that delivers lines to a
/// [`LineSink`](crate::LineSink).
#[derive(Error, Debug)]
pub enum StreamError<E> {
    /// Reading or decoding the file failed.
    #[error(transparent)]
    Read(#[from] Error),
    /// The sink rejected a line.
    #[error("line sink error: {0}")]
    Sink(E),
}

impl StreamError<Infallible> {
    /// Unwraps the read error of a stream whose sink cannot fail.
    #[must_use]
    pub fn into_read_error(self) -> Error {
        match self {
            Self::Read(e) => e,
            Self::Sink(never) => match never {},
        }
    }
}

impl<E> StreamError<E> {
    /// Returns the read error, if the failure did not come from the sink.
    #[must_use]
    pub fn as_read_error(&self) -> Option<&Error> {
        match self {
            Self::Read(e) => Some(e),
            Self::Sink(_) => None,
        }
    }
}
