//! Asynchronous, block-based line reading.
//!
//! Files are read in fixed-size blocks through one reused buffer, decoded
//! incrementally, and split into lines on `\n`, `\r` and `\r\n`. Multi-byte
//! characters and CRLF pairs that straddle a block boundary are handled, and
//! memory use is bounded by the block size plus the longest line.
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), blocklines::Error> {
//! use blocklines::{ReadOptions, for_each_line};
//!
//! let mut count = 0;
//! for_each_line("access.log", &ReadOptions::default(), |line| {
//!     if line.contains(" 500 ") {
//!         count += 1;
//!     }
//! })
//! .await?;
//! println!("{count} server errors");
//! # Ok(())
//! # }
//! ```

pub mod block_reader;
pub mod bulk;
mod decoder;
mod error;
mod line_decoder;
mod lines;
mod options;
pub mod sink;
mod splitter;

#[doc(hidden)]
pub mod chunk_utils;

#[cfg(test)]
mod tests;

pub use block_reader::{Block, BlockReader, for_each_block};
pub use decoder::Utf8Decoder;
pub use error::{Error, MalformedKind, StreamError};
pub use line_decoder::LineDecoder;
pub use lines::{LineReader, for_each_line, read_lines, stream_lines, try_for_each_line};
pub use options::{
    Charset, DEFAULT_BLOCK_SIZE, MINIMUM_BLOCK_SIZE, ReadOptions, clamp_block_size,
};
pub use sink::{LineSink, Tally};
pub use splitter::{LineSplitter, split_lines};
