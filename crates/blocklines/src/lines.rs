//! Line-by-line reading of files.
//!
//! [`stream_lines`] is the core operation: it drives a [`BlockReader`]
//! through a [`LineDecoder`] into a caller-supplied [`LineSink`]. The other
//! functions are conveniences over it, and [`LineReader`] offers the same
//! pipeline as a pull-based API.

use core::convert::Infallible;
use std::{collections::VecDeque, path::Path};

use crate::{
    block_reader::BlockReader,
    error::{Error, StreamError},
    line_decoder::LineDecoder,
    options::ReadOptions,
    sink::{self, LineSink},
};

/// Reads the file at `path` and hands each of its lines to `sink`, in order.
///
/// The file is read in blocks of
/// [`effective_block_size`](ReadOptions::effective_block_size) bytes and is
/// closed on every exit path. Returns the number of lines delivered.
///
/// # Errors
///
/// - [`StreamError::Read`] with [`Error::Io`] if the file cannot be opened or
///   read;
/// - [`StreamError::Read`] with [`Error::Malformed`] if the content is not
///   valid in the configured charset;
/// - [`StreamError::Sink`] if the sink rejects a line.
///
/// Lines delivered before a failure stay delivered.
pub async fn stream_lines<S>(
    path: impl AsRef<Path>,
    options: &ReadOptions,
    sink: &mut S,
) -> Result<u64, StreamError<S::Error>>
where
    S: LineSink + ?Sized,
{
    let path = path.as_ref();
    let mut reader = BlockReader::open(path, options.block_size).await?;
    let mut lines = LineDecoder::with_capacity(options.charset, reader.capacity());

    while let Some(block) = reader.next_block().await? {
        debug_assert_eq!(block.offset, lines.position());
        lines.feed(block.bytes, sink)?;
    }

    let count = lines.finish(sink)?;
    log::debug!(
        "{}: {count} lines in {} bytes",
        path.display(),
        reader.position()
    );
    Ok(count)
}

/// Calls `action` once for every line of the file at `path`.
///
/// # Errors
///
/// See [`stream_lines`]; `action` itself cannot fail.
pub async fn for_each_line<F>(
    path: impl AsRef<Path>,
    options: &ReadOptions,
    mut action: F,
) -> Result<u64, Error>
where
    F: FnMut(&str),
{
    let mut sink = sink::from_fn(|line: &str| {
        action(line);
        Ok::<(), Infallible>(())
    });
    stream_lines(path, options, &mut sink)
        .await
        .map_err(StreamError::into_read_error)
}

/// Calls `action` once for every line of the file at `path`, stopping at the
/// first error it returns.
///
/// # Errors
///
/// See [`stream_lines`].
pub async fn try_for_each_line<F, E>(
    path: impl AsRef<Path>,
    options: &ReadOptions,
    action: F,
) -> Result<u64, StreamError<E>>
where
    F: FnMut(&str) -> Result<(), E>,
{
    let mut sink = sink::from_fn(action);
    stream_lines(path, options, &mut sink).await
}

/// Reads every line of the file at `path` into a vector.
///
/// # Errors
///
/// See [`stream_lines`].
pub async fn read_lines(
    path: impl AsRef<Path>,
    options: &ReadOptions,
) -> Result<Vec<String>, Error> {
    let mut lines = Vec::new();
    stream_lines(path, options, &mut lines)
        .await
        .map_err(StreamError::into_read_error)?;
    Ok(lines)
}

/// Pull-based line reader.
///
/// Lines are decoded one block at a time and queued until asked for, so at
/// most one block worth of lines is buffered.
///
/// ```rust,no_run
/// # async fn run() -> Result<(), blocklines::Error> {
/// use blocklines::{LineReader, ReadOptions};
///
/// let mut reader = LineReader::open("Cargo.toml", &ReadOptions::default()).await?;
/// while let Some(line) = reader.next_line().await? {
///     println!("{line}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct LineReader {
    reader: BlockReader,
    lines: Option<LineDecoder>,
    ready: VecDeque<String>,
}

impl LineReader {
    /// Opens `path` for line reading.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened.
    pub async fn open(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Self, Error> {
        let reader = BlockReader::open(path, options.block_size).await?;
        Ok(Self::new(reader, options))
    }

    /// Reads lines from an existing block reader.
    #[must_use]
    pub fn new(reader: BlockReader, options: &ReadOptions) -> Self {
        let lines = LineDecoder::with_capacity(options.charset, reader.capacity());
        Self {
            reader,
            lines: Some(lines),
            ready: VecDeque::new(),
        }
    }

    /// Number of bytes read from the file so far.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.reader.position()
    }

    /// Returns the next line, or `None` at the end of the file.
    ///
    /// After an error the reader is exhausted and only returns `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] or [`Error::Malformed`] as described for
    /// [`stream_lines`].
    pub async fn next_line(&mut self) -> Result<Option<String>, Error> {
        loop {
            if let Some(line) = self.ready.pop_front() {
                return Ok(Some(line));
            }
            if self.lines.is_none() {
                return Ok(None);
            }
            if let Err(e) = self.fill().await {
                self.lines = None;
                return Err(e);
            }
        }
    }

    async fn fill(&mut self) -> Result<(), Error> {
        let Some(lines) = self.lines.as_mut() else {
            return Ok(());
        };

        match self.reader.next_block().await? {
            Some(block) => lines
                .feed(block.bytes, &mut self.ready)
                .map_err(StreamError::into_read_error),
            None => match self.lines.take() {
                Some(lines) => lines
                    .finish(&mut self.ready)
                    .map(|_| ())
                    .map_err(StreamError::into_read_error),
                None => Ok(()),
            },
        }
    }
}
