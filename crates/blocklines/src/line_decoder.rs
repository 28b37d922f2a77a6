use crate::{
    decoder::Utf8Decoder,
    error::StreamError,
    options::{Charset, DEFAULT_BLOCK_SIZE},
    sink::LineSink,
    splitter::LineSplitter,
};

/// Bytes in, lines out: a [`Utf8Decoder`] chained to a [`LineSplitter`].
///
/// Feed it the blocks of a stream in order, with any boundaries, then call
/// [`finish`](Self::finish). The decoded text of each block goes through one
/// reused character buffer.
///
/// ```rust
/// use blocklines::{Charset, LineDecoder};
///
/// let mut lines = Vec::new();
/// let mut decoder = LineDecoder::new(Charset::Utf8);
/// decoder.feed(b"caf\xC3", &mut lines).unwrap();
/// decoder.feed(b"\xA9\r", &mut lines).unwrap();
/// decoder.feed(b"\nbar", &mut lines).unwrap();
/// decoder.finish(&mut lines).unwrap();
/// assert_eq!(lines, ["café", "bar"]);
/// ```
#[derive(Debug)]
pub struct LineDecoder {
    decoder: Utf8Decoder,
    splitter: LineSplitter,
    chars: String,
    position: u64,
}

impl LineDecoder {
    /// Creates a decoder sized for blocks of [`DEFAULT_BLOCK_SIZE`] bytes.
    #[must_use]
    pub fn new(charset: Charset) -> Self {
        Self::with_capacity(charset, DEFAULT_BLOCK_SIZE)
    }

    /// Creates a decoder whose character buffer holds `block_size` bytes
    /// of text without growing.
    #[must_use]
    pub fn with_capacity(charset: Charset, block_size: usize) -> Self {
        Self {
            decoder: charset.decoder(),
            splitter: LineSplitter::new(),
            chars: String::with_capacity(block_size),
            position: 0,
        }
    }

    /// Number of bytes fed so far.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Number of lines handed to a sink so far.
    #[must_use]
    pub fn lines_emitted(&self) -> u64 {
        self.splitter.lines_emitted()
    }

    /// Decodes `bytes` and emits every line they complete.
    ///
    /// # Errors
    ///
    /// [`StreamError::Read`] if `bytes` are malformed, in which case no line
    /// from this block reaches the sink; [`StreamError::Sink`] if the sink
    /// fails.
    pub fn feed<S>(&mut self, bytes: &[u8], sink: &mut S) -> Result<(), StreamError<S::Error>>
    where
        S: LineSink + ?Sized,
    {
        self.chars.clear();
        self.decoder.decode(bytes, self.position, &mut self.chars)?;
        self.position += bytes.len() as u64;
        self.splitter
            .push(&self.chars, sink)
            .map_err(StreamError::Sink)
    }

    /// Ends the stream, flushing an unterminated last line.
    ///
    /// Returns the total number of lines emitted.
    ///
    /// # Errors
    ///
    /// [`StreamError::Read`] if the input ended inside a multi-byte
    /// character; [`StreamError::Sink`] if the sink fails.
    pub fn finish<S>(self, sink: &mut S) -> Result<u64, StreamError<S::Error>>
    where
        S: LineSink + ?Sized,
    {
        self.decoder.finish()?;
        self.splitter.finish(sink).map_err(StreamError::Sink)
    }
}
