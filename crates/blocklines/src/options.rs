use crate::decoder::Utf8Decoder;

/// Block size used when none is configured.
pub const DEFAULT_BLOCK_SIZE: usize = 4096;

/// Smallest block size a reader will use. Smaller requests are raised to it.
pub const MINIMUM_BLOCK_SIZE: usize = 512;

/// Raises `block_size` to [`MINIMUM_BLOCK_SIZE`] if it is below the floor.
#[must_use]
pub const fn clamp_block_size(block_size: usize) -> usize {
    if block_size < MINIMUM_BLOCK_SIZE {
        MINIMUM_BLOCK_SIZE
    } else {
        block_size
    }
}

/// Character encoding of the file being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[non_exhaustive]
pub enum Charset {
    /// UTF-8, rejecting invalid and truncated sequences.
    #[default]
    Utf8,
}

impl Charset {
    /// Creates a fresh incremental decoder for this charset.
    #[must_use]
    pub fn decoder(self) -> Utf8Decoder {
        match self {
            Self::Utf8 => Utf8Decoder::new(),
        }
    }

    /// Encodes `text` into bytes of this charset.
    #[must_use]
    pub fn encode(self, text: &str) -> &[u8] {
        match self {
            Self::Utf8 => text.as_bytes(),
        }
    }
}

/// Configuration for reading a file block by block.
///
/// # Examples
///
/// ```rust
/// use blocklines::{Charset, ReadOptions};
///
/// let options = ReadOptions {
///     block_size: 64 * 1024,
///     ..Default::default()
/// };
/// assert_eq!(options.charset, Charset::Utf8);
/// ```
///
/// # Default
///
/// UTF-8, blocks of [`DEFAULT_BLOCK_SIZE`] bytes, and an in-memory limit of
/// `isize::MAX` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReadOptions {
    /// Encoding used to turn bytes into text.
    ///
    /// # Default
    ///
    /// [`Charset::Utf8`]
    pub charset: Charset,

    /// Number of bytes requested from the file per read.
    ///
    /// Values below [`MINIMUM_BLOCK_SIZE`] are silently raised to it. One
    /// buffer of this size is allocated per operation and reused for every
    /// read, so memory use does not grow with the file.
    ///
    /// # Default
    ///
    /// [`DEFAULT_BLOCK_SIZE`]
    pub block_size: usize,

    /// Largest file, in bytes, that the whole-file helpers in
    /// [`bulk`](crate::bulk) will load into memory.
    ///
    /// Streaming operations ignore this limit.
    ///
    /// # Default
    ///
    /// `isize::MAX`
    pub memory_limit: u64,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            charset: Charset::Utf8,
            block_size: DEFAULT_BLOCK_SIZE,
            memory_limit: isize::MAX as u64,
        }
    }
}

impl ReadOptions {
    /// The block size that will actually be used, after clamping.
    #[must_use]
    pub const fn effective_block_size(&self) -> usize {
        clamp_block_size(self.block_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size_is_clamped_to_the_floor() {
        assert_eq!(clamp_block_size(0), MINIMUM_BLOCK_SIZE);
        assert_eq!(clamp_block_size(511), MINIMUM_BLOCK_SIZE);
        assert_eq!(clamp_block_size(512), 512);
        assert_eq!(clamp_block_size(4097), 4097);
    }

    #[test]
    fn defaults() {
        let options = ReadOptions::default();
        assert_eq!(options.charset, Charset::Utf8);
        assert_eq!(options.block_size, DEFAULT_BLOCK_SIZE);
        assert_eq!(options.effective_block_size(), DEFAULT_BLOCK_SIZE);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn options_deserialize_with_defaults() {
        let options: ReadOptions = serde_json::from_str(r#"{"block_size":100}"#).unwrap();
        assert_eq!(options.block_size, 100);
        assert_eq!(options.effective_block_size(), MINIMUM_BLOCK_SIZE);
        assert_eq!(options.charset, Charset::Utf8);
    }
}
