//! Sequential block reads over an async file handle.
//!
//! A [`BlockReader`] owns the file and a single buffer. Every call to
//! [`BlockReader::next_block`] issues one read into that buffer and lends out
//! the filled prefix, so memory stays at one block no matter how large the
//! file is. Only one read is ever in flight, and each is awaited before the
//! next is issued.
//!
//! The file is closed when the reader is dropped. That covers normal
//! completion, errors propagated with `?`, and cancellation of the enclosing
//! future alike.

use std::{io, path::Path};

use tokio::{fs::File, io::AsyncReadExt};

use crate::{error::Error, options::clamp_block_size};

/// One block of bytes lent out by a [`BlockReader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Stream offset of `bytes[0]`.
    pub offset: u64,
    /// The bytes read. Never empty.
    pub bytes: &'a [u8],
}

/// Forward-only reader that yields a file as a sequence of blocks.
#[derive(Debug)]
pub struct BlockReader {
    file: File,
    buf: Vec<u8>,
    position: u64,
    done: bool,
}

impl BlockReader {
    /// Opens `path` read-only for blocks of `block_size` bytes.
    ///
    /// `block_size` is raised to
    /// [`MINIMUM_BLOCK_SIZE`](crate::MINIMUM_BLOCK_SIZE) if smaller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened.
    pub async fn open(path: impl AsRef<Path>, block_size: usize) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).await?;
        let reader = Self::from_file(file, block_size);
        log::debug!(
            "opened {} for reading in {} byte blocks",
            path.display(),
            reader.capacity()
        );
        Ok(reader)
    }

    /// Wraps an already opened file. Reading starts at the file's current
    /// cursor, which is reported as offset 0.
    #[must_use]
    pub fn from_file(file: File, block_size: usize) -> Self {
        Self {
            file,
            buf: vec![0; clamp_block_size(block_size)],
            position: 0,
            done: false,
        }
    }

    /// Size of the reusable block buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Number of bytes read so far.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Current length of the underlying file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the metadata cannot be read.
    pub async fn file_len(&self) -> Result<u64, Error> {
        Ok(self.file.metadata().await?.len())
    }

    /// Reads the next block.
    ///
    /// Returns `Ok(None)` once the end of the file is reached, and keeps
    /// returning it afterwards. A short read is returned as a short block;
    /// only a read of zero bytes ends the stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the read fails. Interrupted reads are retried.
    pub async fn next_block(&mut self) -> Result<Option<Block<'_>>, Error> {
        if self.done {
            return Ok(None);
        }

        loop {
            match self.file.read(&mut self.buf).await {
                Ok(0) => {
                    self.done = true;
                    log::debug!("end of stream after {} bytes", self.position);
                    return Ok(None);
                }
                Ok(n) => {
                    let offset = self.position;
                    self.position += n as u64;
                    log::trace!("read {n} bytes at offset {offset}");
                    return Ok(Some(Block {
                        offset,
                        bytes: &self.buf[..n],
                    }));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Runs `action` on every block of the file at `path`, in order.
///
/// Returns the total number of bytes read.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read.
pub async fn for_each_block<F>(
    path: impl AsRef<Path>,
    block_size: usize,
    mut action: F,
) -> Result<u64, Error>
where
    F: FnMut(Block<'_>),
{
    let mut reader = BlockReader::open(path, block_size).await?;
    while let Some(block) = reader.next_block().await? {
        action(block);
    }
    Ok(reader.position())
}
