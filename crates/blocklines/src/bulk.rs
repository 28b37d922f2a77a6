//! Whole-file helpers.
//!
//! These load or store an entire file at once and are meant for small files.
//! Reads go through the same [`BlockReader`] as the streaming operations and
//! refuse files larger than [`ReadOptions::memory_limit`].

use std::path::Path;

use tokio::{fs::OpenOptions, io::AsyncWriteExt};

use crate::{
    block_reader::BlockReader,
    error::Error,
    options::{Charset, ReadOptions},
};

/// Reads the whole file at `path` with default options.
///
/// # Errors
///
/// See [`read_bytes_with`].
pub async fn read_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>, Error> {
    read_bytes_with(path, &ReadOptions::default()).await
}

/// Reads the whole file at `path` into memory.
///
/// The buffer is sized from the file length up front. A file that changes
/// size while being read is tolerated; the result holds what was read. An
/// allocation the system cannot satisfy is reported as [`Error::TooLarge`]
/// rather than aborting.
///
/// # Errors
///
/// - [`Error::TooLarge`] if the file, or what was read of it, exceeds
///   `options.memory_limit` or cannot be held in memory;
/// - [`Error::Io`] if the file cannot be opened or read.
pub async fn read_bytes_with(
    path: impl AsRef<Path>,
    options: &ReadOptions,
) -> Result<Vec<u8>, Error> {
    let path = path.as_ref();
    let limit = options.memory_limit;
    let mut reader = BlockReader::open(path, options.block_size).await?;

    let size = reader.file_len().await?;
    let capacity = match usize::try_from(size) {
        Ok(capacity) if size <= limit => capacity,
        _ => return Err(Error::TooLarge { size, limit }),
    };

    let mut result = Vec::new();
    if result.try_reserve_exact(capacity).is_err() {
        log::debug!("cannot allocate {size} bytes for {}", path.display());
        return Err(Error::TooLarge { size, limit });
    }
    while let Some(block) = reader.next_block().await? {
        let size = block.offset + block.bytes.len() as u64;
        if size > limit || result.try_reserve(block.bytes.len()).is_err() {
            return Err(Error::TooLarge { size, limit });
        }
        result.extend_from_slice(block.bytes);
    }
    Ok(result)
}

/// Writes `bytes` to `path`, creating the file or truncating it.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or written.
pub async fn write_bytes(path: impl AsRef<Path>, bytes: &[u8]) -> Result<(), Error> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path.as_ref())
        .await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.as_ref().display());
    Ok(())
}

/// Appends `bytes` to `path`, creating the file if it does not exist.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or written.
pub async fn append_bytes(path: impl AsRef<Path>, bytes: &[u8]) -> Result<(), Error> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path.as_ref())
        .await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    log::debug!(
        "appended {} bytes to {}",
        bytes.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Reads the whole file at `path` as UTF-8 text.
///
/// # Errors
///
/// See [`read_text_with`].
pub async fn read_text(path: impl AsRef<Path>) -> Result<String, Error> {
    read_text_with(path, &ReadOptions::default()).await
}

/// Reads the whole file at `path` as text in `options.charset`.
///
/// # Errors
///
/// Everything [`read_bytes_with`] returns, plus [`Error::Malformed`] if the
/// content is not valid in the charset.
pub async fn read_text_with(
    path: impl AsRef<Path>,
    options: &ReadOptions,
) -> Result<String, Error> {
    let bytes = read_bytes_with(path, options).await?;
    let mut decoder = options.charset.decoder();
    let mut text = String::new();
    decoder.decode(&bytes, 0, &mut text)?;
    decoder.finish()?;
    Ok(text)
}

/// Writes `text` to `path` as UTF-8, creating the file or truncating it.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or written.
pub async fn write_text(path: impl AsRef<Path>, text: &str) -> Result<(), Error> {
    write_bytes(path, Charset::Utf8.encode(text)).await
}

/// Appends `text` to `path` as UTF-8, creating the file if needed.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or written.
pub async fn append_text(path: impl AsRef<Path>, text: &str) -> Result<(), Error> {
    append_bytes(path, Charset::Utf8.encode(text)).await
}
