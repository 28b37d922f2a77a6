//! Helpers for splitting payloads into blocks, used by tests and benches to
//! exercise arbitrary block boundaries.
//!
//! Unlike real text chunkers these split at raw byte positions, so a
//! multi-byte character or a CRLF pair may end up across two chunks. That is
//! the point.

/// Split `payload` into `parts` chunks of roughly equal size.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_chunks(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    assert!(parts > 0);
    if payload.is_empty() {
        return Vec::new();
    }
    payload.chunks(payload.len().div_ceil(parts)).collect()
}

/// Split `payload` at sizes derived from `splits`, cycling through them.
///
/// Each split value is reduced modulo the remaining length, so every chunk is
/// at least one byte and any `splits` sequence is usable. Once `splits` runs
/// out, the remainder is a single chunk.
#[must_use]
pub fn split_at_sizes<'a>(payload: &'a [u8], splits: &[usize]) -> Vec<&'a [u8]> {
    let mut chunks = Vec::new();
    let mut rest = payload;
    for &s in splits {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at(1 + s % rest.len());
        chunks.push(head);
        rest = tail;
    }
    if !rest.is_empty() {
        chunks.push(rest);
    }
    chunks
}
