//! Incremental UTF-8 decoding across block boundaries.
//!
//! A block may end anywhere, including in the middle of a multi-byte
//! character. The decoder turns every complete character of a block into
//! text and holds the trailing incomplete sequence (at most three bytes) as
//! carry. The next call completes the carried character first and then
//! decodes the new block as usual.
//!
//! Invariants
//! - The carry is always a strict prefix of some valid UTF-8 sequence, so its
//!   first byte determines how many bytes complete it.
//! - On failure nothing from the failing call is appended to the output.
//! - Offsets are stream offsets: the caller passes the offset of the first
//!   byte of every block, and errors point at the first byte of the offending
//!   sequence, which may lie in a previous block.

use core::str;

use crate::error::{Error, MalformedKind};

/// Stateful UTF-8 decoder fed one block at a time.
#[derive(Debug, Clone, Default)]
pub struct Utf8Decoder {
    carry: [u8; 4],
    carry_len: usize,
    carry_offset: u64,
}

/// Length of the sequence introduced by a leading byte that
/// `str::from_utf8` accepted as the start of an incomplete sequence.
#[inline]
fn sequence_len(lead: u8) -> usize {
    match lead {
        0xF0..=0xF4 => 4,
        0xE0..=0xEF => 3,
        _ => 2,
    }
}

impl Utf8Decoder {
    /// Creates a decoder with an empty carry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the undecoded bytes held over from the previous block.
    #[must_use]
    pub fn carry(&self) -> &[u8] {
        &self.carry[..self.carry_len]
    }

    /// Decodes `bytes`, whose first byte sits at stream offset `offset`, and
    /// appends every complete character to `out`.
    ///
    /// A trailing incomplete sequence is kept as carry for the next call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Malformed`] with [`MalformedKind::Invalid`] if the
    /// carry plus `bytes` contain a sequence that is not valid UTF-8.
    pub fn decode(
        &mut self,
        mut bytes: &[u8],
        mut offset: u64,
        out: &mut String,
    ) -> Result<(), Error> {
        let mark = out.len();
        // UTF-8 text is never longer than the bytes it was decoded from.
        out.reserve(bytes.len() + self.carry_len);

        if self.carry_len > 0 {
            let want = sequence_len(self.carry[0]) - self.carry_len;
            let take = want.min(bytes.len());
            self.carry[self.carry_len..self.carry_len + take].copy_from_slice(&bytes[..take]);
            self.carry_len += take;

            match str::from_utf8(&self.carry[..self.carry_len]) {
                Ok(ch) => {
                    out.push_str(ch);
                    self.carry_len = 0;
                }
                // Still short; the whole block went into the carry.
                Err(e) if e.error_len().is_none() => return Ok(()),
                Err(_) => {
                    return Err(Error::Malformed {
                        offset: self.carry_offset,
                        kind: MalformedKind::Invalid,
                    });
                }
            }

            bytes = &bytes[take..];
            offset += take as u64;
        }

        match str::from_utf8(bytes) {
            Ok(text) => out.push_str(text),
            Err(e) => {
                let valid = e.valid_up_to();
                if e.error_len().is_some() {
                    out.truncate(mark);
                    return Err(Error::Malformed {
                        offset: offset + valid as u64,
                        kind: MalformedKind::Invalid,
                    });
                }

                let (head, tail) = bytes.split_at(valid);
                // SAFETY: `from_utf8` validated everything before `valid_up_to`.
                out.push_str(unsafe { str::from_utf8_unchecked(head) });
                self.carry[..tail.len()].copy_from_slice(tail);
                self.carry_len = tail.len();
                self.carry_offset = offset + valid as u64;
            }
        }

        Ok(())
    }

    /// Signals the end of the stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Malformed`] with [`MalformedKind::Truncated`] if a
    /// multi-byte sequence was cut short by the end of the input.
    pub fn finish(&self) -> Result<(), Error> {
        if self.carry_len == 0 {
            Ok(())
        } else {
            Err(Error::Malformed {
                offset: self.carry_offset,
                kind: MalformedKind::Truncated,
            })
        }
    }
}
