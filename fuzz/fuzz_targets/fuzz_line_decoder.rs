#![no_main]

use arbitrary::Arbitrary;
use blocklines::{Charset, Error, LineDecoder, StreamError};
use libfuzzer_sys::fuzz_target;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Arbitrary)]
struct Input {
    /// Seed for the block boundaries.
    split_seed: u64,
    /// Raw file content; need not be valid UTF-8.
    data: Vec<u8>,
}

/// Split `data` into non-empty blocks at raw byte positions, ignoring
/// character boundaries. Deterministic for a given seed.
fn split_with_seed(data: &[u8], seed: u64) -> Vec<&[u8]> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut blocks = Vec::new();
    let mut rest = data;
    while !rest.is_empty() {
        let (head, tail) = rest.split_at(rng.random_range(1..=rest.len()));
        blocks.push(head);
        rest = tail;
    }
    blocks
}

/// Feed `data` in blocks and collect lines, or the offset of the first
/// malformed byte.
fn decode(data: &[u8], seed: u64) -> Result<Vec<String>, u64> {
    let mut lines = Vec::new();
    let mut decoder = LineDecoder::new(Charset::Utf8);
    for block in split_with_seed(data, seed) {
        decoder.feed(block, &mut lines).map_err(offset)?;
    }
    decoder.finish(&mut lines).map_err(offset)?;
    Ok(lines)
}

fn offset(e: StreamError<core::convert::Infallible>) -> u64 {
    match e.into_read_error() {
        Error::Malformed { offset, .. } => offset,
        other => panic!("unexpected error {other}"),
    }
}

/// Normalize terminators and split; a final terminator ends the last line.
fn reference(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines: Vec<String> = normalized.split('\n').map(str::to_owned).collect();
    if normalized.is_empty() || normalized.ends_with('\n') {
        lines.pop();
    }
    lines
}

fuzz_target!(|input: Input| {
    let blocked = decode(&input.data, input.split_seed);
    // Block boundaries must never change the outcome.
    assert_eq!(blocked, decode(&input.data, 0));

    match core::str::from_utf8(&input.data) {
        Ok(text) => assert_eq!(blocked, Ok(reference(text))),
        Err(e) => {
            let at = blocked.expect_err("invalid input must fail");
            let first_bad = e.valid_up_to() as u64;
            assert_eq!(at, first_bad);
        }
    }
});
