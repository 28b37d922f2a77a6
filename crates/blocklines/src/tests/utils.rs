use crate::{Charset, LineDecoder, LineSplitter, chunk_utils::split_at_sizes};

/// Independent splitter: normalize every terminator to `\n`, split, and drop
/// the single empty piece a final terminator leaves behind.
pub(crate) fn reference_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines: Vec<String> = normalized.split('\n').map(str::to_owned).collect();
    if normalized.is_empty() || normalized.ends_with('\n') {
        lines.pop();
    }
    lines
}

/// Feed `text` to a bare splitter in one piece.
pub(crate) fn split_whole(text: &str) -> Vec<String> {
    crate::split_lines(text)
}

/// Feed `text` to a splitter as the given string chunks.
pub(crate) fn split_str_chunks(chunks: &[&str]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut splitter = LineSplitter::new();
    for chunk in chunks {
        splitter.push(chunk, &mut lines).unwrap();
    }
    splitter.finish(&mut lines).unwrap();
    lines
}

/// Decode and split `bytes`, cutting blocks at sizes derived from `splits`.
pub(crate) fn decode_in_blocks(bytes: &[u8], splits: &[usize]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut decoder = LineDecoder::new(Charset::Utf8);
    for block in split_at_sizes(bytes, splits) {
        decoder.feed(block, &mut lines).unwrap();
    }
    decoder.finish(&mut lines).unwrap();
    lines
}

/// Decode and split `bytes` in fixed-size blocks.
pub(crate) fn decode_fixed_blocks(bytes: &[u8], block_size: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut decoder = LineDecoder::with_capacity(Charset::Utf8, block_size);
    for block in bytes.chunks(block_size) {
        decoder.feed(block, &mut lines).unwrap();
    }
    decoder.finish(&mut lines).unwrap();
    lines
}

/// Repeat every character that is not a terminator `n` times.
pub(crate) fn scale(text: &str, n: usize) -> String {
    let mut out = String::with_capacity(text.len() * n);
    for ch in text.chars() {
        if ch == '\n' || ch == '\r' {
            out.push(ch);
        } else {
            out.extend(core::iter::repeat_n(ch, n));
        }
    }
    out
}

#[test]
fn reference_lines_matches_known_cases() {
    assert_eq!(reference_lines(""), Vec::<String>::new());
    assert_eq!(reference_lines("abc\n"), ["abc"]);
    assert_eq!(reference_lines("\r\r\n"), ["", ""]);
    assert_eq!(reference_lines("a\r\nb"), ["a", "b"]);
}
