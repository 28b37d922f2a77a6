#![allow(missing_docs)]
#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

/// The table every line reader has to get right, with the lines each input
/// must produce.
#[rustfmt::skip]
pub const CASES: &[(&str, &[&str])] = &[
    ("",             &[]),
    ("\n",           &[""]),
    ("\r",           &[""]),
    ("\r\n",         &[""]),
    ("\n\r",         &["", ""]),
    ("\r\r",         &["", ""]),
    ("\n\n",         &["", ""]),
    ("a",            &["a"]),
    ("abc",          &["abc"]),
    ("abc\n",        &["abc"]),
    ("abc\r",        &["abc"]),
    ("abc\r\n",      &["abc"]),
    ("abc\ndef",     &["abc", "def"]),
    ("abc\rdef",     &["abc", "def"]),
    ("abc\n\rdef",   &["abc", "", "def"]),
    ("abc\ndef\n",   &["abc", "def"]),
    ("abc\ndef\r",   &["abc", "def"]),
    ("abc\ndef\r\n", &["abc", "def"]),
];

pub fn temp_file_with(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(bytes).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

/// Repeat every character that is not a terminator `n` times.
pub fn scale(text: &str, n: usize) -> String {
    text.chars()
        .flat_map(|ch| {
            let times = if ch == '\n' || ch == '\r' { 1 } else { n };
            std::iter::repeat_n(ch, times)
        })
        .collect()
}
