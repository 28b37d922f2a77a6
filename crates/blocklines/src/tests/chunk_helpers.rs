use crate::chunk_utils::{produce_chunks, split_at_sizes};

#[test]
fn produce_chunks_covers_payload() {
    let payload = "abc\r\ndéf".as_bytes();
    let chunks = produce_chunks(payload, 3);
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks.concat(), payload);
    assert!(produce_chunks(b"", 4).is_empty());
}

#[test]
fn split_at_sizes_wraps_sizes_into_range() {
    let chunks = split_at_sizes(b"abcdefgh", &[0, 2, 100]);
    assert_eq!(chunks, vec![&b"a"[..], &b"bcd"[..], &b"e"[..], &b"fgh"[..]]);
    assert_eq!(split_at_sizes(b"abc", &[]), vec![&b"abc"[..]]);
}
