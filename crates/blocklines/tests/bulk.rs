#![allow(missing_docs)]

mod common;

use blocklines::{
    Error, MalformedKind, ReadOptions,
    bulk::{
        append_bytes, append_text, read_bytes, read_bytes_with, read_text, read_text_with,
        write_bytes, write_text,
    },
};

use crate::common::temp_file_with;

#[tokio::test]
async fn write_then_read_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.bin");
    let payload: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();

    write_bytes(&path, &payload).await.unwrap();
    assert_eq!(read_bytes(&path).await.unwrap(), payload);
}

#[tokio::test]
async fn write_truncates_existing_content() {
    let file = temp_file_with(b"a much longer original content");
    write_text(file.path(), "short").await.unwrap();
    assert_eq!(read_text(file.path()).await.unwrap(), "short");
}

#[tokio::test]
async fn append_creates_and_extends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.txt");

    append_text(&path, "first\n").await.unwrap();
    append_bytes(&path, b"second\n").await.unwrap();
    append_text(&path, "thïrd").await.unwrap();

    assert_eq!(read_text(&path).await.unwrap(), "first\nsecond\nthïrd");
}

#[tokio::test]
async fn read_empty_file() {
    let file = temp_file_with(b"");
    assert!(read_bytes(file.path()).await.unwrap().is_empty());
    assert_eq!(read_text(file.path()).await.unwrap(), "");
}

#[tokio::test]
async fn files_over_the_memory_limit_are_refused() {
    let file = temp_file_with(&[b'x'; 2048]);
    let options = ReadOptions {
        memory_limit: 1024,
        ..Default::default()
    };
    let err = read_bytes_with(file.path(), &options).await.unwrap_err();
    assert!(matches!(
        err,
        Error::TooLarge {
            size: 2048,
            limit: 1024
        }
    ));
    assert!(err.to_string().contains("too big"));

    let at_limit = ReadOptions {
        memory_limit: 2048,
        ..Default::default()
    };
    assert_eq!(read_bytes_with(file.path(), &at_limit).await.unwrap().len(), 2048);
}

#[tokio::test]
async fn read_text_rejects_invalid_utf8() {
    let file = temp_file_with(b"caf\xC3\xA9 \xC3(");
    let err = read_text_with(file.path(), &ReadOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Malformed {
            offset: 6,
            kind: MalformedKind::Invalid
        }
    ));
}

#[tokio::test]
async fn read_text_rejects_truncated_utf8() {
    let file = temp_file_with(b"caf\xC3");
    let err = read_text(file.path()).await.unwrap_err();
    assert_eq!(err.malformed_offset(), Some(3));
}

#[tokio::test]
async fn unallocatable_file_is_refused_instead_of_aborting() {
    const SIZE: u64 = 1 << 42;
    let file = tempfile::NamedTempFile::new().unwrap();
    // Sparse: takes no disk space, but no machine can hold it in memory.
    file.as_file().set_len(SIZE).unwrap();

    let err = read_bytes(file.path()).await.unwrap_err();
    assert!(
        matches!(err, Error::TooLarge { size: SIZE, .. }),
        "unexpected {err:?}"
    );
    let err = read_text(file.path()).await.unwrap_err();
    assert!(matches!(err, Error::TooLarge { size: SIZE, .. }));
}
