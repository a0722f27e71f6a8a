//! 单文件上传测试：本地前置条件在发请求之前检查。

use crate::tests::{memory_session, url, write_tree, Failure, MemoryTransport};
use crate::webdav::enums::WebDavMethod;
use crate::webdav::impl_traits::UPLOAD_CHUNK_SIZE;
use crate::WebdavError;

#[tokio::test]
async fn directory_is_rejected_without_requests() {
    let dir = tempfile::tempdir().unwrap();
    let transport = MemoryTransport::new();
    let session = memory_session(&transport);

    let err = session.put_file("/dir", dir.path()).await.unwrap_err();
    assert!(matches!(err, WebdavError::IsADirectory(ref p) if p == dir.path()));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn missing_file_is_rejected_without_requests() {
    let dir = tempfile::tempdir().unwrap();
    let transport = MemoryTransport::new();
    let session = memory_session(&transport);

    let missing = dir.path().join("missing.txt");
    let err = session.put_file("/missing.txt", &missing).await.unwrap_err();
    assert!(matches!(err, WebdavError::FileNotFound { ref path } if *path == missing));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn regular_file_is_uploaded() {
    let dir = tempfile::tempdir().unwrap();
    write_tree(dir.path(), &[("a.txt", "alpha")]);
    let transport = MemoryTransport::new();
    let session = memory_session(&transport);

    let outcome = session
        .put_file("/up/a.txt", dir.path().join("a.txt"))
        .await
        .unwrap();

    assert_eq!(outcome.status_code, 201);
    assert_eq!(transport.urls_of(WebDavMethod::PUT), vec![url("/up/a.txt")]);
    assert_eq!(transport.resource("/up/a.txt").unwrap(), "alpha".as_bytes());
}

#[tokio::test]
async fn file_larger_than_one_chunk_arrives_intact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.bin");
    let content: Vec<u8> = (0..UPLOAD_CHUNK_SIZE * 2 + 12345)
        .map(|i| (i % 251) as u8)
        .collect();
    std::fs::write(&path, &content).unwrap();

    let transport = MemoryTransport::new();
    let session = memory_session(&transport);
    session.put_file("/big.bin", &path).await.unwrap();

    assert_eq!(transport.resource("/big.bin").unwrap(), content);
}

#[tokio::test]
async fn rejected_upload_status_is_returned() {
    let dir = tempfile::tempdir().unwrap();
    write_tree(dir.path(), &[("a.txt", "alpha")]);
    let transport = MemoryTransport::new();
    transport.fail(WebDavMethod::PUT, "/a.txt", Failure::Status(403));
    let session = memory_session(&transport);

    let outcome = session
        .put_file("/a.txt", dir.path().join("a.txt"))
        .await
        .unwrap();
    assert_eq!(outcome.status_code, 403);
}
