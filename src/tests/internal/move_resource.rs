//! 移动测试：GET + PUT + DELETE 的顺序、前置状态、部分完成、整体重试。

use std::time::Duration;

use crate::tests::{memory_session, url, Failure, MemoryTransport};
use crate::webdav::enums::{ExpectedStatus, WebDavMethod};
use crate::webdav::structs::MoveRetryPolicy;
use crate::WebdavError;

fn methods(transport: &MemoryTransport) -> Vec<WebDavMethod> {
    transport.requests().into_iter().map(|r| r.method).collect()
}

fn no_delay(max_attempts: usize) -> MoveRetryPolicy {
    MoveRetryPolicy::default()
        .max_attempts(max_attempts)
        .retry_delay(Duration::ZERO)
}

#[tokio::test]
async fn move_copies_then_deletes_source() {
    let transport = MemoryTransport::new();
    transport.seed("/a.txt", "X");
    let session = memory_session(&transport);

    let outcome = session.move_resource("/a.txt", "/b.txt").await.unwrap();
    assert!(outcome.is_success());

    let moved = session.get("/b.txt").await.unwrap();
    assert_eq!((moved.status_code, moved.text()), (200, "X".to_string()));
    assert_eq!(session.get("/a.txt").await.unwrap().status_code, 404);

    assert_eq!(
        methods(&transport)[..3],
        [WebDavMethod::GET, WebDavMethod::PUT, WebDavMethod::DELETE]
    );

    let put = &transport.requests()[1];
    assert_eq!(put.url, url("/b.txt"));
    assert_eq!(put.body, "X".as_bytes());
}

#[tokio::test]
async fn missing_source_fails_without_put_or_delete() {
    let transport = MemoryTransport::new();
    let session = memory_session(&transport);

    let err = session.move_resource("/a.txt", "/b.txt").await.unwrap_err();

    match err {
        WebdavError::UnexpectedStatus { method, expected, actual, .. } => {
            assert_eq!(method, WebDavMethod::GET);
            assert_eq!(expected, ExpectedStatus::Exactly(200));
            assert_eq!(actual, 404);
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
    assert_eq!(methods(&transport), vec![WebDavMethod::GET]);
}

#[tokio::test]
async fn non_200_success_on_get_is_not_accepted() {
    let transport = MemoryTransport::new();
    transport.seed("/a.txt", "X");
    transport.fail(WebDavMethod::GET, "/a.txt", Failure::Status(206));
    let session = memory_session(&transport);

    let err = session.move_resource("/a.txt", "/b.txt").await.unwrap_err();
    assert!(matches!(err, WebdavError::UnexpectedStatus { actual: 206, .. }));
    assert_eq!(methods(&transport), vec![WebDavMethod::GET]);
}

#[tokio::test]
async fn failed_put_keeps_source() {
    let transport = MemoryTransport::new();
    transport.seed("/a.txt", "X");
    transport.fail(WebDavMethod::PUT, "/b.txt", Failure::Status(507));
    let session = memory_session(&transport);

    let err = session.move_resource("/a.txt", "/b.txt").await.unwrap_err();
    assert!(matches!(
        err,
        WebdavError::UnexpectedStatus { method: WebDavMethod::PUT, actual: 507, .. }
    ));
    assert!(transport.urls_of(WebDavMethod::DELETE).is_empty());
    assert_eq!(transport.resource("/a.txt").unwrap(), "X".as_bytes());
}

#[tokio::test]
async fn failed_delete_leaves_resource_duplicated() {
    let transport = MemoryTransport::new();
    transport.seed("/a.txt", "X");
    transport.fail(WebDavMethod::DELETE, "/a.txt", Failure::Status(423));
    let session = memory_session(&transport);

    let err = session.move_resource("/a.txt", "/b.txt").await.unwrap_err();
    assert!(matches!(
        err,
        WebdavError::UnexpectedStatus { method: WebDavMethod::DELETE, actual: 423, .. }
    ));
    assert!(transport.resource("/a.txt").is_some());
    assert!(transport.resource("/b.txt").is_some());
}

#[tokio::test]
async fn retry_recognises_completed_move_after_lost_response() {
    let transport = MemoryTransport::new();
    transport.seed("/a.txt", "X");
    transport.fail_times(WebDavMethod::DELETE, "/a.txt", Failure::LostResponse, 1);
    let session = memory_session(&transport);

    let outcome = session
        .move_resource_with_retry("/a.txt", "/b.txt", &no_delay(3))
        .await
        .unwrap();

    assert_eq!(outcome.status_code, 200);
    assert_eq!(
        methods(&transport),
        vec![
            WebDavMethod::GET,
            WebDavMethod::PUT,
            WebDavMethod::DELETE,
            WebDavMethod::GET,
            WebDavMethod::GET,
        ]
    );
    assert_eq!(
        transport.urls_of(WebDavMethod::GET),
        vec![url("/a.txt"), url("/a.txt"), url("/b.txt")]
    );
    assert_eq!(outcome.body, "X".as_bytes());
    assert!(transport.resource("/a.txt").is_none());
    assert_eq!(transport.resource("/b.txt").unwrap(), "X".as_bytes());
}

#[tokio::test]
async fn retry_rejects_destination_with_different_content() {
    let transport = MemoryTransport::new();
    transport.seed("/a.txt", "X");
    transport.fail_times(WebDavMethod::DELETE, "/a.txt", Failure::LostResponse, 1);
    // 目标返回 200 但内容为空，和源不一致
    transport.fail(WebDavMethod::GET, "/b.txt", Failure::Status(200));
    let session = memory_session(&transport);

    let err = session
        .move_resource_with_retry("/a.txt", "/b.txt", &no_delay(3))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        WebdavError::UnexpectedStatus { method: WebDavMethod::GET, actual: 404, .. }
    ));
    assert_eq!(
        transport.urls_of(WebDavMethod::GET),
        vec![url("/a.txt"), url("/a.txt"), url("/b.txt")]
    );
}

#[tokio::test]
async fn retry_does_not_claim_move_when_source_was_never_read() {
    let transport = MemoryTransport::new();
    transport.seed("/b.txt", "X");
    transport.fail_times(WebDavMethod::GET, "/a.txt", Failure::Transport, 1);
    let session = memory_session(&transport);

    let err = session
        .move_resource_with_retry("/a.txt", "/b.txt", &no_delay(3))
        .await
        .unwrap_err();

    assert!(matches!(err, WebdavError::UnexpectedStatus { actual: 404, .. }));
    assert_eq!(transport.urls_of(WebDavMethod::GET), vec![url("/a.txt"); 2]);
}

#[tokio::test]
async fn retry_repeats_whole_sequence_after_transient_failure() {
    let transport = MemoryTransport::new();
    transport.seed("/a.txt", "X");
    transport.fail_times(WebDavMethod::PUT, "/b.txt", Failure::Transport, 1);
    let session = memory_session(&transport);

    session
        .move_resource_with_retry("/a.txt", "/b.txt", &no_delay(3))
        .await
        .unwrap();

    assert_eq!(transport.urls_of(WebDavMethod::GET), vec![url("/a.txt"); 2]);
    assert_eq!(transport.urls_of(WebDavMethod::DELETE), vec![url("/a.txt")]);
    assert!(transport.resource("/a.txt").is_none());
}

#[tokio::test]
async fn retry_does_not_repeat_missing_source() {
    let transport = MemoryTransport::new();
    let session = memory_session(&transport);

    let err = session
        .move_resource_with_retry("/a.txt", "/b.txt", &no_delay(3))
        .await
        .unwrap_err();

    assert!(matches!(err, WebdavError::UnexpectedStatus { actual: 404, .. }));
    assert_eq!(methods(&transport), vec![WebDavMethod::GET]);
}

#[tokio::test]
async fn retry_gives_up_after_max_attempts() {
    let transport = MemoryTransport::new();
    transport.seed("/a.txt", "X");
    transport.fail(WebDavMethod::GET, "/a.txt", Failure::Transport);
    let session = memory_session(&transport);

    let err = session
        .move_resource_with_retry("/a.txt", "/b.txt", &no_delay(3))
        .await
        .unwrap_err();

    assert!(matches!(err, WebdavError::Transport(_)));
    assert_eq!(transport.urls_of(WebDavMethod::GET).len(), 3);
    assert!(transport.urls_of(WebDavMethod::PUT).is_empty());
}
