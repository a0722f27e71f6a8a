//! 凭据仓库与会话测试：未初始化、重新初始化、并发调用。

use std::sync::Arc;

use crate::auth::{AuthConfig, CredentialStore};
use crate::tests::{
    alice_config, memory_client, memory_session, url, MemoryTransport,
    ALICE_HEADER, TEST_HOST,
};
use crate::webdav::enums::WebDavMethod;
use crate::{WebdavError, WebdavSession};

fn bob_config() -> AuthConfig {
    AuthConfig::with_password(TEST_HOST, "bob", "hunter2")
}

#[test]
fn current_fails_before_initialize() {
    let store = CredentialStore::new();
    assert!(matches!(store.current(), Err(WebdavError::NotInitialized)));
}

#[test]
fn initialize_replaces_previous_credentials() {
    let store = CredentialStore::new();
    let alice = store.initialize(&alice_config()).unwrap();
    let bob = store.initialize(&bob_config()).unwrap();

    let current = store.current().unwrap();
    assert_eq!(*current, *bob);
    assert_ne!(*current, *alice);
}

#[test]
fn invalid_config_keeps_previous_credentials() {
    let store = CredentialStore::new();
    let alice = store.initialize(&alice_config()).unwrap();

    assert!(store.initialize(&AuthConfig::with_token("", "abc")).is_err());
    assert_eq!(*store.current().unwrap(), *alice);
}

#[tokio::test]
async fn subscribers_see_reinitialization() {
    let store = CredentialStore::new();
    let mut receiver = store.subscribe();
    assert!(receiver.borrow().is_none());

    store.initialize(&alice_config()).unwrap();
    receiver.changed().await.unwrap();

    let seen = receiver.borrow().clone().unwrap();
    assert_eq!(seen.host(), TEST_HOST);
}

#[tokio::test]
async fn uninitialized_session_sends_nothing() {
    let transport = MemoryTransport::new();
    let session = WebdavSession::with_client(memory_client(&transport));

    let err = session.get("/a.txt").await.unwrap_err();
    assert!(matches!(err, WebdavError::NotInitialized));

    let err = session.put_directory("/remote", ".").await.unwrap_err();
    assert!(matches!(err, WebdavError::NotInitialized));

    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn reinitialized_session_uses_only_new_credentials() {
    let transport = MemoryTransport::new();
    let session = memory_session(&transport);
    let cloned = session.clone();

    session.get("/a.txt").await.unwrap();
    session.reinitialize(&bob_config()).unwrap();
    session.get("/a.txt").await.unwrap();
    cloned.put("/b.txt", "data").await.unwrap();

    let headers: Vec<_> = transport
        .requests()
        .into_iter()
        .map(|r| r.authorization.unwrap())
        .collect();
    let bob_header = "Basic Ym9iOmh1bnRlcjI=";
    assert_eq!(headers, vec![ALICE_HEADER, bob_header, bob_header]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn session_is_shared_across_tasks() {
    let transport = MemoryTransport::new();
    let session = memory_session(&transport);

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let session = session.clone();
            tokio::spawn(async move {
                session.put(&format!("/file-{i}.txt"), format!("{i}")).await
            })
        })
        .collect();

    for handle in handles {
        let outcome = handle.await.unwrap().unwrap();
        assert_eq!(outcome.status_code, 201);
    }

    let mut puts = transport.urls_of(WebDavMethod::PUT);
    puts.sort();
    puts.dedup();
    assert_eq!(puts.len(), 32);
    assert_eq!(
        transport.resource("/file-7.txt").unwrap(),
        "7".as_bytes()
    );
    assert!(puts.contains(&url("/file-31.txt")));

    let credentials: Arc<_> = session.credentials().unwrap();
    assert_eq!(credentials.host(), TEST_HOST);
}
