//! 用 GET + PUT + DELETE 模拟 MOVE。
//!
//! 这不是原子操作：
//! - GET 之后、PUT 之前失败：源不变，目标不受影响
//! - PUT 之后、DELETE 之前失败：源和目标同时存在
//!
//! 不做补偿或回滚，由调用方处理部分完成的情况，或者使用 [`move_resource_with_retry`]。

use bytes::Bytes;
use tracing::{info, warn};

use crate::internal::auth::structs::webdav_auth::WebdavAuth;
use crate::internal::webdav::enums::{ExpectedStatus, WebDavMethod};
use crate::internal::webdav::functions::resource::{
    delete, expect_status, get, put_body,
};
use crate::internal::webdav::structs::move_retry_policy::MoveRetryPolicy;
use crate::internal::webdav::structs::request_outcome::RequestOutcome;
use crate::internal::webdav::structs::webdav_error::{
    WebdavError, WebdavResult,
};
use crate::internal::webdav::structs::webdav_request::RequestBody;
use crate::internal::webdav::traits::transport::WebdavTransport;

/// 移动远程资源，成功时返回 DELETE 的响应
///
/// - GET 必须正好返回 200，否则 `UnexpectedStatus`，不会再发 PUT 或 DELETE
/// - PUT 必须返回 2xx，否则 `UnexpectedStatus`，源不会被删除
/// - DELETE 必须返回 2xx，否则 `UnexpectedStatus`，此时源和目标都存在
pub async fn move_resource(
    transport: &dyn WebdavTransport,
    auth: &WebdavAuth,
    source_uri: &str,
    destination_uri: &str,
) -> WebdavResult<RequestOutcome> {
    move_once(transport, auth, source_uri, destination_uri, &mut None).await
}

/// `fetched_body` 记下本次 GET 到的源内容，重试时用来核对目标
async fn move_once(
    transport: &dyn WebdavTransport,
    auth: &WebdavAuth,
    source_uri: &str,
    destination_uri: &str,
    fetched_body: &mut Option<Bytes>,
) -> WebdavResult<RequestOutcome> {
    info!(from = %source_uri, to = %destination_uri, "开始移动资源");

    let fetched = get(transport, auth, source_uri).await?;
    let fetched = expect_status(
        fetched,
        ExpectedStatus::Exactly(200),
        WebDavMethod::GET,
        source_uri,
    )?;
    *fetched_body = Some(fetched.body.clone());

    let stored = put_body(
        transport,
        auth,
        destination_uri,
        RequestBody::Bytes(fetched.body),
    )
    .await?;
    expect_status(
        stored,
        ExpectedStatus::Success,
        WebDavMethod::PUT,
        destination_uri,
    )?;

    let deleted = delete(transport, auth, source_uri)
        .await
        .and_then(|outcome| {
            expect_status(
                outcome,
                ExpectedStatus::Success,
                WebDavMethod::DELETE,
                source_uri,
            )
        })
        .inspect_err(|e| {
            warn!(
                from = %source_uri,
                to = %destination_uri,
                error = %e,
                "删除源失败，资源同时存在于源和目标"
            );
        })?;

    info!(from = %source_uri, to = %destination_uri, "移动完成");

    Ok(deleted)
}

/// 带整体重试的移动
///
/// 每次重试都重新执行完整的 GET + PUT + DELETE。只有传输错误和 5xx 会触发重试。
///
/// 重试时源已经 404，并不一定是上一次完成了：源也可能被别人删掉，目标也可能早就存在。
/// 只有之前某一次 GET 成功拿到过源内容，且此时 GET 目标返回 200、内容和记下的一致，
/// 才认为上一次已经完成（例如 DELETE 的响应丢失），返回目标的 GET 响应；否则返回原错误。
pub async fn move_resource_with_retry(
    transport: &dyn WebdavTransport,
    auth: &WebdavAuth,
    source_uri: &str,
    destination_uri: &str,
    policy: &MoveRetryPolicy,
) -> WebdavResult<RequestOutcome> {
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    let mut fetched_body = None;

    loop {
        let err = match move_once(
            transport,
            auth,
            source_uri,
            destination_uri,
            &mut fetched_body,
        )
        .await
        {
            Ok(outcome) => return Ok(outcome),
            Err(e) => e,
        };

        if attempt > 1 && is_source_missing(&err) {
            if let Some(expected) = &fetched_body {
                let existing = get(transport, auth, destination_uri).await?;
                if existing.status_code == 200 && existing.body == *expected {
                    info!(to = %destination_uri, "目标内容与源一致，上一次移动已完成");
                    return Ok(existing);
                }
                warn!(
                    to = %destination_uri,
                    status = existing.status_code,
                    "源已不存在，但目标内容与之前读取的源不一致"
                );
            }
        }

        if attempt >= max_attempts || !err.is_retryable() {
            return Err(err);
        }

        warn!(
            from = %source_uri,
            to = %destination_uri,
            attempt,
            max_attempts,
            error = %err,
            "移动失败，准备重试"
        );
        tokio::time::sleep(policy.retry_delay).await;
        attempt += 1;
    }
}

fn is_source_missing(err: &WebdavError) -> bool {
    matches!(
        err,
        WebdavError::UnexpectedStatus {
            method: WebDavMethod::GET,
            actual: 404,
            ..
        }
    )
}
