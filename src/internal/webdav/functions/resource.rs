//! 单次请求的基础操作：GET、PUT、DELETE、HEAD、MKCOL。
//!
//! 每个操作只发一次请求，不重试；非 2xx 状态原样返回给调用方。

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use tracing::debug;

use crate::internal::auth::structs::webdav_auth::WebdavAuth;
use crate::internal::webdav::enums::{ExpectedStatus, WebDavMethod};
use crate::internal::webdav::structs::request_outcome::RequestOutcome;
use crate::internal::webdav::structs::upload_source::UploadSource;
use crate::internal::webdav::structs::webdav_error::{
    WebdavError, WebdavResult,
};
use crate::internal::webdav::structs::webdav_request::{
    RequestBody, WebdavRequest,
};
use crate::internal::webdav::traits::local_fs::LocalFs;
use crate::internal::webdav::traits::transport::WebdavTransport;

pub async fn head(
    transport: &dyn WebdavTransport,
    auth: &WebdavAuth,
    uri: &str,
) -> WebdavResult<RequestOutcome> {
    send(transport, WebdavRequest::new(WebDavMethod::HEAD, auth, uri)).await
}

pub async fn get(
    transport: &dyn WebdavTransport,
    auth: &WebdavAuth,
    uri: &str,
) -> WebdavResult<RequestOutcome> {
    send(transport, WebdavRequest::new(WebDavMethod::GET, auth, uri)).await
}

pub async fn delete(
    transport: &dyn WebdavTransport,
    auth: &WebdavAuth,
    uri: &str,
) -> WebdavResult<RequestOutcome> {
    send(transport, WebdavRequest::new(WebDavMethod::DELETE, auth, uri)).await
}

pub async fn mkcol(
    transport: &dyn WebdavTransport,
    auth: &WebdavAuth,
    uri: &str,
) -> WebdavResult<RequestOutcome> {
    send(transport, WebdavRequest::new(WebDavMethod::MKCOL, auth, uri)).await
}

/// 上传数据
///
/// - `UploadSource::File`：从磁盘分块流式读取，不整体载入内存
/// - `UploadSource::Bytes`：内存数据作为单个请求体发送
pub async fn put(
    transport: &dyn WebdavTransport,
    fs: &dyn LocalFs,
    auth: &WebdavAuth,
    uri: &str,
    source: UploadSource,
) -> WebdavResult<RequestOutcome> {
    let body = match source {
        UploadSource::Bytes(bytes) => RequestBody::Bytes(bytes),
        UploadSource::File(path) => {
            let stream = fs
                .open_stream(&path)
                .await
                .map_err(|e| WebdavError::local_io(&path, e))?;
            RequestBody::Stream(stream)
        }
    };

    put_body(transport, auth, uri, body).await
}

pub(crate) async fn put_body(
    transport: &dyn WebdavTransport,
    auth: &WebdavAuth,
    uri: &str,
    body: RequestBody,
) -> WebdavResult<RequestOutcome> {
    let mut request =
        WebdavRequest::new(WebDavMethod::PUT, auth, uri).with_body(body);
    request.headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/octet-stream"),
    );

    send(transport, request).await
}

async fn send(
    transport: &dyn WebdavTransport,
    request: WebdavRequest,
) -> WebdavResult<RequestOutcome> {
    let method = request.method;
    let url = request.url.clone();

    match transport.send(request).await {
        Ok(outcome) => {
            debug!(%method, %url, status = outcome.status_code, "请求完成");
            Ok(outcome)
        }
        Err(e) => {
            debug!(%method, %url, error = %e, "请求失败");
            Err(e.into())
        }
    }
}

/// 复合操作用：状态不满足要求时转换成 `UnexpectedStatus`
pub(crate) fn expect_status(
    outcome: RequestOutcome,
    expected: ExpectedStatus,
    method: WebDavMethod,
    uri: &str,
) -> WebdavResult<RequestOutcome> {
    if expected.matches(outcome.status_code) {
        return Ok(outcome);
    }

    Err(WebdavError::UnexpectedStatus {
        method,
        uri: uri.to_string(),
        expected,
        actual: outcome.status_code,
    })
}
