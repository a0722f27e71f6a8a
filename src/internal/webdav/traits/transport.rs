//! 传输层接口：发出单个 HTTP 请求并读完整个响应体。

use async_trait::async_trait;

use crate::internal::webdav::structs::request_outcome::RequestOutcome;
use crate::internal::webdav::structs::webdav_error::TransportError;
use crate::internal::webdav::structs::webdav_request::WebdavRequest;

/// 连接池、TLS、重定向等都属于实现方，本库只负责组装请求和解读结果。
///
/// 每次调用相互独立，实现必须允许并发调用。
#[async_trait]
pub trait WebdavTransport: Send + Sync {
    async fn send(
        &self,
        request: WebdavRequest,
    ) -> Result<RequestOutcome, TransportError>;
}
