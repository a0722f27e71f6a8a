use async_trait::async_trait;
use reqwest::{Body, Client};

use crate::internal::webdav::structs::request_outcome::RequestOutcome;
use crate::internal::webdav::structs::webdav_error::TransportError;
use crate::internal::webdav::structs::webdav_request::{
    RequestBody, WebdavRequest,
};
use crate::internal::webdav::traits::transport::WebdavTransport;

/// 基于 reqwest 的传输层
///
/// Client 内部是Arc，克隆不会新建连接池；超时、重定向沿用 reqwest 的默认值
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder().http1_only().build()?;

        Ok(Self { client })
    }

    /// 使用调用方自己配置好的 Client（代理、证书等）
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WebdavTransport for ReqwestTransport {
    async fn send(
        &self,
        request: WebdavRequest,
    ) -> Result<RequestOutcome, TransportError> {
        let WebdavRequest { method, url, headers, body } = request;

        let builder = self
            .client
            .request(method.to_method()?, &url)
            .headers(headers);

        let builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Bytes(bytes) => builder.body(bytes),
            RequestBody::Stream(stream) => {
                builder.body(Body::wrap_stream(stream))
            }
        };

        let res = builder.send().await?;
        let status = res.status();

        // 响应体完整读入内存
        let body = res.bytes().await?;

        Ok(RequestOutcome::new(status.as_u16(), body))
    }
}
