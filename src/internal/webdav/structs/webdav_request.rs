use core::fmt;
use std::io;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;
use reqwest::header::{HeaderMap, AUTHORIZATION};

use crate::internal::auth::structs::webdav_auth::WebdavAuth;
use crate::internal::webdav::enums::WebDavMethod;

/// 流式请求体，本地文件按块读出
pub type ByteStream =
    Pin<Box<dyn Stream<Item = io::Result<Bytes>> + Send + Sync>>;

pub enum RequestBody {
    Empty,
    Bytes(Bytes),
    /// 分块传输，不预先知道总长度
    Stream(ByteStream),
}

impl fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestBody::Empty => f.write_str("Empty"),
            RequestBody::Bytes(bytes) => {
                f.debug_tuple("Bytes").field(&bytes.len()).finish()
            }
            RequestBody::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// 交给传输层的单个请求
#[derive(Debug)]
pub struct WebdavRequest {
    pub method: WebDavMethod,
    pub url: String,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

impl WebdavRequest {
    /// 组装请求：url = host + uri，并带上 `Authorization: Basic <token>`
    pub fn new(method: WebDavMethod, auth: &WebdavAuth, uri: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth.authorization().clone());

        Self {
            method,
            url: auth.url_for(uri),
            headers,
            body: RequestBody::Empty,
        }
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }
}
