use bytes::Bytes;
use reqwest::StatusCode;

/// 每个请求统一的返回结果，4xx/5xx 也原样返回，由调用方判断
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOutcome {
    pub status_code: u16,
    pub status_text: String,
    pub body: Bytes,
}

impl RequestOutcome {
    /// 根据状态码补全标准的状态描述
    pub fn new(status_code: u16, body: impl Into<Bytes>) -> Self {
        let status_text = StatusCode::from_u16(status_code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or_default()
            .to_string();

        Self { status_code, status_text, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// 以 UTF-8 读取响应体，非法字节会被替换
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
