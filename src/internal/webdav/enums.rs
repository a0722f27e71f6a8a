use core::fmt;

use reqwest::Method;

use crate::internal::webdav::structs::webdav_error::TransportError;

/// 本库会发出的全部请求方法
///
/// MOVE 不在其中，移动操作由 GET + PUT + DELETE 模拟
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebDavMethod {
    GET,
    PUT,
    DELETE,
    HEAD,
    MKCOL,
}

impl WebDavMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            WebDavMethod::GET => "GET",
            WebDavMethod::PUT => "PUT",
            WebDavMethod::DELETE => "DELETE",
            WebDavMethod::HEAD => "HEAD",
            WebDavMethod::MKCOL => "MKCOL",
        }
    }

    pub fn to_method(&self) -> Result<Method, TransportError> {
        match self {
            WebDavMethod::GET => Ok(Method::GET),
            WebDavMethod::PUT => Ok(Method::PUT),
            WebDavMethod::DELETE => Ok(Method::DELETE),
            WebDavMethod::HEAD => Ok(Method::HEAD),
            WebDavMethod::MKCOL => Method::from_bytes(self.as_str().as_bytes())
                .map_err(|_| TransportError::InvalidMethod(self.as_str())),
        }
    }
}

impl fmt::Display for WebDavMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 复合操作对某一步响应状态的要求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedStatus {
    /// 必须正好是该状态码
    Exactly(u16),
    /// 任意 2xx
    Success,
    /// 任意 2xx，或 405（MKCOL 时表示集合已存在）
    SuccessOrAlreadyExists,
}

impl ExpectedStatus {
    pub fn matches(&self, status_code: u16) -> bool {
        let is_success = (200..300).contains(&status_code);
        match self {
            ExpectedStatus::Exactly(expected) => status_code == *expected,
            ExpectedStatus::Success => is_success,
            ExpectedStatus::SuccessOrAlreadyExists => {
                is_success || status_code == 405
            }
        }
    }
}

impl fmt::Display for ExpectedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedStatus::Exactly(code) => write!(f, "{code}"),
            ExpectedStatus::Success => f.write_str("2xx"),
            ExpectedStatus::SuccessOrAlreadyExists => f.write_str("2xx 或 405"),
        }
    }
}

/// 本地路径的类型探测结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalEntryKind {
    /// 普通文件
    Regular,
    /// 目录
    Directory,
    /// 符号链接本身（只有不跟随链接的探测才会返回），目录上传时跳过
    Symlink,
    /// 其它（fifo、socket 等），目录上传时跳过
    Other,
}

/// 目录上传时远程集合的创建策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollectionPolicy {
    /// 每进入一层目录先发 MKCOL，已存在（405）视为成功
    #[default]
    CreateMissing,
    /// 不发 MKCOL，认为服务器会在 PUT 时自动创建，或集合已经存在
    AssumeExisting,
}
