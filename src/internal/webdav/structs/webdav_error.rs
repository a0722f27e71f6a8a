//! 请求与复合操作的错误类型。

use std::path::PathBuf;

use thiserror::Error;

use crate::internal::auth::structs::auth_error::AuthError;
use crate::internal::webdav::enums::{ExpectedStatus, WebDavMethod};

/// 传输层错误：DNS、连接、超时、请求体读取等，不做任何重试
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("不支持的请求方法: {0}")]
    InvalidMethod(&'static str),

    #[error("读取请求体失败: {0}")]
    Io(#[from] std::io::Error),

    /// 自定义传输层使用
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum WebdavError {
    #[error("会话尚未初始化")]
    NotInitialized,

    #[error("认证信息错误: {0}")]
    Auth(#[from] AuthError),

    #[error("传输失败: {0}")]
    Transport(#[from] TransportError),

    #[error("状态异常 {method} {uri}: 期望 {expected}，实际 {actual}")]
    UnexpectedStatus {
        method: WebDavMethod,
        uri: String,
        expected: ExpectedStatus,
        actual: u16,
    },

    #[error("本地文件不存在或无法访问: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("不是目录: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("是目录，请改用目录上传: {}", .0.display())]
    IsADirectory(PathBuf),

    #[error("本地路径无法转换为远程路径: {}", .0.display())]
    InvalidLocalPath(PathBuf),

    #[error("读取本地路径失败 {}: {source}", path.display())]
    LocalIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WebdavError {
    /// 传输失败和 5xx 可以整体重试，本地前置条件和认证错误重试也没有意义
    pub fn is_retryable(&self) -> bool {
        match self {
            WebdavError::Transport(_) => true,
            WebdavError::UnexpectedStatus { actual, .. } => *actual >= 500,
            _ => false,
        }
    }

    pub(crate) fn local_io(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            WebdavError::FileNotFound { path }
        } else {
            WebdavError::LocalIo { path, source }
        }
    }
}

pub type WebdavResult<T> = Result<T, WebdavError>;
