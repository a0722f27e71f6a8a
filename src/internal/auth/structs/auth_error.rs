//! 认证相关错误类型。

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("host 为空")]
    EmptyHost,

    #[error("host 格式错误: {0}")]
    InvalidHost(String),

    #[error("不支持的协议: {0}，仅支持 http/https")]
    UnsupportedScheme(String),

    #[error("token 为空")]
    EmptyToken,

    #[error("token 包含请求头不允许的字符")]
    InvalidToken,

    #[error("token 与 user/password 只能提供其中一种")]
    AmbiguousCredentials,

    #[error("缺少凭据：需要 token，或者 user + password")]
    MissingCredentials,

    #[error("缺少环境变量 {0}")]
    MissingEnv(&'static str),
}
