//! 初始化配置：host 必填，凭据二选一（token，或者 user + password）。

use core::fmt;
use std::env;

use serde::Deserialize;

use super::auth_error::AuthError;

/// 配置使用的环境变量名
pub mod env_var_names {
    /// WebDAV 根 URL
    pub const WEBDAV_URL: &str = "WEBDAV_URL";
    /// 用户名
    pub const WEBDAV_USERNAME: &str = "WEBDAV_USERNAME";
    /// 密码
    pub const WEBDAV_PASSWORD: &str = "WEBDAV_PASSWORD";
    /// 预编码的 Basic token，存在时优先于账号密码
    pub const WEBDAV_TOKEN: &str = "WEBDAV_TOKEN";
}

/// 会话初始化配置
///
/// 可以从任意 serde 支持的配置文件反序列化，也可以通过 [`AuthConfig::from_env`] 读取环境变量。
/// 校验（凭据二选一、host 格式）在创建 [`WebdavAuth`](super::webdav_auth::WebdavAuth) 时进行。
#[derive(Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AuthConfig {
    pub host: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl AuthConfig {
    /// 账号密码形式
    pub fn with_password(host: &str, user: &str, password: &str) -> Self {
        Self {
            host: host.to_string(),
            user: Some(user.to_string()),
            password: Some(password.to_string()),
            token: None,
        }
    }

    /// token 形式，token 会被原样使用
    pub fn with_token(host: &str, token: &str) -> Self {
        Self {
            host: host.to_string(),
            user: None,
            password: None,
            token: Some(token.to_string()),
        }
    }

    /// 从环境变量读取配置，空字符串视为未设置
    pub fn from_env() -> Result<Self, AuthError> {
        use env_var_names::*;

        let host = _read_env(WEBDAV_URL).ok_or(AuthError::MissingEnv(WEBDAV_URL))?;

        Ok(Self {
            host,
            user: _read_env(WEBDAV_USERNAME),
            password: _read_env(WEBDAV_PASSWORD),
            token: _read_env(WEBDAV_TOKEN),
        })
    }
}

fn _read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

/// 防止debug泄漏账号
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<hidden>"))
            .field("token", &self.token.as_ref().map(|_| "<hidden>"))
            .finish()
    }
}
