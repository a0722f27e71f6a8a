use core::fmt;
use std::sync::Arc;

use base64::Engine;
use reqwest::header::HeaderValue;
use sha2::{Digest, Sha256};
use url::Url;

use super::auth_config::AuthConfig;
use super::auth_error::AuthError;

/// 认证结构体（会话凭据）
///
/// 该结构体定位
/// - host：WebDav 根地址，创建时去掉尾部的 `/`，资源 uri 直接拼接在它后面
/// - token：预编码的 Basic 认证值，会话期间不会过期，没有刷新逻辑
/// - 创建后不可修改，多线程并发读取不需要加锁
///
/// 默认Eq时会匹配host和token，如果需要单独比较token，需使用eq_only_token方法
#[derive(Clone)]
pub struct WebdavAuth {
    host: Arc<str>,
    token_fingerprint: Arc<str>, // token 的 sha256，只用于比较
    authorization: HeaderValue,
}

impl WebdavAuth {
    /// 使用账号密码创建，token = base64("user:password")
    ///
    /// 注意：这只是明文的 Basic 认证编码，不做任何哈希或加盐
    pub fn new(
        username: &str,
        password: &str,
        host: &str,
    ) -> Result<Self, AuthError> {
        let token = base64::engine::general_purpose::STANDARD
            .encode(format!("{username}:{password}"));

        Self::from_token(&token, host)
    }

    /// 使用预编码的 token 创建，token 原样放进 `Authorization: Basic <token>`
    pub fn from_token(token: &str, host: &str) -> Result<Self, AuthError> {
        if token.is_empty() {
            return Err(AuthError::EmptyToken);
        }

        let host = _format_host(host)?;

        let mut authorization =
            HeaderValue::from_str(&format!("Basic {token}"))
                .map_err(|_| AuthError::InvalidToken)?;
        authorization.set_sensitive(true);

        Ok(Self {
            host: host.into(),
            token_fingerprint: _fingerprint(token).into(),
            authorization,
        })
    }

    /// 根据配置创建，token 与 user/password 必须且只能提供一种
    pub fn from_config(config: &AuthConfig) -> Result<Self, AuthError> {
        match (&config.token, &config.user, &config.password) {
            (Some(token), None, None) => Self::from_token(token, &config.host),
            (None, Some(user), Some(password)) => {
                Self::new(user, password, &config.host)
            }
            (Some(_), _, _) => Err(AuthError::AmbiguousCredentials),
            _ => Err(AuthError::MissingCredentials),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// 拼接完整地址：host + uri，不做其它规范化，uri 的前导 `/` 由调用方负责
    pub fn url_for(&self, uri: &str) -> String {
        format!("{}{}", self.host, uri)
    }

    /// 仅比较token是否相等
    pub fn eq_only_token(&self, other: &Self) -> bool {
        self.token_fingerprint == other.token_fingerprint
    }

    pub(crate) fn authorization(&self) -> &HeaderValue {
        &self.authorization
    }
}

/// 用于比较认证结构体是否相等
impl PartialEq for WebdavAuth {
    fn eq(&self, other: &Self) -> bool {
        self.token_fingerprint == other.token_fingerprint
            && self.host == other.host
    }
}

impl Eq for WebdavAuth {}

/// 防止debug泄漏账号
impl fmt::Debug for WebdavAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebdavAuth")
            .field("host", &self.host)
            .field("token", &"<hidden>")
            .finish()
    }
}

fn _fingerprint(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn _format_host(host: &str) -> Result<String, AuthError> {
    let trimmed = host.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(AuthError::EmptyHost);
    }

    let parsed = Url::parse(trimmed)
        .map_err(|e| AuthError::InvalidHost(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(AuthError::UnsupportedScheme(other.to_string())),
    }

    if parsed.host_str().is_none() {
        return Err(AuthError::InvalidHost(trimmed.to_string()));
    }

    Ok(trimmed.to_string())
}
