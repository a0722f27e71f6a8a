//! 凭据仓库：同一时刻只有一组凭据生效，重新初始化会替换所有后续调用使用的凭据。

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use super::auth_config::AuthConfig;
use super::auth_error::AuthError;
use super::webdav_auth::WebdavAuth;
use crate::internal::webdav::structs::webdav_error::WebdavError;

/// 基于 [`tokio::sync::watch`] 的凭据容器。
///
/// 读取时拿到的是 `Arc` 快照，正在执行的操作继续使用它开始时的凭据；
/// 替换之后发起的调用只会看到新的凭据，不会混用。
#[derive(Debug, Clone)]
pub struct CredentialStore {
    sender: Arc<watch::Sender<Option<Arc<WebdavAuth>>>>,
}

impl CredentialStore {
    /// 创建一个空仓库，初始化前调用 [`current`](Self::current) 会返回 `NotInitialized`
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self { sender: Arc::new(sender) }
    }

    /// 根据配置生成凭据并替换当前凭据
    pub fn initialize(
        &self,
        config: &AuthConfig,
    ) -> Result<Arc<WebdavAuth>, AuthError> {
        let auth = Arc::new(WebdavAuth::from_config(config)?);
        self.replace(Arc::clone(&auth));
        Ok(auth)
    }

    /// 直接替换为已有的凭据
    pub fn replace(&self, auth: Arc<WebdavAuth>) {
        let host = auth.host().to_string();
        let previous = self.sender.send_replace(Some(auth));
        debug!(host = %host, replaced = previous.is_some(), "会话凭据已更新");
    }

    /// 当前生效的凭据
    pub fn current(&self) -> Result<Arc<WebdavAuth>, WebdavError> {
        self.sender.borrow().clone().ok_or(WebdavError::NotInitialized)
    }

    /// 监听凭据的替换
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<WebdavAuth>>> {
        self.sender.subscribe()
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}
