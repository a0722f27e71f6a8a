use std::path::Path;
use std::sync::Arc;

use crate::internal::auth::structs::auth_config::AuthConfig;
use crate::internal::auth::structs::credential_store::CredentialStore;
use crate::internal::auth::structs::webdav_auth::WebdavAuth;
use crate::internal::session::structs::webdav_client::WebdavClient;
use crate::internal::webdav::structs::directory_upload::{
    DirectoryUploadOptions, DirectoryUploadSummary,
};
use crate::internal::webdav::structs::move_retry_policy::MoveRetryPolicy;
use crate::internal::webdav::structs::request_outcome::RequestOutcome;
use crate::internal::webdav::structs::upload_source::UploadSource;
use crate::internal::webdav::structs::webdav_error::WebdavResult;

/// 共享会话句柄
///
/// 由初始化返回，调用方持有并在多个任务间克隆使用，代替进程级的全局单例。
/// 每个操作开始时读取一次当前凭据；`reinitialize` 之后发起的调用只使用新凭据。
///
/// example:
/// ```no_run
/// use webdav_mirror::auth::AuthConfig;
/// use webdav_mirror::WebdavSession;
///
/// # async fn example() -> webdav_mirror::WebdavResult<()> {
/// let config = AuthConfig::with_password("https://dav.example.com/dav", "account", "password");
/// let session = WebdavSession::initialize(&config)?;
///
/// session.put("/notes/a.txt", "hello").await?;
/// session.move_resource("/notes/a.txt", "/notes/b.txt").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WebdavSession {
    client: WebdavClient,
    store: CredentialStore,
}

impl WebdavSession {
    /// 使用默认传输层创建并初始化会话
    pub fn initialize(config: &AuthConfig) -> WebdavResult<Self> {
        let session = Self::with_client(WebdavClient::with_default_transport()?);
        session.reinitialize(config)?;
        Ok(session)
    }

    /// 使用指定客户端创建未初始化的会话，初始化前的调用都会返回 `NotInitialized`
    pub fn with_client(client: WebdavClient) -> Self {
        Self { client, store: CredentialStore::new() }
    }

    /// 替换会话凭据，对所有持有该句柄（及其克隆）的调用方生效
    pub fn reinitialize(
        &self,
        config: &AuthConfig,
    ) -> WebdavResult<Arc<WebdavAuth>> {
        Ok(self.store.initialize(config)?)
    }

    pub fn credentials(&self) -> WebdavResult<Arc<WebdavAuth>> {
        self.store.current()
    }

    pub fn credential_store(&self) -> &CredentialStore {
        &self.store
    }

    pub fn client(&self) -> &WebdavClient {
        &self.client
    }

    pub async fn get(&self, uri: &str) -> WebdavResult<RequestOutcome> {
        let auth = self.store.current()?;
        self.client.get(&auth, uri).await
    }

    pub async fn put(
        &self,
        uri: &str,
        data: impl Into<UploadSource>,
    ) -> WebdavResult<RequestOutcome> {
        let auth = self.store.current()?;
        self.client.put(&auth, uri, data).await
    }

    pub async fn delete(&self, uri: &str) -> WebdavResult<RequestOutcome> {
        let auth = self.store.current()?;
        self.client.delete(&auth, uri).await
    }

    pub async fn head(&self, uri: &str) -> WebdavResult<RequestOutcome> {
        let auth = self.store.current()?;
        self.client.head(&auth, uri).await
    }

    pub async fn mkcol(&self, uri: &str) -> WebdavResult<RequestOutcome> {
        let auth = self.store.current()?;
        self.client.mkcol(&auth, uri).await
    }

    pub async fn put_file(
        &self,
        uri: &str,
        local_path: impl AsRef<Path>,
    ) -> WebdavResult<RequestOutcome> {
        let auth = self.store.current()?;
        self.client.put_file(&auth, uri, local_path).await
    }

    /// 使用默认配置（逐层 MKCOL）上传目录
    pub async fn put_directory(
        &self,
        remote_root_uri: &str,
        local_dir: impl AsRef<Path>,
    ) -> WebdavResult<DirectoryUploadSummary> {
        self.put_directory_with(
            remote_root_uri,
            local_dir,
            &DirectoryUploadOptions::default(),
        )
        .await
    }

    pub async fn put_directory_with(
        &self,
        remote_root_uri: &str,
        local_dir: impl AsRef<Path>,
        options: &DirectoryUploadOptions,
    ) -> WebdavResult<DirectoryUploadSummary> {
        let auth = self.store.current()?;
        self.client
            .put_directory(&auth, remote_root_uri, local_dir, options)
            .await
    }

    pub async fn move_resource(
        &self,
        source_uri: &str,
        destination_uri: &str,
    ) -> WebdavResult<RequestOutcome> {
        let auth = self.store.current()?;
        self.client
            .move_resource(&auth, source_uri, destination_uri)
            .await
    }

    pub async fn move_resource_with_retry(
        &self,
        source_uri: &str,
        destination_uri: &str,
        policy: &MoveRetryPolicy,
    ) -> WebdavResult<RequestOutcome> {
        let auth = self.store.current()?;
        self.client
            .move_resource_with_retry(
                &auth,
                source_uri,
                destination_uri,
                policy,
            )
            .await
    }
}
