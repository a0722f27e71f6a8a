use core::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::internal::auth::structs::webdav_auth::WebdavAuth;
use crate::internal::webdav::functions::move_resource::{
    move_resource, move_resource_with_retry,
};
use crate::internal::webdav::functions::put_directory::put_directory;
use crate::internal::webdav::functions::put_file::put_file;
use crate::internal::webdav::functions::resource;
use crate::internal::webdav::impl_traits::reqwest_transport::ReqwestTransport;
use crate::internal::webdav::impl_traits::tokio_local_fs::TokioFs;
use crate::internal::webdav::structs::directory_upload::{
    DirectoryUploadOptions, DirectoryUploadSummary,
};
use crate::internal::webdav::structs::move_retry_policy::MoveRetryPolicy;
use crate::internal::webdav::structs::request_outcome::RequestOutcome;
use crate::internal::webdav::structs::upload_source::UploadSource;
use crate::internal::webdav::structs::webdav_error::{
    TransportError, WebdavResult,
};
use crate::internal::webdav::traits::local_fs::LocalFs;
use crate::internal::webdav::traits::transport::WebdavTransport;

/// 显式客户端：每个操作都直接传入凭据，不经过共享会话
///
/// 克隆只增加引用计数，可以在多个任务中并发使用
#[derive(Clone)]
pub struct WebdavClient {
    transport: Arc<dyn WebdavTransport>,
    fs: Arc<dyn LocalFs>,
}

impl WebdavClient {
    pub fn new(
        transport: Arc<dyn WebdavTransport>,
        fs: Arc<dyn LocalFs>,
    ) -> Self {
        Self { transport, fs }
    }

    /// reqwest 传输层 + tokio 本地文件系统
    pub fn with_default_transport() -> Result<Self, TransportError> {
        Ok(Self::new(Arc::new(ReqwestTransport::new()?), Arc::new(TokioFs)))
    }

    pub async fn get(
        &self,
        auth: &WebdavAuth,
        uri: &str,
    ) -> WebdavResult<RequestOutcome> {
        resource::get(self.transport.as_ref(), auth, uri).await
    }

    pub async fn put(
        &self,
        auth: &WebdavAuth,
        uri: &str,
        data: impl Into<UploadSource>,
    ) -> WebdavResult<RequestOutcome> {
        resource::put(
            self.transport.as_ref(),
            self.fs.as_ref(),
            auth,
            uri,
            data.into(),
        )
        .await
    }

    pub async fn delete(
        &self,
        auth: &WebdavAuth,
        uri: &str,
    ) -> WebdavResult<RequestOutcome> {
        resource::delete(self.transport.as_ref(), auth, uri).await
    }

    pub async fn head(
        &self,
        auth: &WebdavAuth,
        uri: &str,
    ) -> WebdavResult<RequestOutcome> {
        resource::head(self.transport.as_ref(), auth, uri).await
    }

    pub async fn mkcol(
        &self,
        auth: &WebdavAuth,
        uri: &str,
    ) -> WebdavResult<RequestOutcome> {
        resource::mkcol(self.transport.as_ref(), auth, uri).await
    }

    pub async fn put_file(
        &self,
        auth: &WebdavAuth,
        uri: &str,
        local_path: impl AsRef<Path>,
    ) -> WebdavResult<RequestOutcome> {
        put_file(
            self.transport.as_ref(),
            self.fs.as_ref(),
            auth,
            uri,
            local_path.as_ref(),
        )
        .await
    }

    pub async fn put_directory(
        &self,
        auth: &WebdavAuth,
        remote_root_uri: &str,
        local_dir: impl AsRef<Path>,
        options: &DirectoryUploadOptions,
    ) -> WebdavResult<DirectoryUploadSummary> {
        put_directory(
            self.transport.as_ref(),
            self.fs.as_ref(),
            auth,
            remote_root_uri,
            local_dir.as_ref(),
            options,
        )
        .await
    }

    pub async fn move_resource(
        &self,
        auth: &WebdavAuth,
        source_uri: &str,
        destination_uri: &str,
    ) -> WebdavResult<RequestOutcome> {
        move_resource(self.transport.as_ref(), auth, source_uri, destination_uri)
            .await
    }

    pub async fn move_resource_with_retry(
        &self,
        auth: &WebdavAuth,
        source_uri: &str,
        destination_uri: &str,
        policy: &MoveRetryPolicy,
    ) -> WebdavResult<RequestOutcome> {
        move_resource_with_retry(
            self.transport.as_ref(),
            auth,
            source_uri,
            destination_uri,
            policy,
        )
        .await
    }
}

impl fmt::Debug for WebdavClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebdavClient").finish_non_exhaustive()
    }
}
