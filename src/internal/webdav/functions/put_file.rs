use std::path::Path;

use tracing::debug;

use crate::internal::auth::structs::webdav_auth::WebdavAuth;
use crate::internal::webdav::enums::LocalEntryKind;
use crate::internal::webdav::functions::resource::put;
use crate::internal::webdav::structs::request_outcome::RequestOutcome;
use crate::internal::webdav::structs::upload_source::UploadSource;
use crate::internal::webdav::structs::webdav_error::{
    WebdavError, WebdavResult,
};
use crate::internal::webdav::traits::local_fs::LocalFs;
use crate::internal::webdav::traits::transport::WebdavTransport;

/// 上传单个本地文件
///
/// 发请求之前先探测本地路径：
/// - 不存在或无法访问：`FileNotFound`
/// - 是目录：`IsADirectory`，目录请使用 [`put_directory`](super::put_directory::put_directory)
///
/// 服务器返回的状态原样返回
pub async fn put_file(
    transport: &dyn WebdavTransport,
    fs: &dyn LocalFs,
    auth: &WebdavAuth,
    uri: &str,
    local_path: &Path,
) -> WebdavResult<RequestOutcome> {
    match fs.stat(local_path).await {
        Ok(Some(LocalEntryKind::Directory)) => {
            return Err(WebdavError::IsADirectory(local_path.to_path_buf()));
        }
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(WebdavError::FileNotFound {
                path: local_path.to_path_buf(),
            });
        }
        Err(e) => {
            debug!(path = %local_path.display(), error = %e, "本地文件探测失败");
            return Err(WebdavError::FileNotFound {
                path: local_path.to_path_buf(),
            });
        }
    }

    put(
        transport,
        fs,
        auth,
        uri,
        UploadSource::File(local_path.to_path_buf()),
    )
    .await
}
