//! 目录上传：把本地目录树按相对路径镜像到远程集合下。
//!
//! 以本地目录名作为锚点，`/remote` + `local/proj` 会上传到 `/remote/proj/...`。
//! 相对路径由开始遍历时记录的根路径逐段拆分得到，每段单独做百分号编码。

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use tracing::{debug, info};

use crate::internal::auth::structs::webdav_auth::WebdavAuth;
use crate::internal::webdav::enums::{
    CollectionPolicy, ExpectedStatus, LocalEntryKind, WebDavMethod,
};
use crate::internal::webdav::functions::put_file::put_file;
use crate::internal::webdav::functions::resource::{expect_status, mkcol};
use crate::internal::webdav::structs::directory_upload::{
    DirectoryUploadOptions, DirectoryUploadSummary,
};
use crate::internal::webdav::structs::webdav_error::{
    WebdavError, WebdavResult,
};
use crate::internal::webdav::traits::local_fs::LocalFs;
use crate::internal::webdav::traits::transport::WebdavTransport;

/// 单个路径段需要编码的字符
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// 递归上传本地目录
///
/// 锚点取调用方传入路径（按字面去掉 `.`、解析 `..` 之后）的最后一段，根目录本身是符号链接时
/// 用链接名而不是目标名。遍历过程中遇到的符号链接不跟随，直接跳过。
///
/// 深度优先，同级顺序取决于文件系统的枚举顺序。任何一个文件上传失败
/// （传输错误、本地读取错误、非 2xx）都会立刻中止，已上传的文件保留在远程，不做回滚。
pub async fn put_directory(
    transport: &dyn WebdavTransport,
    fs: &dyn LocalFs,
    auth: &WebdavAuth,
    remote_root_uri: &str,
    local_dir: &Path,
    options: &DirectoryUploadOptions,
) -> WebdavResult<DirectoryUploadSummary> {
    match fs.stat(local_dir).await {
        Ok(Some(LocalEntryKind::Directory)) => {}
        _ => return Err(WebdavError::NotADirectory(local_dir.to_path_buf())),
    }

    let root = fs
        .canonicalize(local_dir)
        .await
        .map_err(|e| WebdavError::local_io(local_dir, e))?;
    let anchor = anchor_segment(local_dir, &root)?;
    let remote_anchor =
        format!("{}/{}", remote_root_uri.trim_end_matches('/'), anchor);

    info!(local = %root.display(), remote = %remote_anchor, "开始上传目录");

    let create_collections =
        options.collection_policy == CollectionPolicy::CreateMissing;
    let mut summary = DirectoryUploadSummary::default();

    if create_collections {
        ensure_collection(transport, auth, &remote_anchor, &mut summary)
            .await?;
    }

    // 每层目录一个迭代器，栈顶就是当前正在遍历的目录
    let mut stack = vec![list_entries(fs, &root).await?.into_iter()];

    while let Some(entries) = stack.last_mut() {
        let Some(entry) = entries.next() else {
            stack.pop();
            continue;
        };

        let kind = fs
            .symlink_stat(&entry)
            .await
            .map_err(|e| WebdavError::local_io(&entry, e))?;

        match kind {
            Some(LocalEntryKind::Directory) => {
                if create_collections {
                    let uri = remote_uri_for(&remote_anchor, &root, &entry)?;
                    ensure_collection(transport, auth, &uri, &mut summary)
                        .await?;
                }
                stack.push(list_entries(fs, &entry).await?.into_iter());
            }
            Some(LocalEntryKind::Regular) => {
                let uri = remote_uri_for(&remote_anchor, &root, &entry)?;
                let outcome =
                    put_file(transport, fs, auth, &uri, &entry).await?;
                expect_status(
                    outcome,
                    ExpectedStatus::Success,
                    WebDavMethod::PUT,
                    &uri,
                )?;
                summary.files_uploaded += 1;
            }
            Some(LocalEntryKind::Symlink) => {
                debug!(path = %entry.display(), "跳过符号链接");
            }
            Some(LocalEntryKind::Other) => {
                debug!(path = %entry.display(), "跳过非普通文件");
            }
            None => {
                return Err(WebdavError::FileNotFound { path: entry });
            }
        }
    }

    info!(
        remote = %remote_anchor,
        files = summary.files_uploaded,
        collections = summary.collections_created,
        "目录上传完成"
    );

    Ok(summary)
}

async fn list_entries(
    fs: &dyn LocalFs,
    dir: &Path,
) -> WebdavResult<Vec<PathBuf>> {
    fs.list_entries(dir)
        .await
        .map_err(|e| WebdavError::local_io(dir, e))
}

async fn ensure_collection(
    transport: &dyn WebdavTransport,
    auth: &WebdavAuth,
    uri: &str,
    summary: &mut DirectoryUploadSummary,
) -> WebdavResult<()> {
    let outcome = mkcol(transport, auth, uri).await?;
    let outcome = expect_status(
        outcome,
        ExpectedStatus::SuccessOrAlreadyExists,
        WebDavMethod::MKCOL,
        uri,
    )?;

    if outcome.is_success() {
        summary.collections_created += 1;
    }

    Ok(())
}

/// 锚点：调用方路径按字面规范化后的最后一段；路径里没有可用的名字（如 `.`）时退回到绝对路径的最后一段
fn anchor_segment(local_dir: &Path, root: &Path) -> WebdavResult<String> {
    let lexical = lexical_file_name(local_dir);
    let name = match lexical {
        Some(name) => Some(name),
        None => root.file_name().map(|name| name.to_os_string()),
    };

    name.as_deref()
        .and_then(|name| name.to_str())
        .map(encode_segment)
        .ok_or_else(|| WebdavError::InvalidLocalPath(local_dir.to_path_buf()))
}

/// 只做字面处理，不访问文件系统，所以不会跟随符号链接
fn lexical_file_name(path: &Path) -> Option<OsString> {
    let mut segments: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match segments.last() {
                Some(Component::Normal(_)) => {
                    segments.pop();
                }
                _ => segments.push(component),
            },
            other => segments.push(other),
        }
    }

    match segments.last() {
        Some(Component::Normal(name)) => Some(name.to_os_string()),
        _ => None,
    }
}

/// 远程地址 = 远程锚点 + 相对根目录的每一段
pub(crate) fn remote_uri_for(
    remote_anchor: &str,
    root: &Path,
    entry: &Path,
) -> WebdavResult<String> {
    let invalid = || WebdavError::InvalidLocalPath(entry.to_path_buf());

    let relative = entry.strip_prefix(root).map_err(|_| invalid())?;
    let mut uri = remote_anchor.to_string();

    for component in relative.components() {
        let Component::Normal(segment) = component else {
            return Err(invalid());
        };
        let segment = segment.to_str().ok_or_else(invalid)?;
        uri.push('/');
        uri.push_str(&encode_segment(segment));
    }

    Ok(uri)
}

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}
