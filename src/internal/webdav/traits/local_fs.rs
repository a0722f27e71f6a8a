//! 本地文件系统接口：类型探测、列目录、流式读取。

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::internal::webdav::enums::LocalEntryKind;
use crate::internal::webdav::structs::webdav_request::ByteStream;

#[async_trait]
pub trait LocalFs: Send + Sync {
    /// 路径不存在时返回 `Ok(None)`
    async fn stat(&self, path: &Path) -> io::Result<Option<LocalEntryKind>>;

    /// 不跟随符号链接的探测，链接本身返回 `Symlink`；目录遍历时使用，避免链接成环
    async fn symlink_stat(
        &self,
        path: &Path,
    ) -> io::Result<Option<LocalEntryKind>>;

    /// 目录的直接子项（完整路径），顺序不做保证
    async fn list_entries(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// 打开文件并按块读取
    async fn open_stream(&self, path: &Path) -> io::Result<ByteStream>;

    /// 解析成绝对路径，目录上传时用于确定锚点目录名
    async fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
}
