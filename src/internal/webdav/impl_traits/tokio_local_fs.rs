use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream;
use tokio::fs::{self, File};
use tokio::io::AsyncReadExt;

use crate::internal::webdav::enums::LocalEntryKind;
use crate::internal::webdav::structs::webdav_request::ByteStream;
use crate::internal::webdav::traits::local_fs::LocalFs;

/// 上传时每次从磁盘读取的块大小：1MB
pub const UPLOAD_CHUNK_SIZE: usize = 1024 * 1024;

/// 基于 tokio::fs 的本地文件系统
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFs;

#[async_trait]
impl LocalFs for TokioFs {
    async fn stat(&self, path: &Path) -> io::Result<Option<LocalEntryKind>> {
        match fs::metadata(path).await {
            Ok(meta) if meta.is_dir() => Ok(Some(LocalEntryKind::Directory)),
            Ok(meta) if meta.is_file() => Ok(Some(LocalEntryKind::Regular)),
            Ok(_) => Ok(Some(LocalEntryKind::Other)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn symlink_stat(
        &self,
        path: &Path,
    ) -> io::Result<Option<LocalEntryKind>> {
        match fs::symlink_metadata(path).await {
            Ok(meta) if meta.file_type().is_symlink() => {
                Ok(Some(LocalEntryKind::Symlink))
            }
            Ok(meta) if meta.is_dir() => Ok(Some(LocalEntryKind::Directory)),
            Ok(meta) if meta.is_file() => Ok(Some(LocalEntryKind::Regular)),
            Ok(_) => Ok(Some(LocalEntryKind::Other)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn list_entries(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut read_dir = fs::read_dir(dir).await?;
        let mut entries = Vec::new();

        while let Some(entry) = read_dir.next_entry().await? {
            entries.push(entry.path());
        }

        Ok(entries)
    }

    async fn open_stream(&self, path: &Path) -> io::Result<ByteStream> {
        let file = File::open(path).await?;

        let chunks = stream::try_unfold(file, |mut file| async move {
            let mut buf = vec![0u8; UPLOAD_CHUNK_SIZE];
            let read = file.read(&mut buf).await?;
            if read == 0 {
                return Ok::<_, io::Error>(None);
            }

            buf.truncate(read);
            Ok(Some((Bytes::from(buf), file)))
        });

        Ok(Box::pin(chunks))
    }

    async fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path).await
    }
}
