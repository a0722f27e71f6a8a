use std::path::PathBuf;

use bytes::Bytes;

/// PUT 的数据来源：内存字节，或者本地文件（流式读取，不整体载入内存）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadSource {
    Bytes(Bytes),
    File(PathBuf),
}

impl From<Bytes> for UploadSource {
    fn from(value: Bytes) -> Self {
        UploadSource::Bytes(value)
    }
}

impl From<Vec<u8>> for UploadSource {
    fn from(value: Vec<u8>) -> Self {
        UploadSource::Bytes(Bytes::from(value))
    }
}

impl From<&'static [u8]> for UploadSource {
    fn from(value: &'static [u8]) -> Self {
        UploadSource::Bytes(Bytes::from_static(value))
    }
}

impl From<&'static str> for UploadSource {
    fn from(value: &'static str) -> Self {
        UploadSource::Bytes(Bytes::from_static(value.as_bytes()))
    }
}

impl From<String> for UploadSource {
    fn from(value: String) -> Self {
        UploadSource::Bytes(Bytes::from(value))
    }
}

impl From<PathBuf> for UploadSource {
    fn from(value: PathBuf) -> Self {
        UploadSource::File(value)
    }
}
