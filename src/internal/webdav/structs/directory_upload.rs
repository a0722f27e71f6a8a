use crate::internal::webdav::enums::CollectionPolicy;

/// 目录上传配置
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectoryUploadOptions {
    pub collection_policy: CollectionPolicy,
}

impl DirectoryUploadOptions {
    pub fn collection_policy(mut self, policy: CollectionPolicy) -> Self {
        self.collection_policy = policy;
        self
    }
}

/// 目录上传结果，只有汇总，没有逐个文件的明细
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectoryUploadSummary {
    /// 成功上传的文件数
    pub files_uploaded: usize,
    /// 新建的远程集合数（已存在的不计）
    pub collections_created: usize,
}
