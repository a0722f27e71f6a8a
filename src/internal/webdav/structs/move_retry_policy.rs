use std::time::Duration;

/// 默认最多尝试次数
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// 默认重试延迟（毫秒）
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

/// 移动操作的整体重试策略：每次都重新执行完整的 GET + PUT + DELETE
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRetryPolicy {
    /// 最多尝试次数（含第一次），0 按 1 处理
    pub max_attempts: usize,
    /// 两次尝试之间的等待
    pub retry_delay: Duration,
}

impl MoveRetryPolicy {
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }
}

impl Default for MoveRetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_RETRIES,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        }
    }
}
