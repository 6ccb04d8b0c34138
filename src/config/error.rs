// ==========================================
// Fit-Gap 评估系统 - 配置层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置值无效 (key={key}): {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("配置解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("配置存储失败: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("配置锁获取失败: {0}")]
    LockError(String),
}
