// ==========================================
// Fit-Gap 评估系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换下层错误为用户可读的错误消息
// ==========================================

use crate::config::ConfigError;
use crate::engine::SignOffError;
use thiserror::Error;

/// API层错误类型
/// 所有错误信息必须包含显式原因
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("数据验证失败: {reason}")]
    ValidationError {
        reason: String,
        violations: Vec<ValidationViolation>,
    },

    #[error("无效的状态转换: from={from} action={action}")]
    InvalidStateTransition { from: String, action: String },

    #[error("业务规则违反: {0}")]
    BusinessRuleViolation(String),

    // ==========================================
    // 配置/存储错误
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("数据库错误: {0}")]
    DatabaseError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 ConfigError 转换
// ==========================================
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidValue { .. } | ConfigError::Parse(_) => {
                ApiError::ConfigError(err.to_string())
            }
            ConfigError::Database(e) => ApiError::DatabaseError(e.to_string()),
            ConfigError::LockError(msg) => {
                ApiError::InternalError(format!("配置锁获取失败: {}", msg))
            }
        }
    }
}

// ==========================================
// 从 SignOffError 转换
// ==========================================
impl From<SignOffError> for ApiError {
    fn from(err: SignOffError) -> Self {
        match err {
            SignOffError::InvalidTransition { status, action } => {
                ApiError::InvalidStateTransition {
                    from: status.to_string(),
                    action: action.to_string(),
                }
            }
            SignOffError::MissingRejectComment | SignOffError::MissingActor => {
                ApiError::BusinessRuleViolation(err.to_string())
            }
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 校验违规详情
// ==========================================

/// 校验违规详情
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValidationViolation {
    /// 字段路径（如 ocmImpacts[2].readinessScore）
    pub field: String,
    /// 违规原因
    pub reason: String,
}
