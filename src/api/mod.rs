// ==========================================
// Fit-Gap 评估系统 - API 层
// ==========================================
// 职责: 提供评分 API 接口,供 HTTP 路由层与命令行调用
// ==========================================

pub mod error;
pub mod scoring_api;
pub mod validator;

// 重导出核心类型
pub use error::{ApiError, ApiResult, ValidationViolation};
pub use scoring_api::ScoringApi;
