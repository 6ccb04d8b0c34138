// ==========================================
// Fit-Gap 评估系统 - 核心库
// ==========================================
// 范围: 工作坊共识与分类评分核心
// - 投票统计与共识判定
// - 风险评分
// - OCM 准备度与热力图
// - 差距解决方案推荐
// - 成本/工作量汇总
// - 签核状态机
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 评分规则
pub mod engine;

// 配置层 - 评分参数
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 命令行评分流程
pub mod cli;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::types::{
    Classification, ResolutionType, RiskBand, Severity, SignOffAction, SignOffStatus,
};

pub use domain::{
    AssessmentScorecard, AssessmentSnapshot, GapCostRecord, GapPattern, GapRollup, HeatmapCell,
    OcmImpact, ResolutionSuggestion, SignOffProcess, VoteRecord, VoteTally, WorkshopVote,
};

pub use engine::{
    GapRollupEngine, GapSuggestEngine, OcmEngine, RiskScorer, SignOffEngine, VoteTallyEngine,
};

pub use api::{ApiError, ApiResult, ScoringApi};

pub use config::{ConfigManager, ScoringConfig};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Fit-Gap 评估评分核心";
