// ==========================================
// Fit-Gap 评估系统 - 配置层
// ==========================================
// 职责: 评分参数管理,支持覆写
// 存储: config_kv 表
// ==========================================

pub mod config_manager;
pub mod error;
pub mod scoring_config;
pub mod scoring_config_trait;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager};
pub use error::ConfigError;
pub use scoring_config::{
    ComplexityWeights, RiskBandThresholds, RiskWeights, ScoringConfig, SeverityWeights,
    SuggestConfig,
};
pub use scoring_config_trait::ScoringConfigReader;
