// ==========================================
// Fit-Gap 评估系统 - 评分配置读取 Trait
// ==========================================
// 职责: 定义评分模块所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::error::ConfigError;
use crate::config::scoring_config::ScoringConfig;
use async_trait::async_trait;

// ==========================================
// ScoringConfigReader Trait
// ==========================================
// 实现者: ConfigManager（从 config_kv 表读取）
#[async_trait]
pub trait ScoringConfigReader: Send + Sync {
    /// 读取评分参数
    ///
    /// # 默认值
    /// - 未配置时返回 ScoringConfig::default()
    async fn load_scoring_config(&self) -> Result<ScoringConfig, ConfigError>;
}
