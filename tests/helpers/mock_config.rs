// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

use async_trait::async_trait;
use fitgap_scoring::config::{ConfigError, ScoringConfig, ScoringConfigReader};

/// Mock 配置读取器
#[derive(Debug, Clone)]
pub struct MockConfigReader {
    pub config: ScoringConfig,
}

impl MockConfigReader {
    /// 默认参数
    pub fn default_config() -> Self {
        Self {
            config: ScoringConfig::default(),
        }
    }

    /// 推荐结果上限
    pub fn with_max_suggestions(max_results: usize) -> Self {
        let mut config = ScoringConfig::default();
        config.suggest.max_results = max_results;
        Self { config }
    }

    /// 只看差距密度的风险权重
    pub fn density_only() -> Self {
        let mut config = ScoringConfig::default();
        config.risk_weights.gap_density = 1.0;
        config.risk_weights.unresolved_ratio = 0.0;
        config.risk_weights.avg_complexity = 0.0;
        config.risk_weights.pending_ratio = 0.0;
        Self { config }
    }
}

#[async_trait]
impl ScoringConfigReader for MockConfigReader {
    async fn load_scoring_config(&self) -> Result<ScoringConfig, ConfigError> {
        Ok(self.config.clone())
    }
}
