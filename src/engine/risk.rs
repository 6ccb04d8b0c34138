// ==========================================
// Fit-Gap 评估系统 - 风险评分引擎
// ==========================================
// 职责: 评估范围的实施风险分数 (0~1)
// 输入: 步骤总数 + 差距数 + 待定数 + 已解决差距的方案类型
// 输出: 风险分数 / 风险分档
// ==========================================
// 公式 (评分契约, 其他组件依赖):
//   gap_density      = gap_count / total_steps
//   unresolved_ratio = max(0, gap_count - resolutions) / gap_count  (gap_count=0 时为0)
//   avg_complexity   = 方案类型复杂度均值 (未知类型 0.5, 空列表 0)
//   pending_ratio    = pending_count / total_steps
//   risk = 0.4*gap_density + 0.3*unresolved_ratio + 0.2*avg_complexity + 0.1*pending_ratio
//   结果保留3位小数并截断到 [0,1]
// ==========================================

use crate::config::scoring_config::{ComplexityWeights, RiskBandThresholds, RiskWeights};
use crate::config::ScoringConfig;
use crate::domain::types::RiskBand;
use crate::engine::round_to;
use tracing::debug;

// ==========================================
// RiskScorer - 风险评分引擎
// ==========================================
pub struct RiskScorer {
    weights: RiskWeights,
    complexity: ComplexityWeights,
    bands: RiskBandThresholds,
}

impl RiskScorer {
    /// 使用默认参数构造
    pub fn new() -> Self {
        Self::with_config(&ScoringConfig::default())
    }

    pub fn with_config(config: &ScoringConfig) -> Self {
        Self {
            weights: config.risk_weights.clone(),
            complexity: config.complexity_weights.clone(),
            bands: config.risk_bands.clone(),
        }
    }

    /// 计算风险分数
    ///
    /// # 参数
    /// - `total_steps`: 范围内流程步骤总数
    /// - `gap_count`: 分类为 GAP 的步骤数
    /// - `pending_count`: 尚未分类的步骤数
    /// - `resolution_types`: 已解决差距的方案类型 (可少于 gap_count)
    ///
    /// # 返回
    /// [0,1] 内的分数; total_steps=0 时直接返回0
    pub fn compute_risk_score<S: AsRef<str>>(
        &self,
        total_steps: u32,
        gap_count: u32,
        pending_count: u32,
        resolution_types: &[S],
    ) -> f64 {
        if total_steps == 0 {
            return 0.0;
        }

        let total = total_steps as f64;
        let gap_density = gap_count as f64 / total;

        let unresolved_ratio = if gap_count == 0 {
            0.0
        } else {
            let unresolved = (gap_count as usize).saturating_sub(resolution_types.len());
            unresolved as f64 / gap_count as f64
        };

        let avg_complexity = if resolution_types.is_empty() {
            0.0
        } else {
            let sum: f64 = resolution_types
                .iter()
                .map(|t| self.complexity.weight_of(t.as_ref()))
                .sum();
            sum / resolution_types.len() as f64
        };

        let pending_ratio = pending_count as f64 / total;

        let risk = self.weights.gap_density * gap_density
            + self.weights.unresolved_ratio * unresolved_ratio
            + self.weights.avg_complexity * avg_complexity
            + self.weights.pending_ratio * pending_ratio;

        let score = round_to(risk, 3).clamp(0.0, 1.0);

        debug!(
            total_steps,
            gap_count,
            pending_count,
            gap_density,
            unresolved_ratio,
            avg_complexity,
            pending_ratio,
            score,
            "风险分数计算完成"
        );

        score
    }

    /// 风险分数映射到分档
    pub fn risk_band(&self, score: f64) -> RiskBand {
        self.bands.band_of(score)
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::new()
    }
}
