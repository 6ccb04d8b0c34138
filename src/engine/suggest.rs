// ==========================================
// Fit-Gap 评估系统 - 差距解决方案自动推荐引擎
// ==========================================
// 职责: 依据差距描述与已知模式的文本相似度推荐解决方案
// 算法: 分词 + Jaccard 相似度
// ==========================================
// 分词规则:
// - 转小写
// - 去除非字母数字字符 (空白保留作分隔)
// - 丢弃长度 <= 2 的 token
// ==========================================

use crate::config::scoring_config::SuggestConfig;
use crate::config::ScoringConfig;
use crate::domain::gap::{GapPattern, ResolutionSuggestion};
use std::collections::HashSet;
use tracing::debug;

// ==========================================
// GapSuggestEngine - 差距推荐引擎
// ==========================================
pub struct GapSuggestEngine {
    config: SuggestConfig,
}

impl GapSuggestEngine {
    pub fn new() -> Self {
        Self::with_config(&ScoringConfig::default())
    }

    pub fn with_config(config: &ScoringConfig) -> Self {
        Self {
            config: config.suggest.clone(),
        }
    }

    /// 推荐解决方案
    ///
    /// # 参数
    /// - `description`: 差距自由文本描述
    /// - `patterns`: 已知模式库
    ///
    /// # 返回
    /// 相似度不低于 min_score 的模式, 按相似度降序, 最多 max_results 条;
    /// 描述分词为空时返回空列表
    pub fn suggest_resolutions(
        &self,
        description: &str,
        patterns: &[GapPattern],
    ) -> Vec<ResolutionSuggestion> {
        let gap_tokens = self.tokenize(description);
        if gap_tokens.is_empty() {
            debug!("差距描述分词为空, 不做推荐");
            return Vec::new();
        }

        let mut suggestions: Vec<ResolutionSuggestion> = patterns
            .iter()
            .filter_map(|pattern| {
                let score = jaccard(&gap_tokens, &self.tokenize(&pattern.description));
                (score >= self.config.min_score).then(|| ResolutionSuggestion {
                    pattern_id: pattern.id.clone(),
                    description: pattern.description.clone(),
                    resolution_type: pattern.resolution_type.clone(),
                    effort_days: pattern.effort_days,
                    risk_level: pattern.risk_level.clone(),
                    score,
                })
            })
            .collect();

        // 稳定排序: 同分保持模式库顺序
        suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
        suggestions.truncate(self.config.max_results);

        debug!(
            patterns = patterns.len(),
            matched = suggestions.len(),
            "差距推荐完成"
        );
        suggestions
    }

    /// 分词为 token 集合
    pub fn tokenize(&self, text: &str) -> HashSet<String> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect();

        cleaned
            .split_whitespace()
            .filter(|t| t.chars().count() >= self.config.min_token_len)
            .map(|t| t.to_string())
            .collect()
    }
}

impl Default for GapSuggestEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Jaccard 相似度 |A∩B| / |A∪B|, 两者皆空时为0
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}
