// ==========================================
// Fit-Gap 评估系统 - 评分参数
// ==========================================
// 职责: 风险/复杂度/严重度权重与推荐阈值
// 存储: config_kv (scope_id='global', key='scoring/profile', JSON)
// 默认值即评分契约, 覆写前必须通过 validate()
// ==========================================

use crate::config::error::ConfigError;
use crate::domain::types::{ResolutionType, RiskBand, Severity};
use serde::{Deserialize, Serialize};

// ==========================================
// ScoringConfig - 评分参数全集
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub risk_weights: RiskWeights,
    pub complexity_weights: ComplexityWeights,
    pub severity_weights: SeverityWeights,
    pub suggest: SuggestConfig,
    pub risk_bands: RiskBandThresholds,
}

/// 风险分数各分量权重
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskWeights {
    pub gap_density: f64,
    pub unresolved_ratio: f64,
    pub avg_complexity: f64,
    pub pending_ratio: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            gap_density: 0.4,
            unresolved_ratio: 0.3,
            avg_complexity: 0.2,
            pending_ratio: 0.1,
        }
    }
}

/// 解决方案类型复杂度 (0~1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexityWeights {
    pub custom_abap: f64,
    pub btp_ext: f64,
    pub isv: f64,
    pub key_user_ext: f64,
    pub adapt_process: f64,
    pub configure: f64,
    pub out_of_scope: f64,
    pub fit: f64,
    /// 未知类型
    pub unknown: f64,
}

impl Default for ComplexityWeights {
    fn default() -> Self {
        Self {
            custom_abap: 1.0,
            btp_ext: 0.7,
            isv: 0.5,
            key_user_ext: 0.3,
            adapt_process: 0.2,
            configure: 0.1,
            out_of_scope: 0.0,
            fit: 0.0,
            unknown: 0.5,
        }
    }
}

impl ComplexityWeights {
    /// 查表, 未知类型返回 unknown 权重
    pub fn weight_of(&self, resolution_type: &str) -> f64 {
        ResolutionType::from_str(resolution_type)
            .map(|t| self.weight_for(t))
            .unwrap_or(self.unknown)
    }

    pub fn weight_for(&self, resolution_type: ResolutionType) -> f64 {
        match resolution_type {
            ResolutionType::CustomAbap => self.custom_abap,
            ResolutionType::BtpExt => self.btp_ext,
            ResolutionType::Isv => self.isv,
            ResolutionType::KeyUserExt => self.key_user_ext,
            ResolutionType::AdaptProcess => self.adapt_process,
            ResolutionType::Configure => self.configure,
            ResolutionType::OutOfScope => self.out_of_scope,
            ResolutionType::Fit => self.fit,
        }
    }

    /// (配置键, 权重), 覆盖全部已知类型与 unknown
    fn all(&self) -> Vec<(String, f64)> {
        ResolutionType::ALL
            .iter()
            .map(|&t| (t.to_db_str().to_lowercase(), self.weight_for(t)))
            .chain(std::iter::once(("unknown".to_string(), self.unknown)))
            .collect()
    }
}

/// OCM 严重度权重
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityWeights {
    pub transformational: f64,
    pub high: f64,
    pub medium: f64,
    pub low: f64,
    pub unknown: f64,
}

impl Default for SeverityWeights {
    fn default() -> Self {
        Self {
            transformational: 4.0,
            high: 3.0,
            medium: 2.0,
            low: 1.0,
            unknown: 1.0,
        }
    }
}

impl SeverityWeights {
    pub fn weight_of(&self, severity: &str) -> f64 {
        match Severity::from_str(severity) {
            Some(Severity::Transformational) => self.transformational,
            Some(Severity::High) => self.high,
            Some(Severity::Medium) => self.medium,
            Some(Severity::Low) => self.low,
            None => self.unknown,
        }
    }
}

/// 差距自动推荐参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// 低于该相似度的模式被丢弃
    pub min_score: f64,
    pub max_results: usize,
    /// 分词后保留的最短 token 长度 (字符数)
    pub min_token_len: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            min_score: 0.15,
            max_results: 3,
            min_token_len: 3,
        }
    }
}

/// 风险分档阈值 (下界, 含)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskBandThresholds {
    pub medium: f64,
    pub high: f64,
    pub critical: f64,
}

impl Default for RiskBandThresholds {
    fn default() -> Self {
        Self {
            medium: 0.25,
            high: 0.5,
            critical: 0.75,
        }
    }
}

impl RiskBandThresholds {
    pub fn band_of(&self, score: f64) -> RiskBand {
        if score >= self.critical {
            RiskBand::Critical
        } else if score >= self.high {
            RiskBand::High
        } else if score >= self.medium {
            RiskBand::Medium
        } else {
            RiskBand::Low
        }
    }
}

// ==========================================
// 参数校验
// ==========================================

fn check_weight(key: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            reason: format!("权重必须为非负有限数, 实际={}", value),
        });
    }
    Ok(())
}

impl ScoringConfig {
    /// 校验参数合法性
    ///
    /// # 规则
    /// - 所有权重非负且有限
    /// - 复杂度权重不超过 1 (保证风险分数可解释)
    /// - min_score 在 [0,1], max_results >= 1
    /// - 分档阈值单调不减且在 [0,1]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rw = &self.risk_weights;
        check_weight("risk_weights.gap_density", rw.gap_density)?;
        check_weight("risk_weights.unresolved_ratio", rw.unresolved_ratio)?;
        check_weight("risk_weights.avg_complexity", rw.avg_complexity)?;
        check_weight("risk_weights.pending_ratio", rw.pending_ratio)?;

        for (name, value) in self.complexity_weights.all() {
            let key = format!("complexity_weights.{}", name);
            check_weight(&key, value)?;
            if value > 1.0 {
                return Err(ConfigError::InvalidValue {
                    key,
                    reason: format!("复杂度权重不能超过1, 实际={}", value),
                });
            }
        }

        let sw = &self.severity_weights;
        check_weight("severity_weights.transformational", sw.transformational)?;
        check_weight("severity_weights.high", sw.high)?;
        check_weight("severity_weights.medium", sw.medium)?;
        check_weight("severity_weights.low", sw.low)?;
        check_weight("severity_weights.unknown", sw.unknown)?;

        if !(0.0..=1.0).contains(&self.suggest.min_score) {
            return Err(ConfigError::InvalidValue {
                key: "suggest.min_score".to_string(),
                reason: format!("必须在[0,1]内, 实际={}", self.suggest.min_score),
            });
        }
        if self.suggest.max_results == 0 {
            return Err(ConfigError::InvalidValue {
                key: "suggest.max_results".to_string(),
                reason: "至少为1".to_string(),
            });
        }

        let rb = &self.risk_bands;
        let ordered = 0.0 <= rb.medium && rb.medium <= rb.high && rb.high <= rb.critical;
        if !ordered || rb.critical > 1.0 {
            return Err(ConfigError::InvalidValue {
                key: "risk_bands".to_string(),
                reason: format!(
                    "阈值须满足 0<=medium<=high<=critical<=1, 实际=({}, {}, {})",
                    rb.medium, rb.high, rb.critical
                ),
            });
        }

        Ok(())
    }
}
