// ==========================================
// Fit-Gap 评估系统 - OCM 准备度与热力图引擎
// ==========================================
// 职责:
// 1) 严重度加权的组织准备度 (0~100)
// 2) 角色 × 功能域 影响热力图
// ==========================================

use crate::config::scoring_config::SeverityWeights;
use crate::config::ScoringConfig;
use crate::domain::ocm::{HeatmapCell, OcmImpact, UNASSIGNED_AREA};
use crate::domain::types::Severity;
use crate::engine::round_to;
use std::collections::HashMap;
use tracing::debug;

// ==========================================
// OcmEngine - OCM 聚合引擎
// ==========================================
pub struct OcmEngine {
    severity_weights: SeverityWeights,
}

impl OcmEngine {
    pub fn new() -> Self {
        Self::with_config(&ScoringConfig::default())
    }

    pub fn with_config(config: &ScoringConfig) -> Self {
        Self {
            severity_weights: config.severity_weights.clone(),
        }
    }

    /// 严重度加权准备度
    ///
    /// # 规则
    /// - 权重: TRANSFORMATIONAL 4, HIGH 3, MEDIUM 2, LOW 1, 未知 1
    /// - readiness_score 为空的影响不参与分子与分母
    /// - 无有效输入时返回 0
    ///
    /// # 返回
    /// 保留2位小数的加权平均
    pub fn calculate_weighted_readiness(&self, impacts: &[OcmImpact]) -> f64 {
        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;

        for impact in impacts {
            let Some(score) = impact.readiness_score else {
                continue;
            };
            let weight = self.severity_weights.weight_of(&impact.severity);
            weighted_sum += score * weight;
            weight_total += weight;
        }

        if weight_total == 0.0 {
            return 0.0;
        }

        round_to(weighted_sum / weight_total, 2)
    }

    /// 生成热力图数据
    ///
    /// 按 (impacted_role, functional_area) 分组, 空功能域归入 "Unassigned";
    /// 单元格按首次出现顺序输出, max_severity 仅在严格更高时替换
    pub fn generate_heatmap_data(&self, impacts: &[OcmImpact]) -> Vec<HeatmapCell> {
        let mut cells: Vec<HeatmapCell> = Vec::new();
        let mut index: HashMap<(String, String), usize> = HashMap::new();

        for impact in impacts {
            let area = impact
                .functional_area
                .clone()
                .unwrap_or_else(|| UNASSIGNED_AREA.to_string());
            let key = (impact.impacted_role.clone(), area);

            match index.get(&key) {
                Some(&idx) => {
                    let cell = &mut cells[idx];
                    cell.count += 1;
                    if Severity::rank_of(&impact.severity) > Severity::rank_of(&cell.max_severity)
                    {
                        cell.max_severity = impact.severity.clone();
                    }
                }
                None => {
                    index.insert(key.clone(), cells.len());
                    cells.push(HeatmapCell {
                        impacted_role: key.0,
                        functional_area: key.1,
                        count: 1,
                        max_severity: impact.severity.clone(),
                    });
                }
            }
        }

        debug!(impacts = impacts.len(), cells = cells.len(), "热力图生成完成");
        cells
    }
}

impl Default for OcmEngine {
    fn default() -> Self {
        Self::new()
    }
}
