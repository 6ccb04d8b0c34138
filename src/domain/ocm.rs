// ==========================================
// Fit-Gap 评估系统 - OCM (组织变革管理) 领域模型
// ==========================================

use serde::{Deserialize, Serialize};

/// 功能域为空时热力图使用的占位名
pub const UNASSIGNED_AREA: &str = "Unassigned";

// ==========================================
// OcmImpact - 组织变革影响
// ==========================================
// 签核前可修改; severity 为原始字符串, 未知值按默认权重处理
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcmImpact {
    pub severity: String,
    /// 0~100, 未评估时为 None
    #[serde(default)]
    pub readiness_score: Option<f64>,
    pub impacted_role: String,
    #[serde(default)]
    pub functional_area: Option<String>,
}

/// 热力图单元格 (角色 × 功能域)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub impacted_role: String,
    pub functional_area: String,
    pub count: u32,
    pub max_severity: String,
}
