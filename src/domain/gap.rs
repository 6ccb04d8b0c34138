// ==========================================
// Fit-Gap 评估系统 - 差距解决领域模型
// ==========================================
// 职责: 差距成本记录、已知方案模式、推荐结果、成本汇总
// 说明: 按解决方案类型的汇总带 days 字段, 按风险类别/优先级的汇总带 count 字段,
//       两种形状保持不一致 (下游看板依赖该结构)
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// GapCostRecord - 差距解决方案成本记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapCostRecord {
    #[serde(default)]
    pub scope_item_id: Option<String>,
    pub resolution_type: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub risk_category: Option<String>,
    #[serde(default)]
    pub one_time_cost: Option<f64>,
    #[serde(default)]
    pub recurring_cost: Option<f64>,
    #[serde(default)]
    pub implementation_days: Option<f64>,
}

// ==========================================
// GapPattern - 已知差距模式 (自动推荐的知识库)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapPattern {
    pub id: String,
    pub description: String,
    pub resolution_type: String,
    pub effort_days: f64,
    pub risk_level: String,
}

/// 推荐结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionSuggestion {
    pub pattern_id: String,
    pub description: String,
    pub resolution_type: String,
    pub effort_days: f64,
    pub risk_level: String,
    /// Jaccard 相似度 (0~1)
    pub score: f64,
}

// ==========================================
// 成本汇总结构
// ==========================================

/// 总计
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollupTotals {
    pub one_time_cost: f64,
    pub recurring_cost: f64,
    pub implementation_days: f64,
    pub gap_count: u32,
}

/// 按解决方案类型的汇总项 (带 days)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionTypeBucket {
    pub one_time_cost: f64,
    pub recurring_cost: f64,
    pub days: f64,
}

/// 按风险类别/优先级的汇总项 (带 count)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountedCostBucket {
    pub one_time_cost: f64,
    pub recurring_cost: f64,
    pub count: u32,
}

/// 成本/工作量汇总
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapRollup {
    pub totals: RollupTotals,
    pub by_resolution_type: BTreeMap<String, ResolutionTypeBucket>,
    pub by_risk_category: BTreeMap<String, CountedCostBucket>,
    pub by_priority: BTreeMap<String, CountedCostBucket>,
}
