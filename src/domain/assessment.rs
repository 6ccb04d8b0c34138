// ==========================================
// Fit-Gap 评估系统 - 评估快照与评分卡
// ==========================================
// 职责: 一次评分的完整输入 (由外部持久层提供) 与完整输出
// ==========================================

use crate::domain::gap::{GapCostRecord, GapPattern, GapRollup, ResolutionSuggestion};
use crate::domain::ocm::{HeatmapCell, OcmImpact};
use crate::domain::types::RiskBand;
use crate::domain::workshop::{ProcessStep, SessionStepTally, SessionSummary, WorkshopVote};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 待推荐的差距描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapDescription {
    pub gap_id: String,
    pub description: String,
}

// ==========================================
// AssessmentSnapshot - 评估快照 (评分输入)
// ==========================================
// 计数字段使用 i64, 以便 API 层显式拒绝负数
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSnapshot {
    pub assessment_id: String,
    pub total_steps: i64,
    pub gap_count: i64,
    pub pending_count: i64,
    /// 步骤目录 (可选); 非空时必须与 total_steps 一致
    #[serde(default)]
    pub steps: Vec<ProcessStep>,
    #[serde(default)]
    pub votes: Vec<WorkshopVote>,
    #[serde(default)]
    pub gaps: Vec<GapCostRecord>,
    #[serde(default)]
    pub ocm_impacts: Vec<OcmImpact>,
    #[serde(default)]
    pub patterns: Vec<GapPattern>,
    #[serde(default)]
    pub open_gaps: Vec<GapDescription>,
}

/// 单个差距的推荐集合
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapSuggestionSet {
    pub gap_id: String,
    pub suggestions: Vec<ResolutionSuggestion>,
}

// ==========================================
// AssessmentScorecard - 评分卡 (评分输出)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentScorecard {
    pub assessment_id: String,
    pub risk_score: f64,
    pub risk_band: RiskBand,
    pub weighted_readiness: f64,
    pub heatmap: Vec<HeatmapCell>,
    pub tallies: Vec<SessionStepTally>,
    /// 按会话首次出现顺序
    pub session_summaries: Vec<SessionSummary>,
    pub rollup: GapRollup,
    pub suggestions: Vec<GapSuggestionSet>,
    pub generated_at: DateTime<Utc>,
}
