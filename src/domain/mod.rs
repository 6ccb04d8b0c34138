// ==========================================
// Fit-Gap 评估系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod assessment;
pub mod gap;
pub mod ocm;
pub mod signoff;
pub mod types;
pub mod workshop;

// 重导出核心类型
pub use assessment::{AssessmentScorecard, AssessmentSnapshot, GapDescription, GapSuggestionSet};
pub use gap::{
    CountedCostBucket, GapCostRecord, GapPattern, GapRollup, ResolutionSuggestion,
    ResolutionTypeBucket, RollupTotals,
};
pub use ocm::{HeatmapCell, OcmImpact, UNASSIGNED_AREA};
pub use signoff::{SignOffProcess, SignOffTransition};
pub use types::{Classification, ResolutionType, RiskBand, Severity, SignOffAction, SignOffStatus};
pub use workshop::{
    ProcessStep, SessionConsensusSummary, SessionStepTally, SessionSummary, TallyEntry, VoteRecord,
    VoteTally, WorkshopVote,
};
