// ==========================================
// Fit-Gap 评估系统 - 引擎层
// ==========================================
// 职责: 实现评分与流转规则
// 红线: 引擎为纯计算, 不做 I/O, 不持有可变共享状态
// ==========================================

pub mod consensus;
pub mod ocm;
pub mod risk;
pub mod rollup;
pub mod signoff;
pub mod suggest;

// 重导出核心引擎
pub use consensus::VoteTallyEngine;
pub use ocm::OcmEngine;
pub use risk::RiskScorer;
pub use rollup::GapRollupEngine;
pub use signoff::{SignOffEngine, SignOffError};
pub use suggest::GapSuggestEngine;

/// 四舍五入到指定小数位
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
