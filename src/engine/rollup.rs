// ==========================================
// Fit-Gap 评估系统 - 成本/工作量汇总引擎
// ==========================================
// 职责: 差距解决方案的一次性成本、经常性成本、实施天数汇总
// 输出: 总计 + 按方案类型/风险类别/优先级三种分组
// ==========================================
// 说明:
// - 空值按 0 处理
// - 风险类别/优先级为空的记录不进入对应分组, 但计入总计
// ==========================================

use crate::domain::gap::{CountedCostBucket, GapCostRecord, GapRollup};
use std::collections::BTreeMap;
use tracing::debug;

// ==========================================
// GapRollupEngine - 成本汇总引擎
// ==========================================
pub struct GapRollupEngine {
    // 无状态引擎
}

impl GapRollupEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 汇总差距成本
    pub fn calculate_gap_rollups(&self, gaps: &[GapCostRecord]) -> GapRollup {
        let mut rollup = GapRollup::default();

        for gap in gaps {
            let one_time = gap.one_time_cost.unwrap_or(0.0);
            let recurring = gap.recurring_cost.unwrap_or(0.0);
            let days = gap.implementation_days.unwrap_or(0.0);

            rollup.totals.one_time_cost += one_time;
            rollup.totals.recurring_cost += recurring;
            rollup.totals.implementation_days += days;
            rollup.totals.gap_count += 1;

            let by_type = rollup
                .by_resolution_type
                .entry(gap.resolution_type.clone())
                .or_default();
            by_type.one_time_cost += one_time;
            by_type.recurring_cost += recurring;
            by_type.days += days;

            if let Some(category) = &gap.risk_category {
                accumulate(&mut rollup.by_risk_category, category, one_time, recurring);
            }
            if let Some(priority) = &gap.priority {
                accumulate(&mut rollup.by_priority, priority, one_time, recurring);
            }
        }

        debug!(
            gaps = gaps.len(),
            resolution_types = rollup.by_resolution_type.len(),
            one_time_cost = rollup.totals.one_time_cost,
            "成本汇总完成"
        );
        rollup
    }
}

impl Default for GapRollupEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn accumulate(
    buckets: &mut BTreeMap<String, CountedCostBucket>,
    key: &str,
    one_time: f64,
    recurring: f64,
) {
    let bucket = buckets.entry(key.to_string()).or_default();
    bucket.one_time_cost += one_time;
    bucket.recurring_cost += recurring;
    bucket.count += 1;
}
