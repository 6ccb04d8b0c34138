// ==========================================
// Fit-Gap 评估系统 - 投票统计与共识判定引擎
// ==========================================
// 职责: 工作坊分类投票的统计与共识判定
// 输入: 步骤ID + 投票列表 (user_id, classification)
// 输出: VoteTally
// ==========================================
// 规则:
// - 无法识别的分类不计入各分类计数, 但计入 total_votes
//   (因此有效分类百分比之和可能小于100, 下游依赖该口径)
// - 共识要求严格多数: 领先分类票数 * 2 > total_votes
// ==========================================

use crate::domain::types::Classification;
use crate::domain::workshop::{SessionConsensusSummary, TallyEntry, VoteRecord, VoteTally};
use crate::engine::round_to;
use tracing::debug;

// ==========================================
// VoteTallyEngine - 投票统计引擎
// ==========================================
pub struct VoteTallyEngine {
    // 无状态引擎
}

impl VoteTallyEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 统计单个步骤的投票
    ///
    /// # 参数
    /// - `process_step_id`: 流程步骤ID
    /// - `votes`: 该 (会话, 步骤) 下的全部投票
    ///
    /// # 返回
    /// VoteTally, entries 按票数降序 (平票保持 FIT, CONFIGURE, GAP, NA 顺序)
    pub fn compute_vote_tally(&self, process_step_id: &str, votes: &[VoteRecord]) -> VoteTally {
        let total_votes = votes.len() as u32;

        let mut entries: Vec<TallyEntry> = Classification::ALL
            .iter()
            .map(|&classification| TallyEntry {
                classification,
                count: 0,
                percentage: 0,
                voters: Vec::new(),
            })
            .collect();

        let mut ignored = 0usize;
        for vote in votes {
            // entries 此时仍为枚举顺序, 位置即下标
            let slot = Classification::from_str(&vote.classification)
                .and_then(|c| Classification::ALL.iter().position(|&x| x == c));
            match slot {
                Some(idx) => {
                    let entry = &mut entries[idx];
                    entry.count += 1;
                    entry.voters.push(vote.user_id.clone());
                }
                None => ignored += 1,
            }
        }

        if ignored > 0 {
            debug!(
                process_step_id,
                ignored, total_votes, "存在无法识别的分类投票, 已忽略计数"
            );
        }

        for entry in entries.iter_mut() {
            entry.percentage = percentage_of(entry.count, total_votes);
        }

        // sort_by 为稳定排序, 平票保持枚举顺序
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        let (consensus, consensus_percentage) = match entries.first() {
            Some(top) if total_votes > 0 => {
                let majority = top.count * 2 > total_votes;
                (majority.then_some(top.classification), top.percentage)
            }
            _ => (None, 0),
        };

        VoteTally {
            process_step_id: process_step_id.to_string(),
            total_votes,
            entries,
            has_consensus: consensus.is_some(),
            consensus,
            consensus_percentage,
        }
    }

    /// 汇总会话内各步骤的共识情况
    ///
    /// 零票步骤不计入 steps_voted
    pub fn summarize_session(&self, tallies: &[VoteTally]) -> SessionConsensusSummary {
        let mut summary = SessionConsensusSummary {
            steps_voted: 0,
            steps_with_consensus: 0,
            steps_without_consensus: 0,
            consensus_rate: 0.0,
            fit_count: 0,
            configure_count: 0,
            gap_count: 0,
            na_count: 0,
        };

        for tally in tallies.iter().filter(|t| t.total_votes > 0) {
            summary.steps_voted += 1;
            match tally.consensus {
                Some(Classification::Fit) => summary.fit_count += 1,
                Some(Classification::Configure) => summary.configure_count += 1,
                Some(Classification::Gap) => summary.gap_count += 1,
                Some(Classification::Na) => summary.na_count += 1,
                None => {
                    summary.steps_without_consensus += 1;
                    continue;
                }
            }
            summary.steps_with_consensus += 1;
        }

        if summary.steps_voted > 0 {
            let rate =
                summary.steps_with_consensus as f64 * 100.0 / summary.steps_voted as f64;
            summary.consensus_rate = round_to(rate, 2);
        }

        summary
    }
}

impl Default for VoteTallyEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// 整数百分比 (四舍五入), 分母为0时返回0
fn percentage_of(count: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 * 100.0 / total as f64).round() as u32
}
