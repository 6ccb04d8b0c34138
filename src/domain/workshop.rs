// ==========================================
// Fit-Gap 评估系统 - 工作坊投票领域模型
// ==========================================
// 职责: 流程步骤、投票记录、投票统计结果
// 红线: 投票统计是全部投票的纯函数, 无隐藏状态
// ==========================================

use crate::domain::types::Classification;
use serde::{Deserialize, Serialize};

// ==========================================
// ProcessStep - 流程步骤 (目录参考数据)
// ==========================================
// 快照携带步骤目录时, 用于核对 total_steps 与投票引用的步骤
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStep {
    pub id: String,
    pub scope_item_id: String,
    pub sequence: i32,
    pub step_type: String,
}

// ==========================================
// WorkshopVote - 工作坊投票 (会话+步骤+用户唯一)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopVote {
    pub session_id: String,
    pub process_step_id: String,
    pub user_id: String,
    /// 原始分类字符串 (可能含无法识别的值)
    pub classification: String,
}

/// 投票统计的输入项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRecord {
    pub user_id: String,
    pub classification: String,
}

impl VoteRecord {
    pub fn new(user_id: &str, classification: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            classification: classification.to_string(),
        }
    }
}

impl From<&WorkshopVote> for VoteRecord {
    fn from(vote: &WorkshopVote) -> Self {
        Self {
            user_id: vote.user_id.clone(),
            classification: vote.classification.clone(),
        }
    }
}

/// 单个分类的统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TallyEntry {
    pub classification: Classification,
    pub count: u32,
    /// 整数百分比 (四舍五入)
    pub percentage: u32,
    /// 投票人, 保持输入顺序
    pub voters: Vec<String>,
}

/// 步骤投票统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteTally {
    pub process_step_id: String,
    /// 原始投票数 (含无法识别的分类)
    pub total_votes: u32,
    /// 按票数降序, 平票按枚举顺序
    pub entries: Vec<TallyEntry>,
    pub consensus: Option<Classification>,
    /// 领先分类的百分比 (未达成共识时同样返回)
    pub consensus_percentage: u32,
    pub has_consensus: bool,
}

impl VoteTally {
    /// 查找某个分类的统计项
    pub fn entry(&self, classification: Classification) -> Option<&TallyEntry> {
        self.entries
            .iter()
            .find(|e| e.classification == classification)
    }
}

/// 工作坊会话共识汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConsensusSummary {
    pub steps_voted: u32,
    pub steps_with_consensus: u32,
    pub steps_without_consensus: u32,
    /// 共识率 (百分比, 保留2位小数)
    pub consensus_rate: f64,
    pub fit_count: u32,
    pub configure_count: u32,
    pub gap_count: u32,
    pub na_count: u32,
}

/// 单个会话的共识汇总 (评分卡按会话输出, 不跨会话合并)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub session_id: String,
    #[serde(flatten)]
    pub summary: SessionConsensusSummary,
}

/// 带会话标识的步骤统计 (评分卡按 (会话, 步骤) 输出)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStepTally {
    pub session_id: String,
    #[serde(flatten)]
    pub tally: VoteTally,
}
