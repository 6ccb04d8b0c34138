// ==========================================
// Fit-Gap 评估系统 - 签核流程领域模型
// ==========================================
// 职责: 签核流程实例与状态流转记录
// 红线: 流转记录只追加, 不修改
// ==========================================

use crate::domain::types::{SignOffAction, SignOffStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// SignOffProcess - 签核流程 (每个评估一个, 惰性创建)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignOffProcess {
    pub process_id: String,
    pub assessment_id: String,
    pub status: SignOffStatus,
    pub history: Vec<SignOffTransition>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 一次状态流转
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignOffTransition {
    pub from: SignOffStatus,
    pub to: SignOffStatus,
    pub action: SignOffAction,
    pub actor: String,
    pub comment: Option<String>,
    pub at: DateTime<Utc>,
}

impl SignOffProcess {
    /// 最近一次流转
    pub fn last_transition(&self) -> Option<&SignOffTransition> {
        self.history.last()
    }
}
