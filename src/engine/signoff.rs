// ==========================================
// Fit-Gap 评估系统 - 签核状态机
// ==========================================
// 职责: 评估签核流程的状态流转校验与记录
// ==========================================
// 状态流转:
//   VALIDATION_NOT_STARTED --START_VALIDATION--> VALIDATION_IN_PROGRESS
//   VALIDATION_IN_PROGRESS --COMPLETE_VALIDATION--> VALIDATION_COMPLETE
//   VALIDATION_COMPLETE --REQUEST_SIGN_OFF--> SIGN_OFF_PENDING
//   SIGN_OFF_PENDING --APPROVE--> COMPLETED (终态)
//   VALIDATION_IN_PROGRESS / VALIDATION_COMPLETE / SIGN_OFF_PENDING --REJECT--> REJECTED
//   REJECTED --REOPEN--> VALIDATION_IN_PROGRESS
// 红线: 非法流转不修改流程; REJECT 必须附带意见
// ==========================================

use crate::domain::signoff::{SignOffProcess, SignOffTransition};
use crate::domain::types::{SignOffAction, SignOffStatus};
use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

/// 签核状态机错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignOffError {
    #[error("无效的状态转换: status={status} action={action}")]
    InvalidTransition {
        status: SignOffStatus,
        action: SignOffAction,
    },

    #[error("驳回必须填写意见")]
    MissingRejectComment,

    #[error("操作人不能为空")]
    MissingActor,
}

// ==========================================
// SignOffEngine - 签核状态机
// ==========================================
pub struct SignOffEngine {
    // 无状态引擎, 流程实例由调用方持久化
}

impl SignOffEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 获取或惰性创建签核流程
    pub fn ensure_process(
        &self,
        existing: Option<SignOffProcess>,
        assessment_id: &str,
    ) -> SignOffProcess {
        if let Some(process) = existing {
            return process;
        }

        let now = Utc::now();
        info!(assessment_id, "创建签核流程");
        SignOffProcess {
            process_id: Uuid::new_v4().to_string(),
            assessment_id: assessment_id.to_string(),
            status: SignOffStatus::ValidationNotStarted,
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 纯流转规则: 给定状态与动作, 返回目标状态
    pub fn next_status(status: SignOffStatus, action: SignOffAction) -> Option<SignOffStatus> {
        use SignOffAction as A;
        use SignOffStatus as S;

        match (status, action) {
            (S::ValidationNotStarted, A::StartValidation) => Some(S::ValidationInProgress),
            (S::ValidationInProgress, A::CompleteValidation) => Some(S::ValidationComplete),
            (S::ValidationComplete, A::RequestSignOff) => Some(S::SignOffPending),
            (S::SignOffPending, A::Approve) => Some(S::Completed),
            (S::ValidationInProgress | S::ValidationComplete | S::SignOffPending, A::Reject) => {
                Some(S::Rejected)
            }
            (S::Rejected, A::Reopen) => Some(S::ValidationInProgress),
            _ => None,
        }
    }

    /// 当前状态下允许的动作
    pub fn allowed_actions(&self, status: SignOffStatus) -> Vec<SignOffAction> {
        SignOffAction::ALL
            .iter()
            .copied()
            .filter(|&a| Self::next_status(status, a).is_some())
            .collect()
    }

    /// 执行签核动作
    ///
    /// 成功时追加流转记录并返回新状态; 失败时流程保持不变
    pub fn apply_action(
        &self,
        process: &mut SignOffProcess,
        action: SignOffAction,
        actor: &str,
        comment: Option<&str>,
    ) -> Result<SignOffStatus, SignOffError> {
        if actor.trim().is_empty() {
            return Err(SignOffError::MissingActor);
        }

        let from = process.status;
        let Some(to) = Self::next_status(from, action) else {
            warn!(
                process_id = %process.process_id,
                status = %from,
                action = %action,
                "签核流转被拒绝"
            );
            return Err(SignOffError::InvalidTransition {
                status: from,
                action,
            });
        };

        let comment = comment
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        if action == SignOffAction::Reject && comment.is_none() {
            return Err(SignOffError::MissingRejectComment);
        }

        let now = Utc::now();
        process.history.push(SignOffTransition {
            from,
            to,
            action,
            actor: actor.to_string(),
            comment,
            at: now,
        });
        process.status = to;
        process.updated_at = now;

        info!(
            process_id = %process.process_id,
            from = %from,
            to = %to,
            actor,
            "签核状态已更新"
        );
        Ok(to)
    }
}

impl Default for SignOffEngine {
    fn default() -> Self {
        Self::new()
    }
}
