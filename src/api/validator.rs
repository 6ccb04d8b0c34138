// ==========================================
// Fit-Gap 评估系统 - 评分输入校验器
// ==========================================
// 职责: 进入引擎前的输入校验
// 策略:
// - 计数 (total_steps/gap_count/pending_count) 不得为负, 不得超出 u32
// - readiness_score 必须有限且在 [0,100]
// - 成本/天数必须为有限数
// - 携带步骤目录时, 目录与 total_steps 及投票步骤一致
// - 空值、未知枚举字符串不属于错误 (由引擎降级处理)
// ==========================================

use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::domain::assessment::AssessmentSnapshot;
use crate::domain::gap::GapCostRecord;
use crate::domain::ocm::OcmImpact;
use crate::domain::workshop::{ProcessStep, WorkshopVote};
use std::collections::HashSet;

/// 计数字段转换为 u32
pub fn to_count(field: &str, value: i64) -> ApiResult<u32> {
    if value < 0 {
        return Err(ApiError::InvalidInput(format!(
            "{}不能为负数, 实际={}",
            field, value
        )));
    }
    u32::try_from(value)
        .map_err(|_| ApiError::InvalidInput(format!("{}超出范围, 实际={}", field, value)))
}

/// 校验 OCM 影响列表, 返回违规项
pub fn check_ocm_impacts(impacts: &[OcmImpact]) -> Vec<ValidationViolation> {
    let mut violations = Vec::new();
    for (i, impact) in impacts.iter().enumerate() {
        if let Some(score) = impact.readiness_score {
            if !score.is_finite() || !(0.0..=100.0).contains(&score) {
                violations.push(ValidationViolation {
                    field: format!("ocmImpacts[{}].readinessScore", i),
                    reason: format!("准备度必须在[0,100]内, 实际={}", score),
                });
            }
        }
    }
    violations
}

/// 校验差距成本列表, 返回违规项
pub fn check_gap_costs(gaps: &[GapCostRecord]) -> Vec<ValidationViolation> {
    let mut violations = Vec::new();
    for (i, gap) in gaps.iter().enumerate() {
        let fields = [
            ("oneTimeCost", gap.one_time_cost),
            ("recurringCost", gap.recurring_cost),
            ("implementationDays", gap.implementation_days),
        ];
        for (name, value) in fields {
            if let Some(v) = value {
                if !v.is_finite() {
                    violations.push(ValidationViolation {
                        field: format!("gaps[{}].{}", i, name),
                        reason: format!("必须为有限数, 实际={}", v),
                    });
                }
            }
        }
    }
    violations
}

/// 校验步骤目录 (目录为空时跳过)
///
/// # 规则
/// - 目录步骤数必须等于 total_steps
/// - 投票引用的步骤必须在目录中
pub fn check_step_catalog(
    steps: &[ProcessStep],
    total_steps: i64,
    votes: &[WorkshopVote],
) -> Vec<ValidationViolation> {
    let mut violations = Vec::new();
    if steps.is_empty() {
        return violations;
    }

    if steps.len() as i64 != total_steps {
        violations.push(ValidationViolation {
            field: "totalSteps".to_string(),
            reason: format!(
                "与步骤目录数量不一致: total_steps={}, 目录={}",
                total_steps,
                steps.len()
            ),
        });
    }

    let known: HashSet<&str> = steps.iter().map(|s| s.id.as_str()).collect();
    for (i, vote) in votes.iter().enumerate() {
        if !known.contains(vote.process_step_id.as_str()) {
            violations.push(ValidationViolation {
                field: format!("votes[{}].processStepId", i),
                reason: format!("步骤不在目录中: {}", vote.process_step_id),
            });
        }
    }
    violations
}

/// 违规列表转换为错误
pub fn into_result(context: &str, violations: Vec<ValidationViolation>) -> ApiResult<()> {
    if violations.is_empty() {
        return Ok(());
    }
    Err(ApiError::ValidationError {
        reason: format!("{}存在{}处违规", context, violations.len()),
        violations,
    })
}

/// 校验完整评估快照
pub fn validate_snapshot(snapshot: &AssessmentSnapshot) -> ApiResult<()> {
    if snapshot.assessment_id.trim().is_empty() {
        return Err(ApiError::InvalidInput("assessment_id不能为空".to_string()));
    }

    to_count("total_steps", snapshot.total_steps)?;
    to_count("gap_count", snapshot.gap_count)?;
    to_count("pending_count", snapshot.pending_count)?;

    let mut violations =
        check_step_catalog(&snapshot.steps, snapshot.total_steps, &snapshot.votes);
    violations.extend(check_ocm_impacts(&snapshot.ocm_impacts));
    violations.extend(check_gap_costs(&snapshot.gaps));
    into_result("评估快照", violations)
}
