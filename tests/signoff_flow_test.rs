// ==========================================
// 签核流程集成测试
// ==========================================
// 测试目标: 通过 ScoringApi 驱动签核状态机
// 覆盖范围: 完整流程、驳回与重开、非法动作、流程归属
// ==========================================

use fitgap_scoring::api::{ApiError, ScoringApi};
use fitgap_scoring::domain::{SignOffAction, SignOffProcess, SignOffStatus};
use fitgap_scoring::engine::SignOffEngine;

const ASSESSMENT: &str = "ASMT-2026-001";

fn step(
    api: &ScoringApi,
    process: Option<SignOffProcess>,
    action: &str,
    actor: &str,
    comment: Option<&str>,
) -> SignOffProcess {
    api.apply_signoff_action(process, ASSESSMENT, action, actor, comment)
        .unwrap()
}

// ==========================================
// 测试用例 1: 完整流程
// ==========================================

#[test]
fn test_full_flow_with_rejection_and_reopen() {
    println!("\n=== 测试：签核完整流程 ===");

    let api = ScoringApi::new();
    let p = step(&api, None, "START_VALIDATION", "consultant", None);
    assert_eq!(p.status, SignOffStatus::ValidationInProgress);
    assert_eq!(p.assessment_id, ASSESSMENT);
    let process_id = p.process_id.clone();

    let p = step(&api, Some(p), "COMPLETE_VALIDATION", "consultant", None);
    let p = step(&api, Some(p), "REQUEST_SIGN_OFF", "consultant", None);
    assert_eq!(p.status, SignOffStatus::SignOffPending);

    let p = step(&api, Some(p), "REJECT", "client", Some("缺少数据迁移范围"));
    assert_eq!(p.status, SignOffStatus::Rejected);
    assert_eq!(
        p.last_transition().and_then(|t| t.comment.as_deref()),
        Some("缺少数据迁移范围")
    );

    let p = step(&api, Some(p), "REOPEN", "consultant", None);
    let p = step(&api, Some(p), "COMPLETE_VALIDATION", "consultant", None);
    let p = step(&api, Some(p), "REQUEST_SIGN_OFF", "consultant", None);
    let p = step(&api, Some(p), "APPROVE", "client", Some("同意"));

    assert_eq!(p.status, SignOffStatus::Completed);
    assert_eq!(p.process_id, process_id);
    assert_eq!(p.history.len(), 8);

    // 历史首尾相接
    for pair in p.history.windows(2) {
        assert_eq!(pair[0].to, pair[1].from);
    }
    assert!(p.updated_at >= p.created_at);
}

// ==========================================
// 测试用例 2: 非法动作
// ==========================================

#[test]
fn test_terminal_state_accepts_nothing() {
    let api = ScoringApi::new();
    assert!(api.allowed_signoff_actions(SignOffStatus::Completed).is_empty());

    let mut p = None;
    for action in ["START_VALIDATION", "COMPLETE_VALIDATION", "REQUEST_SIGN_OFF", "APPROVE"] {
        p = Some(step(&api, p, action, "consultant", None));
    }

    let result = api.apply_signoff_action(p, ASSESSMENT, "REOPEN", "consultant", None);
    assert!(matches!(
        result,
        Err(ApiError::InvalidStateTransition { .. })
    ));
}

#[test]
fn test_unknown_action_rejected() {
    let api = ScoringApi::new();
    let result = api.apply_signoff_action(None, ASSESSMENT, "ESCALATE", "client", None);
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}

#[test]
fn test_reject_without_comment_is_business_rule_violation() {
    let api = ScoringApi::new();
    let p = step(&api, None, "START_VALIDATION", "consultant", None);
    let result = api.apply_signoff_action(Some(p), ASSESSMENT, "REJECT", "client", Some("   "));
    assert!(matches!(result, Err(ApiError::BusinessRuleViolation(_))));
}

#[test]
fn test_process_of_other_assessment_rejected() {
    let api = ScoringApi::new();
    let p = step(&api, None, "START_VALIDATION", "consultant", None);
    let result = api.apply_signoff_action(
        Some(p),
        "ASMT-OTHER",
        "COMPLETE_VALIDATION",
        "consultant",
        None,
    );
    assert!(matches!(result, Err(ApiError::BusinessRuleViolation(_))));
}

// ==========================================
// 测试用例 3: 流转表
// ==========================================

#[test]
fn test_every_non_terminal_status_has_an_exit() {
    let statuses = [
        SignOffStatus::ValidationNotStarted,
        SignOffStatus::ValidationInProgress,
        SignOffStatus::ValidationComplete,
        SignOffStatus::SignOffPending,
        SignOffStatus::Rejected,
    ];
    for status in statuses {
        let exits: Vec<SignOffAction> = SignOffAction::ALL
            .iter()
            .copied()
            .filter(|&a| SignOffEngine::next_status(status, a).is_some())
            .collect();
        assert!(!exits.is_empty(), "{} 无可用动作", status);
    }
}
