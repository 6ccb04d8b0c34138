// ==========================================
// ScoringApi 端到端测试
// ==========================================
// 场景: 一个完整评估快照 → 评分卡
// 覆盖: 风险、准备度、热力图、投票、汇总、推荐、JSON 结构
// ==========================================

mod helpers;

use fitgap_scoring::api::{ApiError, ScoringApi};
use fitgap_scoring::domain::{AssessmentSnapshot, Classification, RiskBand};
use fitgap_scoring::logging;
use helpers::mock_config::MockConfigReader;
use helpers::test_data_builder::{sample_snapshot, step_catalog, workshop_vote, GapBuilder};

const EPS: f64 = 1e-9;

// ==========================================
// 测试用例 1: 完整评分卡
// ==========================================

#[test]
fn test_score_sample_assessment() {
    logging::init_test();
    println!("\n=== 测试：完整评分卡 ===");

    let api = ScoringApi::new();
    let card = api.score_assessment(&sample_snapshot()).unwrap();

    assert_eq!(card.assessment_id, "ASMT-2026-001");

    // 风险
    assert!((card.risk_score - 0.43).abs() < EPS);
    assert_eq!(card.risk_band, RiskBand::Medium);

    // OCM: (80*3 + 40*1) / 4
    assert_eq!(card.weighted_readiness, 70.0);
    assert_eq!(card.heatmap.len(), 2);
    assert_eq!(card.heatmap[0].impacted_role, "AP Clerk");
    assert_eq!(card.heatmap[0].count, 2);
    assert_eq!(card.heatmap[0].max_severity, "HIGH");
    assert_eq!(card.heatmap[1].functional_area, "Unassigned");

    // 投票
    assert_eq!(card.tallies.len(), 2);
    let step_010 = &card.tallies[0].tally;
    assert_eq!(step_010.process_step_id, "STEP-010");
    assert_eq!(step_010.consensus, Some(Classification::Fit));
    assert_eq!(step_010.consensus_percentage, 67);

    let step_020 = &card.tallies[1].tally;
    assert!(!step_020.has_consensus);
    assert_eq!(step_020.entries[0].classification, Classification::Configure);
    assert_eq!(step_020.entries[1].classification, Classification::Gap);

    assert_eq!(card.session_summaries.len(), 1);
    assert_eq!(card.session_summaries[0].session_id, "WS-1");
    let summary = &card.session_summaries[0].summary;
    assert_eq!(summary.steps_voted, 2);
    assert_eq!(summary.steps_with_consensus, 1);
    assert_eq!(summary.consensus_rate, 50.0);
    assert_eq!(summary.fit_count, 1);

    // 成本汇总
    assert_eq!(card.rollup.totals.gap_count, 2);
    assert_eq!(card.rollup.totals.one_time_cost, 41500.0);
    assert_eq!(card.rollup.totals.recurring_cost, 2000.0);
    assert_eq!(card.rollup.totals.implementation_days, 32.0);
    assert_eq!(card.rollup.by_risk_category.len(), 1);
    assert_eq!(card.rollup.by_priority["HIGH"].count, 1);

    // 推荐
    assert_eq!(card.suggestions.len(), 2);
    assert_eq!(card.suggestions[0].gap_id, "GAP-1");
    let gap_1 = &card.suggestions[0].suggestions;
    assert_eq!(gap_1.len(), 1);
    assert_eq!(gap_1[0].pattern_id, "PAT-001");
    assert!((gap_1[0].score - 7.0 / 9.0).abs() < EPS);
    assert!(card.suggestions[1].suggestions.is_empty());
}

// ==========================================
// 测试用例 2: JSON 契约
// ==========================================

#[test]
fn test_scorecard_json_field_names() {
    let card = ScoringApi::new()
        .score_assessment(&sample_snapshot())
        .unwrap();
    let json = serde_json::to_value(&card).unwrap();

    assert_eq!(json["assessmentId"], "ASMT-2026-001");
    assert_eq!(json["riskBand"], "MEDIUM");
    assert!(json["generatedAt"].is_string());
    assert_eq!(json["tallies"][0]["sessionId"], "WS-1");
    assert_eq!(json["tallies"][0]["processStepId"], "STEP-010");
    assert_eq!(json["sessionSummaries"][0]["sessionId"], "WS-1");
    assert_eq!(json["sessionSummaries"][0]["stepsVoted"], 2);

    // 两类汇总的形状不同
    let by_type = &json["rollup"]["byResolutionType"]["CUSTOM_ABAP"];
    assert_eq!(by_type["days"], 30.0);
    assert!(by_type.get("count").is_none());
    let by_priority = &json["rollup"]["byPriority"]["LOW"];
    assert_eq!(by_priority["count"], 1);
    assert!(by_priority.get("days").is_none());
}

#[test]
fn test_snapshot_from_json_with_defaults() {
    let raw = r#"{
        "assessmentId": "ASMT-X",
        "totalSteps": 5,
        "gapCount": 0,
        "pendingCount": 5
    }"#;
    let snapshot: AssessmentSnapshot = serde_json::from_str(raw).unwrap();
    let card = ScoringApi::new().score_assessment(&snapshot).unwrap();

    // 0.1 * 5/5
    assert!((card.risk_score - 0.1).abs() < EPS);
    assert_eq!(card.risk_band, RiskBand::Low);
    assert!(card.tallies.is_empty());
    assert!(card.session_summaries.is_empty());
    assert_eq!(card.weighted_readiness, 0.0);
    assert_eq!(card.rollup.totals.gap_count, 0);
}

#[test]
fn test_sessions_are_summarized_separately() {
    let mut snapshot = sample_snapshot();
    snapshot.votes = vec![
        workshop_vote("WS-1", "STEP-010", "u1", "FIT"),
        workshop_vote("WS-2", "STEP-010", "u2", "GAP"),
        workshop_vote("WS-2", "STEP-020", "u2", "GAP"),
    ];
    let card = ScoringApi::new().score_assessment(&snapshot).unwrap();

    // 同一步骤在两个会话中各自统计
    assert_eq!(card.tallies.len(), 3);
    assert_eq!(card.session_summaries.len(), 2);

    let ws1 = &card.session_summaries[0];
    assert_eq!(ws1.session_id, "WS-1");
    assert_eq!(ws1.summary.steps_voted, 1);
    assert_eq!(ws1.summary.fit_count, 1);
    assert_eq!(ws1.summary.gap_count, 0);
    assert_eq!(ws1.summary.consensus_rate, 100.0);

    let ws2 = &card.session_summaries[1];
    assert_eq!(ws2.session_id, "WS-2");
    assert_eq!(ws2.summary.steps_voted, 2);
    assert_eq!(ws2.summary.fit_count, 0);
    assert_eq!(ws2.summary.gap_count, 2);
}

// ==========================================
// 测试用例 3: 输入校验
// ==========================================

#[test]
fn test_negative_counts_rejected() {
    let mut snapshot = sample_snapshot();
    snapshot.pending_count = -1;
    assert!(matches!(
        ScoringApi::new().score_assessment(&snapshot),
        Err(ApiError::InvalidInput(_))
    ));
}

#[test]
fn test_blank_assessment_id_rejected() {
    let mut snapshot = sample_snapshot();
    snapshot.assessment_id = "  ".to_string();
    assert!(ScoringApi::new().score_assessment(&snapshot).is_err());
}

#[test]
fn test_non_finite_cost_reports_field_path() {
    let mut snapshot = sample_snapshot();
    snapshot
        .gaps
        .push(GapBuilder::new("ISV").costs(f64::NAN, 0.0).build());

    match ScoringApi::new().score_assessment(&snapshot) {
        Err(ApiError::ValidationError { violations, .. }) => {
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].field, "gaps[2].oneTimeCost");
        }
        other => panic!("预期 ValidationError, 实际 {:?}", other),
    }
}

#[test]
fn test_step_catalog_checked_against_counts_and_votes() {
    let mut snapshot = sample_snapshot();
    snapshot.steps = step_catalog(10);
    assert!(ScoringApi::new().score_assessment(&snapshot).is_ok());

    snapshot.steps.pop();
    snapshot.votes.push(workshop_vote("WS-1", "STEP-999", "u9", "FIT"));
    match ScoringApi::new().score_assessment(&snapshot) {
        Err(ApiError::ValidationError { violations, .. }) => {
            let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
            assert_eq!(fields, vec!["totalSteps", "votes[5].processStepId"]);
        }
        other => panic!("预期 ValidationError, 实际 {:?}", other),
    }
}

#[test]
fn test_counts_larger_than_total_are_clamped() {
    let mut snapshot = sample_snapshot();
    snapshot.gap_count = 50;
    snapshot.pending_count = 50;
    let card = ScoringApi::new().score_assessment(&snapshot).unwrap();
    assert!(card.risk_score <= 1.0);
    assert_eq!(card.risk_band, RiskBand::Critical);
}

// ==========================================
// 测试用例 4: 自定义参数
// ==========================================

#[tokio::test]
async fn test_custom_config_changes_scorecard() {
    let api = ScoringApi::from_reader(&MockConfigReader::density_only())
        .await
        .unwrap();
    let card = api.score_assessment(&sample_snapshot()).unwrap();

    // 只看差距密度: 4/10
    assert!((card.risk_score - 0.4).abs() < EPS);
    assert_eq!(card.risk_band, RiskBand::Medium);
}
