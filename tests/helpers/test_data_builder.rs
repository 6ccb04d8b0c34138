// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use fitgap_scoring::domain::{
    AssessmentSnapshot, GapCostRecord, GapDescription, GapPattern, OcmImpact, ProcessStep,
    VoteRecord, WorkshopVote,
};

// ==========================================
// 步骤目录与投票
// ==========================================

/// STEP-010, STEP-020, ... 共 n 个步骤
pub fn step_catalog(n: usize) -> Vec<ProcessStep> {
    (1..=n)
        .map(|i| ProcessStep {
            id: format!("STEP-{:03}", i * 10),
            scope_item_id: "J45".to_string(),
            sequence: (i * 10) as i32,
            step_type: "MANUAL".to_string(),
        })
        .collect()
}

pub fn votes(pairs: &[(&str, &str)]) -> Vec<VoteRecord> {
    pairs.iter().map(|(u, c)| VoteRecord::new(u, c)).collect()
}

pub fn workshop_vote(session: &str, step: &str, user: &str, classification: &str) -> WorkshopVote {
    WorkshopVote {
        session_id: session.to_string(),
        process_step_id: step.to_string(),
        user_id: user.to_string(),
        classification: classification.to_string(),
    }
}

// ==========================================
// OCM
// ==========================================

pub fn ocm_impact(
    severity: &str,
    readiness_score: Option<f64>,
    role: &str,
    area: Option<&str>,
) -> OcmImpact {
    OcmImpact {
        severity: severity.to_string(),
        readiness_score,
        impacted_role: role.to_string(),
        functional_area: area.map(|s| s.to_string()),
    }
}

// ==========================================
// GapCostRecord 构建器
// ==========================================

pub struct GapBuilder {
    record: GapCostRecord,
}

impl GapBuilder {
    pub fn new(resolution_type: &str) -> Self {
        Self {
            record: GapCostRecord {
                resolution_type: resolution_type.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn scope_item(mut self, id: &str) -> Self {
        self.record.scope_item_id = Some(id.to_string());
        self
    }

    pub fn priority(mut self, priority: &str) -> Self {
        self.record.priority = Some(priority.to_string());
        self
    }

    pub fn risk_category(mut self, category: &str) -> Self {
        self.record.risk_category = Some(category.to_string());
        self
    }

    pub fn costs(mut self, one_time: f64, recurring: f64) -> Self {
        self.record.one_time_cost = Some(one_time);
        self.record.recurring_cost = Some(recurring);
        self
    }

    pub fn days(mut self, days: f64) -> Self {
        self.record.implementation_days = Some(days);
        self
    }

    pub fn build(self) -> GapCostRecord {
        self.record
    }
}

// ==========================================
// 模式库
// ==========================================

pub fn pattern(id: &str, description: &str, resolution_type: &str, effort_days: f64) -> GapPattern {
    GapPattern {
        id: id.to_string(),
        description: description.to_string(),
        resolution_type: resolution_type.to_string(),
        effort_days,
        risk_level: "MEDIUM".to_string(),
    }
}

pub fn pattern_library() -> Vec<GapPattern> {
    vec![
        pattern("PAT-001", "Multi level approval workflow for purchase requisitions", "BTP_EXT", 15.0),
        pattern("PAT-002", "Custom field on supplier invoice header", "KEY_USER_EXT", 3.0),
        pattern("PAT-003", "Legacy warehouse interface with nightly batch files", "CUSTOM_ABAP", 25.0),
        pattern("PAT-004", "Country specific tax reporting", "ISV", 10.0),
    ]
}

// ==========================================
// 评估快照
// ==========================================

/// 一个小型但完整的评估快照
pub fn sample_snapshot() -> AssessmentSnapshot {
    AssessmentSnapshot {
        assessment_id: "ASMT-2026-001".to_string(),
        total_steps: 10,
        gap_count: 4,
        pending_count: 1,
        steps: Vec::new(),
        votes: vec![
            workshop_vote("WS-1", "STEP-010", "u1", "FIT"),
            workshop_vote("WS-1", "STEP-010", "u2", "FIT"),
            workshop_vote("WS-1", "STEP-010", "u3", "GAP"),
            workshop_vote("WS-1", "STEP-020", "u1", "GAP"),
            workshop_vote("WS-1", "STEP-020", "u2", "CONFIGURE"),
        ],
        gaps: vec![
            GapBuilder::new("CUSTOM_ABAP")
                .scope_item("J45")
                .priority("HIGH")
                .risk_category("TECHNICAL")
                .costs(40000.0, 2000.0)
                .days(30.0)
                .build(),
            GapBuilder::new("CONFIGURE")
                .scope_item("J60")
                .priority("LOW")
                .costs(1500.0, 0.0)
                .days(2.0)
                .build(),
        ],
        ocm_impacts: vec![
            ocm_impact("HIGH", Some(80.0), "AP Clerk", Some("Finance")),
            ocm_impact("LOW", Some(40.0), "AP Clerk", Some("Finance")),
            ocm_impact("TRANSFORMATIONAL", None, "Buyer", None),
        ],
        patterns: pattern_library(),
        open_gaps: vec![
            GapDescription {
                gap_id: "GAP-1".to_string(),
                description: "Approval workflow for purchase requisitions with multi level release"
                    .to_string(),
            },
            GapDescription {
                gap_id: "GAP-2".to_string(),
                description: "zzz qq".to_string(),
            },
        ],
    }
}
