// ==========================================
// Fit-Gap 评估系统 - 评分 API
// ==========================================
// 职责: 校验输入后委托各引擎, 供 HTTP 路由层调用
// 架构: API 层 → Engine 层 (纯计算)
// ==========================================

use chrono::Utc;
use std::collections::HashMap;
use tracing::{info, instrument};

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator;
use crate::config::{ScoringConfig, ScoringConfigReader};
use crate::domain::assessment::{AssessmentScorecard, AssessmentSnapshot, GapSuggestionSet};
use crate::domain::gap::{GapCostRecord, GapPattern, GapRollup, ResolutionSuggestion};
use crate::domain::ocm::{HeatmapCell, OcmImpact};
use crate::domain::signoff::SignOffProcess;
use crate::domain::types::{RiskBand, SignOffAction, SignOffStatus};
use crate::domain::workshop::{
    SessionStepTally, SessionSummary, VoteRecord, VoteTally, WorkshopVote,
};
use crate::engine::{
    GapRollupEngine, GapSuggestEngine, OcmEngine, RiskScorer, SignOffEngine, VoteTallyEngine,
};

// ==========================================
// ScoringApi - 评分 API
// ==========================================

/// 评分API
///
/// 构造后不可变, 可在多个请求线程间共享 (Arc<ScoringApi>)
pub struct ScoringApi {
    config: ScoringConfig,
    tally_engine: VoteTallyEngine,
    risk_scorer: RiskScorer,
    ocm_engine: OcmEngine,
    suggest_engine: GapSuggestEngine,
    rollup_engine: GapRollupEngine,
    signoff_engine: SignOffEngine,
}

impl ScoringApi {
    /// 使用默认评分参数创建
    pub fn new() -> Self {
        Self::build(ScoringConfig::default())
    }

    /// 使用自定义评分参数创建 (先校验)
    pub fn with_config(config: ScoringConfig) -> ApiResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// 从配置读取器加载参数并创建
    pub async fn from_reader(reader: &dyn ScoringConfigReader) -> ApiResult<Self> {
        let config = reader.load_scoring_config().await?;
        Self::with_config(config)
    }

    fn build(config: ScoringConfig) -> Self {
        Self {
            tally_engine: VoteTallyEngine::new(),
            risk_scorer: RiskScorer::with_config(&config),
            ocm_engine: OcmEngine::with_config(&config),
            suggest_engine: GapSuggestEngine::with_config(&config),
            rollup_engine: GapRollupEngine::new(),
            signoff_engine: SignOffEngine::new(),
            config,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    // ==========================================
    // 工作坊投票
    // ==========================================

    /// 统计单个步骤的投票
    pub fn compute_vote_tally(
        &self,
        process_step_id: &str,
        votes: &[VoteRecord],
    ) -> ApiResult<VoteTally> {
        if process_step_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("process_step_id不能为空".to_string()));
        }
        Ok(self.tally_engine.compute_vote_tally(process_step_id, votes))
    }

    /// 按 (会话, 步骤) 分组统计, 输出顺序为首次出现顺序
    pub fn tally_workshop_votes(&self, votes: &[WorkshopVote]) -> Vec<SessionStepTally> {
        let mut order: Vec<(String, String)> = Vec::new();
        let mut groups: HashMap<(String, String), Vec<VoteRecord>> = HashMap::new();

        for vote in votes {
            let key = (vote.session_id.clone(), vote.process_step_id.clone());
            groups
                .entry(key.clone())
                .or_insert_with(|| {
                    order.push(key);
                    Vec::new()
                })
                .push(VoteRecord::from(vote));
        }

        order
            .into_iter()
            .map(|(session_id, step_id)| {
                let records = groups
                    .remove(&(session_id.clone(), step_id.clone()))
                    .unwrap_or_default();
                SessionStepTally {
                    tally: self.tally_engine.compute_vote_tally(&step_id, &records),
                    session_id,
                }
            })
            .collect()
    }

    /// 按会话分组汇总共识, 输出顺序为会话首次出现顺序
    pub fn summarize_sessions(&self, tallies: &[SessionStepTally]) -> Vec<SessionSummary> {
        let mut order: Vec<&str> = Vec::new();
        let mut groups: HashMap<&str, Vec<VoteTally>> = HashMap::new();

        for t in tallies {
            groups
                .entry(t.session_id.as_str())
                .or_insert_with(|| {
                    order.push(t.session_id.as_str());
                    Vec::new()
                })
                .push(t.tally.clone());
        }

        order
            .into_iter()
            .map(|session_id| SessionSummary {
                session_id: session_id.to_string(),
                summary: self.tally_engine.summarize_session(
                    groups.get(session_id).map(Vec::as_slice).unwrap_or(&[]),
                ),
            })
            .collect()
    }

    // ==========================================
    // 风险评分
    // ==========================================

    /// 计算风险分数 (负数计数直接拒绝)
    pub fn compute_risk_score(
        &self,
        total_steps: i64,
        gap_count: i64,
        pending_count: i64,
        resolution_types: &[String],
    ) -> ApiResult<f64> {
        let total_steps = validator::to_count("total_steps", total_steps)?;
        let gap_count = validator::to_count("gap_count", gap_count)?;
        let pending_count = validator::to_count("pending_count", pending_count)?;
        Ok(self.risk_scorer.compute_risk_score(
            total_steps,
            gap_count,
            pending_count,
            resolution_types,
        ))
    }

    pub fn risk_band(&self, score: f64) -> RiskBand {
        self.risk_scorer.risk_band(score)
    }

    // ==========================================
    // OCM
    // ==========================================

    pub fn calculate_weighted_readiness(&self, impacts: &[OcmImpact]) -> ApiResult<f64> {
        validator::into_result("OCM影响", validator::check_ocm_impacts(impacts))?;
        Ok(self.ocm_engine.calculate_weighted_readiness(impacts))
    }

    pub fn generate_heatmap_data(&self, impacts: &[OcmImpact]) -> Vec<HeatmapCell> {
        self.ocm_engine.generate_heatmap_data(impacts)
    }

    // ==========================================
    // 差距推荐与成本汇总
    // ==========================================

    pub fn suggest_resolutions(
        &self,
        description: &str,
        patterns: &[GapPattern],
    ) -> Vec<ResolutionSuggestion> {
        self.suggest_engine.suggest_resolutions(description, patterns)
    }

    pub fn calculate_gap_rollups(&self, gaps: &[GapCostRecord]) -> ApiResult<GapRollup> {
        validator::into_result("差距成本", validator::check_gap_costs(gaps))?;
        Ok(self.rollup_engine.calculate_gap_rollups(gaps))
    }

    // ==========================================
    // 签核
    // ==========================================

    /// 执行签核动作 (流程不存在时惰性创建)
    ///
    /// # 参数
    /// - action: 动作字符串 (如 "REQUEST_SIGN_OFF")
    pub fn apply_signoff_action(
        &self,
        existing: Option<SignOffProcess>,
        assessment_id: &str,
        action: &str,
        actor: &str,
        comment: Option<&str>,
    ) -> ApiResult<SignOffProcess> {
        let action = SignOffAction::from_str(action)
            .ok_or_else(|| ApiError::InvalidInput(format!("未知签核动作: {}", action)))?;

        let mut process = self.signoff_engine.ensure_process(existing, assessment_id);
        if process.assessment_id != assessment_id {
            return Err(ApiError::BusinessRuleViolation(format!(
                "签核流程{}不属于评估{}",
                process.process_id, assessment_id
            )));
        }

        self.signoff_engine
            .apply_action(&mut process, action, actor, comment)?;
        Ok(process)
    }

    pub fn allowed_signoff_actions(&self, status: SignOffStatus) -> Vec<SignOffAction> {
        self.signoff_engine.allowed_actions(status)
    }

    // ==========================================
    // 聚合评分
    // ==========================================

    /// 对评估快照运行全部评分组件
    #[instrument(skip(self, snapshot), fields(assessment_id = %snapshot.assessment_id))]
    pub fn score_assessment(&self, snapshot: &AssessmentSnapshot) -> ApiResult<AssessmentScorecard> {
        validator::validate_snapshot(snapshot)?;

        let resolution_types: Vec<&str> = snapshot
            .gaps
            .iter()
            .map(|g| g.resolution_type.as_str())
            .collect();
        let risk_score = self.risk_scorer.compute_risk_score(
            validator::to_count("total_steps", snapshot.total_steps)?,
            validator::to_count("gap_count", snapshot.gap_count)?,
            validator::to_count("pending_count", snapshot.pending_count)?,
            &resolution_types,
        );

        let tallies = self.tally_workshop_votes(&snapshot.votes);
        let session_summaries = self.summarize_sessions(&tallies);

        let suggestions = snapshot
            .open_gaps
            .iter()
            .map(|gap| GapSuggestionSet {
                gap_id: gap.gap_id.clone(),
                suggestions: self
                    .suggest_engine
                    .suggest_resolutions(&gap.description, &snapshot.patterns),
            })
            .collect();

        let scorecard = AssessmentScorecard {
            assessment_id: snapshot.assessment_id.clone(),
            risk_score,
            risk_band: self.risk_scorer.risk_band(risk_score),
            weighted_readiness: self
                .ocm_engine
                .calculate_weighted_readiness(&snapshot.ocm_impacts),
            heatmap: self.ocm_engine.generate_heatmap_data(&snapshot.ocm_impacts),
            tallies,
            session_summaries,
            rollup: self.rollup_engine.calculate_gap_rollups(&snapshot.gaps),
            suggestions,
            generated_at: Utc::now(),
        };

        info!(
            risk_score = scorecard.risk_score,
            risk_band = %scorecard.risk_band,
            weighted_readiness = scorecard.weighted_readiness,
            "评分卡生成完成"
        );
        Ok(scorecard)
    }
}

impl Default for ScoringApi {
    fn default() -> Self {
        Self::new()
    }
}
