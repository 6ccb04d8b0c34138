// ==========================================
// Fit-Gap 评估系统 - 命令行评分流程
// ==========================================
// 流程: 加载评分参数 → 读取快照 JSON → 生成评分卡
// 参数来源: db_path 的 config_kv, 未提供时使用默认参数
// ==========================================

use crate::api::ScoringApi;
use crate::config::ConfigManager;
use crate::domain::assessment::{AssessmentScorecard, AssessmentSnapshot};
use anyhow::Context;
use std::path::Path;
use tracing::info;

pub const USAGE: &str = "usage: fitgap-scoring <snapshot.json> [db_path]";

/// 对快照文件评分
///
/// # 参数
/// - snapshot_path: 评估快照 JSON 文件
/// - db_path: 配置库路径 (可选)
pub async fn score_snapshot_file(
    snapshot_path: &Path,
    db_path: Option<&str>,
) -> anyhow::Result<AssessmentScorecard> {
    let api = match db_path {
        Some(path) => {
            info!("使用配置库: {}", path);
            let manager = ConfigManager::new(path)
                .with_context(|| format!("打开配置库失败: {}", path))?;
            ScoringApi::from_reader(&manager).await?
        }
        None => ScoringApi::new(),
    };

    let raw = tokio::fs::read_to_string(snapshot_path)
        .await
        .with_context(|| format!("读取快照失败: {}", snapshot_path.display()))?;
    let snapshot: AssessmentSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("快照 JSON 解析失败: {}", snapshot_path.display()))?;

    Ok(api.score_assessment(&snapshot)?)
}
