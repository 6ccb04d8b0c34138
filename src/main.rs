// ==========================================
// Fit-Gap 评估系统 - 命令行入口
// ==========================================
// 用法:
//   fitgap-scoring <snapshot.json> [db_path]
//
// 向标准输出打印评分卡 JSON, 日志输出到标准错误。
// ==========================================

use fitgap_scoring::cli::{score_snapshot_file, USAGE};
use fitgap_scoring::logging;
use std::error::Error;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let snapshot_path = PathBuf::from(args.next().ok_or(USAGE)?);
    let db_path = args.next().filter(|s| !s.trim().is_empty());

    tracing::info!("{} v{}", fitgap_scoring::APP_NAME, fitgap_scoring::VERSION);

    let scorecard = score_snapshot_file(&snapshot_path, db_path.as_deref()).await?;
    println!("{}", serde_json::to_string_pretty(&scorecard)?);
    Ok(())
}
