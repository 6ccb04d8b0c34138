// ==========================================
// Fit-Gap 评估系统 - 日志初始化
// ==========================================
// 标准输出保留给评分卡 JSON, 日志一律写标准错误
// 级别由 RUST_LOG 控制, FITGAP_LOG_JSON 切换为结构化输出
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info）
///   例如: RUST_LOG=debug 或 RUST_LOG=fitgap_scoring=trace
/// - FITGAP_LOG_JSON=1: 输出 JSON 格式日志（供日志平台采集）
///
/// # 示例
/// ```no_run
/// use fitgap_scoring::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json = std::env::var("FITGAP_LOG_JSON")
        .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
        .unwrap_or(false);

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// 测试用日志 (debug 级别, 可重复调用)
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
