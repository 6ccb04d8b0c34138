// ==========================================
// Fit-Gap 评估系统 - 配置管理器
// ==========================================
// 职责: 评分参数加载、覆写、快照
// 存储: config_kv 表 (key-value + scope)
// ==========================================

use crate::config::error::ConfigError;
use crate::config::scoring_config::ScoringConfig;
use crate::config::scoring_config_trait::ScoringConfigReader;
use crate::db::{configure_sqlite_connection, ensure_config_schema, open_sqlite_connection};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// 配置键
pub mod config_keys {
    /// 评分参数 (JSON)
    pub const SCORING_PROFILE: &str = "scoring/profile";
}

const GLOBAL_SCOPE: &str = "global";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径 (不存在时自动创建 config_kv 表)
    pub fn new(db_path: &str) -> Result<Self, ConfigError> {
        let conn = open_sqlite_connection(db_path)?;
        ensure_config_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    ///
    /// 说明：为保证连接行为一致，会对传入连接再次应用统一 PRAGMA（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, ConfigError> {
        {
            let guard = conn
                .lock()
                .map_err(|e| ConfigError::LockError(e.to_string()))?;
            configure_sqlite_connection(&guard)?;
            ensure_config_schema(&guard)?;
        }

        Ok(Self { conn })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, ConfigError> {
        self.conn
            .lock()
            .map_err(|e| ConfigError::LockError(e.to_string()))
    }

    /// 读取 global scope 的配置值
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    pub fn get_global_config_value(&self, key: &str) -> Result<Option<String>, ConfigError> {
        let conn = self.lock()?;
        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE scope_id = ?1 AND key = ?2",
                params![GLOBAL_SCOPE, key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// 写入 global scope 的配置值 (UPSERT)
    pub fn set_global_config_value(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES (?1, ?2, ?3)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?3, updated_at = datetime('now')",
            params![GLOBAL_SCOPE, key, value],
        )?;
        debug!(key, "配置已写入");
        Ok(())
    }

    /// 读取评分参数
    ///
    /// 未配置时返回默认参数; 已配置但不合法时返回错误 (不静默回退)
    pub fn get_scoring_config(&self) -> Result<ScoringConfig, ConfigError> {
        let raw = match self.get_global_config_value(config_keys::SCORING_PROFILE)? {
            Some(v) => v,
            None => {
                debug!("未找到评分参数, 使用默认值");
                return Ok(ScoringConfig::default());
            }
        };

        let config: ScoringConfig = serde_json::from_str(&raw)?;
        if let Err(e) = config.validate() {
            warn!(error = %e, "评分参数校验失败");
            return Err(e);
        }
        Ok(config)
    }

    /// 保存评分参数 (先校验)
    pub fn save_scoring_config(&self, config: &ScoringConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let raw = serde_json::to_string(config)?;
        self.set_global_config_value(config_keys::SCORING_PROFILE, &raw)?;
        info!("评分参数已更新");
        Ok(())
    }

    /// 获取所有 global 配置的快照（JSON格式）
    ///
    /// # 用途
    /// - 评分卡归档时记录所用参数, 保证结果可复现
    pub fn get_config_snapshot(&self) -> Result<String, ConfigError> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare("SELECT key, value FROM config_kv WHERE scope_id = ?1 ORDER BY key")?;

        let rows = stmt.query_map(params![GLOBAL_SCOPE], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut config_map: BTreeMap<String, String> = BTreeMap::new();
        for row in rows {
            let (key, value) = row?;
            config_map.insert(key, value);
        }

        Ok(serde_json::to_string(&json!(config_map))?)
    }
}

#[async_trait]
impl ScoringConfigReader for ConfigManager {
    async fn load_scoring_config(&self) -> Result<ScoringConfig, ConfigError> {
        self.get_scoring_config()
    }
}
