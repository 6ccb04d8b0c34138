// ==========================================
// Fit-Gap 评估系统 - 领域类型定义
// ==========================================
// 职责: 闭合枚举 (分类/解决方案类型/严重度/签核状态)
// 约定: 数据库与 HTTP 层均使用 SCREAMING_SNAKE_CASE 字符串
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 流程步骤分类 (Step Classification)
// ==========================================
// 工作坊投票的取值范围; 枚举顺序即平票时的排序顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Fit,       // 标准流程直接满足
    Configure, // 需配置
    Gap,       // 存在差距,需解决方案
    Na,        // 不适用
}

impl Classification {
    /// 固定枚举顺序 (FIT, CONFIGURE, GAP, NA)
    pub const ALL: [Classification; 4] = [
        Classification::Fit,
        Classification::Configure,
        Classification::Gap,
        Classification::Na,
    ];

    /// 从字符串解析分类 (大小写敏感,与投票记录一致)
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "FIT" => Some(Classification::Fit),
            "CONFIGURE" => Some(Classification::Configure),
            "GAP" => Some(Classification::Gap),
            "NA" => Some(Classification::Na),
            _ => None,
        }
    }

    /// 转换为数据库存储的字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Classification::Fit => "FIT",
            Classification::Configure => "CONFIGURE",
            Classification::Gap => "GAP",
            Classification::Na => "NA",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 差距解决方案类型 (Gap Resolution Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolutionType {
    Fit,          // 无需处理
    Configure,    // 配置解决
    KeyUserExt,   // 关键用户扩展
    BtpExt,       // BTP 侧扩展
    Isv,          // 第三方方案
    CustomAbap,   // 自开发 ABAP
    AdaptProcess, // 调整业务流程
    OutOfScope,   // 移出范围
}

impl ResolutionType {
    pub const ALL: [ResolutionType; 8] = [
        ResolutionType::Fit,
        ResolutionType::Configure,
        ResolutionType::KeyUserExt,
        ResolutionType::BtpExt,
        ResolutionType::Isv,
        ResolutionType::CustomAbap,
        ResolutionType::AdaptProcess,
        ResolutionType::OutOfScope,
    ];

    /// 从字符串解析解决方案类型
    ///
    /// # 返回
    /// - None: 未知类型 (由调用方决定默认权重)
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "FIT" => Some(ResolutionType::Fit),
            "CONFIGURE" => Some(ResolutionType::Configure),
            "KEY_USER_EXT" => Some(ResolutionType::KeyUserExt),
            "BTP_EXT" => Some(ResolutionType::BtpExt),
            "ISV" => Some(ResolutionType::Isv),
            "CUSTOM_ABAP" => Some(ResolutionType::CustomAbap),
            "ADAPT_PROCESS" => Some(ResolutionType::AdaptProcess),
            "OUT_OF_SCOPE" => Some(ResolutionType::OutOfScope),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            ResolutionType::Fit => "FIT",
            ResolutionType::Configure => "CONFIGURE",
            ResolutionType::KeyUserExt => "KEY_USER_EXT",
            ResolutionType::BtpExt => "BTP_EXT",
            ResolutionType::Isv => "ISV",
            ResolutionType::CustomAbap => "CUSTOM_ABAP",
            ResolutionType::AdaptProcess => "ADAPT_PROCESS",
            ResolutionType::OutOfScope => "OUT_OF_SCOPE",
        }
    }
}

impl fmt::Display for ResolutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// OCM 影响严重度 (OCM Severity)
// ==========================================
// 顺序: Low < Medium < High < Transformational
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Transformational,
}

impl Severity {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "LOW" => Some(Severity::Low),
            "MEDIUM" => Some(Severity::Medium),
            "HIGH" => Some(Severity::High),
            "TRANSFORMATIONAL" => Some(Severity::Transformational),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Transformational => "TRANSFORMATIONAL",
        }
    }

    /// 严重度排名 (未知严重度为 0, 低于 LOW)
    pub fn rank_of(s: &str) -> u8 {
        match Severity::from_str(s) {
            Some(Severity::Low) => 1,
            Some(Severity::Medium) => 2,
            Some(Severity::High) => 3,
            Some(Severity::Transformational) => 4,
            None => 0,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 风险分档 (Risk Band)
// ==========================================
// 由 0~1 风险分数映射, 供看板徽标使用
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskBand {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskBand::Low => write!(f, "LOW"),
            RiskBand::Medium => write!(f, "MEDIUM"),
            RiskBand::High => write!(f, "HIGH"),
            RiskBand::Critical => write!(f, "CRITICAL"),
        }
    }
}

// ==========================================
// 签核状态 (Sign-off Status)
// ==========================================
// 每个评估一个实例, COMPLETED 为终态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignOffStatus {
    ValidationNotStarted, // 未开始校验
    ValidationInProgress, // 校验中
    ValidationComplete,   // 校验完成
    SignOffPending,       // 待签核
    Completed,            // 已签核
    Rejected,             // 已驳回
}

impl SignOffStatus {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "VALIDATION_NOT_STARTED" => Some(SignOffStatus::ValidationNotStarted),
            "VALIDATION_IN_PROGRESS" => Some(SignOffStatus::ValidationInProgress),
            "VALIDATION_COMPLETE" => Some(SignOffStatus::ValidationComplete),
            "SIGN_OFF_PENDING" => Some(SignOffStatus::SignOffPending),
            "COMPLETED" => Some(SignOffStatus::Completed),
            "REJECTED" => Some(SignOffStatus::Rejected),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            SignOffStatus::ValidationNotStarted => "VALIDATION_NOT_STARTED",
            SignOffStatus::ValidationInProgress => "VALIDATION_IN_PROGRESS",
            SignOffStatus::ValidationComplete => "VALIDATION_COMPLETE",
            SignOffStatus::SignOffPending => "SIGN_OFF_PENDING",
            SignOffStatus::Completed => "COMPLETED",
            SignOffStatus::Rejected => "REJECTED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SignOffStatus::Completed)
    }
}

impl fmt::Display for SignOffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 签核动作 (Sign-off Action)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignOffAction {
    StartValidation,
    CompleteValidation,
    RequestSignOff,
    Approve,
    Reject,
    Reopen,
}

impl SignOffAction {
    pub const ALL: [SignOffAction; 6] = [
        SignOffAction::StartValidation,
        SignOffAction::CompleteValidation,
        SignOffAction::RequestSignOff,
        SignOffAction::Approve,
        SignOffAction::Reject,
        SignOffAction::Reopen,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "START_VALIDATION" => Some(SignOffAction::StartValidation),
            "COMPLETE_VALIDATION" => Some(SignOffAction::CompleteValidation),
            "REQUEST_SIGN_OFF" => Some(SignOffAction::RequestSignOff),
            "APPROVE" => Some(SignOffAction::Approve),
            "REJECT" => Some(SignOffAction::Reject),
            "REOPEN" => Some(SignOffAction::Reopen),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            SignOffAction::StartValidation => "START_VALIDATION",
            SignOffAction::CompleteValidation => "COMPLETE_VALIDATION",
            SignOffAction::RequestSignOff => "REQUEST_SIGN_OFF",
            SignOffAction::Approve => "APPROVE",
            SignOffAction::Reject => "REJECT",
            SignOffAction::Reopen => "REOPEN",
        }
    }
}

impl fmt::Display for SignOffAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}
