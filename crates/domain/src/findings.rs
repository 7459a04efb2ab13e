//! 校验结果模型
//!
//! 校验器输出的每一条诊断记录都是一个 [`ValidationError`]：
//! `error` 会阻止导出，`warning` 只做提示。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 每条诊断扣除的质量分
pub const QUALITY_PENALTY_PER_FINDING: u32 = 5;
/// 没有任何诊断时的质量分
pub const MAX_QUALITY_SCORE: u32 = 100;
/// 记录缺少ID时使用的占位符
pub const UNKNOWN_ENTITY_ID: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Client,
    Worker,
    Task,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Client => write!(f, "client"),
            EntityKind::Worker => write!(f, "worker"),
            EntityKind::Task => write!(f, "task"),
        }
    }
}

/// 单条诊断记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub id: String,
    #[serde(rename = "type")]
    pub severity: Severity,
    pub entity: EntityKind,
    pub entity_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new<I, E, M>(
        id: I,
        severity: Severity,
        entity: EntityKind,
        entity_id: E,
        message: M,
    ) -> Self
    where
        I: Into<String>,
        E: AsRef<str>,
        M: Into<String>,
    {
        let entity_id = entity_id.as_ref();
        Self {
            id: id.into(),
            severity,
            entity,
            entity_id: if entity_id.is_empty() {
                UNKNOWN_ENTITY_ID.to_string()
            } else {
                entity_id.to_string()
            },
            field: None,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn error<I: Into<String>, E: AsRef<str>, M: Into<String>>(
        id: I,
        entity: EntityKind,
        entity_id: E,
        message: M,
    ) -> Self {
        Self::new(id, Severity::Error, entity, entity_id, message)
    }

    pub fn warning<I: Into<String>, E: AsRef<str>, M: Into<String>>(
        id: I,
        entity: EntityKind,
        entity_id: E,
        message: M,
    ) -> Self {
        Self::new(id, Severity::Warning, entity, entity_id, message)
    }

    pub fn with_field<S: Into<String>>(mut self, field: S) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_suggestion<S: Into<String>>(mut self, suggestion: S) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

/// 质量分：每条诊断扣5分，最低为0
pub fn quality_score(finding_count: usize) -> u32 {
    let penalty = u32::try_from(finding_count)
        .unwrap_or(u32::MAX)
        .saturating_mul(QUALITY_PENALTY_PER_FINDING);
    MAX_QUALITY_SCORE.saturating_sub(penalty)
}

/// 诊断汇总，供界面展示和导出判断
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub error_count: usize,
    pub warning_count: usize,
    pub total: usize,
    pub quality_score: u32,
    pub export_allowed: bool,
}

impl ValidationSummary {
    pub fn from_findings(findings: &[ValidationError]) -> Self {
        let error_count = findings.iter().filter(|f| f.is_error()).count();
        let warning_count = findings.len() - error_count;
        Self {
            error_count,
            warning_count,
            total: findings.len(),
            quality_score: quality_score(findings.len()),
            export_allowed: error_count == 0,
        }
    }
}
