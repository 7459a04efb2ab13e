use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::findings::{ValidationError, ValidationSummary};
use crate::models::{Client, Task, Worker};
use crate::rules::{PriorityWeights, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub total_clients: usize,
    pub total_workers: usize,
    pub total_tasks: usize,
    /// 导出时仍然存在的诊断数（只可能是warning）
    pub validation_errors: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesConfig {
    /// 只包含启用的规则
    pub rules: Vec<Rule>,
    pub priority_weights: PriorityWeights,
    pub export_date: DateTime<Utc>,
    pub metadata: ExportMetadata,
}

/// 导出包：清洗后的三类数据加规则配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub clients: Vec<Client>,
    pub workers: Vec<Worker>,
    pub tasks: Vec<Task>,
    pub rules_config: RulesConfig,
    pub validation_report: Vec<ValidationError>,
    pub summary: ValidationSummary,
}
