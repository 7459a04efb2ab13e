use serde::{Deserialize, Serialize};

use alchemist_domain::{Dataset, ValidationError, ValidationSummary};

use crate::validator::validate;

/// 校验报告：诊断列表加汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub findings: Vec<ValidationError>,
    pub summary: ValidationSummary,
}

impl ValidationReport {
    pub fn from_findings(findings: Vec<ValidationError>) -> Self {
        let summary = ValidationSummary::from_findings(&findings);
        Self { findings, summary }
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.findings.iter().filter(|f| f.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationError> {
        self.findings.iter().filter(|f| f.is_warning())
    }

    pub fn has_errors(&self) -> bool {
        self.summary.error_count > 0
    }
}

pub fn validate_dataset(dataset: &Dataset) -> ValidationReport {
    ValidationReport::from_findings(validate(&dataset.clients, &dataset.workers, &dataset.tasks))
}
