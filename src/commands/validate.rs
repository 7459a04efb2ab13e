use anyhow::{Context, Result};
use std::fmt::Write;
use tracing::info;

use alchemist_validator::{validate_dataset, ValidationReport};

use super::load_files;
use crate::cli::{ReportFormat, ValidateArgs};

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    let dataset = load_files(&args.files)?;
    info!(
        "开始校验: {} 个客户, {} 个Worker, {} 个任务",
        dataset.clients.len(),
        dataset.workers.len(),
        dataset.tasks.len()
    );

    Ok(validate_dataset(&dataset))
}

pub fn render_report(report: &ValidationReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => {
            serde_json::to_string_pretty(report).context("序列化校验报告失败")
        }
        ReportFormat::Text => Ok(render_text(report)),
    }
}

fn render_text(report: &ValidationReport) -> String {
    let summary = &report.summary;
    let mut out = String::new();

    for finding in &report.findings {
        let field = finding
            .field
            .as_deref()
            .map(|field| format!(" ({field})"))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "[{}] {} {}{}: {}",
            finding.severity, finding.entity, finding.entity_id, field, finding.message
        );
        if let Some(suggestion) = &finding.suggestion {
            let _ = writeln!(out, "    建议: {suggestion}");
        }
    }

    let _ = writeln!(
        out,
        "校验完成: {} 个错误, {} 个警告, 质量分 {}{}",
        summary.error_count,
        summary.warning_count,
        summary.quality_score,
        if summary.export_allowed {
            ""
        } else {
            "，修复错误后才能导出"
        }
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alchemist_testing_utils::{clean_dataset, mixed_dataset};

    #[test]
    fn test_render_clean_text() {
        let report = validate_dataset(&clean_dataset());
        let text = render_report(&report, ReportFormat::Text).unwrap();
        assert_eq!(text, "校验完成: 0 个错误, 0 个警告, 质量分 100\n");
    }

    #[test]
    fn test_render_mixed_text() {
        let report = validate_dataset(&mixed_dataset());
        let text = render_report(&report, ReportFormat::Text).unwrap();

        assert!(text.starts_with("[error] client C1 (PriorityLevel): "));
        assert!(text.contains("[warning] task T1 (RequiredSkills): "));
        assert!(text.contains("    建议: "));
        assert!(text.ends_with("质量分 90，修复错误后才能导出\n"));
    }

    #[test]
    fn test_render_json() {
        let report = validate_dataset(&mixed_dataset());
        let json = render_report(&report, ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["errorCount"], 1);
        assert_eq!(value["findings"][0]["id"], "invalid-priority-C1");
    }
}
