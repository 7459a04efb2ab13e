use chrono::Utc;
use tracing::{info, warn};

use alchemist_domain::{
    Dataset, ExportBundle, ExportMetadata, PriorityWeights, Rule, RulesConfig,
};
use alchemist_errors::{AlchemistError, AlchemistResult};

use crate::report::validate_dataset;

/// 生成导出包
///
/// 导出前重新校验，只要存在 `error` 就拒绝导出；`warning` 不影响导出。
/// 规则只保留启用的部分。
pub fn prepare_export(
    dataset: &Dataset,
    rules: &[Rule],
    weights: PriorityWeights,
) -> AlchemistResult<ExportBundle> {
    let report = validate_dataset(dataset);

    if report.has_errors() {
        warn!("导出被拒绝: 存在 {} 个校验错误", report.summary.error_count);
        return Err(AlchemistError::export_blocked(report.summary.error_count));
    }

    if !weights.is_balanced() {
        warn!("优先级权重总和为 {}，不等于100", weights.total());
    }

    let active_rules: Vec<Rule> = rules.iter().filter(|rule| rule.active).cloned().collect();
    let metadata = ExportMetadata {
        total_clients: dataset.clients.len(),
        total_workers: dataset.workers.len(),
        total_tasks: dataset.tasks.len(),
        validation_errors: report.findings.len(),
    };

    info!(
        "生成导出包: {} 条记录, {} 条启用规则, {} 个警告",
        dataset.record_count(),
        active_rules.len(),
        report.summary.warning_count
    );

    Ok(ExportBundle {
        clients: dataset.clients.clone(),
        workers: dataset.workers.clone(),
        tasks: dataset.tasks.clone(),
        rules_config: RulesConfig {
            rules: active_rules,
            priority_weights: weights,
            export_date: Utc::now(),
            metadata,
        },
        validation_report: report.findings,
        summary: report.summary,
    })
}
