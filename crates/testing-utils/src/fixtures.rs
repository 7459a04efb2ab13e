//! Ready-made datasets shared by validator, API and CLI tests

use alchemist_domain::{Dataset, Severity, ValidationError};

use crate::builders::{ClientBuilder, DatasetBuilder, TaskBuilder, WorkerBuilder};

/// One client, one worker, one task; produces no findings
pub fn clean_dataset() -> Dataset {
    DatasetBuilder::new()
        .client(
            ClientBuilder::new()
                .with_id("C1")
                .with_name("Acme")
                .with_priority(3)
                .with_requested_tasks(&["T1"])
                .build(),
        )
        .worker(
            WorkerBuilder::new()
                .with_id("W1")
                .with_name("Bob")
                .with_skills(&["sql"])
                .with_slots(&[1, 2, 3])
                .with_max_load(1)
                .build(),
        )
        .task(
            TaskBuilder::new()
                .with_id("T1")
                .with_name("Load")
                .with_duration(2)
                .with_required_skills(&["sql"])
                .build(),
        )
        .build()
}

/// Clean dataset with priority 7 and an extra `python` requirement:
/// one range error plus one coverage warning
pub fn mixed_dataset() -> Dataset {
    let mut dataset = clean_dataset();
    dataset.clients[0].priority_level = Some(7);
    dataset.tasks[0].required_skills = vec!["sql".to_string(), "python".to_string()];
    dataset
}

pub fn count_by_severity(findings: &[ValidationError], severity: Severity) -> usize {
    findings.iter().filter(|f| f.severity == severity).count()
}

/// Findings sorted by id, for order-insensitive comparisons
pub fn sorted_by_id(findings: &[ValidationError]) -> Vec<ValidationError> {
    let mut sorted = findings.to_vec();
    sorted.sort_by(|a, b| a.id.cmp(&b.id));
    sorted
}
