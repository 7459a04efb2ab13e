use std::collections::HashSet;

use alchemist_domain::columns::{CLIENT_ID, TASK_ID, WORKER_ID};
use alchemist_domain::{EntityKind, ValidationError};

use super::{CheckPass, ValidationInput};
use crate::sink::FindingSink;

/// 重复ID检查：第一次出现的记录不报告，之后每次出现报告一次。
/// 没有ID的记录由必填检查负责。
pub struct DuplicateIdPass;

fn check_ids<'a, I>(ids: I, entity: EntityKind, field: &str, label: &str, sink: &mut FindingSink)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids.into_iter().filter(|id| !id.is_empty()) {
        if !seen.insert(id) {
            sink.push(
                ValidationError::error(
                    format!("duplicate-{entity}-{id}"),
                    entity,
                    id,
                    format!("Duplicate {label} ID: {id}"),
                )
                .with_field(field)
                .with_suggestion(format!("Ensure all {label} IDs are unique")),
            );
        }
    }
}

impl CheckPass for DuplicateIdPass {
    fn check(&self, input: &ValidationInput<'_>, sink: &mut FindingSink) {
        check_ids(
            input.clients.iter().map(|c| c.id.as_str()),
            EntityKind::Client,
            CLIENT_ID,
            "Client",
            sink,
        );
        check_ids(
            input.workers.iter().map(|w| w.id.as_str()),
            EntityKind::Worker,
            WORKER_ID,
            "Worker",
            sink,
        );
        check_ids(
            input.tasks.iter().map(|t| t.id.as_str()),
            EntityKind::Task,
            TASK_ID,
            "Task",
            sink,
        );
    }

    fn name(&self) -> &str {
        "duplicate_ids"
    }
}
