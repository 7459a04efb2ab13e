use alchemist_domain::columns::*;
use alchemist_domain::{EntityKind, ValidationError};

use super::{display_id, CheckPass, ValidationInput};
use crate::sink::FindingSink;

/// 必填字段检查
///
/// 空字符串、缺失的数值、空列表都算未填写。数值只判断是否存在，
/// 取值范围交给 [`super::RangePass`]。
pub struct RequiredFieldsPass;

fn missing_field(sink: &mut FindingSink, entity: EntityKind, entity_id: &str, field: &str) {
    let entity_id = display_id(entity_id);
    sink.push(
        ValidationError::error(
            format!("missing-{entity_id}-{field}"),
            entity,
            entity_id,
            format!("Missing required field: {field}"),
        )
        .with_field(field)
        .with_suggestion(format!("Add a value for {field}")),
    );
}

impl CheckPass for RequiredFieldsPass {
    fn check(&self, input: &ValidationInput<'_>, sink: &mut FindingSink) {
        for client in input.clients {
            let missing = [
                (CLIENT_ID, client.id.is_empty()),
                (CLIENT_NAME, client.name.is_empty()),
                (PRIORITY_LEVEL, client.priority_level.is_none()),
            ];
            for (field, _) in missing.iter().filter(|(_, absent)| *absent) {
                missing_field(sink, EntityKind::Client, &client.id, field);
            }
        }

        for worker in input.workers {
            let missing = [
                (WORKER_ID, worker.id.is_empty()),
                (WORKER_NAME, worker.name.is_empty()),
                (SKILLS, worker.skills.is_empty()),
                (AVAILABLE_SLOTS, worker.available_slots.is_missing()),
            ];
            for (field, _) in missing.iter().filter(|(_, absent)| *absent) {
                missing_field(sink, EntityKind::Worker, &worker.id, field);
            }
        }

        for task in input.tasks {
            let missing = [
                (TASK_ID, task.id.is_empty()),
                (TASK_NAME, task.name.is_empty()),
                (DURATION, task.duration.is_none()),
                (REQUIRED_SKILLS, task.required_skills.is_empty()),
            ];
            for (field, _) in missing.iter().filter(|(_, absent)| *absent) {
                missing_field(sink, EntityKind::Task, &task.id, field);
            }
        }
    }

    fn name(&self) -> &str {
        "required_fields"
    }
}
