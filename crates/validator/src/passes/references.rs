use alchemist_domain::columns::REQUESTED_TASK_IDS;
use alchemist_domain::{EntityKind, ValidationError};

use super::{display_id, CheckPass, ValidationInput};
use crate::sink::FindingSink;

/// 客户请求的任务必须存在，诊断归属于发起请求的客户
pub struct TaskReferencePass;

impl CheckPass for TaskReferencePass {
    fn check(&self, input: &ValidationInput<'_>, sink: &mut FindingSink) {
        let known = input.task_ids();

        for client in input.clients {
            let client_id = display_id(&client.id);
            for task_id in &client.requested_task_ids {
                if known.contains(task_id.as_str()) {
                    continue;
                }
                sink.push(
                    ValidationError::error(
                        format!("unknown-task-{client_id}-{task_id}"),
                        EntityKind::Client,
                        client_id,
                        format!("Referenced task {task_id} does not exist"),
                    )
                    .with_field(REQUESTED_TASK_IDS)
                    .with_suggestion("Remove invalid task reference or add the missing task"),
                );
            }
        }
    }

    fn name(&self) -> &str {
        "task_references"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alchemist_testing_utils::{ClientBuilder, TaskBuilder};

    #[test]
    fn test_dangling_reference() {
        let clients = vec![ClientBuilder::new()
            .with_id("C1")
            .with_requested_tasks(&["T1", "T99"])
            .build()];
        let mut tasks = vec![TaskBuilder::new().with_id("T1").build()];

        let mut sink = FindingSink::new();
        TaskReferencePass.check(&ValidationInput::new(&clients, &[], &tasks), &mut sink);
        let findings = sink.into_findings();

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].id, "unknown-task-C1-T99");
        assert_eq!(findings[0].entity, EntityKind::Client);
        assert_eq!(findings[0].entity_id, "C1");
        assert_eq!(findings[0].message, "Referenced task T99 does not exist");

        tasks.push(TaskBuilder::new().with_id("T99").build());
        let mut sink = FindingSink::new();
        TaskReferencePass.check(&ValidationInput::new(&clients, &[], &tasks), &mut sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_no_tasks_at_all() {
        let clients = vec![ClientBuilder::new().with_requested_tasks(&["T1", "T2"]).build()];
        let mut sink = FindingSink::new();
        TaskReferencePass.check(&ValidationInput::new(&clients, &[], &[]), &mut sink);
        assert_eq!(sink.len(), 2);
    }
}
