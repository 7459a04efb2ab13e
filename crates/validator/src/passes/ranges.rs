use std::ops::RangeInclusive;

use alchemist_domain::columns::{DURATION, PRIORITY_LEVEL};
use alchemist_domain::{EntityKind, ValidationError};

use super::{display_id, CheckPass, ValidationInput};
use crate::sink::FindingSink;

pub const PRIORITY_RANGE: RangeInclusive<i64> = 1..=5;
pub const MIN_DURATION: i64 = 1;

/// 数值范围检查：优先级 1-5，时长至少为 1。缺失的值不检查。
pub struct RangePass;

impl CheckPass for RangePass {
    fn check(&self, input: &ValidationInput<'_>, sink: &mut FindingSink) {
        for client in input.clients {
            let Some(priority) = client.priority_level else {
                continue;
            };
            if !PRIORITY_RANGE.contains(&priority) {
                let client_id = display_id(&client.id);
                sink.push(
                    ValidationError::error(
                        format!("invalid-priority-{client_id}"),
                        EntityKind::Client,
                        client_id,
                        format!("Priority level {priority} is out of range (1-5)"),
                    )
                    .with_field(PRIORITY_LEVEL)
                    .with_suggestion("Set priority level between 1 and 5"),
                );
            }
        }

        for task in input.tasks {
            match task.duration {
                Some(duration) if duration < MIN_DURATION => {
                    let task_id = display_id(&task.id);
                    sink.push(
                        ValidationError::error(
                            format!("invalid-duration-{task_id}"),
                            EntityKind::Task,
                            task_id,
                            format!("Duration {duration} must be at least 1"),
                        )
                        .with_field(DURATION)
                        .with_suggestion("Set duration to 1 or higher"),
                    );
                }
                _ => {}
            }
        }
    }

    fn name(&self) -> &str {
        "ranges"
    }
}
