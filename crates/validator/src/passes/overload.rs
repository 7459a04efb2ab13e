use alchemist_domain::columns::MAX_LOAD_PER_PHASE;
use alchemist_domain::{EntityKind, ValidationError};

use super::{display_id, CheckPass, ValidationInput};
use crate::sink::FindingSink;

/// 负载启发式检查：可用时间段数量少于单阶段最大负载时给出警告
pub struct WorkerOverloadPass;

impl CheckPass for WorkerOverloadPass {
    fn check(&self, input: &ValidationInput<'_>, sink: &mut FindingSink) {
        for worker in input.workers {
            let Some(slots) = worker.available_slots.as_list() else {
                continue;
            };
            let max_load = match worker.max_load_per_phase {
                Some(max_load) if max_load > 0 => max_load,
                _ => continue,
            };
            if slots.is_empty() {
                continue;
            }

            let slot_count = slots.len();
            if i64::try_from(slot_count).unwrap_or(i64::MAX) < max_load {
                let worker_id = display_id(&worker.id);
                sink.push(
                    ValidationError::warning(
                        format!("overload-{worker_id}"),
                        EntityKind::Worker,
                        worker_id,
                        format!("Max load ({max_load}) exceeds available slots ({slot_count})"),
                    )
                    .with_field(MAX_LOAD_PER_PHASE)
                    .with_suggestion("Reduce max load per phase or increase available slots"),
                );
            }
        }
    }

    fn name(&self) -> &str {
        "worker_overload"
    }
}
