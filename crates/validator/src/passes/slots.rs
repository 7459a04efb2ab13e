use alchemist_domain::columns::AVAILABLE_SLOTS;
use alchemist_domain::{AvailableSlots, EntityKind, ValidationError};

use super::{display_id, CheckPass, ValidationInput};
use crate::sink::FindingSink;

/// `AvailableSlots` 格式检查
///
/// 字段本身不是列表时报告一次格式错误，否则逐个报告非数字元素，
/// 两者不会同时出现。空值由必填检查负责。
pub struct SlotShapePass;

impl CheckPass for SlotShapePass {
    fn check(&self, input: &ValidationInput<'_>, sink: &mut FindingSink) {
        for worker in input.workers {
            let worker_id = display_id(&worker.id);
            match &worker.available_slots {
                slots if slots.is_missing() => {}
                AvailableSlots::Malformed(_) => {
                    sink.push(
                        ValidationError::error(
                            format!("malformed-slots-{worker_id}"),
                            EntityKind::Worker,
                            worker_id,
                            "AvailableSlots must be an array of numbers",
                        )
                        .with_field(AVAILABLE_SLOTS)
                        .with_suggestion("Format as [1,2,3] or use comma-separated values"),
                    );
                }
                AvailableSlots::List(slots) => {
                    for slot in slots.iter().filter(|slot| !slot.is_numeric()) {
                        let value = slot.display_value();
                        sink.push(
                            ValidationError::error(
                                format!("invalid-slot-{worker_id}-{value}"),
                                EntityKind::Worker,
                                worker_id,
                                format!("Invalid slot value: {value} (must be numeric)"),
                            )
                            .with_field(AVAILABLE_SLOTS)
                            .with_suggestion("Use only numeric values for available slots"),
                        );
                    }
                }
            }
        }
    }

    fn name(&self) -> &str {
        "slot_shape"
    }
}
