//! 八个独立的检查步骤
//!
//! 每个步骤只读取输入集合并向 [`FindingSink`] 追加诊断，
//! 彼此之间不依赖对方的结果。

use std::collections::HashSet;

use alchemist_domain::{Client, Task, Worker, UNKNOWN_ENTITY_ID};

use crate::sink::FindingSink;

mod attributes;
mod coverage;
mod duplicates;
mod overload;
mod ranges;
mod references;
mod required;
mod slots;

pub use attributes::AttributeJsonPass;
pub use coverage::SkillCoveragePass;
pub use duplicates::DuplicateIdPass;
pub use overload::WorkerOverloadPass;
pub use ranges::RangePass;
pub use references::TaskReferencePass;
pub use required::RequiredFieldsPass;
pub use slots::SlotShapePass;

/// 一次校验的输入
#[derive(Debug, Clone, Copy)]
pub struct ValidationInput<'a> {
    pub clients: &'a [Client],
    pub workers: &'a [Worker],
    pub tasks: &'a [Task],
}

impl<'a> ValidationInput<'a> {
    pub fn new(clients: &'a [Client], workers: &'a [Worker], tasks: &'a [Task]) -> Self {
        Self {
            clients,
            workers,
            tasks,
        }
    }

    pub fn task_ids(&self) -> HashSet<&'a str> {
        self.tasks.iter().map(|task| task.id.as_str()).collect()
    }

    /// 所有Worker技能的并集
    pub fn worker_skills(&self) -> HashSet<&'a str> {
        self.workers
            .iter()
            .flat_map(|worker| worker.skills.iter().map(String::as_str))
            .collect()
    }
}

/// 诊断ID和entityId中使用的记录ID，缺失时为占位符
pub(crate) fn display_id(id: &str) -> &str {
    if id.is_empty() {
        UNKNOWN_ENTITY_ID
    } else {
        id
    }
}

pub trait CheckPass: Send + Sync {
    fn check(&self, input: &ValidationInput<'_>, sink: &mut FindingSink);

    fn name(&self) -> &str;
}

/// 固定顺序的默认检查流水线
pub fn default_passes() -> Vec<Box<dyn CheckPass>> {
    vec![
        Box::new(RequiredFieldsPass),
        Box::new(DuplicateIdPass),
        Box::new(SlotShapePass),
        Box::new(RangePass),
        Box::new(AttributeJsonPass),
        Box::new(TaskReferencePass),
        Box::new(SkillCoveragePass),
        Box::new(WorkerOverloadPass),
    ]
}
