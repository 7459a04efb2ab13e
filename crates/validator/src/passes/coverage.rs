use alchemist_domain::columns::REQUIRED_SKILLS;
use alchemist_domain::{EntityKind, ValidationError};

use super::{display_id, CheckPass, ValidationInput};
use crate::sink::FindingSink;

/// 技能覆盖检查（汇总层面）
///
/// 只判断是否至少有一个Worker具备该技能，不考虑时间段和负载。
pub struct SkillCoveragePass;

impl CheckPass for SkillCoveragePass {
    fn check(&self, input: &ValidationInput<'_>, sink: &mut FindingSink) {
        let available = input.worker_skills();

        for task in input.tasks {
            let task_id = display_id(&task.id);
            for skill in &task.required_skills {
                if available.contains(skill.as_str()) {
                    continue;
                }
                sink.push(
                    ValidationError::warning(
                        format!("missing-skill-{task_id}-{skill}"),
                        EntityKind::Task,
                        task_id,
                        format!("No worker has required skill: {skill}"),
                    )
                    .with_field(REQUIRED_SKILLS)
                    .with_suggestion("Add a worker with this skill or remove the skill requirement"),
                );
            }
        }
    }

    fn name(&self) -> &str {
        "skill_coverage"
    }
}
