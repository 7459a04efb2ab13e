use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Task {
    #[serde(rename = "TaskID", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "TaskName", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "Category", default, deserialize_with = "null_as_default")]
    pub category: String,
    /// 持续的阶段数
    #[serde(rename = "Duration", default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(rename = "RequiredSkills", default, deserialize_with = "null_as_default")]
    pub required_skills: Vec<String>,
    #[serde(rename = "PreferredPhases", default, deserialize_with = "null_as_default")]
    pub preferred_phases: Vec<i64>,
    #[serde(rename = "MaxConcurrent", default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_deserialize() {
        let task: Task = serde_json::from_value(json!({
            "TaskID": "T1",
            "TaskName": "Load",
            "Category": "ETL",
            "Duration": 2,
            "RequiredSkills": ["sql"],
            "PreferredPhases": [1, 2],
            "MaxConcurrent": 3
        }))
        .unwrap();

        assert_eq!(task.duration, Some(2));
        assert_eq!(task.preferred_phases, vec![1, 2]);
        assert_eq!(task.max_concurrent, Some(3));
    }

    #[test]
    fn test_task_rejects_non_numeric_duration() {
        let result = serde_json::from_value::<Task>(json!({ "TaskID": "T1", "Duration": "two" }));
        assert!(result.is_err());
    }
}
