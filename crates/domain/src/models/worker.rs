use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;
use crate::value_objects::AvailableSlots;

fn default_qualification_level() -> i64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Worker {
    #[serde(rename = "WorkerID", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "WorkerName", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "Skills", default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(rename = "AvailableSlots", default)]
    pub available_slots: AvailableSlots,
    #[serde(rename = "MaxLoadPerPhase", default, skip_serializing_if = "Option::is_none")]
    pub max_load_per_phase: Option<i64>,
    #[serde(rename = "WorkerGroup", default, skip_serializing_if = "Option::is_none")]
    pub worker_group: Option<String>,
    #[serde(rename = "QualificationLevel", default = "default_qualification_level")]
    pub qualification_level: i64,
}

impl Default for Worker {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            skills: Vec::new(),
            available_slots: AvailableSlots::default(),
            max_load_per_phase: None,
            worker_group: None,
            qualification_level: default_qualification_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Slot;
    use serde_json::json;

    #[test]
    fn test_worker_deserialize() {
        let worker: Worker = serde_json::from_value(json!({
            "WorkerID": "W1",
            "WorkerName": "Bob",
            "Skills": ["sql", "python"],
            "AvailableSlots": [1, 2, 3],
            "MaxLoadPerPhase": 2,
            "WorkerGroup": "GroupA"
        }))
        .unwrap();

        assert_eq!(worker.skills.len(), 2);
        assert_eq!(worker.available_slots, AvailableSlots::from_phases([1, 2, 3]));
        assert_eq!(worker.max_load_per_phase, Some(2));
        assert_eq!(worker.qualification_level, 1);
    }

    #[test]
    fn test_worker_keeps_bad_slot_values() {
        let worker: Worker = serde_json::from_value(json!({
            "WorkerID": "W2",
            "AvailableSlots": [1, "x"]
        }))
        .unwrap();

        let slots = worker.available_slots.as_list().unwrap();
        assert_eq!(slots[1], Slot::Invalid(json!("x")));
    }

    #[test]
    fn test_worker_serialize_column_names() {
        let worker = Worker {
            id: "W1".to_string(),
            qualification_level: 4,
            ..Worker::default()
        };
        let value = serde_json::to_value(&worker).unwrap();
        assert_eq!(value["WorkerID"], "W1");
        assert_eq!(value["QualificationLevel"], 4);
        assert_eq!(value["AvailableSlots"], json!([]));
        assert!(value.get("MaxLoadPerPhase").is_none());
    }
}
