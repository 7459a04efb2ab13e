//! Test data builders for creating test entities
//!
//! Every builder starts from a record that passes all validation checks on
//! its own, so a test only spells out the field it wants to break.

use alchemist_domain::{Attributes, AvailableSlots, Client, Dataset, Slot, Task, Worker};
use serde_json::Value;

/// Builder for creating test Client entities
pub struct ClientBuilder {
    client: Client,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            client: Client {
                id: "C1".to_string(),
                name: "Test Client".to_string(),
                priority_level: Some(3),
                requested_task_ids: vec![],
                group_tag: None,
                attributes: None,
            },
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.client.id = id.to_string();
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.client.name = name.to_string();
        self
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.client.priority_level = Some(priority);
        self
    }

    pub fn without_priority(mut self) -> Self {
        self.client.priority_level = None;
        self
    }

    pub fn with_requested_tasks(mut self, task_ids: &[&str]) -> Self {
        self.client.requested_task_ids = task_ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn with_group_tag(mut self, group: &str) -> Self {
        self.client.group_tag = Some(group.to_string());
        self
    }

    pub fn with_attributes_text(mut self, text: &str) -> Self {
        self.client.attributes = Some(Attributes::Text(text.to_string()));
        self
    }

    pub fn with_attributes(mut self, value: Value) -> Self {
        self.client.attributes = Some(Attributes::Structured(value));
        self
    }

    pub fn build(self) -> Client {
        self.client
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating test Worker entities
pub struct WorkerBuilder {
    worker: Worker,
}

impl WorkerBuilder {
    pub fn new() -> Self {
        Self {
            worker: Worker {
                id: "W1".to_string(),
                name: "Test Worker".to_string(),
                skills: vec!["general".to_string()],
                available_slots: AvailableSlots::from_phases([1, 2, 3]),
                max_load_per_phase: Some(1),
                worker_group: None,
                qualification_level: 1,
            },
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.worker.id = id.to_string();
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.worker.name = name.to_string();
        self
    }

    pub fn with_skills(mut self, skills: &[&str]) -> Self {
        self.worker.skills = skills.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_slots(mut self, slots: &[i64]) -> Self {
        self.worker.available_slots = AvailableSlots::from_phases(slots.iter().copied());
        self
    }

    pub fn with_raw_slots(mut self, slots: Vec<Slot>) -> Self {
        self.worker.available_slots = AvailableSlots::List(slots);
        self
    }

    pub fn with_malformed_slots(mut self, raw: Value) -> Self {
        self.worker.available_slots = AvailableSlots::Malformed(raw);
        self
    }

    pub fn with_max_load(mut self, max_load: i64) -> Self {
        self.worker.max_load_per_phase = Some(max_load);
        self
    }

    pub fn without_max_load(mut self) -> Self {
        self.worker.max_load_per_phase = None;
        self
    }

    pub fn with_group(mut self, group: &str) -> Self {
        self.worker.worker_group = Some(group.to_string());
        self
    }

    pub fn with_qualification_level(mut self, level: i64) -> Self {
        self.worker.qualification_level = level;
        self
    }

    pub fn build(self) -> Worker {
        self.worker
    }
}

impl Default for WorkerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating test Task entities
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new() -> Self {
        Self {
            task: Task {
                id: "T1".to_string(),
                name: "Test Task".to_string(),
                category: "General".to_string(),
                duration: Some(1),
                required_skills: vec!["general".to_string()],
                preferred_phases: vec![1],
                max_concurrent: Some(1),
            },
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.task.id = id.to_string();
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.task.name = name.to_string();
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.task.category = category.to_string();
        self
    }

    pub fn with_duration(mut self, duration: i64) -> Self {
        self.task.duration = Some(duration);
        self
    }

    pub fn without_duration(mut self) -> Self {
        self.task.duration = None;
        self
    }

    pub fn with_required_skills(mut self, skills: &[&str]) -> Self {
        self.task.required_skills = skills.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_preferred_phases(mut self, phases: &[i64]) -> Self {
        self.task.preferred_phases = phases.to_vec();
        self
    }

    pub fn with_max_concurrent(mut self, max_concurrent: i64) -> Self {
        self.task.max_concurrent = Some(max_concurrent);
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

impl Default for TaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for assembling a whole Dataset
#[derive(Default)]
pub struct DatasetBuilder {
    dataset: Dataset,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client(mut self, client: Client) -> Self {
        self.dataset.clients.push(client);
        self
    }

    pub fn worker(mut self, worker: Worker) -> Self {
        self.dataset.workers.push(worker);
        self
    }

    pub fn task(mut self, task: Task) -> Self {
        self.dataset.tasks.push(task);
        self
    }

    pub fn build(self) -> Dataset {
        self.dataset
    }
}
