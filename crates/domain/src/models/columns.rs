//! 数据集的列名，同时也是序列化字段名和诊断中的 `field`

pub const CLIENT_ID: &str = "ClientID";
pub const CLIENT_NAME: &str = "ClientName";
pub const PRIORITY_LEVEL: &str = "PriorityLevel";
pub const REQUESTED_TASK_IDS: &str = "RequestedTaskIDs";
pub const GROUP_TAG: &str = "GroupTag";
pub const ATTRIBUTES_JSON: &str = "AttributesJSON";

pub const WORKER_ID: &str = "WorkerID";
pub const WORKER_NAME: &str = "WorkerName";
pub const SKILLS: &str = "Skills";
pub const AVAILABLE_SLOTS: &str = "AvailableSlots";
pub const MAX_LOAD_PER_PHASE: &str = "MaxLoadPerPhase";
pub const WORKER_GROUP: &str = "WorkerGroup";
pub const QUALIFICATION_LEVEL: &str = "QualificationLevel";

pub const TASK_ID: &str = "TaskID";
pub const TASK_NAME: &str = "TaskName";
pub const CATEGORY: &str = "Category";
pub const DURATION: &str = "Duration";
pub const REQUIRED_SKILLS: &str = "RequiredSkills";
pub const PREFERRED_PHASES: &str = "PreferredPhases";
pub const MAX_CONCURRENT: &str = "MaxConcurrent";
