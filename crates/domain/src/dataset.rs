use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use alchemist_errors::AlchemistError;

use crate::findings::EntityKind;
use crate::models::{Client, Task, Worker};

/// 一次上传的完整数据集
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub workers: Vec<Worker>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Dataset {
    pub fn new(clients: Vec<Client>, workers: Vec<Worker>, tasks: Vec<Task>) -> Self {
        Self {
            clients,
            workers,
            tasks,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty() && self.workers.is_empty() && self.tasks.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.clients.len() + self.workers.len() + self.tasks.len()
    }
}

/// 数据集类别，对应上传的三类表格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Clients,
    Workers,
    Tasks,
}

impl DatasetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Clients => "clients",
            DatasetKind::Workers => "workers",
            DatasetKind::Tasks => "tasks",
        }
    }

    pub fn entity_kind(&self) -> EntityKind {
        match self {
            DatasetKind::Clients => EntityKind::Client,
            DatasetKind::Workers => EntityKind::Worker,
            DatasetKind::Tasks => EntityKind::Task,
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetKind {
    type Err = AlchemistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clients" | "client" => Ok(DatasetKind::Clients),
            "workers" | "worker" => Ok(DatasetKind::Workers),
            "tasks" | "task" => Ok(DatasetKind::Tasks),
            other => Err(AlchemistError::invalid_request(format!(
                "未知的数据集类型: {other}"
            ))),
        }
    }
}
