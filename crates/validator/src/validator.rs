use tracing::{debug, info};

use alchemist_domain::{Client, Task, ValidationError, Worker};

use crate::passes::{default_passes, CheckPass, ValidationInput};
use crate::sink::FindingSink;

/// 校验器：按固定顺序执行检查步骤，没有任何内部状态
pub struct Validator {
    passes: Vec<Box<dyn CheckPass>>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            passes: default_passes(),
        }
    }

    pub fn with_passes(passes: Vec<Box<dyn CheckPass>>) -> Self {
        Self { passes }
    }

    pub fn pass_names(&self) -> Vec<&str> {
        self.passes.iter().map(|pass| pass.name()).collect()
    }

    pub fn validate(
        &self,
        clients: &[Client],
        workers: &[Worker],
        tasks: &[Task],
    ) -> Vec<ValidationError> {
        let input = ValidationInput::new(clients, workers, tasks);
        let mut sink = FindingSink::new();

        for pass in &self.passes {
            let before = sink.len();
            pass.check(&input, &mut sink);
            debug!("检查步骤 {} 产生 {} 条诊断", pass.name(), sink.len() - before);
        }

        let findings = sink.into_findings();
        let errors = findings.iter().filter(|f| f.is_error()).count();
        info!(
            "校验完成: {} 个客户, {} 个Worker, {} 个任务, {} 个错误, {} 个警告",
            clients.len(),
            workers.len(),
            tasks.len(),
            errors,
            findings.len() - errors
        );
        findings
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// 使用默认检查流水线校验三类数据
pub fn validate(clients: &[Client], workers: &[Worker], tasks: &[Task]) -> Vec<ValidationError> {
    Validator::new().validate(clients, workers, tasks)
}
