//! 排班数据校验引擎
//!
//! 对客户、Worker、任务三类集合执行八个独立的检查步骤，
//! 输出带严重级别、归属记录和修复建议的诊断列表。

pub mod export;
pub mod passes;
pub mod report;
pub mod sink;
pub mod validator;

pub use export::prepare_export;
pub use passes::{CheckPass, ValidationInput};
pub use report::{validate_dataset, ValidationReport};
pub use sink::FindingSink;
pub use validator::{validate, Validator};
