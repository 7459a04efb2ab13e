//! Data Alchemist 命令行与服务启动
//!
//! 子命令:
//! - `validate`: 读取 CSV/JSON 数据文件并输出诊断
//! - `export`: 校验通过后写出导出包
//! - `serve`: 启动HTTP校验服务

pub mod cli;
pub mod commands;
pub mod shutdown;

pub use cli::{Cli, Commands};
