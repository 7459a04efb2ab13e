//! 日志初始化
//!
//! `RUST_LOG` 存在时优先使用，否则使用配置中的日志级别。

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use alchemist_config::{LogFormat, ObservabilityConfig};

fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// 初始化日志系统，只能调用一次
pub fn init_logging(log_level: &str, log_format: LogFormat) -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter(log_level));

    match log_format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()
                .context("初始化JSON日志格式失败")?;
        }
        LogFormat::Pretty => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .try_init()
                .context("初始化Pretty日志格式失败")?;
        }
    }

    Ok(())
}

pub fn init_from_config(config: &ObservabilityConfig) -> Result<()> {
    init_logging(&config.log_level, config.log_format)
}
