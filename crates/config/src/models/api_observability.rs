use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use alchemist_errors::{AlchemistError, AlchemistResult};

use crate::validation::{ConfigValidator, ValidationUtils};

pub const MAX_REQUEST_SIZE_LIMIT_MB: u64 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub bind_address: String,
    pub cors_enabled: bool,
    pub cors_origins: Vec<String>,
    pub max_request_size_mb: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            cors_enabled: true,
            cors_origins: vec!["*".to_string()],
            max_request_size_mb: 10,
        }
    }
}

impl ApiConfig {
    pub fn max_request_size_bytes(&self) -> usize {
        usize::try_from(self.max_request_size_mb)
            .unwrap_or(usize::MAX)
            .saturating_mul(1024 * 1024)
    }
}

impl ConfigValidator for ApiConfig {
    fn validate(&self) -> AlchemistResult<()> {
        ValidationUtils::validate_bind_address(&self.bind_address, "api.bind_address")?;
        ValidationUtils::validate_range(
            self.max_request_size_mb,
            1,
            MAX_REQUEST_SIZE_LIMIT_MB,
            "api.max_request_size_mb",
        )?;
        if self.cors_enabled && self.cors_origins.is_empty() {
            return Err(AlchemistError::config_error(
                "启用CORS时 api.cors_origins 不能为空",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = AlchemistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(AlchemistError::config_error(format!("不支持的日志格式: {other}"))),
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl ConfigValidator for ObservabilityConfig {
    fn validate(&self) -> AlchemistResult<()> {
        ValidationUtils::validate_not_empty(&self.log_level, "observability.log_level")?;
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(AlchemistError::config_error(format!(
                "无效的日志级别: {}，可选值: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}
