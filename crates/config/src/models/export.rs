use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use alchemist_errors::AlchemistResult;

use crate::validation::{ConfigValidator, ValidationUtils};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// 导出文件名前缀，完整文件名为 `<prefix>-<YYYY-MM-DD>.json`
    pub file_prefix: String,
    pub output_dir: String,
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_prefix: "data-alchemist-export".to_string(),
            output_dir: ".".to_string(),
            pretty: true,
        }
    }
}

impl ExportConfig {
    pub fn file_name(&self, date: NaiveDate) -> String {
        format!("{}-{}.json", self.file_prefix, date.format("%Y-%m-%d"))
    }

    pub fn default_output_path(&self, date: NaiveDate) -> PathBuf {
        PathBuf::from(&self.output_dir).join(self.file_name(date))
    }
}

impl ConfigValidator for ExportConfig {
    fn validate(&self) -> AlchemistResult<()> {
        ValidationUtils::validate_not_empty(&self.file_prefix, "export.file_prefix")?;
        ValidationUtils::validate_not_empty(&self.output_dir, "export.output_dir")?;
        Ok(())
    }
}
