use axum::{response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use alchemist_validator::ValidationReport;

/// 成功响应的统一外层结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_message<S: Into<String>>(mut self, message: S) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<ValidationReport> {
    /// 校验报告响应，消息里带上错误和警告数量
    pub fn report(report: ValidationReport) -> Self {
        let summary = report.summary;
        let message = if summary.total == 0 {
            "数据校验通过".to_string()
        } else {
            format!(
                "发现 {} 个错误, {} 个警告",
                summary.error_count, summary.warning_count
            )
        };
        Self::new(report).with_message(message)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}
