use alchemist_errors::AlchemistError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("数据处理错误: {0}")]
    Alchemist(#[from] AlchemistError),

    #[error("请求参数错误: {0}")]
    BadRequest(String),

    #[error("请求体过大: {0}")]
    PayloadTooLarge(String),

    #[error("内部服务器错误: {0}")]
    Internal(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Alchemist(AlchemistError::ExportBlocked { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Alchemist(err) if err.is_data_error() => StatusCode::BAD_REQUEST,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Alchemist(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_message, error_type, suggestions) = match &self {
            ApiError::Alchemist(AlchemistError::ExportBlocked { errors }) => (
                format!("存在 {errors} 个校验错误，无法导出"),
                "EXPORT_BLOCKED",
                vec![
                    "使用 POST /api/validate 查看完整的诊断列表".to_string(),
                    "修复所有 error 级别的诊断后重新导出，warning 不影响导出".to_string(),
                ],
            ),
            ApiError::Alchemist(
                err @ AlchemistError::Ingestion {
                    dataset, row, ..
                },
            ) => (
                err.to_string(),
                "INGESTION_ERROR",
                vec![
                    format!("请检查 {dataset} 数据第 {row} 行"),
                    err.user_message().to_string(),
                ],
            ),
            ApiError::Alchemist(AlchemistError::InvalidRequest(msg)) => (
                msg.clone(),
                "INVALID_REQUEST",
                vec![
                    "数据集名称只能是 clients、workers 或 tasks".to_string(),
                    "请检查请求路径和参数".to_string(),
                ],
            ),
            ApiError::Alchemist(err) if err.is_data_error() => (
                err.to_string(),
                "INVALID_DATA",
                vec![err.user_message().to_string()],
            ),
            ApiError::Alchemist(err) => {
                if err.is_fatal() {
                    error!("请求处理失败: {}", err);
                } else {
                    warn!("请求处理失败: {}", err);
                }
                (
                    "系统内部错误".to_string(),
                    "INTERNAL_ERROR",
                    vec![err.user_message().to_string()],
                )
            }
            ApiError::BadRequest(msg) => (
                format!("请求参数错误: {msg}"),
                "BAD_REQUEST",
                vec![
                    "请检查请求体是否为合法的JSON".to_string(),
                    "确保Content-Type为application/json".to_string(),
                ],
            ),
            ApiError::PayloadTooLarge(msg) => (
                format!("请求体过大: {msg}"),
                "PAYLOAD_TOO_LARGE",
                vec!["请拆分数据后分批校验，或调大 api.max_request_size_mb".to_string()],
            ),
            ApiError::Internal(msg) => {
                error!("内部错误: {}", msg);
                (
                    "系统内部错误".to_string(),
                    "INTERNAL_ERROR",
                    vec![
                        "系统遇到内部错误，请稍后重试".to_string(),
                        format!("错误详情: {msg}"),
                    ],
                )
            }
        };

        let body = Json(json!({
            "error": {
                "message": error_message,
                "type": error_type,
                "code": status.as_u16(),
                "suggestions": suggestions,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alchemist_error_conversion() {
        let api_error: ApiError = AlchemistError::export_blocked(3).into();
        assert!(matches!(
            api_error,
            ApiError::Alchemist(AlchemistError::ExportBlocked { errors: 3 })
        ));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(AlchemistError::export_blocked(1)).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(AlchemistError::ingestion("tasks", 2, "bad")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(AlchemistError::invalid_request("rules")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::BadRequest("x".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(AlchemistError::Internal("boom".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::from(AlchemistError::export_blocked(2)).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = ApiError::Internal("db".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
