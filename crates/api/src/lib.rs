//! # Data Alchemist API
//!
//! 排班数据校验服务的REST API模块。
//!
//! ## API 端点
//!
//! - `GET /health` - 健康检查
//! - `POST /api/validate` - 校验客户、Worker、任务三类数据
//! - `POST /api/validate/{dataset}` - 单独校验一类数据（`clients`、`workers`、`tasks`）
//! - `POST /api/export` - 生成导出包，存在校验错误时返回 422
//!
//! ## 响应格式
//!
//! 成功响应统一包装为 [`response::ApiResponse`]：
//!
//! ```json
//! {
//!   "success": true,
//!   "data": { "findings": [], "summary": { "errorCount": 0, "qualityScore": 100 } },
//!   "message": null,
//!   "timestamp": "2026-01-01T00:00:00Z"
//! }
//! ```
//!
//! 错误响应见 [`error::ApiError`]。
//!
//! ## 使用示例
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/validate/workers \
//!   -H "Content-Type: application/json" \
//!   -d '{"data": [{"WorkerID": "W1", "Skills": "sql", "AvailableSlots": "1,2"}]}'
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;

use alchemist_config::ApiConfig;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;

use middleware::{body_limit_layer, cors_layer, request_logging, trace_layer};
use routes::{create_routes, AppState};

/// 创建完整的API应用
pub fn create_app(api_config: &ApiConfig) -> Router {
    let mut app = create_routes(AppState::new()).layer(
        ServiceBuilder::new()
            .layer(trace_layer())
            .layer(axum::middleware::from_fn(request_logging))
            .layer(DefaultBodyLimit::max(api_config.max_request_size_bytes()))
            .layer(body_limit_layer(api_config)),
    );

    if api_config.cors_enabled {
        app = app.layer(cors_layer(api_config));
    }

    app
}
