use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use alchemist_validator::Validator;

use crate::handlers::{
    export::export_bundle,
    health::health_check,
    validation::{validate_all, validate_single_dataset},
};

/// API应用状态
#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<Validator>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            validator: Arc::new(Validator::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// 创建API路由
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // 健康检查
        .route("/health", get(health_check))
        // 数据校验
        .route("/api/validate", post(validate_all))
        .route("/api/validate/{dataset}", post(validate_single_dataset))
        // 导出
        .route("/api/export", post(export_bundle))
        .with_state(state)
}
