use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::routes::AppState;

/// 健康检查，附带当前启用的检查步骤
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "data-alchemist",
        "version": env!("CARGO_PKG_VERSION"),
        "checks": state.validator.pass_names(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
