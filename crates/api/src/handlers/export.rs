use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use alchemist_domain::{ExportBundle, PriorityWeights, Rule};
use alchemist_ingest::parse_dataset;
use alchemist_validator::prepare_export;

use crate::{
    error::ApiResult,
    response::ApiResponse,
    routes::AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    #[serde(default)]
    pub clients: Vec<Value>,
    #[serde(default)]
    pub workers: Vec<Value>,
    #[serde(default)]
    pub tasks: Vec<Value>,
    #[serde(default)]
    pub rules: Vec<Rule>,
    #[serde(default)]
    pub priority_weights: PriorityWeights,
}

/// 生成导出包，存在校验错误时返回 422
pub async fn export_bundle(
    State(_state): State<AppState>,
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<ExportBundle>> {
    let Json(request) = payload?;
    let dataset = parse_dataset(request.clients, request.workers, request.tasks)?;
    let bundle = prepare_export(&dataset, &request.rules, request.priority_weights)?;
    let message = format!(
        "导出包已生成: {} 条记录, {} 条规则",
        dataset.record_count(),
        bundle.rules_config.rules.len()
    );
    Ok(ApiResponse::new(bundle).with_message(message))
}
