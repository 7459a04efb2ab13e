use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use alchemist_domain::DatasetKind;
use alchemist_ingest::{parse_dataset, parse_rows};
use alchemist_validator::ValidationReport;

use crate::{
    error::ApiResult,
    response::ApiResponse,
    routes::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub clients: Vec<Value>,
    #[serde(default)]
    pub workers: Vec<Value>,
    #[serde(default)]
    pub tasks: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct DatasetRowsRequest {
    pub data: Vec<Value>,
}

/// 校验完整的三类数据
pub async fn validate_all(
    State(state): State<AppState>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<ValidationReport>> {
    let Json(request) = payload?;
    let dataset = parse_dataset(request.clients, request.workers, request.tasks)?;

    let report = ValidationReport::from_findings(state.validator.validate(
        &dataset.clients,
        &dataset.workers,
        &dataset.tasks,
    ));
    info!(
        "数据校验请求完成: 质量分 {}, 可导出: {}",
        report.summary.quality_score, report.summary.export_allowed
    );

    Ok(ApiResponse::report(report))
}

/// 单独校验一类数据，另外两类视为空
pub async fn validate_single_dataset(
    State(state): State<AppState>,
    Path(dataset): Path<String>,
    payload: Result<Json<DatasetRowsRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<ValidationReport>> {
    let kind: DatasetKind = dataset.parse()?;
    let Json(request) = payload?;
    let dataset = parse_rows(kind, request.data)?;

    let report = ValidationReport::from_findings(state.validator.validate(
        &dataset.clients,
        &dataset.workers,
        &dataset.tasks,
    ));

    Ok(ApiResponse::report(report))
}
