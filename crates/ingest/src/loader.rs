use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, info};

use alchemist_domain::{Dataset, DatasetKind};
use alchemist_errors::{AlchemistError, AlchemistResult};

use crate::normalize::normalize_row;

/// 支持的上传文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Csv,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> AlchemistResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(FileFormat::Json),
            "csv" => Ok(FileFormat::Csv),
            _ => Err(AlchemistError::unsupported_format(path.display().to_string())),
        }
    }
}

fn parse_records<T: DeserializeOwned>(kind: DatasetKind, rows: Vec<Value>) -> AlchemistResult<Vec<T>> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            let row_number = index + 1;
            let Value::Object(map) = row else {
                return Err(AlchemistError::ingestion(
                    kind.as_str(),
                    row_number,
                    "行数据必须是对象",
                ));
            };
            serde_json::from_value(normalize_row(kind, map)).map_err(|e| {
                AlchemistError::ingestion(kind.as_str(), row_number, e.to_string())
            })
        })
        .collect()
}

/// 把原始行转换为记录，结果只填充对应类别的集合
pub fn parse_rows(kind: DatasetKind, rows: Vec<Value>) -> AlchemistResult<Dataset> {
    let mut dataset = Dataset::default();
    match kind {
        DatasetKind::Clients => dataset.clients = parse_records(kind, rows)?,
        DatasetKind::Workers => dataset.workers = parse_records(kind, rows)?,
        DatasetKind::Tasks => dataset.tasks = parse_records(kind, rows)?,
    }
    Ok(dataset)
}

/// 三类原始行一起转换，行号按各自集合计算
pub fn parse_dataset(
    clients: Vec<Value>,
    workers: Vec<Value>,
    tasks: Vec<Value>,
) -> AlchemistResult<Dataset> {
    Ok(Dataset::new(
        parse_records(DatasetKind::Clients, clients)?,
        parse_records(DatasetKind::Workers, workers)?,
        parse_records(DatasetKind::Tasks, tasks)?,
    ))
}

fn read_json_rows(path: &Path) -> AlchemistResult<Vec<Value>> {
    let content = fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&content)? {
        Value::Array(rows) => Ok(rows),
        _ => Err(AlchemistError::Serialization(format!(
            "{} 的顶层必须是数组",
            path.display()
        ))),
    }
}

fn read_csv_rows(path: &Path) -> AlchemistResult<Vec<Value>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let row: Map<String, Value> = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| (header.to_string(), Value::String(cell.to_string())))
            .collect();
        rows.push(Value::Object(row));
    }
    Ok(rows)
}

/// 读取一个上传文件（JSON数组或带表头的CSV）
pub fn load_file(path: &Path, kind: DatasetKind) -> AlchemistResult<Dataset> {
    let rows = match FileFormat::from_path(path)? {
        FileFormat::Json => read_json_rows(path)?,
        FileFormat::Csv => read_csv_rows(path)?,
    };
    debug!("从 {} 读取到 {} 行原始数据", path.display(), rows.len());

    let dataset = parse_rows(kind, rows)?;
    info!(
        "已加载 {} 条{}记录: {}",
        dataset.record_count(),
        kind,
        path.display()
    );
    Ok(dataset)
}

/// 分别加载三类文件并合并为一个数据集，未提供的类别为空
pub fn load_dataset(
    clients: Option<&Path>,
    workers: Option<&Path>,
    tasks: Option<&Path>,
) -> AlchemistResult<Dataset> {
    let mut dataset = Dataset::default();
    if let Some(path) = clients {
        dataset.clients = load_file(path, DatasetKind::Clients)?.clients;
    }
    if let Some(path) = workers {
        dataset.workers = load_file(path, DatasetKind::Workers)?.workers;
    }
    if let Some(path) = tasks {
        dataset.tasks = load_file(path, DatasetKind::Tasks)?.tasks;
    }
    Ok(dataset)
}
