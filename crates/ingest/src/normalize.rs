//! 原始表格行到规范记录的转换
//!
//! 上传的表格列名和单元格格式都不统一：列名可能带空格、大小写不同或使用别名，
//! 列表字段常写成逗号分隔的文本。这里把它们统一成记录结构能直接反序列化的形状，
//! 但不做任何业务判断，不合法的值原样交给校验器。

use serde_json::{Map, Number, Value};

use alchemist_domain::columns::*;
use alchemist_domain::DatasetKind;

/// 列的取值类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFamily {
    /// 整数列表，如 `AvailableSlots`、`PreferredPhases`
    NumberList,
    /// 字符串列表，如 `Skills`、`RequestedTaskIDs`
    TextList,
    /// JSON文本
    Json,
    Integer,
    Text,
}

const INTEGER_COLUMNS: &[&str] = &[
    PRIORITY_LEVEL,
    MAX_LOAD_PER_PHASE,
    QUALIFICATION_LEVEL,
    DURATION,
    MAX_CONCURRENT,
];

pub fn columns_for(kind: DatasetKind) -> &'static [&'static str] {
    match kind {
        DatasetKind::Clients => &[
            CLIENT_ID,
            CLIENT_NAME,
            PRIORITY_LEVEL,
            REQUESTED_TASK_IDS,
            GROUP_TAG,
            ATTRIBUTES_JSON,
        ],
        DatasetKind::Workers => &[
            WORKER_ID,
            WORKER_NAME,
            SKILLS,
            AVAILABLE_SLOTS,
            MAX_LOAD_PER_PHASE,
            WORKER_GROUP,
            QUALIFICATION_LEVEL,
        ],
        DatasetKind::Tasks => &[
            TASK_ID,
            TASK_NAME,
            CATEGORY,
            DURATION,
            REQUIRED_SKILLS,
            PREFERRED_PHASES,
            MAX_CONCURRENT,
        ],
    }
}

fn aliases_for(kind: DatasetKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        DatasetKind::Clients => &[
            ("id", CLIENT_ID),
            ("name", CLIENT_NAME),
            ("priority", PRIORITY_LEVEL),
            ("requestedtasks", REQUESTED_TASK_IDS),
            ("tasks", REQUESTED_TASK_IDS),
            ("group", GROUP_TAG),
            ("attributes", ATTRIBUTES_JSON),
        ],
        DatasetKind::Workers => &[
            ("id", WORKER_ID),
            ("name", WORKER_NAME),
            ("slots", AVAILABLE_SLOTS),
            ("maxload", MAX_LOAD_PER_PHASE),
            ("group", WORKER_GROUP),
            ("qualification", QUALIFICATION_LEVEL),
        ],
        DatasetKind::Tasks => &[
            ("id", TASK_ID),
            ("name", TASK_NAME),
            ("skills", REQUIRED_SKILLS),
            ("phases", PREFERRED_PHASES),
            ("concurrency", MAX_CONCURRENT),
        ],
    }
}

/// 比较列名时忽略大小写、空白、下划线和连字符
fn header_key(header: &str) -> String {
    header
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// 规范化列名：去掉所有空白，再把别名映射为标准列名。
/// 无法识别的列名只去掉空白后原样返回。
pub fn normalize_header(kind: DatasetKind, header: &str) -> String {
    let key = header_key(header);

    if let Some(column) = columns_for(kind)
        .iter()
        .find(|column| header_key(column) == key)
    {
        return column.to_string();
    }
    if let Some((_, column)) = aliases_for(kind).iter().find(|(alias, _)| *alias == key) {
        return column.to_string();
    }

    header.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn column_family(column: &str) -> ColumnFamily {
    if column.contains("Slots") || column.contains("Phases") {
        ColumnFamily::NumberList
    } else if column.contains("Skills") || column.contains("TaskIDs") {
        ColumnFamily::TextList
    } else if column.contains("JSON") {
        ColumnFamily::Json
    } else if INTEGER_COLUMNS.contains(&column) {
        ColumnFamily::Integer
    } else {
        ColumnFamily::Text
    }
}

fn parse_number_list(text: &str) -> Value {
    if let Ok(value @ Value::Array(_)) = serde_json::from_str::<Value>(&text.replace('\'', "\"")) {
        return value;
    }
    Value::Array(
        text.split(',')
            .filter_map(|piece| piece.trim().parse::<i64>().ok())
            .map(Value::from)
            .collect(),
    )
}

fn split_text_list(text: &str) -> Value {
    Value::Array(
        text.split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(|piece| Value::String(piece.to_string()))
            .collect(),
    )
}

fn parse_integer(text: &str) -> Value {
    if let Ok(number) = text.parse::<i64>() {
        return Value::from(number);
    }
    match text.parse::<f64>() {
        Ok(number) if number.fract() == 0.0 && number.is_finite() => {
            Value::from(number as i64)
        }
        _ => Value::String(text.to_string()),
    }
}

/// 按列类型转换单元格的值，返回 `None` 表示该单元格视为未填写
pub fn normalize_value(column: &str, value: Value) -> Option<Value> {
    let family = column_family(column);
    match value {
        Value::Null => None,
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() && family != ColumnFamily::Json {
                return None;
            }
            Some(match family {
                ColumnFamily::NumberList => integral_elements(parse_number_list(trimmed)),
                ColumnFamily::TextList => split_text_list(trimmed),
                ColumnFamily::Json => Value::String(text),
                ColumnFamily::Integer => parse_integer(trimmed),
                ColumnFamily::Text => Value::String(trimmed.to_string()),
            })
        }
        Value::Number(number) if family == ColumnFamily::Text => {
            Some(Value::String(number.to_string()))
        }
        Value::Number(number) if family == ColumnFamily::TextList => {
            Some(Value::Array(vec![Value::String(number.to_string())]))
        }
        Value::Number(number) if family == ColumnFamily::Integer => {
            Some(integral_number(number))
        }
        array @ Value::Array(_) if family == ColumnFamily::NumberList => {
            Some(integral_elements(array))
        }
        other => Some(other),
    }
}

/// 整数列中 `3.0` 这样的浮点数按整数处理
fn integral_number(number: Number) -> Value {
    match number.as_f64() {
        Some(float) if number.as_i64().is_none() && float.fract() == 0.0 => {
            Value::from(float as i64)
        }
        _ => Value::Number(number),
    }
}

/// 列表中 `2.0` 这样的元素转成整数，其余元素原样保留
fn integral_elements(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| match item {
                    Value::Number(number) => integral_number(number),
                    other => other,
                })
                .collect(),
        ),
        other => other,
    }
}

/// 规范化一整行：列名统一、值按列类型转换、空单元格去掉
pub fn normalize_row(kind: DatasetKind, row: Map<String, Value>) -> Value {
    let mut normalized = Map::with_capacity(row.len());
    for (header, value) in row {
        let column = normalize_header(kind, &header);
        if let Some(value) = normalize_value(&column, value) {
            normalized.insert(column, value);
        }
    }
    Value::Object(normalized)
}
