use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Worker可用时间段中的单个元素
///
/// 上游表格数据并不可靠，非数字的元素原样保留，交给校验器报告。
/// `1.0`、`2.5` 这样的非整数数字仍然是合法的时间段。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Slot {
    Phase(i64),
    Fractional(f64),
    Invalid(Value),
}

impl Slot {
    pub fn phase(&self) -> Option<i64> {
        match self {
            Slot::Phase(phase) => Some(*phase),
            Slot::Fractional(value) if value.fract() == 0.0 => Some(*value as i64),
            Slot::Fractional(_) | Slot::Invalid(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Slot::Invalid(_))
    }

    /// 用于诊断信息的原始值文本，字符串不带引号
    pub fn display_value(&self) -> String {
        match self {
            Slot::Phase(phase) => phase.to_string(),
            Slot::Fractional(value) => value.to_string(),
            Slot::Invalid(Value::String(text)) => text.clone(),
            Slot::Invalid(other) => other.to_string(),
        }
    }
}

impl From<i64> for Slot {
    fn from(phase: i64) -> Self {
        Slot::Phase(phase)
    }
}

/// `AvailableSlots` 字段：正常情况下是一个列表，也可能是无法识别的原始值
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AvailableSlots {
    List(Vec<Slot>),
    Malformed(Value),
}

impl AvailableSlots {
    pub fn from_phases<I: IntoIterator<Item = i64>>(phases: I) -> Self {
        AvailableSlots::List(phases.into_iter().map(Slot::Phase).collect())
    }

    pub fn as_list(&self) -> Option<&[Slot]> {
        match self {
            AvailableSlots::List(slots) => Some(slots),
            AvailableSlots::Malformed(_) => None,
        }
    }

    /// 空列表、null 或空字符串都视为未填写
    pub fn is_missing(&self) -> bool {
        match self {
            AvailableSlots::List(slots) => slots.is_empty(),
            AvailableSlots::Malformed(Value::Null) => true,
            AvailableSlots::Malformed(Value::String(text)) => text.trim().is_empty(),
            AvailableSlots::Malformed(_) => false,
        }
    }

    pub fn len(&self) -> usize {
        self.as_list().map_or(0, <[Slot]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AvailableSlots {
    fn default() -> Self {
        AvailableSlots::List(Vec::new())
    }
}

/// 客户的自定义属性，文本形式需要能解析为 JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Attributes {
    Text(String),
    Structured(Value),
}

impl Attributes {
    pub fn is_blank(&self) -> bool {
        matches!(self, Attributes::Text(text) if text.is_empty())
    }
}
