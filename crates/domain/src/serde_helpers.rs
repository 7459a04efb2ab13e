use serde::{Deserialize, Deserializer};

/// 表格导出的数据常把空单元格写成 `null`，按字段默认值处理
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
        #[serde(default, deserialize_with = "null_as_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_null_becomes_default() {
        let row: Row = serde_json::from_str(r#"{"name": null, "tags": null}"#).unwrap();
        assert_eq!(row.name, "");
        assert!(row.tags.is_empty());
    }

    #[test]
    fn test_present_values_are_kept() {
        let row: Row = serde_json::from_str(r#"{"name": "Acme", "tags": ["a"]}"#).unwrap();
        assert_eq!(row.name, "Acme");
        assert_eq!(row.tags, vec!["a".to_string()]);
    }
}
