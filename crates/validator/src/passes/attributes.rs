use alchemist_domain::columns::ATTRIBUTES_JSON;
use alchemist_domain::{Attributes, EntityKind, ValidationError};

use super::{display_id, CheckPass, ValidationInput};
use crate::sink::FindingSink;

/// `AttributesJSON` 文本必须能解析为 JSON，已结构化的值直接接受
pub struct AttributeJsonPass;

impl CheckPass for AttributeJsonPass {
    fn check(&self, input: &ValidationInput<'_>, sink: &mut FindingSink) {
        for client in input.clients {
            let Some(Attributes::Text(text)) = &client.attributes else {
                continue;
            };
            if text.is_empty() {
                continue;
            }
            if serde_json::from_str::<serde_json::Value>(text).is_err() {
                let client_id = display_id(&client.id);
                sink.push(
                    ValidationError::error(
                        format!("invalid-json-{client_id}"),
                        EntityKind::Client,
                        client_id,
                        "Invalid JSON format in AttributesJSON",
                    )
                    .with_field(ATTRIBUTES_JSON)
                    .with_suggestion("Fix JSON syntax or provide valid JSON object"),
                );
            }
        }
    }

    fn name(&self) -> &str {
        "attribute_json"
    }
}
