use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;
use crate::value_objects::Attributes;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Client {
    #[serde(rename = "ClientID", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "ClientName", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "PriorityLevel", default, skip_serializing_if = "Option::is_none")]
    pub priority_level: Option<i64>,
    #[serde(rename = "RequestedTaskIDs", default, deserialize_with = "null_as_default")]
    pub requested_task_ids: Vec<String>,
    #[serde(rename = "GroupTag", default, skip_serializing_if = "Option::is_none")]
    pub group_tag: Option<String>,
    #[serde(rename = "AttributesJSON", default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_uses_dataset_column_names() {
        let client: Client = serde_json::from_value(json!({
            "ClientID": "C1",
            "ClientName": "Acme",
            "PriorityLevel": 3,
            "RequestedTaskIDs": ["T1", "T2"],
            "GroupTag": "GroupA",
            "AttributesJSON": "{\"location\": \"NY\"}"
        }))
        .unwrap();

        assert_eq!(client.id, "C1");
        assert_eq!(client.priority_level, Some(3));
        assert_eq!(client.requested_task_ids, vec!["T1", "T2"]);
        assert_eq!(
            client.attributes,
            Some(Attributes::Text("{\"location\": \"NY\"}".to_string()))
        );

        let value = serde_json::to_value(&client).unwrap();
        assert_eq!(value["ClientName"], "Acme");
        assert_eq!(value["GroupTag"], "GroupA");
    }

    #[test]
    fn test_client_missing_fields_default() {
        let client: Client = serde_json::from_value(json!({ "ClientName": null })).unwrap();
        assert_eq!(client, Client::default());
        assert!(client.priority_level.is_none());
    }
}
