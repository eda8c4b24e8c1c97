use serde::{Deserialize, Serialize};

use crate::serde::string_or_none;

/// List envelope returned by the service: `{"results": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub results: Vec<T>,
}

/// One message in a messageset sequence.
///
/// Every field is optional and string-typed: the service itself treats
/// IDs and sequence numbers as strings, and list responses may omit
/// fields that a detail response includes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "string_or_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub messageset: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub sequence_number: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub lang: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub text_content: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub binary_content: Option<String>,
}

impl Message {
    /// The message ID parsed as the numeric form the API paths require.
    pub fn numeric_id(&self) -> Option<u64> {
        self.id.as_deref().and_then(|id| id.parse().ok())
    }
}

/// A cron-style delivery schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default, deserialize_with = "string_or_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub minute: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub hour: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub day_of_week: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub day_of_month: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub month_of_year: Option<String>,
}

/// A set of messages delivered on a shared schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSet {
    #[serde(default, deserialize_with = "string_or_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub short_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub content_type: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub next_set: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub default_schedule: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_deserializes_string_fields() {
        let message: Message = serde_json::from_str(
            r#"{
                "id": "1",
                "messageset": "2",
                "sequence_number": "3",
                "lang": "eng_ZA",
                "text_content": "test message",
                "binary_content": "binary"
            }"#,
        )
        .unwrap();
        assert_eq!(message.id.as_deref(), Some("1"));
        assert_eq!(message.text_content.as_deref(), Some("test message"));
        assert_eq!(message.numeric_id(), Some(1));
    }

    #[test]
    fn test_message_deserializes_loose_scalars() {
        // Detail responses have been observed with numeric IDs and boolean
        // binary_content flags.
        let message: Message =
            serde_json::from_str(r#"{"id": 1, "binary_content": false}"#).unwrap();
        assert_eq!(message.id.as_deref(), Some("1"));
        assert_eq!(message.binary_content.as_deref(), Some("false"));
        assert_eq!(message.lang, None);
    }

    #[test]
    fn test_list_response_envelope() {
        let list: ListResponse<Schedule> =
            serde_json::from_str(r#"{"results": [{"id": "1", "minute": "2"}]}"#).unwrap();
        assert_eq!(list.results.len(), 1);
        assert_eq!(list.results[0].minute.as_deref(), Some("2"));
    }

    #[test]
    fn test_numeric_id_requires_a_numeric_string() {
        let message: Message = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(message.numeric_id(), None);
        assert_eq!(Message::default().numeric_id(), None);
    }
}
