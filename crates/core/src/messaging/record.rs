//! Generic records and the payload builder.
//!
//! A [`Record`] is one resource instance in transit: an ordered mapping
//! from field name to value, produced by an input codec. The payload
//! builder shapes a record into the exact field set a resource accepts
//! before it is handed to the remote client. Values are never coerced:
//! a numeric-looking cell from a CSV file stays a string, matching the
//! service's own leniency.

use serde_json::Value;

/// A parsed input record, prior to payload shaping.
pub type Record = serde_json::Map<String, Value>;

/// A record shaped for the remote API.
pub type Payload = serde_json::Map<String, Value>;

/// Fields accepted when creating or updating a message.
pub const MESSAGE_FIELDS: &[&str] = &[
    "messageset",
    "sequence_number",
    "lang",
    "text_content",
    "binary_content",
];

/// Fields accepted when importing schedules.
pub const SCHEDULE_FIELDS: &[&str] =
    &["minute", "hour", "day_of_week", "day_of_month", "month_of_year"];

/// Fields accepted when importing messagesets.
pub const MESSAGESET_FIELDS: &[&str] = &[
    "short_name",
    "content_type",
    "next_set",
    "default_schedule",
    "notes",
];

/// Field contract applied when shaping a record into an API payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldContract {
    /// Message create payload.
    Message,
    /// Message update payload: the create fields plus `id`, which the
    /// batch operator consumes as the update selector.
    MessageUpdate,
    /// Schedule payload.
    Schedule,
    /// Messageset payload.
    MessageSet,
    /// No filtering: the record passes through unchanged (raw JSON input).
    Raw,
}

impl FieldContract {
    /// The recognized field names, or `None` when the contract does not
    /// filter.
    pub fn fields(&self) -> Option<&'static [&'static str]> {
        match self {
            FieldContract::Message => Some(MESSAGE_FIELDS),
            FieldContract::MessageUpdate => Some(MESSAGE_UPDATE_FIELDS),
            FieldContract::Schedule => Some(SCHEDULE_FIELDS),
            FieldContract::MessageSet => Some(MESSAGESET_FIELDS),
            FieldContract::Raw => None,
        }
    }
}

const MESSAGE_UPDATE_FIELDS: &[&str] = &[
    "id",
    "messageset",
    "sequence_number",
    "lang",
    "text_content",
    "binary_content",
];

/// Shapes a record into a payload for the given contract.
///
/// Recognized fields keep their values unmodified; unrecognized fields are
/// dropped. [`FieldContract::Raw`] returns the record unchanged. Absent
/// fields stay absent rather than becoming nulls.
pub fn build_payload(record: &Record, contract: FieldContract) -> Payload {
    match contract.fields() {
        None => record.clone(),
        Some(fields) => fields
            .iter()
            .filter_map(|field| {
                record
                    .get(*field)
                    .map(|value| (field.to_string(), value.clone()))
            })
            .collect(),
    }
}

/// Scalar field value rendered as a string, if the field is present.
pub fn field_str(record: &Record, key: &str) -> Option<String> {
    match record.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    }
}

/// User-facing identifier for a record: its `id` field when present,
/// otherwise its 1-based position in the input.
pub fn record_ident(record: &Record, index: usize) -> String {
    field_str(record, "id").unwrap_or_else(|| format!("row {}", index + 1))
}
