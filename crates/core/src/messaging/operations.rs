//! The batch operator: drives one remote operation per record, in input
//! order, accumulating per-record outcomes.
//!
//! A failing record never aborts the batch; its error detail is recorded
//! and the remaining records are still processed. The operator itself only
//! errors for misconfiguration (empty input) or for failures before the
//! per-record loop starts (target resolution, declined confirmation).

use serde::Serialize;

use super::error::{ApiResult, BatchError};
use super::record::{field_str, record_ident, Payload};
use super::traits::{ConfirmGate, StageBasedMessagingApi};
use super::types::Message;

/// Delete selector: a numeric message ID, or `None` for all messages.
pub type FilterCriteria = Option<u64>;

/// Outcome of one record within a batch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchOutcome {
    /// The operation succeeded; carries the response record when the
    /// operation returns one (deletes do not).
    Success(Option<Message>),
    /// The operation failed; carries the error detail.
    Failure(String),
}

/// One (input identifier, outcome) pair.
///
/// The identifier is the record's `id` field when it has one, otherwise
/// its 1-based input position, so a failing record can be located in the
/// source file.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub ident: String,
    pub outcome: BatchOutcome,
}

/// Ordered per-record outcomes accumulated by one batch run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchResult {
    entries: Vec<BatchEntry>,
}

impl BatchResult {
    /// All entries, in input order.
    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }

    /// Number of successful records.
    pub fn successes(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.outcome, BatchOutcome::Success(_)))
            .count()
    }

    /// Number of failed records.
    pub fn failures(&self) -> usize {
        self.entries.len() - self.successes()
    }

    /// Total number of records processed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the batch processed no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records a successful record outcome.
    pub fn push_success(&mut self, ident: String, response: Option<Message>) {
        self.entries.push(BatchEntry {
            ident,
            outcome: BatchOutcome::Success(response),
        });
    }

    /// Records a failed record outcome with its error detail.
    pub fn push_failure(&mut self, ident: String, detail: String) {
        self.entries.push(BatchEntry {
            ident,
            outcome: BatchOutcome::Failure(detail),
        });
    }
}

/// Write operation applied to each record of an import batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    /// Create a new message per record.
    Create,
    /// Update an existing message per record, selected by its `id` field.
    Update,
}

/// Runs a create/update batch over the given payloads, in input order.
///
/// Update payloads must carry an `id` field; the operator consumes it as
/// the update selector and does not send it in the request body. Records
/// without a usable `id` become per-record failures.
pub async fn write_messages(
    api: &dyn StageBasedMessagingApi,
    op: WriteOp,
    payloads: &[Payload],
) -> Result<BatchResult, BatchError> {
    if payloads.is_empty() {
        return Err(BatchError::EmptyInput);
    }
    let mut result = BatchResult::default();
    for (index, payload) in payloads.iter().enumerate() {
        let ident = record_ident(payload, index);
        let response = match op {
            WriteOp::Create => api.create_message(payload).await,
            WriteOp::Update => match update_selector(payload) {
                Some(id) => {
                    let mut body = payload.clone();
                    body.remove("id");
                    api.update_message(id, &body).await
                }
                None => {
                    result.push_failure(ident, "record has no usable id field".to_string());
                    continue;
                }
            },
        };
        match response {
            Ok(message) => result.push_success(ident, Some(message)),
            Err(err) => result.push_failure(ident, err.to_string()),
        }
    }
    Ok(result)
}

/// Runs a delete batch: resolves the target records for `filter`, consults
/// the confirmation gate, then issues one delete per resolved record.
///
/// Resolution failures and a declined confirmation abort the whole batch
/// before any delete call is made; failures inside the per-record loop are
/// recorded and the loop continues.
pub async fn delete_messages(
    api: &dyn StageBasedMessagingApi,
    filter: FilterCriteria,
    gate: &dyn ConfirmGate,
) -> Result<BatchResult, BatchError> {
    let targets = resolve_messages(api, filter).await?;
    let description = match filter {
        Some(id) => format!("message {id}"),
        None => "all messages".to_string(),
    };
    if !gate.confirm(targets.len(), &description)? {
        return Err(BatchError::Aborted);
    }
    let mut result = BatchResult::default();
    for (index, message) in targets.iter().enumerate() {
        let ident = message
            .id
            .clone()
            .unwrap_or_else(|| format!("record {}", index + 1));
        match message.numeric_id() {
            Some(id) => match api.delete_message(id).await {
                Ok(()) => result.push_success(ident, None),
                Err(err) => result.push_failure(ident, err.to_string()),
            },
            None => result.push_failure(ident, "record has no usable id field".to_string()),
        }
    }
    Ok(result)
}

/// Resolves the records a delete filter selects: one get for a concrete
/// ID, a full list otherwise.
async fn resolve_messages(
    api: &dyn StageBasedMessagingApi,
    filter: FilterCriteria,
) -> ApiResult<Vec<Message>> {
    match filter {
        Some(id) => Ok(vec![api.get_message(id).await?]),
        None => Ok(api.get_messages().await?.results),
    }
}

fn update_selector(payload: &Payload) -> Option<u64> {
    field_str(payload, "id").and_then(|id| id.parse().ok())
}
