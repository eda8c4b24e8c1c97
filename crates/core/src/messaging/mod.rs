//! Stage-based messaging domain: resource records, payload shaping, the
//! remote API boundary, and the batch operator.

pub mod error;
pub mod operations;
pub mod record;
pub mod traits;
pub mod types;

pub use error::{ApiError, ApiResult, BatchError};
pub use operations::{
    delete_messages, write_messages, BatchEntry, BatchOutcome, BatchResult, FilterCriteria,
    WriteOp,
};
pub use record::{build_payload, field_str, record_ident, FieldContract, Payload, Record};
pub use traits::{ConfirmGate, StageBasedMessagingApi};
pub use types::{ListResponse, Message, MessageSet, Schedule};
