//! Input codecs for import and update commands.
//!
//! A source is either delimited text with a header row (`--csv`) or a
//! structured document holding one object or a list of objects
//! (`--json`). Exactly one source kind may be supplied per invocation,
//! and the whole file is parsed before any record is sent to the remote
//! service, so a malformed row aborts the batch up front.

pub mod csv;
pub mod json;

use std::path::PathBuf;

use sbmctl_core::messaging::{FieldContract, Record, WriteOp};

use crate::error::{ClientError, Result};

/// The input source for a batch command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Csv(PathBuf),
    Json(PathBuf),
}

impl InputSource {
    /// Selects the source from the `--csv`/`--json` flag pair. Supplying
    /// neither or both is a usage error.
    pub fn from_flags(csv: Option<PathBuf>, json: Option<PathBuf>) -> Result<Self> {
        match (csv, json) {
            (Some(path), None) => Ok(InputSource::Csv(path)),
            (None, Some(path)) => Ok(InputSource::Json(path)),
            _ => Err(ClientError::Usage(
                "Please specify either --csv or --json.".to_string(),
            )),
        }
    }

    /// Reads and parses every record from the source, in input order.
    pub fn read_records(&self) -> Result<Vec<Record>> {
        match self {
            InputSource::Csv(path) => csv::read_path(path),
            InputSource::Json(path) => json::read_path(path),
        }
    }

    /// The payload contract for records from this source: CSV rows are
    /// filtered to the message field set, raw JSON passes through
    /// unchanged.
    pub fn contract(&self, op: WriteOp) -> FieldContract {
        match (self, op) {
            (InputSource::Csv(_), WriteOp::Create) => FieldContract::Message,
            (InputSource::Csv(_), WriteOp::Update) => FieldContract::MessageUpdate,
            (InputSource::Json(_), _) => FieldContract::Raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_source_is_required() {
        let both = InputSource::from_flags(Some("a.csv".into()), Some("b.json".into()));
        let neither = InputSource::from_flags(None, None);
        for result in [both, neither] {
            match result {
                Err(ClientError::Usage(message)) => {
                    assert_eq!(message, "Please specify either --csv or --json.");
                }
                other => panic!("expected usage error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_single_source_is_accepted() {
        assert_eq!(
            InputSource::from_flags(Some("a.csv".into()), None).unwrap(),
            InputSource::Csv("a.csv".into())
        );
        assert_eq!(
            InputSource::from_flags(None, Some("b.json".into())).unwrap(),
            InputSource::Json("b.json".into())
        );
    }

    #[test]
    fn test_contract_selection() {
        let csv = InputSource::Csv("a.csv".into());
        let json = InputSource::Json("b.json".into());
        assert_eq!(csv.contract(WriteOp::Create), FieldContract::Message);
        assert_eq!(csv.contract(WriteOp::Update), FieldContract::MessageUpdate);
        assert_eq!(json.contract(WriteOp::Create), FieldContract::Raw);
        assert_eq!(json.contract(WriteOp::Update), FieldContract::Raw);
    }
}
