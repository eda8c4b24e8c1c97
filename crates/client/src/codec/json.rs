//! Structured-document record parsing.
//!
//! A JSON source holds either a single object or a list of objects; each
//! object becomes one record with no shape alteration. Records from this
//! path are sent to the service unfiltered.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use sbmctl_core::messaging::Record;

use crate::error::{ClientError, Result};

/// Reads all records from a JSON file.
pub fn read_path(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path)?;
    from_reader(file)
}

/// Reads all records from a JSON reader.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_reader(reader)
        .map_err(|err| ClientError::MalformedInput(err.to_string()))?;
    from_value(value)
}

/// Converts a parsed document into records.
pub fn from_value(value: Value) -> Result<Vec<Record>> {
    match value {
        Value::Object(record) => Ok(vec![record]),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => Ok(record),
                other => Err(ClientError::MalformedInput(format!(
                    "element {} is not an object: {other}",
                    index + 1
                ))),
            })
            .collect(),
        other => Err(ClientError::MalformedInput(format!(
            "expected an object or a list of objects, found {other}"
        ))),
    }
}
