//! Delimited-text record parsing.
//!
//! The first row names the fields; every data row yields one record in
//! file order. A quoted empty cell is an empty-string value, which is
//! distinct from an absent field. A row whose column count differs from
//! the header is malformed input.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use sbmctl_core::messaging::Record;

use crate::error::{ClientError, Result};

/// Reads all records from a CSV file.
pub fn read_path(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path)?;
    from_reader(file)
}

/// Reads all records from a CSV reader.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|err| ClientError::MalformedInput(err.to_string()))?
        .clone();
    let mut records = Vec::new();
    for row in csv_reader.into_records() {
        let row = row.map_err(|err| ClientError::MalformedInput(err.to_string()))?;
        let mut record = Record::new();
        for (name, value) in headers.iter().zip(row.iter()) {
            record.insert(name.to_string(), Value::String(value.to_string()));
        }
        records.push(record);
    }
    Ok(records)
}
