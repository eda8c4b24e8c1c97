//! Core domain logic for the sbmctl project.
//!
//! Holds the typed resource records, the record/payload model used by the
//! import pipeline, the trait boundary to the remote messaging service, and
//! the batch operator that drives per-record operations. Terminal and
//! network I/O live in the client crate.

pub mod messaging;
pub mod serde;
