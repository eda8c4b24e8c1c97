//! sbmctl_client - CLI client for the stage-based messaging service.

pub mod cli;
pub mod client;
pub mod codec;
pub mod confirm;
pub mod error;
pub mod output;

pub use client::{ClientConfig, SbmClient};
pub use error::{ClientError, Result};
