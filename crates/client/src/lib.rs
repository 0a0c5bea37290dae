//! picker_client - CLI client for the weekly pick contest API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::PickerClient;
pub use error::{ClientError, Result};
