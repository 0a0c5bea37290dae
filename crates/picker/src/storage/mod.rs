//! Storage backend implementations.
//!
//! This module provides concrete implementations of the
//! [`picker_core::storage::RecordStore`] trait. The active backend is selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): records live in a `BTreeMap` and vanish on exit
//! - `dynamodb`: AWS DynamoDB single-table backend using `aws-sdk-dynamodb`
//!
//! # Examples
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p picker --no-default-features --features dynamodb
//! ```

#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'dynamodb' feature. \
    Example: cargo build -p picker --no-default-features --features dynamodb"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg_attr(not(feature = "inmemory"), allow(dead_code))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

#[cfg_attr(not(feature = "inmemory"), allow(unused_imports))]
pub use inmemory::InMemoryRepository;
