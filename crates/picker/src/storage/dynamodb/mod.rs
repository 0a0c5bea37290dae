//! DynamoDB storage backend implementation.
//!
//! Implements [`picker_core::storage::RecordStore`] over a single DynamoDB
//! table using `aws-sdk-dynamodb`. Key strings come from
//! `picker_core::storage::keys`.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
