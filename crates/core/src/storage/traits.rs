use async_trait::async_trait;

use super::{ContestRecord, RecordKey, Result};

/// Key-value store holding every contest record in one table.
///
/// Point reads and writes are atomic per key; nothing spans multiple keys.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Writes a record, replacing whatever was stored under its key.
    async fn put_record(&self, record: &ContestRecord) -> Result<()>;

    /// Gets the record stored under a key.
    async fn get_record(&self, key: &RecordKey) -> Result<Option<ContestRecord>>;

    /// Gets every record of a partition whose sort key starts with `sort_prefix`.
    async fn query_records(&self, partition: &str, sort_prefix: &str)
        -> Result<Vec<ContestRecord>>;

    /// Gets every record in the table.
    async fn scan_records(&self) -> Result<Vec<ContestRecord>>;
}
