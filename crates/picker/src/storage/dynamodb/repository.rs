//! DynamoDB repository implementation.
//!
//! Implements `RecordStore` from `picker_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use picker_core::storage::{ContestRecord, RecordKey, RecordStore, Result};

use super::conversions::{item_to_record, record_to_item, Item, ATTR_PK, ATTR_SK};
use super::error::{map_get_item_error, map_put_item_error, map_query_error, map_scan_error};

/// DynamoDB-based repository implementation.
///
/// Every record lives in one table keyed by `pk` (partition) and `sk` (sort).
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository using the AWS SDK default credential chain.
    pub async fn from_table_name(table_name: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), table_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Decode a page of items, dropping those of unknown type.
    fn decode_items(items: Vec<Item>, records: &mut Vec<ContestRecord>) -> Result<()> {
        for item in &items {
            if let Some(record) = item_to_record(item)? {
                records.push(record);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for DynamoDbRepository {
    async fn put_record(&self, record: &ContestRecord) -> Result<()> {
        let key = record.key();
        let item = record_to_item(record);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, &key))?;

        tracing::debug!(%key, table = %self.table_name, "Stored record");
        Ok(())
    }

    async fn get_record(&self, key: &RecordKey) -> Result<Option<ContestRecord>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ATTR_PK, AttributeValue::S(key.partition.clone()))
            .key(ATTR_SK, AttributeValue::S(key.sort.clone()))
            .send()
            .await
            .map_err(|e| map_get_item_error(e, key))?;

        match result.item {
            Some(item) => item_to_record(&item),
            None => Ok(None),
        }
    }

    async fn query_records(
        &self,
        partition: &str,
        sort_prefix: &str,
    ) -> Result<Vec<ContestRecord>> {
        let mut records = Vec::new();
        let mut start_key: Option<Item> = None;

        loop {
            let mut result = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("pk = :pk AND begins_with(sk, :sk_prefix)")
                .expression_attribute_values(":pk", AttributeValue::S(partition.to_string()))
                .expression_attribute_values(
                    ":sk_prefix",
                    AttributeValue::S(sort_prefix.to_string()),
                )
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_query_error)?;

            Self::decode_items(result.items.take().unwrap_or_default(), &mut records)?;

            match result.last_evaluated_key.take() {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(records)
    }

    async fn scan_records(&self) -> Result<Vec<ContestRecord>> {
        let mut records = Vec::new();
        let mut start_key: Option<Item> = None;
        let mut pages = 0usize;

        loop {
            let mut result = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_scan_error)?;
            pages += 1;

            Self::decode_items(result.items.take().unwrap_or_default(), &mut records)?;

            match result.last_evaluated_key.take() {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!(pages, records = records.len(), "Scanned table");
        Ok(records)
    }
}
