//! In-memory storage backend.
//!
//! Stores every record in one `BTreeMap` keyed by partition/sort key, wrapped
//! in `Arc<RwLock<_>>`. Nothing is persisted. The HTTP tests run against this
//! backend regardless of the selected feature.
//!
//! # Example
//!
//! ```rust,ignore
//! use picker::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
