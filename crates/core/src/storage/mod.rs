mod error;
pub mod keys;
mod record;
mod traits;

pub use error::{RepositoryError, Result};
pub use record::{ContestRecord, RecordKey, RecordType};
pub use traits::RecordStore;
