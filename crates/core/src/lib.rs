//! picker_core - data model, record codec and season scoring for the weekly
//! pick contest.
//!
//! Everything in this crate is pure except the stores in [`contest`], which
//! reach the outside world only through an injected [`storage::RecordStore`].

pub mod contest;
pub mod serde;
pub mod storage;
