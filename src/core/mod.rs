//! Core roster types and logic

pub mod record;
pub mod store;

pub use record::{COLUMNS, Record, RecordPatch};
pub use store::{LoadStatus, RecordStore, StorePaths};
