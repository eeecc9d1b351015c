//! Storage layer for roster
//!
//! Implements dual persistence: a JSON document file that is loaded at
//! startup, and a CSV row file kept in step with it on every save.

use std::path::Path;

use crate::core::Record;
use crate::error::Result;

pub mod document;
pub mod rows;
pub mod tx;

pub use document::DocumentFile;
pub use rows::{RowFile, RowMap};
pub use tx::{PersistTx, TxPhase};

/// A whole-file serializer for the record sequence.
pub trait RecordFormat {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// File this format writes to.
    fn path(&self) -> &Path;

    /// Overwrite the file with `records`.
    fn write(&self, records: &[Record]) -> Result<()>;
}
