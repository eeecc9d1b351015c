//! JSON document file

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::core::Record;
use crate::error::{Result, RosterError};
use crate::storage::RecordFormat;

const INDENT: &[u8] = b"    ";

/// Array-of-objects JSON file holding the full roster.
#[derive(Debug, Clone)]
pub struct DocumentFile {
    path: PathBuf,
}

impl DocumentFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load all records.
    ///
    /// A missing or zero-length file is an empty roster. Content that is not
    /// a JSON array of record objects is a [`RosterError::Parse`].
    pub fn load(&self) -> Result<Vec<Record>> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        if raw.is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&raw)
            .map_err(|err| RosterError::Parse(format!("{}: {err}", self.path.display())))
    }

    fn render(records: &[Record]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
        records
            .serialize(&mut ser)
            .map_err(|err| RosterError::Serialization(err.to_string()))?;
        Ok(out)
    }
}

impl RecordFormat for DocumentFile {
    fn name(&self) -> &'static str {
        "document"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, records: &[Record]) -> Result<()> {
        let payload = Self::render(records)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}
