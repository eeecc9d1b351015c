//! CSV row file
//!
//! Rows are read the way a dictionary reader would: the first line names the
//! columns and every following line becomes a column-to-value mapping. Short
//! rows simply lack the trailing columns; surplus fields are dropped.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::core::{COLUMNS, Record};
use crate::error::{Result, RosterError};
use crate::storage::RecordFormat;

/// Ordered column-name to value mapping for one row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowMap {
    entries: Vec<(String, String)>,
}

impl RowMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set `column` to `value`, replacing an existing entry in place.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((column, value)),
        }
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Keep only `columns`, in the order given. Columns this row lacks are
    /// left out.
    #[must_use]
    pub fn project<S: AsRef<str>>(&self, columns: &[S]) -> Self {
        let mut out = Self::new();
        for column in columns {
            let column = column.as_ref();
            if let Some(value) = self.get(column) {
                out.insert(column, value);
            }
        }
        out
    }

    fn to_record(&self) -> Record {
        let field = |name: &str| self.get(name).unwrap_or_default().to_string();
        Record {
            id: field("ID"),
            name: field("Name"),
            roll_no: field("Roll_no"),
            grade: field("Grade"),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RowMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Self::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

impl Serialize for RowMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Delimited text file with an `ID,Name,Roll_no,Grade` header.
#[derive(Debug, Clone)]
pub struct RowFile {
    path: PathBuf,
}

impl RowFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every data row as a column mapping.
    pub fn read_rows(&self) -> Result<Vec<RowMap>> {
        if !self.path.is_file() {
            return Err(RosterError::FileNotFound(self.path.clone()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(File::open(&self.path)?);
        let headers = reader.headers()?.clone();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(
                headers
                    .iter()
                    .zip(record.iter())
                    .collect::<RowMap>(),
            );
        }

        debug!(path = %self.path.display(), rows = rows.len(), "read row file");
        Ok(rows)
    }

    /// Read every data row as a [`Record`], matching columns by name.
    pub fn read_records(&self) -> Result<Vec<Record>> {
        Ok(self.read_rows()?.iter().map(RowMap::to_record).collect())
    }
}

impl RecordFormat for RowFile {
    fn name(&self) -> &'static str {
        "rows"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, records: &[Record]) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(File::create(&self.path)?);
        writer.write_record(COLUMNS)?;
        for record in records {
            writer.write_record(record.to_row())?;
        }
        writer.flush()?;
        Ok(())
    }
}
