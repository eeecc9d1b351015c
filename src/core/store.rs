//! In-memory roster with dual-file persistence
//!
//! [`RecordStore`] owns the ordered record list and the two files that mirror
//! it. Mutations are computed on a copy and only replace the in-memory list
//! once both files have been written.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::{Record, RecordPatch};
use crate::error::{Result, RosterError};
use crate::storage::{DocumentFile, PersistTx, RecordFormat, RowFile, RowMap};

/// File locations injected into a [`RecordStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub document: PathBuf,
    pub rows: PathBuf,
}

/// Outcome of reading the document file at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// File present and parsed.
    Loaded(usize),
    /// File missing or empty.
    Empty,
    /// File present but unreadable as a roster; the store starts empty.
    Corrupt(String),
}

#[derive(Debug)]
pub struct RecordStore {
    records: Vec<Record>,
    document: DocumentFile,
    rows: RowFile,
}

impl RecordStore {
    /// Create a store over `paths` and populate it from the document file.
    ///
    /// The row file is not read here.
    pub fn open(paths: StorePaths) -> Result<(Self, LoadStatus)> {
        let mut store = Self {
            records: Vec::new(),
            document: DocumentFile::new(paths.document),
            rows: RowFile::new(paths.rows),
        };
        let status = store.load()?;
        Ok((store, status))
    }

    /// Replace the in-memory list with the document file's contents.
    ///
    /// Corrupt content is reported through [`LoadStatus::Corrupt`] and leaves
    /// the store empty. I/O failures other than a missing file propagate.
    pub fn load(&mut self) -> Result<LoadStatus> {
        match self.document.load() {
            Ok(records) if records.is_empty() => {
                self.records.clear();
                Ok(LoadStatus::Empty)
            }
            Ok(records) => {
                info!(count = records.len(), "loaded roster");
                let count = records.len();
                self.records = records;
                Ok(LoadStatus::Loaded(count))
            }
            Err(RosterError::Parse(reason)) => {
                warn!(%reason, "document file is corrupt, starting empty");
                self.records.clear();
                Ok(LoadStatus::Corrupt(reason))
            }
            Err(err) => Err(err),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn document_path(&self) -> &Path {
        self.document.path()
    }

    /// Row file that saves currently go to.
    #[must_use]
    pub fn rows_path(&self) -> &Path {
        self.rows.path()
    }

    /// Replace the roster with the rows of the CSV file at `path`.
    ///
    /// The result is saved to the document file and back to `path`, which
    /// becomes the row file for later saves. Returns the number of records.
    pub fn import_rows(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let source = RowFile::new(path.as_ref());
        let records = source.read_records()?;
        self.persist_to(&records, &source)?;

        info!(
            path = %source.path().display(),
            count = records.len(),
            "imported rows"
        );
        let count = records.len();
        self.records = records;
        self.rows = source;
        Ok(count)
    }

    /// Project each row of the CSV file at `path` onto `columns`.
    ///
    /// Read-only: nothing in any store is touched.
    pub fn extract_columns<S: AsRef<str>>(
        path: impl AsRef<Path>,
        columns: &[S],
    ) -> Result<Vec<RowMap>> {
        let rows = RowFile::new(path.as_ref()).read_rows()?;
        Ok(rows.iter().map(|row| row.project(columns)).collect())
    }

    /// Append `record` unless its ID is already taken.
    pub fn add(&mut self, record: Record) -> Result<()> {
        if self.records.iter().any(|r| r.id == record.id) {
            return Err(RosterError::DuplicateKey(record.id));
        }

        let mut candidate = self.records.clone();
        debug!(id = %record.id, "adding record");
        candidate.push(record);
        self.commit(candidate)
    }

    /// First record with `id`.
    pub fn search(&self, id: &str) -> Result<&Record> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))
    }

    /// Apply `patch` to the first record with `id`.
    pub fn update(&mut self, id: &str, patch: &RecordPatch) -> Result<&Record> {
        let idx = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;

        let mut candidate = self.records.clone();
        patch.apply(&mut candidate[idx]);
        debug!(%id, ?patch, "updating record");
        self.commit(candidate)?;
        Ok(&self.records[idx])
    }

    /// Remove every record with `id`. Returns how many were removed.
    pub fn delete(&mut self, id: &str) -> Result<usize> {
        let candidate: Vec<Record> = self
            .records
            .iter()
            .filter(|r| r.id != id)
            .cloned()
            .collect();
        let removed = self.records.len() - candidate.len();
        if removed == 0 {
            return Err(RosterError::NotFound(id.to_string()));
        }

        debug!(%id, removed, "deleting record");
        self.commit(candidate)?;
        Ok(removed)
    }

    /// Write the roster to the document file and to the row file at `path`,
    /// or the current row file when `path` is `None`.
    pub fn persist_all(&self, path: Option<&Path>) -> Result<()> {
        match path {
            Some(path) => self.persist_to(&self.records, &RowFile::new(path)),
            None => self.persist_to(&self.records, &self.rows),
        }
    }

    fn commit(&mut self, candidate: Vec<Record>) -> Result<()> {
        self.persist_to(&candidate, &self.rows)?;
        self.records = candidate;
        Ok(())
    }

    fn persist_to(&self, records: &[Record], rows: &RowFile) -> Result<()> {
        PersistTx::new(vec![&self.document as &dyn RecordFormat, rows]).commit(records)
    }
}
