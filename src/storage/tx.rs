//! Write-all-or-restore for dual persistence
//!
//! Every save touches both the document file and the row file. The writes are
//! wrapped in a small transaction so a failure on the second file does not
//! leave the first one ahead of it.
//!
//! ## Protocol Phases
//! 1. **Prepare**: snapshot the current bytes of every target
//! 2. **Pending**: write targets in order
//! 3. **Committed**: every target written
//! 4. **RolledBack**: a write failed and written targets were restored

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::Record;
use crate::error::{Result, RosterError};
use crate::storage::RecordFormat;

/// Transaction phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxPhase {
    Prepare,
    Pending,
    Committed,
    RolledBack,
}

/// Contents of a target before the transaction touched it.
#[derive(Debug)]
struct Snapshot {
    path: PathBuf,
    contents: Option<Vec<u8>>,
}

impl Snapshot {
    fn take(path: &Path) -> io::Result<Self> {
        let contents = match fs::read(path) {
            Ok(bytes) => Some(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) if err.kind() == io::ErrorKind::IsADirectory => None,
            Err(err) => return Err(err),
        };
        Ok(Self {
            path: path.to_path_buf(),
            contents,
        })
    }

    fn restore(&self) -> io::Result<()> {
        match &self.contents {
            Some(bytes) => fs::write(&self.path, bytes),
            None => match fs::remove_file(&self.path) {
                Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
                _ => Ok(()),
            },
        }
    }
}

/// Writes one record sequence to several formats, in order.
pub struct PersistTx<'a> {
    targets: Vec<&'a dyn RecordFormat>,
    phase: TxPhase,
}

impl<'a> PersistTx<'a> {
    pub fn new(targets: Vec<&'a dyn RecordFormat>) -> Self {
        Self {
            targets,
            phase: TxPhase::Prepare,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> TxPhase {
        self.phase
    }

    /// Write `records` to every target.
    ///
    /// On failure, each target up to and including the failing one is put
    /// back to its prior contents and [`RosterError::Persist`] is returned.
    pub fn commit(&mut self, records: &[Record]) -> Result<()> {
        let mut snapshots = Vec::with_capacity(self.targets.len());
        for target in &self.targets {
            let snapshot = Snapshot::take(target.path()).map_err(|err| RosterError::Persist {
                format: target.name(),
                reason: format!("snapshot {}: {err}", target.path().display()),
            })?;
            snapshots.push(snapshot);
        }

        self.phase = TxPhase::Pending;
        for (idx, target) in self.targets.iter().enumerate() {
            if let Err(err) = target.write(records) {
                warn!(
                    format = target.name(),
                    path = %target.path().display(),
                    error = %err,
                    "write failed, rolling back"
                );
                Self::rollback(&snapshots[..=idx]);
                self.phase = TxPhase::RolledBack;
                return Err(RosterError::Persist {
                    format: target.name(),
                    reason: err.to_string(),
                });
            }
            debug!(
                format = target.name(),
                path = %target.path().display(),
                records = records.len(),
                "wrote"
            );
        }

        self.phase = TxPhase::Committed;
        Ok(())
    }

    fn rollback(snapshots: &[Snapshot]) {
        for snapshot in snapshots.iter().rev() {
            if let Err(err) = snapshot.restore() {
                warn!(
                    path = %snapshot.path.display(),
                    error = %err,
                    "failed to restore file"
                );
            }
        }
    }
}
