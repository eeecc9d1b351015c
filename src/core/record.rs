//! Student record and update patch types

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Column names of the row format, in write order.
pub const COLUMNS: [&str; 4] = ["ID", "Name", "Roll_no", "Grade"];

/// One student's entry in the roster.
///
/// Every field is free-form text. Keys missing from a loaded document and
/// `null` values load as the empty string; other non-string values load as
/// their JSON text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "ID", default, deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(rename = "Name", default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(rename = "Roll_no", default, deserialize_with = "lenient_text")]
    pub roll_no: String,
    #[serde(rename = "Grade", default, deserialize_with = "lenient_text")]
    pub grade: String,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        roll_no: impl Into<String>,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            roll_no: roll_no.into(),
            grade: grade.into(),
        }
    }

    /// Field values in [`COLUMNS`] order.
    #[must_use]
    pub fn to_row(&self) -> [&str; 4] {
        [&self.id, &self.name, &self.roll_no, &self.grade]
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

/// Partial update for a record.
///
/// `None` keeps the current value. `Some("")` clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub roll_no: Option<String>,
    pub grade: Option<String>,
}

impl RecordPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.roll_no.is_none() && self.grade.is_none()
    }

    pub fn apply(&self, record: &mut Record) {
        if let Some(value) = &self.name {
            record.name.clone_from(value);
        }
        if let Some(value) = &self.roll_no {
            record.roll_no.clone_from(value);
        }
        if let Some(value) = &self.grade {
            record.grade.clone_from(value);
        }
    }
}
