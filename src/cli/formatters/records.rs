//! Record formatter
//!
//! Renders the roster as one line per student, a single student as aligned
//! key/value pairs, and extracted rows as compact JSON objects.

use crate::cli::colors::{ColorSupport, RosterStyles, styled};
use crate::cli::output::HumanLayout;
use crate::core::Record;
use crate::storage::RowMap;

#[must_use]
pub fn record_line(record: &Record, support: ColorSupport) -> String {
    format!(
        " ID: {} | Name: {} | Roll No: {} | Grade: {}",
        styled(&record.id, RosterStyles::record_id, support),
        record.name,
        record.roll_no,
        record.grade
    )
}

/// Full roster between two rules, or a notice when empty.
#[must_use]
pub fn roster_layout(records: &[Record], support: ColorSupport) -> HumanLayout {
    let mut layout = HumanLayout::new();
    if records.is_empty() {
        layout.push_line(styled("No student data found.", RosterStyles::warning, support));
        return layout;
    }

    layout.title("Student Data:").rule();
    for record in records {
        layout.push_line(record_line(record, support));
    }
    layout.rule();
    layout
}

#[must_use]
pub fn record_detail(record: &Record) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout
        .kv("ID", &record.id)
        .kv("Name", &record.name)
        .kv("Roll No", &record.roll_no)
        .kv("Grade", &record.grade);
    layout
}

/// One projected row as a JSON object, columns in requested order.
#[must_use]
pub fn projection_line(row: &RowMap) -> String {
    serde_json::to_string(row).unwrap_or_default()
}
