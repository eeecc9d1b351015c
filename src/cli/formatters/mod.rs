//! Human-readable renderers shared by the shell and one-shot commands.

pub mod records;

pub use records::{projection_line, record_detail, record_line, roster_layout};
