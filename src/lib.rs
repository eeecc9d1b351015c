//! roster - keep a small student roster in sync across a JSON document file
//! and a CSV row file.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod shell;
pub mod storage;
pub mod test_utils;

pub use error::{Result, RosterError};
