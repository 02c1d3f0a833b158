//! Central registry for all user-facing message templates.
//!
//! This module is organized by surface:
//! - `report` - rendering of a validation report (status, score, finding lists)
//! - `cli` - messages printed by the command-line wrapper
//!
//! Templates use `{variable}` syntax for runtime values, which are
//! substituted by the `MessageBuilder`.

pub mod cli;
pub mod report;

pub use cli::{CliMessages, CLI_MESSAGES};
pub use report::{ReportMessages, REPORT_MESSAGES};
