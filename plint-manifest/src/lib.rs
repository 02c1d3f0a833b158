//! Pre-publication linting for plugin manifests.
//!
//! A manifest is checked against a [`Catalog`] of required fields,
//! recommended fields, a category taxonomy and per-component field rules.
//! The result is a [`Report`]: a validity flag, a 0-100 quality score and
//! the errors, warnings and suggestions that produced it.
//!
//! ```
//! use serde_json::json;
//!
//! let report = plint_manifest::validate(&json!({
//!     "name": "x",
//!     "version": "1.0.0",
//!     "description": "A valid plugin description.",
//!     "author": {"name": "A"}
//! }));
//! assert!(report.valid);
//! assert!(report.score < 100);
//! ```

pub mod catalog;
pub mod checks;
pub mod finding;
pub mod loader;
pub mod manifest;
pub mod marketplace;
pub mod report;
pub mod scoring;
pub mod validator;

pub use catalog::{Catalog, ComponentKind, FieldRule, Presence, Shape};
pub use finding::{Finding, Findings, Severity};
pub use loader::{load_document, DocumentFormat};
pub use manifest::Manifest;
pub use marketplace::validate_marketplace;
pub use report::Report;
pub use scoring::{score, ScoreBand};
pub use validator::{validate, Validator};
