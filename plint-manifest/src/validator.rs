use serde_json::Value;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::checks::CHECKS;
use crate::finding::{Findings, Severity};
use crate::manifest::Manifest;
use crate::report::Report;

/// Runs every manifest check against a catalog and scores the result.
///
/// The validator holds no per-run state, so one instance can be shared
/// freely and validating the same document twice yields the same report.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    catalog: Catalog,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Collect findings from every check in their fixed order.
    pub fn findings(&self, document: &Value) -> Findings {
        let manifest = Manifest::new(document);
        let mut findings = Findings::new();

        for (name, check) in CHECKS {
            let produced = check(&manifest, &self.catalog);
            debug!(
                check = name,
                errors = produced.count(Severity::Error),
                warnings = produced.count(Severity::Warning),
                suggestions = produced.count(Severity::Suggestion),
                "check complete"
            );
            findings.extend(produced);
        }

        findings
    }

    pub fn validate(&self, document: &Value) -> Report {
        let report = Report::from_findings(&self.findings(document));
        info!(
            valid = report.valid,
            score = report.score,
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            suggestions = report.suggestions.len(),
            "manifest validated"
        );
        report
    }
}

/// Validate a manifest against the default catalog.
pub fn validate(document: &Value) -> Report {
    Validator::new().validate(document)
}
