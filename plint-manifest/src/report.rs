use std::fmt;

use plint_core::error::Result;
use plint_messages::messages::REPORT_MESSAGES;
use plint_messages::msg;
use serde::Serialize;

use crate::finding::{Findings, Severity};
use crate::scoring::{score, ScoreBand};

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub valid: bool,
    pub score: u8,
    pub rating: ScoreBand,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Report {
    pub fn from_findings(findings: &Findings) -> Self {
        let errors = findings.messages(Severity::Error);
        let warnings = findings.messages(Severity::Warning);
        let suggestions = findings.messages(Severity::Suggestion);
        let score = score(errors.len(), warnings.len(), suggestions.len());

        Self {
            valid: errors.is_empty(),
            score,
            rating: ScoreBand::from_score(score),
            errors,
            warnings,
            suggestions,
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    header: &'static str,
    items: &[String],
) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }

    writeln!(f)?;
    writeln!(f, "{}", msg!(header, count = items.len()))?;
    for (i, item) in items.iter().enumerate() {
        writeln!(
            f,
            "{}",
            msg!(
                REPORT_MESSAGES.finding_item,
                index = i + 1,
                message = item
            )
        )?;
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.valid {
            REPORT_MESSAGES.status_valid
        } else {
            REPORT_MESSAGES.status_invalid
        };
        writeln!(f, "{}", status)?;
        writeln!(
            f,
            "{}",
            msg!(
                REPORT_MESSAGES.score_line,
                score = self.score,
                band = self.rating.label()
            )
        )?;

        write_section(f, REPORT_MESSAGES.errors_header, &self.errors)?;
        write_section(f, REPORT_MESSAGES.warnings_header, &self.warnings)?;
        write_section(f, REPORT_MESSAGES.suggestions_header, &self.suggestions)
    }
}
