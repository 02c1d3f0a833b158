//! Quality score derived from finding counts.

use plint_messages::messages::REPORT_MESSAGES;
use serde::Serialize;

pub const MAX_SCORE: u8 = 100;
pub const ERROR_PENALTY: u64 = 20;
pub const WARNING_PENALTY: u64 = 5;
pub const SUGGESTION_PENALTY: u64 = 2;

/// `100 - 20*errors - 5*warnings - 2*suggestions`, clamped to `0..=100`.
///
/// Only the counts matter; which rule produced a finding does not.
pub fn score(errors: usize, warnings: usize, suggestions: usize) -> u8 {
    let penalty = [
        (errors, ERROR_PENALTY),
        (warnings, WARNING_PENALTY),
        (suggestions, SUGGESTION_PENALTY),
    ]
    .iter()
    .fold(0u64, |total, &(count, weight)| {
        total.saturating_add((count as u64).saturating_mul(weight))
    });

    let remaining = u64::from(MAX_SCORE).saturating_sub(penalty);
    // remaining <= 100, so the conversion cannot fail
    u8::try_from(remaining).unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreBand {
    Excellent,
    VeryGood,
    Good,
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => ScoreBand::Excellent,
            80..=89 => ScoreBand::VeryGood,
            70..=79 => ScoreBand::Good,
            _ => ScoreBand::NeedsWork,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => REPORT_MESSAGES.band_excellent,
            ScoreBand::VeryGood => REPORT_MESSAGES.band_very_good,
            ScoreBand::Good => REPORT_MESSAGES.band_good,
            ScoreBand::NeedsWork => REPORT_MESSAGES.band_needs_work,
        }
    }
}
