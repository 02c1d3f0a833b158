//! Templates used when rendering a validation report.

pub struct ReportMessages {
    // ============================================================================
    // Status
    // ============================================================================
    pub status_valid: &'static str,
    pub status_invalid: &'static str,

    // ============================================================================
    // Score
    // ============================================================================
    pub score_line: &'static str,
    pub band_excellent: &'static str,
    pub band_very_good: &'static str,
    pub band_good: &'static str,
    pub band_needs_work: &'static str,

    // ============================================================================
    // Finding sections
    // ============================================================================
    pub errors_header: &'static str,
    pub warnings_header: &'static str,
    pub suggestions_header: &'static str,
    pub finding_item: &'static str,
}

pub const REPORT_MESSAGES: ReportMessages = ReportMessages {
    status_valid: "✅ Manifest is valid",
    status_invalid: "❌ Manifest is invalid",

    score_line: "📊 Quality score: {score}/100 ({band})",
    band_excellent: "Excellent",
    band_very_good: "Very Good",
    band_good: "Good",
    band_needs_work: "Needs Work",

    errors_header: "❌ Errors ({count}):",
    warnings_header: "⚠️  Warnings ({count}):",
    suggestions_header: "💡 Suggestions ({count}):",
    finding_item: "  {index}. {message}",
};
