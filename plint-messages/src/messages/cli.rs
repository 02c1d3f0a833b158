//! Messages printed by the `plint` binary around a report.

pub struct CliMessages {
    pub validating: &'static str,
    pub validating_marketplace: &'static str,
    pub below_min_score: &'static str,
    pub error_generic: &'static str,
    pub not_found_hint: &'static str,
    pub logging_init_failed: &'static str,
}

pub const CLI_MESSAGES: CliMessages = CliMessages {
    validating: "🔍 Validating plugin manifest {path}",
    validating_marketplace: "🔍 Validating marketplace catalog {path}",
    below_min_score: "Score {score} is below the required minimum of {min}",
    error_generic: "Error: {error}",
    not_found_hint: "Pass the path to a plugin manifest, e.g. plint plugin.json",
    logging_init_failed: "Failed to initialize logging: {error}",
};
