use anyhow::Result;
use plint_core::{plint_info, plint_println};
use plint_manifest::{load_document, validate_marketplace, Report, Validator};
use plint_messages::messages::CLI_MESSAGES;
use plint_messages::msg;
use tracing::debug;

use crate::cli::{Args, OutputFormat};

/// Validate the document named by `args` and print the report.
///
/// Returns whether the run passed: the document is valid and, when a
/// minimum score was requested, the score reaches it.
pub fn execute(args: &Args) -> Result<bool> {
    let document = load_document(&args.path)?;
    let path = args.path.display().to_string();

    let report = if args.is_marketplace() {
        plint_info!("{}", msg!(CLI_MESSAGES.validating_marketplace, path = &path));
        validate_marketplace(&document)
    } else {
        plint_info!("{}", msg!(CLI_MESSAGES.validating, path = &path));
        Validator::new().validate(&document)
    };

    print_report(&report, args.format)?;
    Ok(passes(&report, args.min_score))
}

fn print_report(report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => plint_println!("{}", report),
        OutputFormat::Json => plint_println!("{}", report.to_json(false)?),
        OutputFormat::JsonPretty => plint_println!("{}", report.to_json(true)?),
    }
    Ok(())
}

fn passes(report: &Report, min_score: Option<u8>) -> bool {
    let Some(min) = min_score else {
        return report.valid;
    };
    if report.score < min {
        debug!(score = report.score, min, "score below minimum");
        plint_info!(
            "{}",
            msg!(
                CLI_MESSAGES.below_min_score,
                score = report.score,
                min = min
            )
        );
        return false;
    }
    report.valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use plint_manifest::Findings;

    #[test]
    fn test_passes_respects_min_score() {
        let mut findings = Findings::new();
        findings.warning("w");
        let report = Report::from_findings(&findings);
        assert_eq!(report.score, 95);

        assert!(passes(&report, None));
        assert!(passes(&report, Some(95)));
        assert!(!passes(&report, Some(96)));
    }

    #[test]
    fn test_invalid_report_never_passes() {
        let mut findings = Findings::new();
        findings.error("e");
        let report = Report::from_findings(&findings);
        assert!(!passes(&report, None));
        assert!(!passes(&report, Some(0)));
    }
}
