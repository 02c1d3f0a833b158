// External crates
use clap::Parser;

// Internal imports
use plint_core::error::PlintError;
use plint_core::{plint_error, plint_error_hint, plint_warning};
use plint_messages::messages::CLI_MESSAGES;
use plint_messages::msg;

// Local modules
mod cli;
mod commands;

use cli::Args;

fn main() {
    let args = Args::parse();

    // Tests expect clean output, so logging stays off in test mode
    if std::env::var("PLINT_TEST_MODE").is_err() {
        let default_filter = if args.verbose { "debug" } else { "warn" };
        if let Err(e) = plint_logging::init_with_defaults(default_filter) {
            plint_warning!(
                "{}",
                msg!(CLI_MESSAGES.logging_init_failed, error = &e)
            );
        }
    }

    match commands::execute(&args) {
        Ok(true) => std::process::exit(0),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            plint_error!("{}", msg!(CLI_MESSAGES.error_generic, error = &e));
            if matches!(e.downcast_ref::<PlintError>(), Some(PlintError::NotFound(_))) {
                plint_error_hint!("{}", CLI_MESSAGES.not_found_hint);
            }
            std::process::exit(1);
        }
    }
}
