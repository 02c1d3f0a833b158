use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for plint.
#[derive(Parser, Debug)]
#[command(name = "plint")]
#[command(about = "Validate a plugin manifest and score its quality")]
#[command(version)]
pub struct Args {
    /// Manifest file to validate (JSON or YAML)
    pub path: PathBuf,

    /// Output format: human, json or json-pretty
    #[arg(short = 'f', long, default_value = "human")]
    pub format: OutputFormat,

    /// Validate the file as a marketplace catalog
    /// (implied when the file is named marketplace.json)
    #[arg(long)]
    pub marketplace: bool,

    /// Also fail when the quality score is below this value
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,

    /// Log validation details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn is_marketplace(&self) -> bool {
        self.marketplace
            || self
                .path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.eq_ignore_ascii_case("marketplace.json"))
    }
}

/// Output format for the report.
///
/// # Formats
/// - `Human` - Status, score and numbered finding lists (default)
/// - `Json` - Compact JSON report
/// - `JsonPretty` - Pretty-printed JSON report
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
    JsonPretty,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "json-pretty" => Ok(OutputFormat::JsonPretty),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}
