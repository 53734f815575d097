use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::game::{parse_bids, BidError, Standings};

pub const INPUT_ENV: &str = "CAMELCARDS_INPUT";
pub const OUTPUT_ENV: &str = "CAMELCARDS_OUTPUT";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Bid(#[from] BidError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Only the total winnings
    #[default]
    Text,
    /// Full standings as JSON
    Json,
}

impl TryFrom<&str> for OutputFormat {
    type Error = AppError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(AppError::Config(format!("unknown output format: {}", s))),
        }
    }
}

/// Runtime configuration for the binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub output: OutputFormat,
}

impl AppConfig {
    /// Load from the process arguments and environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_sources(std::env::args().nth(1), |key| std::env::var(key).ok())
    }

    /// The first CLI argument wins over `CAMELCARDS_INPUT`.
    pub fn from_sources(
        arg: Option<String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let non_empty = |path: &String| !path.trim().is_empty();
        let input_path = arg
            .filter(non_empty)
            .or_else(|| env(INPUT_ENV).filter(non_empty))
            .map(PathBuf::from)
            .ok_or_else(|| {
                AppError::Config(format!(
                    "no input file given (pass a path or set {})",
                    INPUT_ENV
                ))
            })?;

        let output = match env(OUTPUT_ENV) {
            Some(value) => OutputFormat::try_from(value.as_str())?,
            None => OutputFormat::default(),
        };

        Ok(Self { input_path, output })
    }
}

pub fn read_input(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Score `input` and render the result in the requested format.
#[instrument(skip(input))]
pub fn render_report(input: &str, output: OutputFormat) -> Result<String, AppError> {
    let standings = Standings::from_bids(parse_bids(input)?)?;
    debug!(total_winnings = standings.total_winnings(), "Rendering report");

    match output {
        OutputFormat::Text => Ok(standings.total_winnings().to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&standings)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn argument_takes_precedence_over_env() {
        let config = AppConfig::from_sources(
            Some("from_arg.txt".into()),
            env_from(&[(INPUT_ENV, "from_env.txt")]),
        )
        .unwrap();
        assert_eq!(config.input_path, PathBuf::from("from_arg.txt"));
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn falls_back_to_env_input() {
        let config = AppConfig::from_sources(
            None,
            env_from(&[(INPUT_ENV, "from_env.txt"), (OUTPUT_ENV, "JSON")]),
        )
        .unwrap();
        assert_eq!(config.input_path, PathBuf::from("from_env.txt"));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn empty_argument_falls_back_to_env_input() {
        let config = AppConfig::from_sources(
            Some("  ".into()),
            env_from(&[(INPUT_ENV, "from_env.txt")]),
        )
        .unwrap();
        assert_eq!(config.input_path, PathBuf::from("from_env.txt"));
    }

    #[test]
    fn missing_input_is_a_config_error() {
        let result = AppConfig::from_sources(None, env_from(&[]));
        assert!(matches!(result, Err(AppError::Config(_))));

        let result = AppConfig::from_sources(Some("".into()), env_from(&[(INPUT_ENV, "")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn unknown_output_format_is_rejected() {
        let result = AppConfig::from_sources(
            Some("input.txt".into()),
            env_from(&[(OUTPUT_ENV, "yaml")]),
        );
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = read_input(Path::new("/definitely/not/here.txt"));
        assert!(matches!(result, Err(AppError::Io { .. })));
    }

    #[test]
    fn text_report_is_the_total() {
        let report = render_report("32T3K 765\nKK677 28\n", OutputFormat::Text).unwrap();
        assert_eq!(report, "821");
    }

    #[test]
    fn json_report_lists_standings() {
        let report = render_report("32T3K 765\nKK677 28\n", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["total_winnings"], 821);
        assert_eq!(value["entries"][1]["hand"], "KK677");
        assert_eq!(value["entries"][1]["hand_type"], "TwoPair");
        assert_eq!(value["entries"][1]["winnings"], 56);
    }

    #[test]
    fn report_fails_on_bad_input() {
        let result = render_report("32T3K seven", OutputFormat::Text);
        assert!(matches!(result, Err(AppError::Bid(_))));
    }
}
