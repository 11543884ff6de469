//! Runtime configuration for the `schedule` binary.

use std::path::PathBuf;

/// Export file read when no path is configured.
pub const DEFAULT_CSV_PATH: &str = "STEM+-+Summer+2022+Schedule+of+Classes+as+of+05-02-22%281%29.csv";

/// Environment variable naming the export file.
pub const CSV_PATH_VAR: &str = "SCHEDULE_CSV_PATH";

/// Environment variable selecting the output format.
pub const OUTPUT_VAR: &str = "SCHEDULE_OUTPUT";

/// How query results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-width text columns.
    #[default]
    Table,
    /// Pretty-printed JSON array.
    Json,
}

impl OutputFormat {
    /// Parses a format name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Configuration for the `schedule` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Path of the schedule export to load.
    pub csv_path: PathBuf,
    /// Output format for query results.
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            output: OutputFormat::Table,
        }
    }
}

impl CliConfig {
    /// Builds the configuration from command-line arguments and the process
    /// environment.
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::args().nth(1),
            std::env::var(CSV_PATH_VAR).ok(),
            std::env::var(OUTPUT_VAR).ok(),
        )
    }

    /// Resolves the configuration from its raw sources.
    ///
    /// A positional path argument wins over the environment variable.
    pub fn resolve(arg_path: Option<String>, env_path: Option<String>, output: Option<String>) -> Self {
        let csv_path = arg_path
            .or(env_path)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_PATH));

        let output = match output {
            Some(name) => OutputFormat::from_name(&name).unwrap_or_else(|| {
                tracing::warn!("Unknown output format '{}', using table", name);
                OutputFormat::Table
            }),
            None => OutputFormat::Table,
        };

        Self { csv_path, output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::resolve(None, None, None);
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.csv_path, PathBuf::from(DEFAULT_CSV_PATH));
    }

    #[test]
    fn test_argument_wins_over_env() {
        let config = CliConfig::resolve(
            Some("arg.csv".to_string()),
            Some("env.csv".to_string()),
            None,
        );
        assert_eq!(config.csv_path, PathBuf::from("arg.csv"));

        let config = CliConfig::resolve(None, Some("env.csv".to_string()), None);
        assert_eq!(config.csv_path, PathBuf::from("env.csv"));
    }

    #[test]
    fn test_output_format() {
        assert_eq!(OutputFormat::from_name("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name(" table "), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_name("xml"), None);

        let config = CliConfig::resolve(None, None, Some("xml".to_string()));
        assert_eq!(config.output, OutputFormat::Table);
        let config = CliConfig::resolve(None, None, Some("json".to_string()));
        assert_eq!(config.output, OutputFormat::Json);
    }
}
