mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::output::DEFAULT_FILENAME;
use crate::scoring::{RowCountPolicy, ScoreOptions};
use crate::stats::MeanDisplay;

/// Get the config directory path (~/.config/rank-check/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("rank-check"))
}

/// Get the default config file path (~/.config/rank-check/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

fn parse_config(path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    Ok(config)
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/rank-check/config.yaml) and falls back to defaults when it is absent.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed or has unknown keys
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(config_path) => {
            if !config_path.exists() {
                anyhow::bail!("Config file not found at {}", config_path.display());
            }
            parse_config(&config_path)
        }
        None => match get_config_path() {
            Some(config_path) if config_path.exists() => parse_config(&config_path),
            _ => Ok(Config::default()),
        },
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub output: Option<PathBuf>,
    pub round_mean: bool,
    pub truncate_rows: bool,
    pub parallel: bool,
}

/// Effective settings for one run, after merging config and command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub output: PathBuf,
    pub mean_display: MeanDisplay,
    pub options: ScoreOptions,
}

impl Settings {
    pub fn resolve(config: &Config, overrides: Overrides) -> Self {
        let output = overrides
            .output
            .or_else(|| config.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILENAME));

        let mean_display = if overrides.round_mean {
            MeanDisplay::Round
        } else {
            config.mean
        };

        let row_count_policy = if overrides.truncate_rows {
            RowCountPolicy::Truncate
        } else {
            config.row_count_mismatch
        };

        Self {
            output,
            mean_display,
            options: ScoreOptions {
                row_count_policy,
                parallel: overrides.parallel || config.parallel,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.output.is_none());
        assert_eq!(config.mean, MeanDisplay::Truncate);
        assert_eq!(config.row_count_mismatch, RowCountPolicy::Fail);
        assert!(!config.parallel);
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
output: results/counts.csv
mean: round
row_count_mismatch: truncate
parallel: true
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.output, Some(PathBuf::from("results/counts.csv")));
        assert_eq!(config.mean, MeanDisplay::Round);
        assert_eq!(config.row_count_mismatch, RowCountPolicy::Truncate);
        assert!(config.parallel);
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<Config, _> = serde_saphyr::from_str("colour: always\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(dir.path().join("missing.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mean: round").unwrap();
        let config = load_config(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.mean, MeanDisplay::Round);
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mean: [sideways").unwrap();
        assert!(load_config(Some(file.path().to_path_buf())).is_err());
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = Settings::resolve(&Config::default(), Overrides::default());
        assert_eq!(settings.output, PathBuf::from("inconsistencies.csv"));
        assert_eq!(settings.mean_display, MeanDisplay::Truncate);
        assert_eq!(settings.options, ScoreOptions::default());
    }

    #[test]
    fn test_resolve_config_values() {
        let config = Config {
            output: Some(PathBuf::from("from-config.csv")),
            mean: MeanDisplay::Round,
            row_count_mismatch: RowCountPolicy::Truncate,
            parallel: true,
        };
        let settings = Settings::resolve(&config, Overrides::default());
        assert_eq!(settings.output, PathBuf::from("from-config.csv"));
        assert_eq!(settings.mean_display, MeanDisplay::Round);
        assert_eq!(settings.options.row_count_policy, RowCountPolicy::Truncate);
        assert!(settings.options.parallel);
    }

    #[test]
    fn test_command_line_overrides_config() {
        let config = Config {
            output: Some(PathBuf::from("from-config.csv")),
            ..Config::default()
        };
        let overrides = Overrides {
            output: Some(PathBuf::from("from-cli.csv")),
            round_mean: true,
            truncate_rows: true,
            parallel: true,
        };
        let settings = Settings::resolve(&config, overrides);
        assert_eq!(settings.output, PathBuf::from("from-cli.csv"));
        assert_eq!(settings.mean_display, MeanDisplay::Round);
        assert_eq!(settings.options.row_count_policy, RowCountPolicy::Truncate);
        assert!(settings.options.parallel);
    }
}
