use crate::core::ConfigProvider;
use crate::domain::model::{ExerciseKind, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde_json::Value;

#[derive(Debug, Clone, Parser)]
#[command(name = "array-kata")]
#[command(about = "Runs the array exercises and prints their results")]
pub struct CliConfig {
    /// Comma-separated exercises to run (default: all)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub only: Vec<ExerciseKind>,

    /// Output format for results
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// TOML file with custom cases; replaces --only
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn selected_exercises(&self) -> Vec<ExerciseKind> {
        if self.only.is_empty() {
            ExerciseKind::ALL.to_vec()
        } else {
            self.only.clone()
        }
    }

    fn cases_for(&self, _kind: ExerciseKind) -> Option<Vec<Value>> {
        None
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_select_everything() {
        let config = CliConfig::parse_from(["array-kata"]);
        assert_eq!(config.selected_exercises(), ExerciseKind::ALL.to_vec());
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_only_and_format() {
        let config =
            CliConfig::parse_from(["array-kata", "--only", "reverse,is_array", "--format", "plain"]);
        assert_eq!(
            config.selected_exercises(),
            vec![ExerciseKind::Reverse, ExerciseKind::IsArray]
        );
        assert_eq!(config.output_format(), OutputFormat::Plain);
    }

    #[test]
    fn test_unknown_exercise_is_rejected() {
        assert!(CliConfig::try_parse_from(["array-kata", "--only", "sort"]).is_err());
    }

    #[test]
    fn test_empty_config_path_fails_validation() {
        let config = CliConfig::parse_from(["array-kata", "--config", ""]);
        assert!(config.validate().is_err());
    }
}
