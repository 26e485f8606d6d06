use crate::core::ConfigProvider;
use crate::domain::model::{ExerciseKind, OutputFormat};
use crate::utils::error::{KataError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_sequence, validate_unique, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KataConfig {
    pub kata: KataSection,
    #[serde(default)]
    pub exercises: Vec<ExerciseConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KataSection {
    pub name: String,
    pub description: Option<String>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseConfig {
    pub kind: ExerciseKind,
    pub enabled: Option<bool>,
    pub cases: Option<Vec<Value>>,
}

impl ExerciseConfig {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

impl KataConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(KataError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| KataError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${KATA_NAME})；找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KataError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("kata.name", &self.kata.name)?;

        let kinds: Vec<ExerciseKind> = self.exercises.iter().map(|e| e.kind).collect();
        validate_unique("exercises.kind", &kinds)?;

        for (index, exercise) in self.exercises.iter().enumerate() {
            if !exercise.kind.requires_sequence() {
                continue;
            }
            for (case_index, case) in exercise.cases.iter().flatten().enumerate() {
                validate_sequence(&format!("exercises[{}].cases[{}]", index, case_index), case)?;
            }
        }

        Ok(())
    }

    /// 套用命令列設定：--format 優先於 kata.format；--only 不影響設定檔的選擇
    #[cfg(feature = "cli")]
    pub fn apply_cli_overrides(&mut self, cli: &crate::config::CliConfig) {
        if let Some(format) = cli.format {
            self.kata.format = Some(format);
        }
        if !cli.only.is_empty() {
            tracing::warn!("--only is ignored when --config is given");
        }
    }

    pub fn case_count(&self) -> usize {
        self.exercises
            .iter()
            .filter_map(|e| e.cases.as_ref())
            .map(Vec::len)
            .sum()
    }
}

impl ConfigProvider for KataConfig {
    /// 沒有任何 [[exercises]] 時執行全部練習
    fn selected_exercises(&self) -> Vec<ExerciseKind> {
        if self.exercises.is_empty() {
            return ExerciseKind::ALL.to_vec();
        }
        self.exercises
            .iter()
            .filter(|e| e.is_enabled())
            .map(|e| e.kind)
            .collect()
    }

    fn cases_for(&self, kind: ExerciseKind) -> Option<Vec<Value>> {
        self.exercises
            .iter()
            .find(|e| e.kind == kind)
            .and_then(|e| e.cases.clone())
    }

    fn output_format(&self) -> OutputFormat {
        self.kata.format.unwrap_or_default()
    }
}

impl Validate for KataConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
