use crate::app::CATALOG;
use crate::core::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub catalog: CatalogInfo,
    pub runner: Option<RunnerConfig>,
    pub random: Option<RandomConfig>,
    pub monitoring: Option<MonitoringConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunnerConfig {
    pub examples: Option<Vec<String>>,
    pub skip: Option<Vec<String>>,
    pub show_headers: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RandomConfig {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"))
}

impl CatalogConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_SEED})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("catalog.name", &self.catalog.name)?;

        if let Some(runner) = &self.runner {
            if let Some(examples) = &runner.examples {
                validation::validate_known_names("runner.examples", examples, &CATALOG)?;
            }
            if let Some(skip) = &runner.skip {
                validation::validate_known_names("runner.skip", skip, &CATALOG)?;
            }
        }

        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.level {
                validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
            }
            if let Some(format) = &logging.format {
                validation::validate_one_of("logging.format", format, &LOG_FORMATS)?;
            }
        }

        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|format| format == "json")
            .unwrap_or(false)
    }

    /// 命令列參數優先於設定檔
    #[cfg(feature = "cli")]
    pub fn apply_cli_overrides(&mut self, cli: &crate::config::CliConfig) {
        let runner = self.runner.get_or_insert_with(RunnerConfig::default);
        if !cli.examples.is_empty() {
            runner.examples = Some(cli.examples.clone());
        }
        if !cli.skip.is_empty() {
            runner.skip = Some(cli.skip.clone());
        }
        if cli.no_headers {
            runner.show_headers = Some(false);
        }

        if let Some(seed) = cli.seed {
            self.random.get_or_insert_with(RandomConfig::default).seed = Some(seed);
        }

        if cli.monitor {
            self.monitoring = Some(MonitoringConfig { enabled: true });
        }
    }
}

impl ConfigProvider for CatalogConfig {
    fn selected_examples(&self) -> &[String] {
        self.runner
            .as_ref()
            .and_then(|r| r.examples.as_deref())
            .unwrap_or(&[])
    }

    fn skipped_examples(&self) -> &[String] {
        self.runner
            .as_ref()
            .and_then(|r| r.skip.as_deref())
            .unwrap_or(&[])
    }

    fn random_seed(&self) -> Option<u64> {
        self.random.as_ref().and_then(|r| r.seed)
    }

    fn show_headers(&self) -> bool {
        self.runner
            .as_ref()
            .and_then(|r| r.show_headers)
            .unwrap_or(true)
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
