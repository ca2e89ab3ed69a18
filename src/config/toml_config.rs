use crate::config::{DEFAULT_DATA_FILE, DEFAULT_DELIMITER};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, ZooError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub data: DataConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    pub path: Option<String>,
    pub delimiter: Option<String>,
    pub has_header: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ZooError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ZooError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ZOO_DATA})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ZooError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn override_data_file(&mut self, path: String) {
        tracing::debug!("Data file overridden to: {}", path);
        self.data.path = Some(path);
    }
}

impl ConfigProvider for TomlConfig {
    fn data_file(&self) -> &str {
        self.data.path.as_deref().unwrap_or(DEFAULT_DATA_FILE)
    }

    fn delimiter(&self) -> u8 {
        // validate() rejects anything that falls through here
        self.data
            .delimiter
            .as_deref()
            .and_then(|d| validation::validate_delimiter("data.delimiter", d).ok())
            .unwrap_or(DEFAULT_DELIMITER)
    }

    fn has_header(&self) -> bool {
        self.data.has_header.unwrap_or(true)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.data.path {
            validation::validate_path("data.path", path)?;
        }

        if let Some(delimiter) = &self.data.delimiter {
            validation::validate_delimiter("data.delimiter", delimiter)?;
        }

        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_ref()) {
            validation::validate_non_empty_string("logging.level", level)?;
        }

        Ok(())
    }
}
