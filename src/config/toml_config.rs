use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub store: StoreConfig,
    pub site: Option<SiteSection>,
    pub tools: Option<ToolsConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
    /// 設定後改用本機 JSON 檔，不連線
    pub fixtures: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSection {
    pub base_name: Option<String>,
    pub home_services: Option<usize>,
    pub home_projects: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsConfig {
    pub simplify_delay_ms: Option<u64>,
    pub contact_delay_ms: Option<u64>,
    pub contact_ack_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// "compact" 或 "json"
    pub format: Option<String>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換 `${VAR_NAME}` 形式的環境變數；未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 未替換的 `${...}` 視為缺少設定
    pub fn api_key(&self) -> Option<&str> {
        self.store
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty() && !k.starts_with("${"))
    }

    pub fn log_format(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.format.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.store.endpoint {
            validation::validate_url("store.endpoint", endpoint)?;
        }
        if let Some(fixtures) = &self.store.fixtures {
            validation::validate_path("store.fixtures", fixtures)?;
            validation::validate_file_extension("store.fixtures", fixtures, &["json"])?;
        }
        if let Some(timeout) = self.store.timeout_seconds {
            validation::validate_range("store.timeout_seconds", timeout, 1, 300)?;
        }
        if let Some(site) = &self.site {
            if let Some(n) = site.home_services {
                validation::validate_positive_number("site.home_services", n, 1)?;
            }
            if let Some(n) = site.home_projects {
                validation::validate_positive_number("site.home_projects", n, 1)?;
            }
        }
        if let Some(format) = self.log_format() {
            if !["compact", "json"].contains(&format) {
                return Err(SiteError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.to_string(),
                    reason: "Valid formats: compact, json".to_string(),
                });
            }
        }
        Ok(())
    }
}
