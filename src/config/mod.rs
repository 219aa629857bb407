#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::adapters::{FixtureStore, HttpContentStore};
use crate::app::{ContactDesk, StudySimplifier};
use crate::core::pages::HomeLimits;
use crate::core::router::Router;
use crate::core::site::{SiteContext, SiteSettings};
use crate::domain::ports::ContentStore;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// 合併後的最終設定：預設值 < TOML 檔 < 命令列
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub headers: HashMap<String, String>,
    pub timeout: Duration,
    pub fixtures: Option<String>,
    pub base_name: String,
    pub home: HomeLimits,
    pub simplify_delay: Duration,
    pub contact_delay: Duration,
    pub contact_ack: Duration,
    pub log_json: bool,
    pub verbose: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            headers: HashMap::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            fixtures: None,
            base_name: String::new(),
            home: HomeLimits::default(),
            simplify_delay: crate::app::simplifier::DEFAULT_DELAY,
            contact_delay: crate::app::contact::DEFAULT_SUBMIT_DELAY,
            contact_ack: crate::app::contact::DEFAULT_ACK_WINDOW,
            log_json: false,
            verbose: false,
        }
    }
}

impl SiteConfig {
    pub fn from_toml(file: &TomlConfig) -> Self {
        let mut config = Self::default();

        config.endpoint = file.store.endpoint.clone();
        config.api_key = file.api_key().map(str::to_string);
        config.headers = file.store.headers.clone().unwrap_or_default();
        config.fixtures = file.store.fixtures.clone();
        if let Some(secs) = file.store.timeout_seconds {
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(site) = &file.site {
            if let Some(base) = &site.base_name {
                config.base_name = base.clone();
            }
            config.home.services = site.home_services.unwrap_or(config.home.services);
            config.home.projects = site.home_projects.unwrap_or(config.home.projects);
        }

        if let Some(tools) = &file.tools {
            if let Some(ms) = tools.simplify_delay_ms {
                config.simplify_delay = Duration::from_millis(ms);
            }
            if let Some(ms) = tools.contact_delay_ms {
                config.contact_delay = Duration::from_millis(ms);
            }
            if let Some(ms) = tools.contact_ack_ms {
                config.contact_ack = Duration::from_millis(ms);
            }
        }

        if let Some(logging) = &file.logging {
            config.log_json = logging.format.as_deref() == Some("json");
            config.verbose = logging.verbose.unwrap_or(false);
        }

        config
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Self::from_toml(&file)
            }
            None => Self::default(),
        };

        if let Some(endpoint) = &cli.endpoint {
            config.endpoint = Some(endpoint.clone());
        }
        if let Some(key) = &cli.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(fixtures) = &cli.fixtures {
            config.fixtures = Some(fixtures.clone());
        }
        if let Some(base) = &cli.base_name {
            config.base_name = base.clone();
        }
        config.log_json |= cli.log_json;
        config.verbose |= cli.verbose;

        Ok(config)
    }

    async fn build_store(&self) -> Result<Arc<dyn ContentStore>> {
        // fixtures 優先於 endpoint
        if let Some(path) = &self.fixtures {
            return Ok(Arc::new(FixtureStore::from_file(path).await?));
        }
        let endpoint = self.endpoint.as_deref().ok_or_else(|| SiteError::MissingConfigError {
            field: "store.endpoint".to_string(),
        })?;
        Ok(Arc::new(HttpContentStore::new(
            endpoint,
            self.api_key.as_deref(),
            &self.headers,
            self.timeout,
        )?))
    }

    pub async fn build_context(&self) -> Result<SiteContext> {
        let store = self.build_store().await?;
        let settings = SiteSettings { home: self.home };
        Ok(
            SiteContext::new(store, Router::new(&self.base_name), settings).with_tools(
                StudySimplifier::new(self.simplify_delay),
                ContactDesk::new(self.contact_delay, self.contact_ack),
            ),
        )
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        match (&self.fixtures, &self.endpoint) {
            (Some(fixtures), _) => {
                validation::validate_path("store.fixtures", fixtures)?;
                validation::validate_file_extension("store.fixtures", fixtures, &["json"])?;
            }
            (None, Some(endpoint)) => validation::validate_url("store.endpoint", endpoint)?,
            (None, None) => {
                return Err(SiteError::MissingConfigError {
                    field: "store.endpoint".to_string(),
                })
            }
        }
        validation::validate_positive_number("site.home_services", self.home.services, 1)?;
        validation::validate_positive_number("site.home_projects", self.home.projects, 1)?;
        Ok(())
    }
}
