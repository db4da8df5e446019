use contracts::system::registration::REGISTER_PATH;
use serde::Deserialize;
use thiserror::Error;

use super::api_utils::api_url;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Absolute API origin. When empty the origin is derived from the page location.
    #[serde(default)]
    pub base_url: String,
    /// Backend port used when `base_url` is empty
    pub port: u16,
    #[serde(default = "default_register_path")]
    pub register_path: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid frontend config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8000"
port = 8000
register_path = "/register/"
"#;

fn default_register_path() -> String {
    REGISTER_PATH.to_string()
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8000".to_string(),
                port: 8000,
                register_path: default_register_path(),
            },
        }
    }
}

impl FrontendConfig {
    /// Full URL of the registration endpoint
    pub fn register_url(&self) -> String {
        api_url(&self.api, &self.api.register_path)
    }
}

/// Load the embedded frontend configuration.
///
/// There is no filesystem in the browser, so the configuration is compiled in;
/// edit `DEFAULT_CONFIG` to point the bundle at another backend.
pub fn load_config() -> Result<FrontendConfig, ConfigError> {
    log::debug!("Using embedded frontend configuration");
    let config: FrontendConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}
