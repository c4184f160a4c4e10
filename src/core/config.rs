use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_SWITCHEO_BASE_URL: &str = "https://interview.switcheo.com";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SwitcheoProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub switcheo: Option<SwitcheoProviderConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            switcheo: Some(SwitcheoProviderConfig {
                base_url: DEFAULT_SWITCHEO_BASE_URL.to_string(),
            }),
        }
    }
}

fn default_reference_currency() -> String {
    "USD".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    /// Unit the feed quotes prices in. Only used for display.
    #[serde(default = "default_reference_currency")]
    pub reference_currency: String,
    #[serde(default)]
    pub display_names: HashMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            providers: ProvidersConfig::default(),
            reference_currency: default_reference_currency(),
            display_names: HashMap::new(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "swaprate", "swaprate")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn switcheo_base_url(&self) -> &str {
        self.providers
            .switcheo
            .as_ref()
            .map_or(DEFAULT_SWITCHEO_BASE_URL, |p| &p.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
providers:
  switcheo:
    base_url: "http://example.com/feed"
reference_currency: "EUR"
display_names:
  FOO: "Foo Token"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.switcheo_base_url(), "http://example.com/feed");
        assert_eq!(config.reference_currency, "EUR");
        assert_eq!(
            config.display_names.get("FOO").map(String::as_str),
            Some("Foo Token")
        );
    }

    #[test]
    fn test_config_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").expect("Failed to deserialize");
        assert_eq!(config.switcheo_base_url(), DEFAULT_SWITCHEO_BASE_URL);
        assert_eq!(config.reference_currency, "USD");
        assert!(config.display_names.is_empty());

        let without_switcheo: AppConfig =
            serde_yaml::from_str("providers: {}").expect("Failed to deserialize");
        assert!(without_switcheo.providers.switcheo.is_none());
        assert_eq!(without_switcheo.switcheo_base_url(), DEFAULT_SWITCHEO_BASE_URL);
    }

    #[test]
    fn test_load_from_path_reports_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("missing.yaml");
        let err = AppConfig::load_from_path(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
