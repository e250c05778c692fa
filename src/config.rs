//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\dossier\config.toml
//! - macOS: ~/Library/Application Support/dossier/config.toml
//! - Linux: ~/.config/dossier/config.toml
//!
//! A missing file means defaults. A file that exists but does not parse or
//! validate is an error: a half-applied config is worse than none.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::acquisition::catalog::PRIORITY_COUNTRIES;
use crate::acquisition::plan::LadderMode;
use crate::acquisition::{notices, profiles, synthetic};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credentials (keep separate for potential future encryption)
    pub credentials: Credentials,

    /// Provider endpoints
    pub providers: ProvidersConfig,

    /// Registry ladder shape and timeouts
    pub ladder: LadderConfig,

    /// Which fallbacks may run when the providers are exhausted
    pub fallback: FallbackConfig,
}

/// API credentials
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Web search API key for profile lookups
    pub search_api_key: Option<String>,

    /// Web search engine id
    pub search_engine_id: Option<String>,
}

impl Credentials {
    /// Both search credentials, if both are set and non-blank.
    pub fn search(&self) -> Option<(&str, &str)> {
        let key = self.search_api_key.as_deref().filter(|k| !k.trim().is_empty())?;
        let cx = self.search_engine_id.as_deref().filter(|c| !c.trim().is_empty())?;
        Some((key, cx))
    }

    /// Replace whichever credentials are given.
    pub fn apply_overrides(&mut self, api_key: Option<String>, engine_id: Option<String>) {
        if api_key.is_some() {
            self.search_api_key = api_key;
        }
        if engine_id.is_some() {
            self.search_engine_id = engine_id;
        }
    }
}

/// Provider endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Notice registry API root
    pub notices_base_url: String,

    /// Web search endpoint
    pub search_base_url: String,

    /// Random person generator endpoint
    pub generator_base_url: String,

    /// Site prefix profile searches are scoped to
    pub profile_site: String,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            notices_base_url: notices::DEFAULT_BASE_URL.to_string(),
            search_base_url: profiles::DEFAULT_BASE_URL.to_string(),
            generator_base_url: synthetic::DEFAULT_BASE_URL.to_string(),
            profile_site: "linkedin.com/in/".to_string(),
        }
    }
}

/// Registry ladder settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    /// "full" walks every priority country, "light" only one random country
    pub mode: LadderMode,

    /// Countries tried after the random one, in order
    pub priority_countries: Vec<String>,

    /// Per-call timeout in full mode
    pub request_timeout_secs: u64,

    /// Per-call timeout in light mode
    pub light_timeout_secs: u64,

    /// Page size requested from the registry
    pub results_per_page: u32,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            mode: LadderMode::Full,
            priority_countries: PRIORITY_COUNTRIES.iter().map(|c| c.to_string()).collect(),
            request_timeout_secs: 12,
            light_timeout_secs: 4,
            results_per_page: 200,
        }
    }
}

impl LadderConfig {
    /// Per-call timeout for the configured mode.
    pub fn timeout(&self) -> Duration {
        match self.mode {
            LadderMode::Full => Duration::from_secs(self.request_timeout_secs),
            LadderMode::Light => Duration::from_secs(self.light_timeout_secs),
        }
    }
}

/// Fallback switches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Use the random person generator when providers come up empty
    pub synthetic: bool,

    /// Use the embedded offline table as the last resort
    pub offline: bool,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            synthetic: true,
            offline: true,
        }
    }
}

impl Config {
    /// Reject settings no acquisition could run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, url) in [
            ("providers.notices_base_url", &self.providers.notices_base_url),
            ("providers.search_base_url", &self.providers.search_base_url),
            ("providers.generator_base_url", &self.providers.generator_base_url),
        ] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::Invalid(format!(
                    "{field} must be an http(s) URL, got '{url}'"
                )));
            }
        }

        if self.providers.profile_site.trim().is_empty() {
            return Err(ConfigError::Invalid("providers.profile_site is empty".into()));
        }
        if self.ladder.request_timeout_secs == 0 || self.ladder.light_timeout_secs == 0 {
            return Err(ConfigError::Invalid("ladder timeouts must be at least 1 second".into()));
        }
        if self.ladder.results_per_page == 0 {
            return Err(ConfigError::Invalid("ladder.results_per_page must be positive".into()));
        }
        Ok(())
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("dossier"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from `path`, or from the default location.
///
/// Returns the default config when the file doesn't exist.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) => path,
            None => {
                tracing::warn!("Could not determine config directory, using defaults");
                return Ok(Config::default());
            }
        },
    };

    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Ok(Config::default());
    }

    let contents =
        std::fs::read_to_string(&path).map_err(|e| ConfigError::Read(path.clone(), e))?;
    let config: Config =
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.clone(), e))?;
    config.validate()?;

    tracing::info!("Loaded config from {:?}", path);
    Ok(config)
}

/// Save configuration to `path`, or to the default location.
///
/// Creates the parent directory if it doesn't exist. Refuses to replace an
/// existing file unless `overwrite` is set.
pub fn save(config: &Config, path: Option<&Path>, overwrite: bool) -> Result<PathBuf, ConfigError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => config_path().ok_or(ConfigError::NoConfigDir)?,
    };

    if path.exists() && !overwrite {
        return Err(ConfigError::AlreadyExists(path));
    }

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, &path)
        .map_err(|e| ConfigError::Rename(temp_path, path.clone(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(path)
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse config {0}: {1}")]
    Parse(PathBuf, toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Config file {0} already exists (use --force to overwrite)")]
    AlreadyExists(PathBuf),

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[credentials]"));
        assert!(toml.contains("[providers]"));
        assert!(toml.contains("[ladder]"));
        assert!(toml.contains("[fallback]"));
        assert!(toml.contains("mode = \"full\""));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[credentials]
search_api_key = "my-key"

[ladder]
mode = "light"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.credentials.search_api_key, Some("my-key".to_string()));
        // Only one credential set: no search
        assert_eq!(config.credentials.search(), None);
        assert_eq!(config.ladder.mode, LadderMode::Light);
        assert_eq!(config.ladder.timeout(), Duration::from_secs(4));
        assert_eq!(config.ladder.priority_countries.len(), PRIORITY_COUNTRIES.len());
        assert!(config.fallback.offline);
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let mut credentials = Credentials {
            search_api_key: Some("file-key".to_string()),
            search_engine_id: Some("file-cx".to_string()),
        };
        credentials.apply_overrides(Some("env-key".to_string()), None);
        assert_eq!(credentials.search(), Some(("env-key", "file-cx")));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = Config::default();
        config.providers.notices_base_url = "ftp://registry".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(msg)) if msg.contains("notices_base_url")));

        let mut config = Config::default();
        config.ladder.light_timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.ladder.results_per_page = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.providers.profile_site = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ladder]\nrequest_timeout_secs = \"soon\"\n").unwrap();

        assert!(matches!(load(Some(&path)), Err(ConfigError::Parse(..))));
    }

    #[test]
    fn test_invalid_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ladder]\nresults_per_page = 0\n").unwrap();

        assert!(matches!(load(Some(&path)), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.credentials.search_engine_id = Some("cx-1".to_string());
        config.fallback.offline = false;

        let written = save(&config, Some(&path), false).unwrap();
        assert_eq!(written, path);
        assert_eq!(load(Some(&path)).unwrap(), config);

        // Second save without overwrite refuses
        assert!(matches!(
            save(&config, Some(&path), false),
            Err(ConfigError::AlreadyExists(_))
        ));
        assert!(save(&config, Some(&path), true).is_ok());
    }
}
