//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across threads.

use std::sync::{Arc, RwLock};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// ApiConfig
// ---------------------------------------------------------------------------

/// Connection settings for the OpenAI-compatible backend.
///
/// Read by every transformation call; written only when the user saves or
/// clears their settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Bearer token for the `Authorization` header.  Empty means the
    /// application is not configured yet.
    pub api_key: String,
    /// Base URL of the API endpoint, without the `/chat/completions` suffix.
    pub base_url: String,
    /// Model identifier sent to the API (e.g. `"gpt-4o-mini"`).
    pub model: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com/v1".into(),
            model: "gpt-4o-mini".into(),
        }
    }
}

impl ApiConfig {
    /// A request can only be attempted once an API key is present.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Reset all credentials to their defaults (empty key, stock endpoint).
    pub fn clear_credentials(&mut self) {
        *self = Self::default();
    }
}

// ---------------------------------------------------------------------------
// SharedConfig
// ---------------------------------------------------------------------------

/// Process-wide configuration handle: one writer (the settings UI / CLI),
/// many readers (every in-flight transformation).
///
/// Callers take a [`snapshot`] at the start of a request and use that
/// consistent copy for the whole call, so a concurrent settings save never
/// changes a request mid-flight.
pub type SharedConfig = Arc<RwLock<ApiConfig>>;

/// Wrap `config` for shared read access.
pub fn new_shared_config(config: ApiConfig) -> SharedConfig {
    Arc::new(RwLock::new(config))
}

/// Copy the current configuration.
///
/// A poisoned lock means a writer panicked mid-update; the last written value
/// is still the best available, so the poison is ignored.
pub fn snapshot(config: &SharedConfig) -> ApiConfig {
    match config.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use text_correct::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend connection settings.
    pub api: ApiConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// (first-run scenario) so callers never need to special-case a missing
    /// file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns `true` when no `settings.toml` file exists yet — first-run
    /// detection used by the onboarding flow.
    pub fn is_first_run() -> bool {
        !AppPaths::new().settings_file.exists()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_values_match_stock_endpoint() {
        let cfg = ApiConfig::default();
        assert_eq!(cfg.api_key, "");
        assert_eq!(cfg.base_url, "https://api.openai.com/v1");
        assert_eq!(cfg.model, "gpt-4o-mini");
        assert!(!cfg.is_configured());
    }

    #[test]
    fn is_configured_follows_api_key() {
        let mut cfg = ApiConfig::default();
        assert!(!cfg.is_configured());
        cfg.api_key = "sk-test-1234".into();
        assert!(cfg.is_configured());
    }

    #[test]
    fn clear_credentials_resets_everything() {
        let mut cfg = ApiConfig {
            api_key: "sk-test".into(),
            base_url: "https://example.invalid/v1".into(),
            model: "custom-model".into(),
        };
        cfg.clear_credentials();
        assert_eq!(cfg, ApiConfig::default());
    }

    /// Verify that a modified `AppConfig` can be serialised to TOML and
    /// deserialised back without any data loss.
    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let mut original = AppConfig::default();
        original.api.api_key = "sk-round-trip".into();
        original.api.base_url = "https://api.groq.com/openai/v1".into();
        original.api.model = "llama-3.1-8b-instant".into();

        original.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(original, loaded);
    }

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn snapshot_is_a_consistent_copy() {
        let shared = new_shared_config(ApiConfig {
            api_key: "sk-a".into(),
            ..ApiConfig::default()
        });

        let before = snapshot(&shared);

        // A settings save after the snapshot must not affect the copy.
        shared.write().unwrap().api_key = "sk-b".into();

        assert_eq!(before.api_key, "sk-a");
        assert_eq!(snapshot(&shared).api_key, "sk-b");
    }
}
