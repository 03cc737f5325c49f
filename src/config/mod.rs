//! Configuration loading and management

mod settings;

pub use settings::{GuiSettings, MotivationSettings, ProfileSettings};

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Commented config written by `fitbuddy init`
pub const DEFAULT_CONFIG: &str = r#"# fitbuddy configuration
# =====================
#
# Every key is optional; missing keys use the defaults shown here.

# Who the coach is talking to
[profile]
name = "Guerreiro"
# Used for the startup pep talk and suggestion
last_workout_type = "Musculação"
workout_history = "Musculação, Corrida, Yoga"

# Text-generation service (Gemini generateContent API)
[motivation]
model = "gemini-3-flash-preview"
base_url = "https://generativelanguage.googleapis.com"
# Environment variable holding the API key. When it is unset the app
# shows built-in motivation lines instead.
api_key_env = "API_KEY"

# Window
[gui]
width = 1100.0
height = 720.0
"#;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileSettings,

    #[serde(default)]
    pub motivation: MotivationSettings,

    #[serde(default)]
    pub gui: GuiSettings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load `path` if it exists. Unreadable or malformed files fall back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::from_file(path).unwrap_or_else(|e| {
            warn!("[fitbuddy] {:#}. Falling back to defaults.", e);
            Self::default()
        })
    }

    /// `<user config dir>/fitbuddy/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fitbuddy")
            .join("config.toml")
    }

    /// API key from the process environment; empty when unset
    pub fn api_key(&self) -> String {
        self.api_key_from(|name| std::env::var(name).ok())
    }

    /// API key resolved through `lookup` (environment variable name to value)
    pub fn api_key_from(&self, lookup: impl Fn(&str) -> Option<String>) -> String {
        lookup(&self.motivation.api_key_env).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_text_matches_defaults() {
        let parsed: Config = toml::from_str(DEFAULT_CONFIG).expect("default config parses");
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "[profile]\nname = \"Ana\"\n\n[motivation]\nmodel = \"gemini-2.5-flash\"").expect("write");

        let config = Config::from_file(file.path()).expect("parse");
        assert_eq!(config.profile.name, "Ana");
        assert_eq!(config.profile.last_workout_type, "Musculação");
        assert_eq!(config.motivation.model, "gemini-2.5-flash");
        assert_eq!(config.motivation.api_key_env, "API_KEY");
        assert_eq!(config.gui, GuiSettings::default());
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "[profile\nname = ").expect("write");

        assert!(Config::from_file(file.path()).is_err());
        assert_eq!(Config::load_or_default(file.path()), Config::default());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = Config::load_or_default(&dir.path().join("nope.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_api_key_lookup() {
        let config = Config::default();
        assert_eq!(config.api_key_from(|_| None), "");
        assert_eq!(
            config.api_key_from(|name| (name == "API_KEY").then(|| "secret".to_string())),
            "secret"
        );
    }

    #[test]
    fn test_default_path_ends_with_app_dir() {
        assert!(Config::default_path().ends_with("fitbuddy/config.toml"));
    }
}
