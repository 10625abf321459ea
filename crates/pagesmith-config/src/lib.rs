//! Pagesmith Config
//!
//! This crate handles configuration loading and management
//! for pagesmith, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/pagesmith/config.toml`
//! - macOS: `~/Library/Application Support/pagesmith/config.toml`
//! - Windows: `%APPDATA%\pagesmith\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use pagesmith_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./site.toml")).unwrap();
//! ```

mod site;
mod template;

pub use site::{SiteConfig, SiteOverride};
pub use template::{TemplateConfig, TemplateOverride};

use pagesmith_core::{PagesmithError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[site]
ContentDir = "content"
StaticDir  = "static"
OutputDir  = "public"
Template   = "template.html"
BasePath   = "/"

[template]
ContentPlaceholder = "{{ Content }}"
TitlePlaceholder   = "{{ Title }}"
"#;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Input and output locations
    #[serde(default)]
    pub site: SiteConfig,

    /// Template placeholders
    #[serde(default)]
    pub template: TemplateConfig,
}

/// Override layer parsed from `-c`; only the keys it sets are applied.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigOverride {
    #[serde(default)]
    pub site: SiteOverride,

    #[serde(default)]
    pub template: TemplateOverride,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use pagesmith_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[site]"));
    /// assert!(toml.contains("[template]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "pagesmith")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            PagesmithError::Config(format!("Parse error in {}: {}", path.display(), e))
        })
    }

    /// Load configuration with an optional override file or string.
    ///
    /// If `override_config` names an existing file it is read; otherwise it
    /// is parsed as inline TOML. The result is merged over [`Config::load`].
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            let override_toml = if override_path.exists() {
                std::fs::read_to_string(override_path)?
            } else {
                override_str.to_string()
            };

            let override_config: ConfigOverride = toml::from_str(&override_toml)
                .map_err(|e| PagesmithError::Config(format!("Override parse error: {}", e)))?;

            config.merge(&override_config);
        }

        Ok(config)
    }

    /// Merge an override into this config.
    ///
    /// Every key present in `other` takes precedence; absent keys keep the
    /// current value.
    ///
    /// # Example
    ///
    /// ```
    /// use pagesmith_config::{Config, ConfigOverride};
    ///
    /// let mut base = Config::default();
    /// let override_config: ConfigOverride = toml::from_str(r#"
    ///     [site]
    ///     OutputDir = "docs"
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert_eq!(base.site.output_dir.to_str(), Some("docs"));
    /// assert_eq!(base.site.content_dir.to_str(), Some("content"));
    /// ```
    pub fn merge(&mut self, other: &ConfigOverride) {
        self.site.merge(&other.site);
        self.template.merge(&other.template);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| PagesmithError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.site.content_dir, PathBuf::from("content"));
        assert_eq!(config.site.output_dir, PathBuf::from("public"));
        assert_eq!(config.site.base_path, "/");
        assert_eq!(config.template.content_placeholder, "{{ Content }}");
        assert_eq!(config.template.title_placeholder, "{{ Title }}");
    }

    #[test]
    fn test_default_matches_struct_defaults() {
        let config = Config::default();
        assert_eq!(config.site, SiteConfig::default());
        assert_eq!(config.template, TemplateConfig::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[site]\nBasePath = \"/blog/\"").unwrap();
        assert_eq!(config.site.base_path, "/blog/");
        assert_eq!(config.site.static_dir, PathBuf::from("static"));
        assert_eq!(config.template, TemplateConfig::default());
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();
        let override_toml = r#"
            [site]
            Template = "layout.html"
            [template]
            TitlePlaceholder = "%TITLE%"
        "#;
        let override_config: ConfigOverride = toml::from_str(override_toml).unwrap();

        base.merge(&override_config);
        assert_eq!(base.site.template, PathBuf::from("layout.html"));
        assert_eq!(base.site.output_dir, PathBuf::from("public"));
        assert_eq!(base.template.title_placeholder, "%TITLE%");
        assert_eq!(base.template.content_placeholder, "{{ Content }}");
    }

    #[test]
    fn test_override_can_restore_default() {
        let mut base: Config = toml::from_str("[site]\nOutputDir = \"docs\"").unwrap();
        assert_eq!(base.site.output_dir, PathBuf::from("docs"));

        let override_config: ConfigOverride =
            toml::from_str("[site]\nOutputDir = \"public\"").unwrap();
        base.merge(&override_config);
        assert_eq!(base.site.output_dir, PathBuf::from("public"));
        assert_eq!(base.site.content_dir, PathBuf::from("content"));
    }

    #[test]
    fn test_config_path() {
        if let Some(p) = Config::config_path() {
            assert!(p.to_string_lossy().contains("pagesmith"));
        }
    }

    #[test]
    fn test_load_from_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[site\nnope").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, PagesmithError::Config(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.site.base_path = "/docs/".to_string();
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_roundtrip_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
