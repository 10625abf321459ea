//! Site layout configuration.
//!
//! Where content, static assets and the template live, and where
//! generated pages go.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Site layout configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SiteConfig {
    /// Directory of markdown content, walked recursively.
    /// Default: content
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    /// Directory of static assets copied verbatim.
    /// Default: static
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Directory generated pages are written to. Cleared on every build.
    /// Default: public
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// HTML template file.
    /// Default: template.html
    #[serde(default = "default_template")]
    pub template: PathBuf,

    /// Prefix that root-relative `href="/` and `src="/` are rewritten to.
    /// Default: /
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_template() -> PathBuf {
    PathBuf::from("template.html")
}

fn default_base_path() -> String {
    "/".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            static_dir: default_static_dir(),
            output_dir: default_output_dir(),
            template: default_template(),
            base_path: default_base_path(),
        }
    }
}

/// A partial [`SiteConfig`] read from an override file.
///
/// Keys missing from the file stay `None` and leave the base value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SiteOverride {
    pub content_dir: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub base_path: Option<String>,
}

impl SiteConfig {
    /// Merge an override into this config. Every key the override sets
    /// wins, including one set back to the default.
    pub fn merge(&mut self, other: &SiteOverride) {
        if let Some(content_dir) = &other.content_dir {
            self.content_dir = content_dir.clone();
        }
        if let Some(static_dir) = &other.static_dir {
            self.static_dir = static_dir.clone();
        }
        if let Some(output_dir) = &other.output_dir {
            self.output_dir = output_dir.clone();
        }
        if let Some(template) = &other.template {
            self.template = template.clone();
        }
        if let Some(base_path) = &other.base_path {
            self.base_path = base_path.clone();
        }
    }
}
