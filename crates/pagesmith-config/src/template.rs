//! Template placeholder configuration.

use serde::{Deserialize, Serialize};

/// Placeholders substituted in the page template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateConfig {
    /// Replaced by the rendered page body.
    /// Default: {{ Content }}
    #[serde(default = "default_content_placeholder")]
    pub content_placeholder: String,

    /// Replaced by the page title.
    /// Default: {{ Title }}
    #[serde(default = "default_title_placeholder")]
    pub title_placeholder: String,
}

fn default_content_placeholder() -> String {
    "{{ Content }}".to_string()
}

fn default_title_placeholder() -> String {
    "{{ Title }}".to_string()
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            content_placeholder: default_content_placeholder(),
            title_placeholder: default_title_placeholder(),
        }
    }
}

/// A partial [`TemplateConfig`] read from an override file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateOverride {
    pub content_placeholder: Option<String>,
    pub title_placeholder: Option<String>,
}

impl TemplateConfig {
    /// Merge an override into this config; set keys always win.
    pub fn merge(&mut self, other: &TemplateOverride) {
        if let Some(placeholder) = &other.content_placeholder {
            self.content_placeholder = placeholder.clone();
        }
        if let Some(placeholder) = &other.title_placeholder {
            self.title_placeholder = placeholder.clone();
        }
    }
}
