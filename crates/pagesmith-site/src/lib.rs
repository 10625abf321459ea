//! Pagesmith Site
//!
//! File-system plumbing around the markdown core: copying static assets,
//! filling the page template, and walking the content tree.
//!
//! # Example
//!
//! ```no_run
//! use pagesmith_config::Config;
//! use pagesmith_site::Site;
//!
//! let report = Site::from_config(&Config::default()).build().unwrap();
//! println!("wrote {} pages", report.pages.len());
//! ```

pub mod copy;
pub mod page;

pub use copy::{clean_dir, copy_static};
pub use page::{generate_page, generate_pages_recursive, render_page};

use log::{info, warn};
use pagesmith_config::{Config, SiteConfig, TemplateConfig};
use pagesmith_core::Result;
use std::path::PathBuf;

/// Outcome of a full site build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Generated pages, in walk order.
    pub pages: Vec<PathBuf>,
    /// Number of static files copied.
    pub static_files: usize,
}

/// A site described by its layout and template settings.
#[derive(Debug, Clone)]
pub struct Site {
    layout: SiteConfig,
    template: TemplateConfig,
}

impl Site {
    pub fn new(layout: SiteConfig, template: TemplateConfig) -> Self {
        Self { layout, template }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.site.clone(), config.template.clone())
    }

    pub fn layout(&self) -> &SiteConfig {
        &self.layout
    }

    /// Rebuild the output directory from scratch.
    ///
    /// Static assets are copied first so that generated pages win on a
    /// name clash. A missing static directory only produces a warning.
    pub fn build(&self) -> Result<BuildReport> {
        let layout = &self.layout;

        let static_files = if layout.static_dir.exists() {
            copy_static(&layout.static_dir, &layout.output_dir)?
        } else {
            warn!(
                "Static directory {} not found, skipping asset copy",
                layout.static_dir.display()
            );
            clean_dir(&layout.output_dir)?;
            0
        };

        let pages = generate_pages_recursive(
            &layout.content_dir,
            &layout.template,
            &layout.output_dir,
            &self.template,
            &layout.base_path,
        )?;

        info!(
            "Built {} pages and {} static files into {}",
            pages.len(),
            static_files,
            layout.output_dir.display()
        );

        Ok(BuildReport {
            pages,
            static_files,
        })
    }
}
