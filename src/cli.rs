//! Command-line interface for Pagesmith.

use clap::Parser;
use pagesmith_config::Config;
use std::path::PathBuf;

/// Pagesmith - turn a directory of markdown into a static site.
///
/// Copies the static directory into the output directory, then renders
/// every markdown file under the content directory through the template.
#[derive(Parser, Debug)]
#[command(
    name = "pagesmith",
    author = "Pagesmith Contributors",
    version,
    about = "A small static-site generator for markdown content",
    after_help = "Examples:\n  \
                  pagesmith\n  \
                  pagesmith -c site.toml --base-path /blog/\n  \
                  pagesmith notes.md > notes.html"
)]
pub struct Cli {
    /// Markdown files to render to stdout instead of building the site
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Directory of markdown content
    #[arg(long = "content", value_name = "DIR")]
    pub content_dir: Option<PathBuf>,

    /// Directory of static assets
    #[arg(long = "static", value_name = "DIR")]
    pub static_dir: Option<PathBuf>,

    /// Directory to write the site to
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// HTML template file
    #[arg(short = 't', long = "template", value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Prefix for root-relative links, e.g. /repo-name/
    #[arg(short = 'b', long = "base-path")]
    pub base_path: Option<String>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,

    /// Print the default configuration and exit
    #[arg(long = "print-default-config")]
    pub print_default_config: bool,
}

impl Cli {
    /// Check if we should build the whole site.
    pub fn should_build_site(&self) -> bool {
        self.files.is_empty()
    }

    /// Apply command-line overrides on top of a loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref dir) = self.content_dir {
            config.site.content_dir = dir.clone();
        }
        if let Some(ref dir) = self.static_dir {
            config.site.static_dir = dir.clone();
        }
        if let Some(ref dir) = self.output_dir {
            config.site.output_dir = dir.clone();
        }
        if let Some(ref template) = self.template {
            config.site.template = template.clone();
        }
        if let Some(ref base_path) = self.base_path {
            config.site.base_path = base_path.clone();
        }
    }
}

/// Show paths information.
pub fn show_paths() {
    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
