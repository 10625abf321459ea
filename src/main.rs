//! Pagesmith - a small static-site generator.
//!
//! This binary wires the configuration, the markdown core and the site
//! generator together behind a command-line interface.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::fs;
use std::io::{self, Write};

use pagesmith_config::Config;
use pagesmith_core::Result;
use pagesmith_render::markdown_to_html;
use pagesmith_site::Site;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    if cli.show_paths {
        cli::show_paths();
        return;
    }

    if cli.print_default_config {
        print!("{}", Config::default_toml());
        return;
    }

    setup_logging(&cli.log_level);
    info!("Pagesmith v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load_with_override(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    debug!("Loaded config: {:?}", config);

    if cli.should_build_site() {
        build_site(&config)
    } else {
        render_files(cli)
    }
}

/// Build the whole site described by `config`.
fn build_site(config: &Config) -> Result<()> {
    let report = Site::from_config(config).build()?;
    for page in &report.pages {
        debug!("Wrote {}", page.display());
    }
    info!(
        "Site written to {} ({} pages)",
        config.site.output_dir.display(),
        report.pages.len()
    );
    Ok(())
}

/// Render each markdown file to stdout as an HTML fragment.
fn render_files(cli: &Cli) -> Result<()> {
    let mut stdout = io::stdout().lock();

    for path in &cli.files {
        info!("Processing file: {}", path.display());
        let markdown = fs::read_to_string(path)?;
        let html = markdown_to_html(&markdown)?;
        writeln!(stdout, "{}", html)?;
    }

    stdout.flush()?;
    Ok(())
}
