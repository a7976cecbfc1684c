//! assetsweep - reconcile Markdown image references with attachment folders
//!
//! Thin front end: parses flags into a [`Config`], runs the reconciliation
//! engine and renders its report. Per-file failures are part of the report;
//! only invalid arguments or configuration end the process with an error.

mod cli;
mod display;
mod error;
mod logging;

use crate::cli::Cli;
use crate::display::OutputRenderer;
use crate::error::CliError;
use assetsweep_config::Config;
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse command line arguments first to check for JSON mode
    let cli = Cli::parse();
    let json_mode = cli.global.json;

    logging::init_tracing(json_mode, cli.global.debug);

    if let Err(e) = run(cli) {
        error!("Application error: {}", e);
        if !json_mode {
            eprintln!("Error: {e}");
        }
        process::exit(1);
    }
}

/// Main application logic
fn run(cli: Cli) -> Result<(), CliError> {
    info!("Starting assetsweep v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::new(&cli.target_root);
    apply_cli_config(&mut config, &cli);

    let renderer = OutputRenderer::new(cli.global.json, cli.global.color.unwrap_or_default());

    let report = assetsweep_reconcile::run(&config)?;
    logging::log_report(&report);
    renderer.render_report(&report)?;

    info!("Command completed successfully");
    Ok(())
}

/// Apply CLI flags on top of the defaults
///
/// Validation happens once, when the run starts.
fn apply_cli_config(config: &mut Config, cli: &Cli) {
    config.target_folder.clone_from(&cli.target_folder);
    config.mode = cli.mode;
    config.dry_run = cli.dry_run;

    config.scan.ignore_case = cli.scan.ignore_case;
    config.scan.wiki_links = cli.scan.wiki_links;
    config.scan.decode_links = cli.scan.decode_links;
}
