//! Command line interface definition

use assetsweep_types::{ColorChoice, Mode};
use clap::{Args, Parser};
use std::path::PathBuf;

/// assetsweep - reconcile Markdown image references with attachment folders
#[derive(Parser)]
#[command(name = "assetsweep")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Reconcile Markdown image references with attachment folders")]
#[command(
    long_about = "A small tool for dealing with duplicate image attachments.\n\
It finds attachment files no document references, lists or deletes them, and \
can move attachments to the location the documents point at."
)]
pub struct Cli {
    /// The root directory for storing your documents
    #[arg(long, value_name = "PATH")]
    pub target_root: PathBuf,

    /// The name of the attachment folder
    #[arg(long, value_name = "NAME", default_value = assetsweep_config::DEFAULT_TARGET_FOLDER)]
    pub target_folder: String,

    /// Reconciliation action to perform
    #[arg(long, value_enum, default_value_t = Mode::ListUseless)]
    pub mode: Mode,

    /// Show what would be moved or deleted without touching any file
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub scan: ScanArgs,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Link recognition switches
#[derive(Args)]
pub struct ScanArgs {
    /// Match image links and extensions case-insensitively
    #[arg(long)]
    pub ignore_case: bool,

    /// Also recognise `![[path.png]]` embeds
    #[arg(long)]
    pub wiki_links: bool,

    /// Percent-decode links (`my%20pic.png`) before resolving them
    #[arg(long)]
    pub decode_links: bool,
}

/// Output and logging arguments
#[derive(Args)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,

    /// Color output control
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,
}
