//! Tracing setup and structured run summaries

use assetsweep_types::{ActionOutcome, ActionReport};
use tracing::{debug, info};

const DEBUG_FILTER: &str = "info,assetsweep=debug,assetsweep_scan=debug,assetsweep_reconcile=debug,assetsweep_platform=debug,assetsweep_config=debug";
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber
///
/// Logs always go to stderr. In JSON mode they are suppressed entirely unless
/// debugging is requested, in which case they are emitted as JSON lines so
/// stdout stays a single JSON document.
pub fn init_tracing(json_mode: bool, debug_enabled_flag: bool) {
    let debug_enabled = std::env::var("RUST_LOG").is_ok() || debug_enabled_flag;
    let filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(if debug_enabled {
                DEBUG_FILTER
            } else {
                DEFAULT_FILTER
            })
        })
    };

    if json_mode {
        if debug_enabled {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(filter())
                .init();
        } else {
            tracing_subscriber::fmt()
                .with_writer(std::io::sink)
                .with_env_filter("off")
                .init();
        }
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(debug_enabled)
            .with_env_filter(filter())
            .init();
    }
}

/// Log the outcome counts of a finished run
pub fn log_report(report: &ActionReport) {
    let mut moved = 0usize;
    let mut deleted = 0usize;
    let mut removed_dirs = 0usize;
    let mut unmatched = 0usize;
    for outcome in &report.outcomes {
        match outcome {
            ActionOutcome::Moved { .. } => moved += 1,
            ActionOutcome::Deleted { .. } => deleted += 1,
            ActionOutcome::RemovedEmptyDir { .. } => removed_dirs += 1,
            ActionOutcome::Unmatched { path } => {
                unmatched += 1;
                debug!(path = %path.display(), "reference left unresolved");
            }
            ActionOutcome::CreatedDir { .. } | ActionOutcome::Failed { .. } => {}
        }
    }

    info!(
        mode = %report.mode,
        dry_run = report.dry_run,
        declared = report.declared_count,
        actual = report.actual_count,
        missing = report.missing_count,
        orphans = report.orphan_count,
        moved,
        deleted,
        removed_dirs,
        unmatched,
        failures = report.failure_count(),
        "Run completed"
    );
}
