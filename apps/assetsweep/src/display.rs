//! Output rendering and formatting

use assetsweep_types::{ActionOutcome, ActionReport, ColorChoice, Mode};
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use console::{Style, Term};
use std::io;

/// Output renderer for CLI results
#[derive(Clone)]
pub struct OutputRenderer {
    /// Use JSON output format
    json_output: bool,
    /// Color configuration
    color_choice: ColorChoice,
    /// Terminal instance
    term: Term,
}

impl OutputRenderer {
    /// Create new output renderer
    pub fn new(json_output: bool, color_choice: ColorChoice) -> Self {
        Self {
            json_output,
            color_choice,
            term: Term::stdout(),
        }
    }

    /// Render a run report
    pub fn render_report(&self, report: &ActionReport) -> io::Result<()> {
        if self.json_output {
            let json = report.to_json().map_err(io::Error::other)?;
            println!("{json}");
            return Ok(());
        }

        if report.mode.is_mutating() {
            self.render_outcomes(report);
        } else {
            self.render_orphan_list(report);
        }
        Ok(())
    }

    fn render_orphan_list(&self, report: &ActionReport) {
        println!("{}", self.bold("Unreferenced image attachments:"));
        println!();
        if report.orphans.is_empty() {
            println!("  (none)");
        }
        for (index, path) in report.orphans.iter().enumerate() {
            println!("  {index:>4}  {}", path.display());
        }
        println!();
        println!(
            "Number of image attachments in folders:   {}",
            report.actual_count
        );
        println!(
            "Number of image attachments in documents: {}",
            report.declared_count
        );
    }

    fn render_outcomes(&self, report: &ActionReport) {
        if report.dry_run {
            println!("{}", self.bold("Dry run: no files were changed"));
            println!();
        }

        if report.outcomes.is_empty() {
            match report.mode {
                Mode::UpdateLocation => println!("All referenced attachments are in place."),
                _ => println!("No unreferenced attachments found."),
            }
        } else {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic);

            table.set_header(vec![
                Cell::new("Action").add_attribute(Attribute::Bold),
                Cell::new("Path").add_attribute(Attribute::Bold),
                Cell::new("Detail").add_attribute(Attribute::Bold),
            ]);

            for outcome in &report.outcomes {
                table.add_row(self.outcome_row(outcome));
            }
            println!("{table}");
        }

        println!();
        println!(
            "Declared: {}  Actual: {}  Missing: {}  Unreferenced: {}  Failed steps: {}",
            report.declared_count,
            report.actual_count,
            report.missing_count,
            report.orphan_count,
            report.failure_count()
        );
    }

    fn outcome_row(&self, outcome: &ActionOutcome) -> Vec<Cell> {
        match outcome {
            ActionOutcome::CreatedDir { path, planned } => vec![
                self.action_cell(if *planned { "Would create" } else { "Created" }, Color::Blue),
                Cell::new(path.display()),
                Cell::new("directory"),
            ],
            ActionOutcome::Moved { from, to, planned } => vec![
                self.action_cell(if *planned { "Would move" } else { "Moved" }, Color::Green),
                Cell::new(from.display()),
                Cell::new(format!("-> {}", to.display())),
            ],
            ActionOutcome::Deleted { path, planned } => vec![
                self.action_cell(if *planned { "Would delete" } else { "Deleted" }, Color::Yellow),
                Cell::new(path.display()),
                Cell::new("unreferenced"),
            ],
            ActionOutcome::RemovedEmptyDir { path } => vec![
                self.action_cell("Removed", Color::Yellow),
                Cell::new(path.display()),
                Cell::new("empty directory"),
            ],
            ActionOutcome::Unmatched { path } => vec![
                self.action_cell("Unmatched", Color::Magenta),
                Cell::new(path.display()),
                Cell::new("no attachment with this name"),
            ],
            ActionOutcome::Failed {
                operation,
                path,
                message,
                code,
            } => {
                let detail = match code {
                    Some(code) => format!("{operation}: {message} [{code}]"),
                    None => format!("{operation}: {message}"),
                };
                vec![
                    self.action_cell("Failed", Color::Red),
                    Cell::new(path.display()),
                    Cell::new(detail),
                ]
            }
        }
    }

    fn action_cell(&self, label: &str, color: Color) -> Cell {
        if self.supports_color() {
            Cell::new(label).fg(color)
        } else {
            Cell::new(label)
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.supports_color() {
            Style::new().bold().apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Check if color output is supported
    fn supports_color(&self) -> bool {
        match self.color_choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.term.features().colors_supported(),
        }
    }
}
