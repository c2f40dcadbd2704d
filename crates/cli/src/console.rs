//! Console output: glyph status lines and the step summary table

use colored::Colorize;
use mongo_probe_core::domain::{ConnectionTarget, ProbeStep};
use mongo_probe_core::port::ProbeReporter;
use mongo_probe_core::{ProbeError, ProbeReport};
use tabled::{Table, Tabled};

pub const STARTED_LINE: &str = "🔄 Testing MongoDB connection...";
pub const COMPLETED_LINE: &str = "✅ All tests passed! Backend is ready.";

/// Success line printed when a step finishes
pub fn step_line(step: ProbeStep) -> &'static str {
    match step {
        ProbeStep::Connect => "✅ MongoDB connection successful!",
        ProbeStep::Create => "✅ Test document created successfully!",
        ProbeStep::Delete => "✅ Test document deleted successfully!",
        ProbeStep::Disconnect => "✅ MongoDB connection closed.",
    }
}

pub fn failure_line(error: &ProbeError) -> String {
    format!("❌ {}", error)
}

/// Prints one glyph line per probe event
pub struct ConsoleReporter;

impl ProbeReporter for ConsoleReporter {
    fn started(&self, _target: &ConnectionTarget) {
        println!("{}", STARTED_LINE.cyan());
    }

    fn step_succeeded(&self, step: ProbeStep) {
        println!("{}", step_line(step).green());
    }

    fn completed(&self, _report: &ProbeReport) {
        println!("{}", COMPLETED_LINE.green().bold());
    }

    fn failed(&self, error: &ProbeError) {
        eprintln!("{}", failure_line(error).red().bold());
    }
}

#[derive(Tabled)]
struct StepRow {
    step: String,
    elapsed_ms: u64,
}

/// Table of completed steps and their durations
pub fn summary_table(report: &ProbeReport) -> String {
    let rows: Vec<StepRow> = report
        .steps
        .iter()
        .map(|t| StepRow {
            step: t.step.to_string(),
            elapsed_ms: t.elapsed_ms,
        })
        .collect();

    Table::new(rows).to_string()
}

/// Summary table to print after a text-mode run, if one was asked for
/// and at least one step completed
pub fn summary_output(report: &ProbeReport, requested: bool) -> Option<String> {
    (requested && !report.steps.is_empty()).then(|| summary_table(report))
}
