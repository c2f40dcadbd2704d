// Application Layer - Probe procedure and its report

pub mod probe;
pub mod report;

// Re-exports
pub use probe::ConnectivityProbe;
pub use report::{ProbeFailure, ProbeReport, StepTiming};
