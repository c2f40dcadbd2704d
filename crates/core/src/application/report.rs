// Probe Report

use crate::domain::{ConnectionTarget, ProbeStep, RecordId};
use crate::error::{ProbeError, StoreError};
use serde::Serialize;
use std::time::Duration;

/// Elapsed time of one completed step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepTiming {
    pub step: ProbeStep,
    pub elapsed_ms: u64,
}

/// Serializable view of the failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeFailure {
    pub step: Option<ProbeStep>,
    /// Adapter failure kind (None for configuration errors)
    pub kind: Option<&'static str>,
    pub message: String,
}

/// Outcome of one probe run
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    /// Redacted connection string
    pub target: String,
    pub steps: Vec<StepTiming>,
    pub record_id: Option<RecordId>,
    pub failure: Option<ProbeFailure>,

    #[serde(skip)]
    error: Option<ProbeError>,
}

impl ProbeReport {
    pub fn new(target: &ConnectionTarget) -> Self {
        Self {
            target: target.redacted(),
            steps: Vec::new(),
            record_id: None,
            failure: None,
            error: None,
        }
    }

    /// Report for a run that never started (invalid configuration)
    pub fn rejected(target: impl Into<String>, error: ProbeError) -> Self {
        let mut report = Self {
            target: target.into(),
            steps: Vec::new(),
            record_id: None,
            failure: None,
            error: None,
        };
        report.fail(error);
        report
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<&ProbeError> {
        self.error.as_ref()
    }

    pub fn completed_steps(&self) -> Vec<ProbeStep> {
        self.steps.iter().map(|t| t.step).collect()
    }

    pub fn total_elapsed_ms(&self) -> u64 {
        self.steps.iter().map(|t| t.elapsed_ms).sum()
    }

    pub fn record_step(&mut self, step: ProbeStep, elapsed: Duration) {
        self.steps.push(StepTiming {
            step,
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        });
    }

    pub(crate) fn fail(&mut self, error: ProbeError) {
        self.failure = Some(ProbeFailure {
            step: error.step(),
            kind: error.cause().map(StoreError::kind),
            message: error.to_string(),
        });
        self.error = Some(error);
    }
}
