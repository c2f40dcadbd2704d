// Probe Reporter Port (progress events)

use crate::application::ProbeReport;
use crate::domain::{ConnectionTarget, ProbeStep};
use crate::error::ProbeError;

/// Receives probe progress as each step finishes
///
/// Events arrive in order: `started`, one `step_succeeded` per completed
/// step, then exactly one of `completed` or `failed`.
pub trait ProbeReporter: Send + Sync {
    fn started(&self, target: &ConnectionTarget);

    fn step_succeeded(&self, step: ProbeStep);

    fn completed(&self, report: &ProbeReport);

    fn failed(&self, error: &ProbeError);
}

/// Reporter that discards every event
pub struct SilentReporter;

impl ProbeReporter for SilentReporter {
    fn started(&self, _target: &ConnectionTarget) {}
    fn step_succeeded(&self, _step: ProbeStep) {}
    fn completed(&self, _report: &ProbeReport) {}
    fn failed(&self, _error: &ProbeError) {}
}

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ReporterEvent {
        Started(String),
        StepSucceeded(ProbeStep),
        Completed,
        Failed(Option<ProbeStep>),
    }

    /// Records every event for later assertions
    #[derive(Default)]
    pub struct RecordingReporter {
        events: Mutex<Vec<ReporterEvent>>,
    }

    impl RecordingReporter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn events(&self) -> Vec<ReporterEvent> {
            self.events.lock().unwrap().clone()
        }

        fn push(&self, event: ReporterEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl ProbeReporter for RecordingReporter {
        fn started(&self, target: &ConnectionTarget) {
            self.push(ReporterEvent::Started(target.redacted()));
        }

        fn step_succeeded(&self, step: ProbeStep) {
            self.push(ReporterEvent::StepSucceeded(step));
        }

        fn completed(&self, _report: &ProbeReport) {
            self.push(ReporterEvent::Completed);
        }

        fn failed(&self, error: &ProbeError) {
            self.push(ReporterEvent::Failed(error.step()));
        }
    }
}
