// Port Layer - Interfaces for external dependencies

pub mod record_store;
pub mod reporter;
pub mod time_provider; // For deterministic testing

// Re-exports
pub use record_store::{Connector, RecordStore};
pub use reporter::{ProbeReporter, SilentReporter};
pub use time_provider::TimeProvider;
