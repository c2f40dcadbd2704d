// Domain Layer - Probe record, connection target and step model

pub mod record;
pub mod step;
pub mod target;

// Re-exports
pub use record::{ProbeRecord, RecordId, COLLECTION_NAME};
pub use step::ProbeStep;
pub use target::{ConnectionTarget, Credentials, HostAddress, Scheme};
