// Central Error Types for the Probe

use crate::domain::ProbeStep;
use thiserror::Error;

/// Failure reported by a database adapter (port level)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("server unreachable: {0}")]
    Unreachable(String),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("operation rejected: {0}")]
    Rejected(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid connection target: {0}")]
    InvalidTarget(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Stable machine-readable name of the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Unreachable(_) => "unreachable",
            StoreError::Authentication(_) => "authentication",
            StoreError::Rejected(_) => "rejected",
            StoreError::NotFound(_) => "not_found",
            StoreError::InvalidTarget(_) => "invalid_target",
            StoreError::Internal(_) => "internal",
        }
    }
}

/// Probe-level error, one variant per failing step
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("Configuration failed: {0}")]
    Config(String),

    #[error("Connection failed: {0}")]
    Connection(#[source] StoreError),

    #[error("Write failed: {0}")]
    Write(#[source] StoreError),

    #[error("Delete failed: {0}")]
    Delete(#[source] StoreError),

    #[error("Disconnect failed: {0}")]
    Disconnect(#[source] StoreError),
}

impl ProbeError {
    /// Step that failed (None when the probe never started)
    pub fn step(&self) -> Option<ProbeStep> {
        match self {
            ProbeError::Config(_) => None,
            ProbeError::Connection(_) => Some(ProbeStep::Connect),
            ProbeError::Write(_) => Some(ProbeStep::Create),
            ProbeError::Delete(_) => Some(ProbeStep::Delete),
            ProbeError::Disconnect(_) => Some(ProbeStep::Disconnect),
        }
    }

    /// Underlying adapter failure, if any
    pub fn cause(&self) -> Option<&StoreError> {
        match self {
            ProbeError::Config(_) => None,
            ProbeError::Connection(e)
            | ProbeError::Write(e)
            | ProbeError::Delete(e)
            | ProbeError::Disconnect(e) => Some(e),
        }
    }
}

/// Result type alias using ProbeError
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Result type alias for port implementations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
