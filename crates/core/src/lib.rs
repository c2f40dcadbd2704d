// Mongo Probe Core - Probe Procedure & Ports
// NO database driver dependencies (hexagonal split)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use application::{ConnectivityProbe, ProbeReport};
pub use error::{ProbeError, Result, StoreError, StoreResult};
