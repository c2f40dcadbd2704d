// Probe Step Model

use serde::{Deserialize, Serialize};

/// Steps of a probe run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProbeStep {
    Connect,
    Create,
    Delete,
    Disconnect,
}

impl ProbeStep {
    pub const ALL: [ProbeStep; 4] = [
        ProbeStep::Connect,
        ProbeStep::Create,
        ProbeStep::Delete,
        ProbeStep::Disconnect,
    ];
}

impl std::fmt::Display for ProbeStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeStep::Connect => write!(f, "CONNECT"),
            ProbeStep::Create => write!(f, "CREATE"),
            ProbeStep::Delete => write!(f, "DELETE"),
            ProbeStep::Disconnect => write!(f, "DISCONNECT"),
        }
    }
}
