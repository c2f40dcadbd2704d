// Probe Record Domain Model

use serde::{Deserialize, Serialize};

/// Generated record identifier (ObjectId hex string)
pub type RecordId = String;

/// Collection the probe record is written to
pub const COLLECTION_NAME: &str = "tests";

pub const PROBE_TITLE: &str = "Test Tutorial";
pub const PROBE_DESCRIPTION: &str = "This is a test tutorial";

/// Throwaway document created and deleted within one probe run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeRecord {
    pub title: String,
    pub description: String,
    pub published: bool,

    pub created_at: i64, // epoch ms
    pub updated_at: i64, // epoch ms

    /// Document version key, 0 until the document is modified
    #[serde(rename = "__v")]
    pub version: i32,
}

impl ProbeRecord {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        published: bool,
        now_millis: i64,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            published,
            created_at: now_millis,
            updated_at: now_millis,
            version: 0,
        }
    }

    /// The fixed record every probe run writes
    pub fn probe(now_millis: i64) -> Self {
        Self::new(PROBE_TITLE, PROBE_DESCRIPTION, false, now_millis)
    }
}
