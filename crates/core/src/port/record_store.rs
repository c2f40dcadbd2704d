// Record Store Port (Interface)
// reason: async-trait needed for dyn dispatch of async ports
use async_trait::async_trait;

use crate::domain::{ConnectionTarget, ProbeRecord, RecordId};
use crate::error::StoreResult;

/// Opens a scoped connection to the database named by a target
#[async_trait]
pub trait Connector: Send + Sync {
    /// Connect and verify the server answers (credentials included)
    ///
    /// The returned store owns the connection until [`RecordStore::close`].
    async fn connect(&self, target: &ConnectionTarget) -> StoreResult<Box<dyn RecordStore>>;
}

/// Probe record persistence over one open connection
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist a record, returning its generated identifier
    async fn insert(&self, record: &ProbeRecord) -> StoreResult<RecordId>;

    /// Delete a record by identifier, returning the number of documents removed
    async fn delete(&self, id: &RecordId) -> StoreResult<u64>;

    /// Count documents in the probe collection
    async fn count(&self) -> StoreResult<u64>;

    /// Release the connection
    async fn close(&self) -> StoreResult<()>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::StoreError;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Failures to inject into the in-memory store
    #[derive(Debug, Clone, Default)]
    pub struct FailurePlan {
        pub connect: Option<StoreError>,
        pub insert: Option<StoreError>,
        pub delete: Option<StoreError>,
        pub close: Option<StoreError>,
        /// Delete reports success but removes nothing
        pub lose_deletes: bool,
    }

    #[derive(Default)]
    struct MockState {
        records: HashMap<RecordId, ProbeRecord>,
        next_id: u64,
        open_connections: usize,
        connect_calls: usize,
        close_calls: usize,
        last_inserted: Option<ProbeRecord>,
    }

    /// In-memory connector with failure injection
    #[derive(Clone, Default)]
    pub struct InMemoryConnector {
        state: Arc<Mutex<MockState>>,
        plan: FailurePlan,
    }

    impl InMemoryConnector {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn fail_connect(mut self, err: StoreError) -> Self {
            self.plan.connect = Some(err);
            self
        }

        pub fn fail_insert(mut self, err: StoreError) -> Self {
            self.plan.insert = Some(err);
            self
        }

        pub fn fail_delete(mut self, err: StoreError) -> Self {
            self.plan.delete = Some(err);
            self
        }

        pub fn fail_close(mut self, err: StoreError) -> Self {
            self.plan.close = Some(err);
            self
        }

        pub fn lose_deletes(mut self) -> Self {
            self.plan.lose_deletes = true;
            self
        }

        pub fn record_count(&self) -> usize {
            self.state.lock().unwrap().records.len()
        }

        pub fn open_connections(&self) -> usize {
            self.state.lock().unwrap().open_connections
        }

        pub fn connect_calls(&self) -> usize {
            self.state.lock().unwrap().connect_calls
        }

        pub fn close_calls(&self) -> usize {
            self.state.lock().unwrap().close_calls
        }

        pub fn last_inserted(&self) -> Option<ProbeRecord> {
            self.state.lock().unwrap().last_inserted.clone()
        }
    }

    #[async_trait]
    impl Connector for InMemoryConnector {
        async fn connect(&self, _target: &ConnectionTarget) -> StoreResult<Box<dyn RecordStore>> {
            let mut state = self.state.lock().unwrap();
            state.connect_calls += 1;
            if let Some(err) = &self.plan.connect {
                return Err(err.clone());
            }
            state.open_connections += 1;

            Ok(Box::new(InMemoryStore {
                state: self.state.clone(),
                plan: self.plan.clone(),
            }))
        }
    }

    struct InMemoryStore {
        state: Arc<Mutex<MockState>>,
        plan: FailurePlan,
    }

    #[async_trait]
    impl RecordStore for InMemoryStore {
        async fn insert(&self, record: &ProbeRecord) -> StoreResult<RecordId> {
            if let Some(err) = &self.plan.insert {
                return Err(err.clone());
            }
            let mut state = self.state.lock().unwrap();
            state.next_id += 1;
            let id = format!("{:024x}", state.next_id);
            state.records.insert(id.clone(), record.clone());
            state.last_inserted = Some(record.clone());
            Ok(id)
        }

        async fn delete(&self, id: &RecordId) -> StoreResult<u64> {
            if let Some(err) = &self.plan.delete {
                return Err(err.clone());
            }
            if self.plan.lose_deletes {
                return Ok(0);
            }
            let mut state = self.state.lock().unwrap();
            Ok(state.records.remove(id).map_or(0, |_| 1))
        }

        async fn count(&self) -> StoreResult<u64> {
            Ok(self.state.lock().unwrap().records.len() as u64)
        }

        async fn close(&self) -> StoreResult<()> {
            let mut state = self.state.lock().unwrap();
            state.close_calls += 1;
            if let Some(err) = &self.plan.close {
                return Err(err.clone());
            }
            state.open_connections = state.open_connections.saturating_sub(1);
            Ok(())
        }
    }
}
