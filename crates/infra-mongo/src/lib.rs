// Mongo Probe Infrastructure - MongoDB Adapter
// Implements: Connector, RecordStore

mod connection;
mod error;
mod record_store;

pub use connection::{create_client, MongoConnector, MongoConnectorConfig};
pub use error::map_mongo_error;
pub use record_store::MongoRecordStore;

// Note: mongodb::error::Error conversion is a plain function because of the
// orphan rule (cannot implement From<mongodb::error::Error> for StoreError here)
