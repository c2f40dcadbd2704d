// MongoDB Client Setup

use async_trait::async_trait;
use mongo_probe_core::domain::{ConnectionTarget, COLLECTION_NAME};
use mongo_probe_core::port::{Connector, RecordStore};
use mongo_probe_core::StoreResult;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::map_mongo_error;
use crate::MongoRecordStore;

/// Driver settings the probe controls
#[derive(Debug, Clone)]
pub struct MongoConnectorConfig {
    /// Application name reported to the server
    pub app_name: String,
    /// Server selection and connect timeout (None = driver defaults)
    pub timeout: Option<Duration>,
    pub collection: String,
}

impl Default for MongoConnectorConfig {
    fn default() -> Self {
        Self {
            app_name: "mongo-probe".to_string(),
            timeout: None,
            collection: COLLECTION_NAME.to_string(),
        }
    }
}

/// Create a client and verify the server answers with the given credentials
///
/// The driver connects lazily, so a `ping` on the target database forces
/// server selection and authentication here rather than at the first write.
pub async fn create_client(
    target: &ConnectionTarget,
    config: &MongoConnectorConfig,
) -> StoreResult<Client> {
    let uri = target.to_uri();
    let mut options = ClientOptions::parse(uri.as_str())
        .await
        .map_err(map_mongo_error)?;

    options.app_name = Some(config.app_name.clone());
    if let Some(timeout) = config.timeout {
        options.server_selection_timeout = Some(timeout);
        options.connect_timeout = Some(timeout);
    }

    let client = Client::with_options(options).map_err(map_mongo_error)?;
    debug!(target_uri = %target, "Client created, pinging server");

    client
        .database(target.database_name())
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(map_mongo_error)?;

    info!(
        target_uri = %target,
        database = target.database_name(),
        "Connected to MongoDB"
    );
    Ok(client)
}

/// Connector backed by the official MongoDB driver
pub struct MongoConnector {
    config: MongoConnectorConfig,
}

impl MongoConnector {
    pub fn new(config: MongoConnectorConfig) -> Self {
        Self { config }
    }
}

impl Default for MongoConnector {
    fn default() -> Self {
        Self::new(MongoConnectorConfig::default())
    }
}

#[async_trait]
impl Connector for MongoConnector {
    async fn connect(&self, target: &ConnectionTarget) -> StoreResult<Box<dyn RecordStore>> {
        let client = create_client(target, &self.config).await?;
        Ok(Box::new(MongoRecordStore::new(
            client,
            target.database_name(),
            &self.config.collection,
        )))
    }
}
