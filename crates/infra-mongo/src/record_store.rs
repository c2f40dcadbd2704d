// MongoDB RecordStore Implementation

use async_trait::async_trait;
use mongo_probe_core::domain::{ProbeRecord, RecordId};
use mongo_probe_core::port::RecordStore;
use mongo_probe_core::{StoreError, StoreResult};
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::{Client, Collection};
use tracing::debug;

use crate::error::map_mongo_error;

/// Probe collection on one open client
pub struct MongoRecordStore {
    client: Client,
    collection: Collection<Document>,
}

impl MongoRecordStore {
    pub fn new(client: Client, database: &str, collection: &str) -> Self {
        let collection = client.database(database).collection::<Document>(collection);
        Self { client, collection }
    }
}

fn record_document(record: &ProbeRecord) -> Document {
    doc! {
        "title": record.title.as_str(),
        "description": record.description.as_str(),
        "published": record.published,
        "createdAt": DateTime::from_millis(record.created_at),
        "updatedAt": DateTime::from_millis(record.updated_at),
        "__v": record.version,
    }
}

fn parse_record_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|e| StoreError::Internal(format!("invalid record id '{}': {}", id, e)))
}

#[async_trait]
impl RecordStore for MongoRecordStore {
    async fn insert(&self, record: &ProbeRecord) -> StoreResult<RecordId> {
        let result = self
            .collection
            .insert_one(record_document(record))
            .await
            .map_err(map_mongo_error)?;

        let id = result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .ok_or_else(|| {
                StoreError::Internal(format!("unexpected inserted id {}", result.inserted_id))
            })?;

        debug!(collection = %self.collection.name(), record_id = %id, "Inserted probe record");
        Ok(id)
    }

    async fn delete(&self, id: &RecordId) -> StoreResult<u64> {
        let oid = parse_record_id(id)?;
        let result = self
            .collection
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(map_mongo_error)?;

        Ok(result.deleted_count)
    }

    async fn count(&self) -> StoreResult<u64> {
        self.collection
            .count_documents(doc! {})
            .await
            .map_err(map_mongo_error)
    }

    async fn close(&self) -> StoreResult<()> {
        // Client handles share one topology; shutting down a clone closes it
        self.client.clone().shutdown().await;
        debug!("Client shut down");
        Ok(())
    }
}
