//! MongoDB implementation of the record repository.

use std::time::Duration;

use async_trait::async_trait;
use mongodb::{
    Client, Collection, IndexModel,
    bson::{Bson, Document, doc},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{ClientOptions, IndexOptions},
};
use tracing::{info, warn};

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{RecordRepository, StoreError};

/// Server error code for a unique index violation.
const DUPLICATE_KEY: i32 = 11000;

/// MongoDB repository storing one document per short code.
///
/// Documents use the [`UrlRecord`] serde layout (`id`, `original_url`,
/// `short_url`, `creation_date`). A unique index on `short_url` keeps a racing
/// second insert of the same code from landing.
#[derive(Clone)]
pub struct MongoRecordRepository {
    client: Client,
    collection: Collection<UrlRecord>,
}

impl MongoRecordRepository {
    /// Connects to MongoDB, validates the connection with a ping and ensures
    /// the short code index exists.
    ///
    /// `op_timeout` bounds server selection and socket connects, so calls made
    /// while the server is down fail instead of waiting for the driver's
    /// 30-second default.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the URI is invalid or the ping fails.
    pub async fn connect(
        uri: &str,
        database: &str,
        collection: &str,
        op_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|e| StoreError::Unavailable(format!("Invalid MongoDB URI: {}", e)))?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.server_selection_timeout = Some(op_timeout);
        options.connect_timeout = Some(op_timeout);

        let client = Client::with_options(options).map_err(|e| {
            StoreError::Unavailable(format!("Failed to create MongoDB client: {}", e))
        })?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::Unavailable(format!("MongoDB ping failed: {}", e)))?;

        info!("Connected to MongoDB ({}.{})", database, collection);

        let repository = Self {
            collection: client.database(database).collection(collection),
            client,
        };
        repository.ensure_indexes().await;

        Ok(repository)
    }

    /// Creates the unique index on `short_url`.
    ///
    /// Existing data with duplicate codes makes this fail; the service keeps
    /// running with best-effort duplicate suppression in that case.
    async fn ensure_indexes(&self) {
        let index = IndexModel::builder()
            .keys(doc! { "short_url": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("short_url_unique".to_string())
                    .build(),
            )
            .build();

        if let Err(e) = self.collection.create_index(index).await {
            warn!("Could not create unique index on short_url: {}", e);
        }
    }

    /// Releases the client's connections.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("MongoDB connection closed");
    }
}

#[async_trait]
impl RecordRepository for MongoRecordRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, StoreError> {
        self.collection
            .find_one(doc! { "short_url": code })
            .await
            .map_err(map_mongo_error)
    }

    async fn insert(&self, record: &UrlRecord) -> Result<(), StoreError> {
        self.collection
            .insert_one(record)
            .await
            .map(|_| ())
            .map_err(map_mongo_error)
    }

    async fn max_id(&self) -> Result<Option<i64>, StoreError> {
        let latest = self
            .collection
            .clone_with_type::<Document>()
            .find_one(doc! {})
            .sort(doc! { "id": -1 })
            .projection(doc! { "id": 1, "_id": 0 })
            .await
            .map_err(map_mongo_error)?;

        Ok(latest.and_then(|d| match d.get("id") {
            Some(Bson::Int64(id)) => Some(*id),
            Some(Bson::Int32(id)) => Some(i64::from(*id)),
            _ => None,
        }))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.collection
            .count_documents(doc! {})
            .await
            .map_err(map_mongo_error)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(map_mongo_error)
    }
}

/// Maps driver errors onto the store error taxonomy.
fn map_mongo_error(e: MongoError) -> StoreError {
    match e.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY =>
        {
            StoreError::Constraint(write_error.message.clone())
        }
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
            StoreError::Unavailable(e.to_string())
        }
        _ => StoreError::Backend(e.to_string()),
    }
}
