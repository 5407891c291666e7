//! Database connection and initialization.

use std::future::IntoFuture;
use std::time::Duration;

use mongodb::bson::{doc, Document};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};

use crate::config::{Config, COLLECTION_REGISTRATIONS};
use crate::errors::{AppError, AppResult};

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    database: mongodb::Database,
    storage_timeout: Duration,
}

impl Database {
    /// Connect and make sure the uniqueness indexes exist.
    ///
    /// Email, phone and virtual account carry unique indexes so two
    /// concurrent creates cannot both slip past the service-level
    /// uniqueness check; the loser fails on the constraint instead.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let client = Client::with_uri_str(&config.mongodb_url).await?;
        let database = client.database(&config.database_name);

        let db = Self {
            database,
            storage_timeout: config.storage_timeout,
        };
        db.ensure_indexes().await?;

        tracing::info!(database = %config.database_name, "database connected");
        Ok(db)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let registrations = self.collection(COLLECTION_REGISTRATIONS);

        for (field, name) in [
            ("email", "email_unique"),
            ("phone", "phone_unique"),
            ("virtual_account", "virtual_account_unique"),
        ] {
            let index = IndexModel::builder()
                .keys(doc! { field: 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name(name.to_string())
                        .build(),
                )
                .build();
            bounded(self.storage_timeout, registrations.create_index(index)).await?;
        }

        Ok(())
    }

    /// Get a typed-document handle on a named collection.
    pub fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection(name)
    }

    /// Per-operation deadline applied to every storage call.
    pub fn storage_timeout(&self) -> Duration {
        self.storage_timeout
    }

    /// Connectivity check used by the health endpoint.
    pub async fn ping(&self) -> AppResult<()> {
        bounded(self.storage_timeout, self.database.run_command(doc! { "ping": 1 })).await?;
        Ok(())
    }
}

/// Run a driver operation under a bounded-duration context.
///
/// The deadline holds on every exit path; an elapsed timer surfaces as an
/// internal storage error rather than hanging the request.
pub(crate) async fn bounded<T, F>(deadline: Duration, op: F) -> AppResult<T>
where
    F: IntoFuture<Output = mongodb::error::Result<T>>,
{
    match tokio::time::timeout(deadline, op).await {
        Ok(result) => result.map_err(AppError::from),
        Err(_) => Err(AppError::internal("storage operation exceeded its deadline")),
    }
}
