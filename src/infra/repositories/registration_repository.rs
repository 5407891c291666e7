//! Registration repository - persistence for registration records.

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::Collection;

use crate::config::{COLLECTION_REGISTRATIONS, MSG_EMAIL_RECORDED, MSG_PHONE_RECORDED};
use crate::domain::{Registration, Status};
use crate::errors::{AppError, AppResult};
use crate::infra::db::{bounded, Database};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Repository trait for registration records.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Persist a new record keyed by its id
    async fn insert(&self, registration: Registration) -> AppResult<()>;

    /// Fetch every record; fails on the first malformed document
    async fn find_all(&self) -> AppResult<Vec<Registration>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Registration>>;

    async fn find_by_phone(&self, phone: &str) -> AppResult<Option<Registration>>;

    async fn find_by_virtual_account(&self, va: &str) -> AppResult<Option<Registration>>;

    /// Set the status of the record matching the virtual account;
    /// `true` when exactly one document was modified
    async fn update_status(&self, va: &str, status: Status) -> AppResult<bool>;

    /// Unconditional wipe; administrative reset and test hook only
    async fn delete_all(&self) -> AppResult<u64>;
}

/// MongoDB-backed registration store
pub struct RegistrationStore {
    collection: Collection<Document>,
    op_timeout: std::time::Duration,
}

impl RegistrationStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_REGISTRATIONS),
            op_timeout: db.storage_timeout(),
        }
    }

    fn decode(document: Document) -> AppResult<Registration> {
        mongodb::bson::from_document(document)
            .map_err(|e| AppError::internal(format!("malformed registration document: {e}")))
    }

    fn encode(registration: &Registration) -> AppResult<Document> {
        mongodb::bson::to_document(registration)
            .map_err(|e| AppError::internal(format!("registration failed to serialize: {e}")))
    }

    async fn find_one(&self, filter: Document) -> AppResult<Option<Registration>> {
        let document = bounded(self.op_timeout, self.collection.find_one(filter)).await?;
        document.map(Self::decode).transpose()
    }
}

#[async_trait]
impl RegistrationRepository for RegistrationStore {
    async fn insert(&self, registration: Registration) -> AppResult<()> {
        let document = Self::encode(&registration)?;
        bounded(self.op_timeout, self.collection.insert_one(document))
            .await
            .map_err(translate_duplicate_key)?;
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Registration>> {
        let documents: Vec<Document> = bounded(self.op_timeout, async {
            let cursor = self.collection.find(doc! {}).await?;
            cursor.try_collect().await
        })
        .await?;

        documents.into_iter().map(Self::decode).collect()
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Registration>> {
        self.find_one(doc! { "email": email }).await
    }

    async fn find_by_phone(&self, phone: &str) -> AppResult<Option<Registration>> {
        self.find_one(doc! { "phone": phone }).await
    }

    async fn find_by_virtual_account(&self, va: &str) -> AppResult<Option<Registration>> {
        self.find_one(doc! { "virtual_account": va }).await
    }

    async fn update_status(&self, va: &str, status: Status) -> AppResult<bool> {
        let result = bounded(
            self.op_timeout,
            self.collection.update_one(
                doc! { "virtual_account": va },
                doc! { "$set": { "status": status.to_string() } },
            ),
        )
        .await?;

        Ok(result.modified_count == 1)
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = bounded(self.op_timeout, self.collection.delete_many(doc! {})).await?;
        Ok(result.deleted_count)
    }
}

/// Map a unique-index violation on insert to the matching conflict error.
///
/// The pre-insert uniqueness checks usually catch duplicates first; this
/// covers the race where two concurrent creates both pass the check.
fn translate_duplicate_key(err: AppError) -> AppError {
    let AppError::Database(ref driver_err) = err else {
        return err;
    };

    let message = match driver_err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_err)) if write_err.code == 11000 => {
            &write_err.message
        }
        _ => return err,
    };

    if message.contains("email") {
        AppError::conflict(MSG_EMAIL_RECORDED)
    } else if message.contains("phone") {
        AppError::conflict(MSG_PHONE_RECORDED)
    } else {
        err
    }
}
