//! Student repository - document CRUD on the students collection.

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::Collection;

use crate::config::{COLLECTION_STUDENTS, DELETE_NOT_FOUND, DELETE_OK};
use crate::domain::Student;
use crate::errors::{AppError, AppResult};
use crate::infra::db::{bounded, Database};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Repository trait for the student aggregate.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Write a flat document keyed by the caller-supplied unique id
    async fn insert(&self, student: Student) -> AppResult<()>;

    /// Fetch every student; a single malformed document fails the whole call
    async fn find_all(&self) -> AppResult<Vec<Student>>;

    async fn get_by_id(&self, id: &str) -> AppResult<Option<Student>>;

    /// Overwrite the mutable fields of the document with the given id;
    /// `true` only when exactly one document was modified
    async fn update_by_id(&self, id: &str, student: Student) -> AppResult<bool>;

    /// Delete by id, returning the `"DELETED"` / `"ID NOT FOUND"` sentinel.
    /// Callers match on the returned string, not on an error.
    async fn delete(&self, id: &str) -> AppResult<String>;

    /// Unconditional wipe; administrative reset and test hook only
    async fn delete_all(&self) -> AppResult<u64>;
}

/// MongoDB-backed student store
pub struct StudentStore {
    collection: Collection<Document>,
    op_timeout: std::time::Duration,
}

impl StudentStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_STUDENTS),
            op_timeout: db.storage_timeout(),
        }
    }

    fn decode(document: Document) -> AppResult<Student> {
        mongodb::bson::from_document(document)
            .map_err(|e| AppError::internal(format!("malformed student document: {e}")))
    }

    fn encode(student: &Student) -> AppResult<Document> {
        mongodb::bson::to_document(student)
            .map_err(|e| AppError::internal(format!("student failed to serialize: {e}")))
    }
}

#[async_trait]
impl StudentRepository for StudentStore {
    async fn insert(&self, student: Student) -> AppResult<()> {
        let document = Self::encode(&student)?;
        bounded(self.op_timeout, self.collection.insert_one(document)).await?;
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Student>> {
        let documents: Vec<Document> = bounded(self.op_timeout, async {
            let cursor = self.collection.find(doc! {}).await?;
            cursor.try_collect().await
        })
        .await?;

        documents.into_iter().map(Self::decode).collect()
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<Student>> {
        let document =
            bounded(self.op_timeout, self.collection.find_one(doc! { "_id": id })).await?;
        document.map(Self::decode).transpose()
    }

    async fn update_by_id(&self, id: &str, student: Student) -> AppResult<bool> {
        let result = bounded(
            self.op_timeout,
            self.collection.update_one(
                doc! { "_id": id },
                doc! { "$set": {
                    "identifier": &student.identifier,
                    "name": &student.name,
                    "email": &student.email,
                } },
            ),
        )
        .await?;

        Ok(result.modified_count == 1)
    }

    async fn delete(&self, id: &str) -> AppResult<String> {
        let result =
            bounded(self.op_timeout, self.collection.delete_one(doc! { "_id": id })).await?;

        if result.deleted_count == 1 {
            Ok(DELETE_OK.to_string())
        } else {
            Ok(DELETE_NOT_FOUND.to_string())
        }
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = bounded(self.op_timeout, self.collection.delete_many(doc! {})).await?;
        Ok(result.deleted_count)
    }
}
