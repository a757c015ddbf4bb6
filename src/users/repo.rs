use async_trait::async_trait;
use mongodb::{
    bson::{doc, Document},
    error::ErrorKind,
    options::{IndexOptions, InsertManyOptions},
    Collection, IndexModel,
};
use thiserror::Error;
use tracing::debug;

use super::model::UserRecord;

/// MongoDB duplicate key error code.
#[cfg(test)]
pub const DUPLICATE_KEY: i32 = 11000;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    #[cfg_attr(not(test), allow(dead_code))]
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// A single document the store refused while the rest of its batch went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedDocument {
    pub index: usize, // position within the submitted batch
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertOutcome {
    pub inserted: usize,
    pub rejected: Vec<RejectedDocument>,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Unique indexes on `email` and `username`.
    async fn ensure_indexes(&self) -> Result<(), StoreError>;
    /// Removes every user, returns how many were deleted.
    async fn delete_all(&self) -> Result<u64, StoreError>;
    /// Attempts every record; per-document rejections are reported, not raised.
    async fn insert_unordered(&self, records: &[UserRecord]) -> Result<InsertOutcome, StoreError>;
    async fn count(&self) -> Result<u64, StoreError>;
}

#[derive(Clone)]
pub struct MongoUserStore {
    collection: Collection<UserRecord>,
}

impl MongoUserStore {
    pub fn new(collection: Collection<UserRecord>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let unique = |field: &str| {
            let mut keys = Document::new();
            keys.insert(field, 1);
            IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder().unique(true).build())
                .build()
        };
        let created = self
            .collection
            .create_indexes([unique("email"), unique("username")], None)
            .await?;
        debug!(indexes = ?created.index_names, "indexes ensured");
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let res = self.collection.delete_many(doc! {}, None).await?;
        Ok(res.deleted_count)
    }

    async fn insert_unordered(&self, records: &[UserRecord]) -> Result<InsertOutcome, StoreError> {
        if records.is_empty() {
            return Ok(InsertOutcome::default());
        }

        let opts = InsertManyOptions::builder().ordered(false).build();
        match self.collection.insert_many(records, opts).await {
            Ok(res) => Ok(InsertOutcome {
                inserted: res.inserted_ids.len(),
                rejected: Vec::new(),
            }),
            Err(err) => partial_outcome(records.len(), &err.kind).ok_or_else(|| err.into()),
        }
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.collection.count_documents(doc! {}, None).await?)
    }
}

/// The part of a failed unordered insert that still went through, or `None`
/// when the failure is not limited to individual documents.
fn partial_outcome(attempted: usize, kind: &ErrorKind) -> Option<InsertOutcome> {
    match kind {
        ErrorKind::BulkWrite(failure) => tolerated_outcome(
            attempted,
            failure.write_errors.iter().flatten().map(|e| RejectedDocument {
                index: e.index,
                code: e.code,
                message: e.message.clone(),
            }),
            failure.write_concern_error.is_some(),
        ),
        _ => None,
    }
}

fn tolerated_outcome(
    attempted: usize,
    rejected: impl IntoIterator<Item = RejectedDocument>,
    write_concern_failed: bool,
) -> Option<InsertOutcome> {
    if write_concern_failed {
        return None;
    }
    let rejected: Vec<RejectedDocument> = rejected.into_iter().collect();
    Some(InsertOutcome {
        inserted: attempted.saturating_sub(rejected.len()),
        rejected,
    })
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory store with unique email/username and failure injection.

    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryUserStore {
        docs: Mutex<Vec<UserRecord>>,
        calls: Mutex<usize>,
        ops: Mutex<Vec<&'static str>>,
        fail_indexes: bool,
        fail_clear: bool,
        fail_on_insert: Option<usize>,
    }

    impl InMemoryUserStore {
        pub fn with_docs(docs: Vec<UserRecord>) -> Self {
            Self {
                docs: Mutex::new(docs),
                ..Self::default()
            }
        }

        pub fn failing_indexes(mut self) -> Self {
            self.fail_indexes = true;
            self
        }

        pub fn failing_clear(mut self) -> Self {
            self.fail_clear = true;
            self
        }

        /// The 1-based insert call `call` fails as a transport error.
        pub fn failing_insert(mut self, call: usize) -> Self {
            self.fail_on_insert = Some(call);
            self
        }

        pub fn docs(&self) -> Vec<UserRecord> {
            self.docs.lock().unwrap().clone()
        }

        pub fn insert_calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }

        /// Store operations in the order they were called.
        pub fn ops(&self) -> Vec<&'static str> {
            self.ops.lock().unwrap().clone()
        }

        fn record(&self, op: &'static str) {
            self.ops.lock().unwrap().push(op);
        }
    }

    #[async_trait]
    impl UserStore for InMemoryUserStore {
        async fn ensure_indexes(&self) -> Result<(), StoreError> {
            self.record("ensure_indexes");
            if self.fail_indexes {
                return Err(StoreError::Unavailable("index options conflict".into()));
            }
            Ok(())
        }

        async fn delete_all(&self) -> Result<u64, StoreError> {
            self.record("delete_all");
            if self.fail_clear {
                return Err(StoreError::Unavailable("connection reset".into()));
            }
            let mut docs = self.docs.lock().unwrap();
            let n = docs.len() as u64;
            docs.clear();
            Ok(n)
        }

        async fn insert_unordered(
            &self,
            records: &[UserRecord],
        ) -> Result<InsertOutcome, StoreError> {
            self.record("insert_unordered");
            let call = {
                let mut calls = self.calls.lock().unwrap();
                *calls += 1;
                *calls
            };
            if self.fail_on_insert == Some(call) {
                return Err(StoreError::Unavailable("connection lost".into()));
            }

            let mut docs = self.docs.lock().unwrap();
            let mut outcome = InsertOutcome::default();
            for (index, rec) in records.iter().enumerate() {
                let dup = docs
                    .iter()
                    .find(|d| d.email == rec.email || d.username == rec.username);
                match dup {
                    Some(d) => outcome.rejected.push(RejectedDocument {
                        index,
                        code: DUPLICATE_KEY,
                        message: format!("E11000 duplicate key: {}", d.email),
                    }),
                    None => {
                        docs.push(rec.clone());
                        outcome.inserted += 1;
                    }
                }
            }
            Ok(outcome)
        }

        async fn count(&self) -> Result<u64, StoreError> {
            self.record("count");
            Ok(self.docs.lock().unwrap().len() as u64)
        }
    }
}

#[cfg(test)]
mod repo_tests {
    use super::testing::InMemoryUserStore;
    use super::*;
    use crate::users::model::sample_record;

    #[tokio::test]
    async fn in_memory_store_keeps_valid_docs_of_a_partially_failing_batch() {
        let store = InMemoryUserStore::default();
        let batch = vec![
            sample_record("Ada", "Lovelace", "ada"),
            sample_record("Ada", "Lovelace", "ada2"),
            sample_record("Alan", "Turing", "alan"),
        ];
        let outcome = store.insert_unordered(&batch).await.unwrap();
        assert_eq!(outcome.inserted, 2);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].index, 1);
        assert_eq!(outcome.rejected[0].code, DUPLICATE_KEY);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    fn rejection(index: usize) -> RejectedDocument {
        RejectedDocument {
            index,
            code: DUPLICATE_KEY,
            message: "E11000 duplicate key error collection: beathub.users".into(),
        }
    }

    #[test]
    fn write_errors_only_count_as_partial_success() {
        let outcome = tolerated_outcome(100, [rejection(3), rejection(57)], false).unwrap();
        assert_eq!(outcome.inserted, 98);
        assert_eq!(outcome.rejected.len(), 2);
        assert_eq!(outcome.rejected[1].index, 57);
    }

    #[test]
    fn bulk_failure_without_write_errors_keeps_the_whole_batch() {
        let outcome = tolerated_outcome(10, [], false).unwrap();
        assert_eq!(outcome.inserted, 10);
        assert!(outcome.rejected.is_empty());
    }

    #[test]
    fn write_concern_failure_is_not_tolerated() {
        assert!(tolerated_outcome(10, [rejection(0)], true).is_none());
        assert!(tolerated_outcome(10, [], true).is_none());
    }

    #[test]
    fn non_bulk_errors_are_not_tolerated() {
        let err = mongodb::error::Error::from(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "connection reset by peer",
        ));
        assert!(partial_outcome(10, &err.kind).is_none());
    }

    #[tokio::test]
    #[ignore = "needs a running mongod at MONGODB_URI"]
    async fn mongo_unordered_insert_skips_duplicates_and_keeps_the_rest() {
        let uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| crate::config::DEFAULT_MONGODB_URI.to_string());
        let client = mongodb::Client::with_uri_str(&uri).await.unwrap();
        let collection = client
            .database("user_seeder_test")
            .collection::<UserRecord>("users_unordered_insert");
        let store = MongoUserStore::new(collection.clone());

        store.delete_all().await.unwrap();
        store.ensure_indexes().await.unwrap();

        let batch = vec![
            sample_record("Ada", "Lovelace", "ada"),
            sample_record("Alan", "Turing", "alan"),
            sample_record("Ada", "Lovelace", "ada2"),
            sample_record("Grace", "Hopper", "grace"),
            sample_record("Edsger", "Dijkstra", "edsger"),
        ];
        let outcome = store.insert_unordered(&batch).await.unwrap();

        assert_eq!(outcome.inserted, batch.len() - 1);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].index, 2);
        assert_eq!(outcome.rejected[0].code, DUPLICATE_KEY);
        assert_eq!(store.count().await.unwrap(), 4);

        collection.drop(None).await.unwrap();
    }

    #[test]
    fn store_error_wraps_unavailable_message() {
        let err = StoreError::Unavailable("connection lost".into());
        assert_eq!(err.to_string(), "store unavailable: connection lost");
    }
}
