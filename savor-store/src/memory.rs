//! In-memory document store.
//!
//! The default backend shipped with the gateway and the fake used by
//! tests. Holds the `subject → review → record` hierarchy in nested maps
//! behind a `RwLock`.

use std::{collections::HashMap, sync::RwLock};

use async_trait::async_trait;

use savor_core::{Review, ReviewId, SubjectId};

use crate::{DocumentStore, StoreError};

/// Thread-safe in-memory review store.
///
/// Subject keys are the raw validated strings, so mixed-case spellings of
/// the same hex number hold separate review collections.
#[derive(Debug, Default)]
pub struct MemoryStore {
    subjects: RwLock<HashMap<SubjectId, HashMap<ReviewId, Review>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(
        &self,
        subject: &SubjectId,
        review: &ReviewId,
    ) -> Result<Option<Review>, StoreError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let subjects = self.subjects.read().expect("memory store read lock poisoned");
        Ok(subjects.get(subject).and_then(|reviews| reviews.get(review)).cloned())
    }

    async fn set(
        &self,
        subject: &SubjectId,
        review: &ReviewId,
        record: Review,
    ) -> Result<(), StoreError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.subjects
            .write()
            .expect("memory store write lock poisoned")
            .entry(subject.clone())
            .or_default()
            .insert(review.clone(), record);
        Ok(())
    }

    async fn stream(&self, subject: &SubjectId) -> Result<Vec<(ReviewId, Review)>, StoreError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let subjects = self.subjects.read().expect("memory store read lock poisoned");
        Ok(subjects
            .get(subject)
            .map(|reviews| {
                reviews.iter().map(|(id, record)| (id.clone(), record.clone())).collect()
            })
            .unwrap_or_default())
    }
}
