//! Document-store abstraction trait.
//!
//! Models the hierarchical layout `subject/{hex64}/review/{sha256}` over
//! get/set/stream primitives, so the gateway can be wired to an external
//! document database or to the in-memory backend without changing the
//! request handling.

use async_trait::async_trait;

use savor_core::{Review, ReviewId, SubjectId};

use crate::StoreError;

/// Hierarchical review persistence.
///
/// Implementations must be `Send + Sync` to allow sharing across request
/// tasks. The gateway assumes atomic single-document upserts and
/// strongly-consistent single-document reads; no multi-document
/// transaction is ever requested.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch one review document, or `None` if it does not exist.
    ///
    /// # Errors
    /// Returns [`StoreError::Backend`] if the backend read fails.
    async fn get(
        &self,
        subject: &SubjectId,
        review: &ReviewId,
    ) -> Result<Option<Review>, StoreError>;

    /// Create or wholesale-replace one review document.
    ///
    /// # Errors
    /// Returns [`StoreError::Backend`] if the backend write fails.
    async fn set(
        &self,
        subject: &SubjectId,
        review: &ReviewId,
        record: Review,
    ) -> Result<(), StoreError>;

    /// Stream every review under a subject, unbounded.
    ///
    /// An unknown subject yields an empty collection, not an error.
    ///
    /// # Errors
    /// Returns [`StoreError::Backend`] if the backend read fails.
    async fn stream(&self, subject: &SubjectId) -> Result<Vec<(ReviewId, Review)>, StoreError>;
}
