/// Errors produced by document-store backends.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The backend rejected or failed the operation.
    ///
    /// Never produced by the in-memory store; reserved for backends that
    /// talk to an external document database.
    #[error("document store backend error: {0}")]
    Backend(String),
}
