//! Document-store seam for the savor anonymous review service.
//!
//! Exposes the [`DocumentStore`] trait the gateway is written against and
//! the in-memory backend used as the shipped default and as the test
//! fake. An external document-database client would implement the same
//! trait; its credential bootstrap lives outside this workspace.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod memory;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::DocumentStore;
