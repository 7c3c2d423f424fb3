//! Infrastructure - Document Store Adapters
//!
//! Adapters implementing the `core_kernel::DocumentStore` port. The only
//! adapter shipped here is the in-memory one; the remote platform adapter
//! lives with the host deployment.

pub mod memory;

pub use memory::{MemoryDocumentStore, CANCELLED_FIELD};
