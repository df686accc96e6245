//! In-memory client record store for the clientbook service.
//!
//! This crate owns the only stateful part of the service: an ordered
//! collection of [`Client`] records guarded by a single reader/writer lock.
//! The HTTP layer calls into it through the [`ClientStore`] trait and maps
//! [`StoreError`] onto responses.
//!
//! # Record Types
//!
//! - [`Client`] -- a stored record with a store-assigned UUID v4 `id`
//! - [`ClientFields`] -- the four caller-supplied text fields
//!
//! # Storage Backends
//!
//! All backends implement the [`ClientStore`] trait:
//!
//! - [`InMemoryClientStore`] -- `Vec`-backed store, one lock for the whole table
//!
//! # Design Rules
//!
//! 1. Identifiers are assigned once, by `create`, and never change.
//! 2. Lookups are exact, case-sensitive string matches. No parsing.
//! 3. Reads share the lock; writes hold it exclusively across find-then-mutate.
//! 4. `list` hands out an owned snapshot, never a view of the backing storage.
//! 5. A failed call leaves the collection untouched.
//! 6. `NotFound` is the only error, returned to the caller and never logged here.

pub mod error;
pub mod memory;
pub mod record;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryClientStore;
pub use record::{Client, ClientFields};
pub use traits::ClientStore;
