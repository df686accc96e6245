use crate::error::StoreResult;
use crate::record::{Client, ClientFields};

/// Identifier-keyed client record store.
///
/// All implementations must satisfy these invariants:
/// - Every stored client has a unique, non-empty id assigned by `create`.
/// - Ids are immutable; `replace` and `merge` only touch the text fields.
/// - Each call is atomic: lookup and mutation happen under one critical
///   section, and a failed call leaves the collection unchanged.
/// - `list` returns an independent snapshot in insertion order.
pub trait ClientStore: Send + Sync {
    /// Store a new client built from `fields` and return it with its fresh id.
    fn create(&self, fields: ClientFields) -> StoreResult<Client>;

    /// Fetch the client whose id equals `id` exactly.
    ///
    /// Returns `StoreError::NotFound` if no client matches.
    fn get(&self, id: &str) -> StoreResult<Client>;

    /// All clients currently stored, in insertion order.
    fn list(&self) -> StoreResult<Vec<Client>>;

    /// Number of clients currently stored, without copying them.
    fn count(&self) -> StoreResult<usize>;

    /// Overwrite every text field of the client with `fields`.
    ///
    /// Empty values in `fields` clear the stored value.
    fn replace(&self, id: &str, fields: ClientFields) -> StoreResult<Client>;

    /// Overwrite only the text fields that are non-empty in `fields`.
    fn merge(&self, id: &str, fields: ClientFields) -> StoreResult<Client>;

    /// Remove the client, keeping the relative order of the rest.
    fn delete(&self, id: &str) -> StoreResult<()>;
}
