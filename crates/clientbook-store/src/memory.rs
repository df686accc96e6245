use parking_lot::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::record::{Client, ClientFields};
use crate::traits::ClientStore;

/// In-memory, `Vec`-based client store.
///
/// One `RwLock` guards the whole collection. Reads share it; every write
/// holds it exclusively from the id scan through the mutation, so an index
/// found by one write is never invalidated by another before it is used.
/// Records are cloned on the way out.
pub struct InMemoryClientStore {
    clients: RwLock<Vec<Client>>,
}

impl InMemoryClientStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            clients: RwLock::new(Vec::new()),
        }
    }

    /// Number of clients currently stored.
    pub fn len(&self) -> usize {
        self.clients.read().len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.clients.read().is_empty()
    }
}

fn position(clients: &[Client], id: &str) -> StoreResult<usize> {
    clients
        .iter()
        .position(|c| c.id() == id)
        .ok_or_else(|| StoreError::NotFound(id.to_string()))
}

impl Default for InMemoryClientStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientStore for InMemoryClientStore {
    fn create(&self, fields: ClientFields) -> StoreResult<Client> {
        let client = Client::new(fields);
        self.clients.write().push(client.clone());
        Ok(client)
    }

    fn get(&self, id: &str) -> StoreResult<Client> {
        let clients = self.clients.read();
        let idx = position(&clients, id)?;
        Ok(clients[idx].clone())
    }

    fn list(&self) -> StoreResult<Vec<Client>> {
        Ok(self.clients.read().clone())
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.len())
    }

    fn replace(&self, id: &str, fields: ClientFields) -> StoreResult<Client> {
        let mut clients = self.clients.write();
        let idx = position(&clients, id)?;
        fields.replace_into(&mut clients[idx]);
        Ok(clients[idx].clone())
    }

    fn merge(&self, id: &str, fields: ClientFields) -> StoreResult<Client> {
        let mut clients = self.clients.write();
        let idx = position(&clients, id)?;
        fields.merge_into(&mut clients[idx]);
        Ok(clients[idx].clone())
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        let mut clients = self.clients.write();
        let idx = position(&clients, id)?;
        clients.remove(idx);
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryClientStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryClientStore")
            .field("client_count", &count)
            .finish()
    }
}
