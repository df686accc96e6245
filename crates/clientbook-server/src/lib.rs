//! HTTP server for clientbook.
//!
//! Exposes the in-memory client store as a JSON CRUD API under `/api/v1`.
//! Handlers are stateless: they validate the request, call one
//! [`ClientStore`](clientbook_store::ClientStore) operation and translate
//! the outcome into a response.

pub mod config;
pub mod docs;
pub mod error;
pub mod handler;
pub mod logging;
pub mod router;
pub mod server;

pub use config::{Config, LogConfig, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use handler::AppState;
pub use server::ClientbookServer;
