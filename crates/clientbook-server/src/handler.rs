use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use clientbook_store::{Client, ClientFields, ClientStore};
use serde_json::json;

use crate::error::{ErrorBody, ServerError, ServerResult};

/// Documentation tag shared by the client endpoints.
pub const CLIENTS_TAG: &str = "Clients v1";

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ClientStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self { store }
    }
}

/// The `{id}` path segment; rejections are turned into JSON errors.
type IdPath = Result<Path<String>, PathRejection>;

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> ServerResult<Json<serde_json::Value>> {
    let clients = state.store.count()?;
    Ok(Json(json!({
        "name": "clientbook",
        "version": env!("CARGO_PKG_VERSION"),
        "clients": clients,
    })))
}

/// Validate a path id and render it in canonical UUID form.
fn parse_id(path: IdPath) -> ServerResult<String> {
    let Path(raw) = path?;
    Ok(uuid::Uuid::parse_str(&raw)?.to_string())
}

/// Decode a JSON `ClientFields` body, rejecting non-JSON content types.
fn parse_fields(headers: &HeaderMap, body: &[u8]) -> ServerResult<ClientFields> {
    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"));
    if !is_json {
        return Err(ServerError::UnsupportedMediaType);
    }
    serde_json::from_slice(body).map_err(|e| ServerError::InvalidBody(e.to_string()))
}

/// Create a client.
#[utoipa::path(
    post,
    path = "/api/v1/clients",
    tag = CLIENTS_TAG,
    request_body(content = ClientFields, content_type = "application/json", description = "Client to add"),
    responses(
        (status = 200, description = "The created client", body = Client),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 415, description = "Body is not JSON", body = ErrorBody),
    )
)]
pub async fn create_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ServerResult<Json<Client>> {
    let fields = parse_fields(&headers, &body)?;
    let client = state.store.create(fields)?;
    tracing::debug!(id = client.id(), "client created");
    Ok(Json(client))
}

/// Retrieve all clients.
#[utoipa::path(
    get,
    path = "/api/v1/clients",
    tag = CLIENTS_TAG,
    responses((status = 200, description = "Every stored client", body = [Client]))
)]
pub async fn list_clients(State(state): State<AppState>) -> ServerResult<Json<Vec<Client>>> {
    Ok(Json(state.store.list()?))
}

/// Retrieve a client.
#[utoipa::path(
    get,
    path = "/api/v1/clients/{id}",
    tag = CLIENTS_TAG,
    params(("id" = String, Path, description = "Client ID (UUID)")),
    responses(
        (status = 200, description = "The client", body = Client),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No such client", body = ErrorBody),
    )
)]
pub async fn get_client(State(state): State<AppState>, id: IdPath) -> ServerResult<Json<Client>> {
    let id = parse_id(id)?;
    Ok(Json(state.store.get(&id)?))
}

/// Replace every field of a client; omitted fields are cleared.
#[utoipa::path(
    put,
    path = "/api/v1/clients/{id}",
    tag = CLIENTS_TAG,
    params(("id" = String, Path, description = "Client ID (UUID)")),
    request_body(content = ClientFields, content_type = "application/json", description = "Desired client"),
    responses(
        (status = 200, description = "The updated client", body = Client),
        (status = 400, description = "Malformed id or body", body = ErrorBody),
        (status = 404, description = "No such client", body = ErrorBody),
        (status = 415, description = "Body is not JSON", body = ErrorBody),
    )
)]
pub async fn replace_client(
    State(state): State<AppState>,
    id: IdPath,
    headers: HeaderMap,
    body: Bytes,
) -> ServerResult<Json<Client>> {
    let fields = parse_fields(&headers, &body)?;
    let id = parse_id(id)?;
    let client = state.store.replace(&id, fields)?;
    tracing::debug!(id = client.id(), "client replaced");
    Ok(Json(client))
}

/// Patch a client; only non-empty fields are applied.
#[utoipa::path(
    patch,
    path = "/api/v1/clients/{id}",
    tag = CLIENTS_TAG,
    params(("id" = String, Path, description = "Client ID (UUID)")),
    request_body(content = ClientFields, content_type = "application/json", description = "Client fields to update"),
    responses(
        (status = 200, description = "The updated client", body = Client),
        (status = 400, description = "Malformed id or body", body = ErrorBody),
        (status = 404, description = "No such client", body = ErrorBody),
        (status = 415, description = "Body is not JSON", body = ErrorBody),
    )
)]
pub async fn patch_client(
    State(state): State<AppState>,
    id: IdPath,
    headers: HeaderMap,
    body: Bytes,
) -> ServerResult<Json<Client>> {
    let fields = parse_fields(&headers, &body)?;
    let id = parse_id(id)?;
    let client = state.store.merge(&id, fields)?;
    tracing::debug!(id = client.id(), "client patched");
    Ok(Json(client))
}

/// Delete a client.
#[utoipa::path(
    delete,
    path = "/api/v1/clients/{id}",
    tag = CLIENTS_TAG,
    params(("id" = String, Path, description = "Client ID (UUID)")),
    responses(
        (status = 204, description = "Client removed"),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No such client", body = ErrorBody),
    )
)]
pub async fn delete_client(State(state): State<AppState>, id: IdPath) -> ServerResult<StatusCode> {
    let id = parse_id(id)?;
    state.store.delete(&id)?;
    tracing::debug!(id = %id, "client deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use clientbook_store::InMemoryClientStore;

    fn test_state() -> AppState {
        AppState::new(Arc::new(InMemoryClientStore::new()))
    }

    fn json_headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn parse_id_canonicalizes() {
        let id = parse_id(Ok(Path("550E8400-E29B-41D4-A716-446655440000".into()))).unwrap();
        assert_eq!(id, "550e8400-e29b-41d4-a716-446655440000");
        assert!(matches!(
            parse_id(Ok(Path("not-a-uuid".into()))),
            Err(ServerError::InvalidId(_))
        ));
        assert!(matches!(parse_id(Ok(Path(String::new()))), Err(ServerError::InvalidId(_))));
    }

    #[test]
    fn parse_fields_checks_content_type() {
        let body = br#"{"name":"Ana"}"#;
        assert!(matches!(
            parse_fields(&HeaderMap::new(), body),
            Err(ServerError::UnsupportedMediaType)
        ));
        assert!(matches!(
            parse_fields(&json_headers("text/plain"), body),
            Err(ServerError::UnsupportedMediaType)
        ));
        let fields = parse_fields(&json_headers("application/json; charset=utf-8"), body).unwrap();
        assert_eq!(fields.name, "Ana");
    }

    #[test]
    fn parse_fields_rejects_malformed_json() {
        assert!(matches!(
            parse_fields(&json_headers("application/json"), b"{not json"),
            Err(ServerError::InvalidBody(_))
        ));
        assert!(matches!(
            parse_fields(&json_headers("application/json"), b"[1,2]"),
            Err(ServerError::InvalidBody(_))
        ));
    }

    #[tokio::test]
    async fn health_handler_reports_ok() {
        let response = health_handler().await;
        assert_eq!(response.0["status"], "ok");
    }

    #[tokio::test]
    async fn info_handler_counts_clients() {
        let state = test_state();
        state.store.create(ClientFields::default()).unwrap();
        state.store.create(ClientFields::default()).unwrap();
        let response = info_handler(State(state.clone())).await.unwrap();
        assert_eq!(response.0["name"], "clientbook");
        assert_eq!(response.0["clients"], 2);
        assert_eq!(state.store.count().unwrap(), 2);
    }

    #[tokio::test]
    async fn delete_handler_returns_no_content() {
        let state = test_state();
        let created = state.store.create(ClientFields::default()).unwrap();
        let status = delete_client(State(state.clone()), Ok(Path(created.id().to_string())))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(state.store.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_handler_unknown_id_is_store_error() {
        let state = test_state();
        let err = get_client(State(state), Ok(Path(uuid::Uuid::new_v4().to_string())))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
