use std::any::Any;

use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::docs;
use crate::error::ServerError;
use crate::handler::{self, AppState};

/// Build the axum router with all clientbook endpoints.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/v1/health", get(handler::health_handler))
        .route("/api/v1/info", get(handler::info_handler))
        .merge(client_routes())
        .merge(docs::swagger_ui());

    with_middleware(api).with_state(state)
}

/// The collection is reachable with and without a trailing slash.
fn client_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    let collection = post(handler::create_client).get(handler::list_clients);

    Router::new()
        .route("/api/v1/clients", collection.clone())
        .route("/api/v1/clients/", collection)
        .route(
            "/api/v1/clients/{id}",
            get(handler::get_client)
                .put(handler::replace_client)
                .patch(handler::patch_client)
                .delete(handler::delete_client),
        )
        .layer(cors)
}

/// Panic recovery inside, request tracing outside.
pub fn with_middleware<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
}

/// Debug-level span carrying what the request looked like on arrival.
fn request_span(request: &Request<Body>) -> Span {
    tracing::debug_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        headers = ?request.headers()
    )
}

fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    ServerError::Internal("request handler panicked".into()).into_response()
}
