//! OpenAPI description of the HTTP API, served through Swagger UI.

use clientbook_store::{Client, ClientFields};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::{ErrorBody, ErrorDescription};
use crate::handler;

/// Where the Swagger UI is mounted.
pub const DOCS_PATH: &str = "/docs";
/// Where the raw OpenAPI document is served.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "clientbook",
        description = "CRUD endpoints over an in-memory client database",
    ),
    paths(
        handler::create_client,
        handler::list_clients,
        handler::get_client,
        handler::replace_client,
        handler::patch_client,
        handler::delete_client,
    ),
    components(schemas(Client, ClientFields, ErrorBody, ErrorDescription)),
    tags((name = handler::CLIENTS_TAG, description = "Client records")),
)]
pub struct ApiDoc;

/// Swagger UI plus the OpenAPI document it renders.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi())
}
