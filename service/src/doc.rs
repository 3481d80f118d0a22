//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the REST API. It registers:
//!
//! - **Paths**: all HTTP endpoints from the inbound layer (users, health)
//! - **Schemas**: wire DTOs plus domain type wrappers ([`ErrorSchema`],
//!   [`ErrorCodeSchema`]) that provide OpenAPI definitions without coupling
//!   domain types to the utoipa framework
//!
//! The generated specification backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{CreateUserRequestBody, UserResponseBody};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User service API",
        description = "HTTP interface for user create/fetch/delete and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateUserRequestBody,
        UserResponseBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
