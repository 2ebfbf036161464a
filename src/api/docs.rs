//! OpenAPI specification for the character API.
//!
//! Operations come from the `#[utoipa::path]` annotations on the handlers.
//! The auth header is added afterwards from the route table: every route
//! without the anonymous marker gets a required `X-Auth-Token` parameter,
//! even if it also carries the authorize marker.

use axum::http::Method;
use utoipa::openapi::{
    path::{Parameter, ParameterBuilder, ParameterIn, PathItemType},
    ObjectBuilder, RefOr, Required, Schema, SchemaType,
};
use utoipa::{Modify, OpenApi};

use super::handlers;
use super::routes::ROUTES;
use crate::auth::{ACCEPTED_TOKEN, AUTH_HEADER_NAME};
use crate::models::{ErrorResponse, HealthResponse, TokenRequest};

/// OpenAPI specification served at `/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Character API",
        description = "Token-gated CRUD over single-letter characters and small numbers"
    ),
    paths(
        handlers::token_handler,
        handlers::list_handler,
        handlers::get_handler,
        handlers::update_handler,
        handlers::add_handler,
        handlers::delete_handler,
        handlers::health_handler,
    ),
    components(schemas(TokenRequest, ErrorResponse, HealthResponse)),
    modifiers(&AuthHeaderAddon)
)]
pub struct ApiDoc;

/// Adds the `X-Auth-Token` header parameter to every non-anonymous route.
pub struct AuthHeaderAddon;

impl Modify for AuthHeaderAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        for spec in ROUTES.iter().filter(|spec| !spec.anonymous) {
            let Some(item_type) = path_item_type(&spec.method) else {
                continue;
            };
            let operation = openapi
                .paths
                .paths
                .get_mut(&openapi_path(spec.path))
                .and_then(|item| item.operations.get_mut(&item_type));

            if let Some(operation) = operation {
                operation
                    .parameters
                    .get_or_insert_with(Vec::new)
                    .push(auth_header_parameter());
            }
        }
    }
}

fn auth_header_parameter() -> Parameter {
    let schema = ObjectBuilder::new()
        .schema_type(SchemaType::String)
        .default(Some(serde_json::Value::String(ACCEPTED_TOKEN.to_string())))
        .build();

    ParameterBuilder::new()
        .name(AUTH_HEADER_NAME)
        .parameter_in(ParameterIn::Header)
        .description(Some("access token"))
        .required(Required::True)
        .schema(Some(RefOr::T(Schema::Object(schema))))
        .build()
}

fn path_item_type(method: &Method) -> Option<PathItemType> {
    if *method == Method::GET {
        Some(PathItemType::Get)
    } else if *method == Method::POST {
        Some(PathItemType::Post)
    } else if *method == Method::PUT {
        Some(PathItemType::Put)
    } else if *method == Method::DELETE {
        Some(PathItemType::Delete)
    } else {
        None
    }
}

/// Rewrites axum `:name` captures into OpenAPI `{name}` templates.
fn openapi_path(path: &str) -> String {
    path.split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(name) => format!("{{{}}}", name),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}
