//! API Module
//!
//! HTTP handlers, route table and OpenAPI generation for the character API.
//!
//! # Endpoints
//! - `POST /token` - Exchange credentials for the access token (anonymous)
//! - `GET /character` - List stored ids
//! - `GET /character/:id` - Get the number for an id
//! - `POST /character/:id` - Update the number of an existing id
//! - `PUT /character/:id` - Add a new id
//! - `DELETE /character/:id` - Remove an id
//! - `GET /health` - Health check endpoint (anonymous)
//! - `GET /openapi.json` - API description (anonymous)
//! - `GET /swagger-ui` - Swagger UI over the API description (anonymous)

pub mod docs;
pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use docs::ApiDoc;
pub use routes::{create_router, RouteSpec, ROUTES};
