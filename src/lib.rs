//! Character API - A token-gated HTTP service over an in-memory character store
//!
//! Maps single-letter ids to small integers with add, update, remove and list
//! operations behind a shared-secret header.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::CharacterError;
pub use store::CharacterStore;
