//! Auth Module
//!
//! Shared-secret header authentication and the token issuance credentials.
//!
//! The credentials and token are hardcoded literals. This is a demo service,
//! not something to put in front of real data.

mod credentials;
mod gate;

pub use credentials::{check_credentials, ISSUED_TOKEN, PASSWORD, USERNAME};
pub use gate::{auth_gate, authenticate, AuthOutcome, AuthenticatedIdentity};

// == Public Constants ==
/// Header that must carry the token on authenticated routes
pub const AUTH_HEADER_NAME: &str = "X-Auth-Token";

/// The only header value the gate accepts
pub const ACCEPTED_TOKEN: &str = "secret";
