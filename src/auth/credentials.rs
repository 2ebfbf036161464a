//! Fixed credentials checked by `POST /token`.

use crate::auth::ACCEPTED_TOKEN;
use crate::error::{CharacterError, Result};

/// Username accepted by the token endpoint
pub const USERNAME: &str = "user";

/// Password accepted by the token endpoint
pub const PASSWORD: &str = "password";

/// Token handed out on a successful login; identical to what the gate accepts.
pub const ISSUED_TOKEN: &str = ACCEPTED_TOKEN;

/// Returns the issued token when `username`/`password` match the fixed pair.
pub fn check_credentials(username: &str, password: &str) -> Result<&'static str> {
    if username == USERNAME && password == PASSWORD {
        Ok(ISSUED_TOKEN)
    } else {
        Err(CharacterError::InvalidCredentials)
    }
}
