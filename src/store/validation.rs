//! Identifier and value validators.
//!
//! Pure checks with no side effects. Handlers only call these when strict
//! validation is enabled in the config.

use crate::error::{CharacterError, Result};
use crate::store::{MAX_VALUE, MIN_VALUE};

/// Checks that `id` is exactly one uppercase ASCII letter.
pub fn validate_identifier(id: &str) -> Result<()> {
    match id.as_bytes() {
        [b] if b.is_ascii_uppercase() => Ok(()),
        _ => Err(CharacterError::InvalidCharacter(id.to_string())),
    }
}

/// Checks that `n` lies in `1..=255`.
pub fn validate_value(n: i32) -> Result<()> {
    if (MIN_VALUE..=MAX_VALUE).contains(&n) {
        Ok(())
    } else {
        Err(CharacterError::InvalidNumber(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_accepts_uppercase_letters() {
        for c in 'A'..='Z' {
            assert!(validate_identifier(&c.to_string()).is_ok());
        }
    }

    #[test]
    fn test_identifier_rejects_other_input() {
        for id in ["", "a", "AB", "1", "É", " ", "A "] {
            assert_eq!(
                validate_identifier(id),
                Err(CharacterError::InvalidCharacter(id.to_string()))
            );
        }
    }

    #[test]
    fn test_value_bounds() {
        assert!(validate_value(1).is_ok());
        assert!(validate_value(255).is_ok());
        assert_eq!(validate_value(0), Err(CharacterError::InvalidNumber(0)));
        assert_eq!(validate_value(256), Err(CharacterError::InvalidNumber(256)));
        assert_eq!(validate_value(-5), Err(CharacterError::InvalidNumber(-5)));
    }
}
