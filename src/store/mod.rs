//! Store Module
//!
//! In-memory character store and the validators for its keys and values.

mod character_store;
pub mod validation;


// Re-export public types
pub use character_store::CharacterStore;
pub use validation::{validate_identifier, validate_value};

// == Public Constants ==
/// Smallest value accepted by the validator
pub const MIN_VALUE: i32 = 1;

/// Largest value accepted by the validator
pub const MAX_VALUE: i32 = 255;
