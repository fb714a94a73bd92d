//! Core utilities and types for javagen.
//!
//! This crate provides the pieces shared by every entity in the
//! Java source model: the aggregated validation error, the violation
//! collector used by builders, blank-string helpers, and the
//! [`Visibility`] keyword vocabulary.

mod error;
mod utils;
mod validate;
mod visibility;

// Errors
pub use error::{Error, Result};
// String utilities
pub use utils::{is_blank, is_not_blank};
// Validation
pub use validate::Violations;
// Modifiers
pub use visibility::Visibility;
