use miette::Diagnostic;
use thiserror::Error;

/// Result type for javagen builders (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// One or more builder rules were violated.
    ///
    /// The message is every violation joined by newlines, in the order the
    /// builder checks them.
    #[error("{}", .violations.join("\n"))]
    #[diagnostic(
        code(javagen::validation),
        help("fix every listed problem on the {entity} builder and call build() again")
    )]
    Validation {
        entity: &'static str,
        violations: Vec<String>,
    },
}

impl Error {
    /// Create a validation error for the given entity kind.
    pub fn validation(entity: &'static str, violations: Vec<String>) -> Box<Self> {
        Box::new(Error::Validation { entity, violations })
    }

    /// The kind of entity whose builder was rejected (e.g. "class").
    pub fn entity(&self) -> &'static str {
        match self {
            Error::Validation { entity, .. } => *entity,
        }
    }

    /// The individual violations, in check order.
    pub fn violations(&self) -> &[String] {
        match self {
            Error::Validation { violations, .. } => violations,
        }
    }
}
