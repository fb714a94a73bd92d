//! Violation collection for builder validation.

use crate::{Error, Result, is_blank};

/// Ordered list of rule violations found while validating one builder.
///
/// Builders record every failed rule instead of stopping at the first one,
/// then turn the whole list into a single [`Error::Validation`] with
/// [`Violations::finish`].
///
/// # Example
///
/// ```
/// use javagen_core::Violations;
///
/// let mut violations = Violations::new("field");
/// violations
///     .require(None, "Must specify type!")
///     .require(Some("count"), "Must specify name!");
///
/// let err = violations.finish().unwrap_err();
/// assert_eq!(err.to_string(), "Must specify type!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations {
    entity: &'static str,
    messages: Vec<String>,
}

impl Violations {
    /// Start an empty violation list for the given entity kind.
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            messages: Vec::new(),
        }
    }

    /// Record `message` if `value` is absent or blank.
    pub fn require(&mut self, value: Option<&str>, message: impl Into<String>) -> &mut Self {
        self.check(is_blank(value), message)
    }

    /// Record `message` if `failed` is true.
    pub fn check(&mut self, failed: bool, message: impl Into<String>) -> &mut Self {
        if failed {
            self.messages.push(message.into());
        }
        self
    }

    /// Record `message` unconditionally.
    pub fn push(&mut self, message: impl Into<String>) -> &mut Self {
        self.messages.push(message.into());
        self
    }

    /// The entity kind these violations belong to.
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// The recorded messages, in check order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Succeed if nothing was recorded, otherwise fail with every message.
    pub fn finish(self) -> Result<()> {
        if self.messages.is_empty() {
            tracing::trace!(entity = self.entity, "builder validated");
            return Ok(());
        }

        tracing::debug!(
            entity = self.entity,
            violations = self.messages.len(),
            "rejected build"
        );
        Err(Error::validation(self.entity, self.messages))
    }
}
