//! Java annotation model.

use std::fmt;

use javagen_codegen::{CodeFragment, Renderable};
use javagen_core::{Result, Violations};

use crate::render;

/// A marker annotation, rendered as `@Name`.
#[derive(Debug, Clone)]
pub struct Annotation {
    name: String,
}

impl Annotation {
    pub fn builder() -> AnnotationBuilder {
        AnnotationBuilder::default()
    }

    /// The annotation name, without the `@`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Builder for [`Annotation`]. `name` is required.
#[derive(Debug, Clone, Default)]
pub struct AnnotationBuilder {
    name: Option<String>,
}

impl AnnotationBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Every rule the current parameters break.
    pub fn violations(&self) -> Violations {
        let mut violations = Violations::new("annotation");
        violations.require(self.name.as_deref(), "Must specify name!");
        violations
    }

    pub fn build(self) -> Result<Annotation> {
        self.violations().finish()?;

        Ok(Annotation {
            name: self.name.unwrap_or_default(),
        })
    }
}

impl Renderable for Annotation {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!("@{}", self.name))]
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::joined(self))
    }
}

render::textual_identity!(Annotation);
