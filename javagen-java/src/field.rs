//! Java field model.

use std::fmt;

use javagen_codegen::{CodeFragment, Renderable};
use javagen_core::{Result, Violations, Visibility, is_not_blank};

use crate::{Annotation, Javadoc, header, render};

/// A field declaration, without the trailing `;`.
///
/// Renders as an optional section comment, an optional Javadoc, one
/// annotation per line, then
/// `<visibility>[ static][ final] <type> <name>[ = <value>]`.
#[derive(Debug, Clone)]
pub struct Field {
    section_comment: Option<String>,
    javadoc: Option<Javadoc>,
    annotations: Vec<Annotation>,
    visibility: Visibility,
    is_static: bool,
    is_final: bool,
    ty: String,
    name: String,
    value: Option<String>,
}

impl Field {
    pub fn builder() -> FieldBuilder {
        FieldBuilder::default()
    }

    pub fn section_comment(&self) -> Option<&str> {
        self.section_comment.as_deref()
    }

    pub fn javadoc(&self) -> Option<&Javadoc> {
        self.javadoc.as_ref()
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn declaration(&self) -> String {
        let mut declaration = header::words([
            self.visibility.keyword(),
            if self.is_static { "static" } else { "" },
            if self.is_final { "final" } else { "" },
            self.ty.as_str(),
            self.name.as_str(),
        ]);

        if let Some(value) = self.value.as_deref().filter(|v| is_not_blank(Some(*v))) {
            declaration.push_str(" = ");
            declaration.push_str(value);
        }
        declaration
    }

    fn fragments_terminated(&self, terminator: &str) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        header::section_comment(&mut fragments, self.section_comment.as_deref());
        header::javadoc(&mut fragments, self.javadoc.as_ref());
        header::annotations(&mut fragments, &self.annotations);
        fragments.push(CodeFragment::Line(format!(
            "{}{}",
            self.declaration(),
            terminator
        )));
        fragments
    }

    /// Fragments for the field as a class member, ending in `;`.
    pub(crate) fn member_fragments(&self) -> Vec<CodeFragment> {
        self.fragments_terminated(";")
    }
}

/// Builder for [`Field`]. `ty` and `name` are required; visibility
/// defaults to [`Visibility::Private`].
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    section_comment: Option<String>,
    javadoc: Option<Javadoc>,
    annotations: Vec<Annotation>,
    visibility: Visibility,
    is_static: bool,
    is_final: bool,
    ty: Option<String>,
    name: Option<String>,
    value: Option<String>,
}

impl Default for FieldBuilder {
    fn default() -> Self {
        Self {
            section_comment: None,
            javadoc: None,
            annotations: Vec::new(),
            visibility: Visibility::Private,
            is_static: false,
            is_final: false,
            ty: None,
            name: None,
            value: None,
        }
    }
}

impl FieldBuilder {
    /// A `/* comment */` banner rendered above the field.
    pub fn section_comment(mut self, comment: impl Into<String>) -> Self {
        self.section_comment = Some(comment.into());
        self
    }

    pub fn javadoc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = Some(javadoc);
        self
    }

    /// Replace all annotations.
    pub fn annotations(mut self, annotations: impl IntoIterator<Item = Annotation>) -> Self {
        self.annotations = annotations.into_iter().collect();
        self
    }

    /// Append one annotation.
    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Make the field `static`.
    pub fn is_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn set_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Make the field `final`.
    pub fn is_final(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn set_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Initial value, rendered after ` = `.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Every rule the current parameters break.
    pub fn violations(&self) -> Violations {
        let mut violations = Violations::new("field");
        violations
            .require(self.ty.as_deref(), "Must specify type!")
            .require(self.name.as_deref(), "Must specify name!");
        violations
    }

    pub fn build(self) -> Result<Field> {
        self.violations().finish()?;

        Ok(Field {
            section_comment: self.section_comment,
            javadoc: self.javadoc,
            annotations: self.annotations,
            visibility: self.visibility,
            is_static: self.is_static,
            is_final: self.is_final,
            ty: self.ty.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            value: self.value,
        })
    }
}

impl Renderable for Field {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.fragments_terminated("")
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::joined(self))
    }
}

render::textual_identity!(Field);
