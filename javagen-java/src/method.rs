//! Java method model.

use std::fmt;

use javagen_codegen::{CodeFragment, Renderable};
use javagen_core::{Result, Violations, Visibility, is_not_blank};

use crate::{Annotation, Javadoc, header, render};

/// A method parameter, rendered as `<type> <name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub ty: String,
    pub name: String,
}

impl Parameter {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// A method with an opaque body.
///
/// Without a name the declaration is constructor-style: the return type
/// stands in for the class name, as in `public AClassName(){`.
#[derive(Debug, Clone)]
pub struct Method {
    section_comment: Option<String>,
    javadoc: Option<Javadoc>,
    annotations: Vec<Annotation>,
    visibility: Visibility,
    is_static: bool,
    return_type: String,
    name: Option<String>,
    parameters: Vec<Parameter>,
    throw_types: Vec<String>,
    lines: Vec<String>,
}

impl Method {
    pub fn builder() -> MethodBuilder {
        MethodBuilder::default()
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

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn throw_types(&self) -> &[String] {
        &self.throw_types
    }

    /// Body lines, in order, without indentation.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn declaration(&self) -> String {
        let mut declaration = header::words([
            self.visibility.keyword(),
            if self.is_static { "static" } else { "" },
            self.return_type.as_str(),
        ]);

        if let Some(name) = self.name.as_deref().filter(|n| is_not_blank(Some(*n))) {
            declaration.push(' ');
            declaration.push_str(name);
        }

        let parameters = self
            .parameters
            .iter()
            .map(Parameter::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        declaration.push('(');
        declaration.push_str(&parameters);
        declaration.push(')');

        if !self.throw_types.is_empty() {
            declaration.push_str(" throws ");
            declaration.push_str(&self.throw_types.join(", "));
        }

        declaration.push('{');
        declaration
    }
}

/// Builder for [`Method`]. `return_type` is required; visibility defaults
/// to [`Visibility::Public`].
#[derive(Debug, Clone, Default)]
pub struct MethodBuilder {
    section_comment: Option<String>,
    javadoc: Option<Javadoc>,
    annotations: Vec<Annotation>,
    visibility: Visibility,
    is_static: bool,
    return_type: Option<String>,
    name: Option<String>,
    parameters: Vec<Parameter>,
    throw_types: Vec<String>,
    lines: Vec<String>,
}

impl MethodBuilder {
    /// A `/* comment */` banner rendered above the method.
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

    /// Make the method `static`.
    pub fn is_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn set_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    /// Leave unset for a constructor.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace all parameters.
    pub fn parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.parameters = parameters.into_iter().collect();
        self
    }

    /// Append one `<type> <name>` parameter.
    pub fn parameter(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(ty, name));
        self
    }

    /// Replace all thrown types.
    pub fn throw_types<I, S>(mut self, throw_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.throw_types = throw_types.into_iter().map(Into::into).collect();
        self
    }

    /// Append one thrown type.
    pub fn throw_type(mut self, throw_type: impl Into<String>) -> Self {
        self.throw_types.push(throw_type.into());
        self
    }

    /// Replace all body lines.
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Append one body line.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Every rule the current parameters break.
    pub fn violations(&self) -> Violations {
        let mut violations = Violations::new("method");
        violations.require(self.return_type.as_deref(), "Must specify returnType!");
        violations
    }

    pub fn build(self) -> Result<Method> {
        self.violations().finish()?;

        Ok(Method {
            section_comment: self.section_comment,
            javadoc: self.javadoc,
            annotations: self.annotations,
            visibility: self.visibility,
            is_static: self.is_static,
            return_type: self.return_type.unwrap_or_default(),
            name: self.name,
            parameters: self.parameters,
            throw_types: self.throw_types,
            lines: self.lines,
        })
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        header::section_comment(&mut fragments, self.section_comment.as_deref());
        header::javadoc(&mut fragments, self.javadoc.as_ref());
        header::annotations(&mut fragments, &self.annotations);

        fragments.push(CodeFragment::block(
            self.declaration(),
            self.lines.iter().map(CodeFragment::line).collect(),
            Some("}".to_string()),
        ));
        fragments
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::joined(self))
    }
}

render::textual_identity!(Method);
