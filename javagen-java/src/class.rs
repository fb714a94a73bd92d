//! Java class model, the root of a compilation unit.
//!
//! A top-level class renders as a full file:
//!
//! ```text
//! package <name>;
//!
//! import <x>;
//!
//! import static <y>;
//!
//! /** javadoc */
//! @Annotations
//! public class Name extends Super{
//! <tab>
//! <tab>inner classes, fields, methods
//! }
//! ```
//!
//! Inner classes skip the package, imports and the separator before the
//! declaration, and are indented one level by their parent.

use std::fmt;

use javagen_codegen::{CodeFragment, Renderable};
use javagen_core::{Result, Violations, Visibility, is_blank, is_not_blank};

use crate::{Annotation, Field, Javadoc, Method, header, render};

#[derive(Debug, Clone)]
pub struct Class {
    is_inner_class: bool,
    package_name: Option<String>,
    imports: Vec<Option<String>>,
    static_imports: Vec<Option<String>>,
    javadoc: Option<Javadoc>,
    annotations: Vec<Annotation>,
    visibility: Visibility,
    is_static: bool,
    class_name: String,
    super_class_name: Option<String>,
    inner_classes: Vec<Class>,
    fields: Vec<Field>,
    methods: Vec<Method>,
}

impl Class {
    pub fn builder() -> ClassBuilder {
        ClassBuilder::default()
    }

    pub fn is_inner_class(&self) -> bool {
        self.is_inner_class
    }

    pub fn package_name(&self) -> Option<&str> {
        self.package_name.as_deref()
    }

    /// Import entries; `None` entries render as spacer lines.
    pub fn imports(&self) -> &[Option<String>] {
        &self.imports
    }

    /// Static import entries; `None` entries render as spacer lines.
    pub fn static_imports(&self) -> &[Option<String>] {
        &self.static_imports
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

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn super_class_name(&self) -> Option<&str> {
        self.super_class_name.as_deref()
    }

    pub fn inner_classes(&self) -> &[Class] {
        &self.inner_classes
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    fn declaration(&self) -> String {
        let mut declaration = header::words([
            self.visibility.keyword(),
            if self.is_static { "static" } else { "" },
            "class",
            self.class_name.as_str(),
        ]);

        if let Some(super_class) = self
            .super_class_name
            .as_deref()
            .filter(|s| is_not_blank(Some(*s)))
        {
            declaration.push_str(" extends ");
            declaration.push_str(super_class);
        }

        declaration.push('{');
        declaration
    }

    fn push_package(&self, fragments: &mut Vec<CodeFragment>) {
        if !self.is_inner_class {
            fragments.push(CodeFragment::Line(format!(
                "package {};",
                self.package_name.as_deref().unwrap_or_default()
            )));
        }
    }

    fn push_imports(fragments: &mut Vec<CodeFragment>, keyword: &str, imports: &[Option<String>]) {
        if imports.is_empty() {
            return;
        }

        fragments.push(CodeFragment::Blank);
        for import in imports {
            match import.as_deref().filter(|i| is_not_blank(Some(*i))) {
                Some(import) => fragments.push(CodeFragment::Line(format!("{} {};", keyword, import))),
                None => fragments.push(CodeFragment::Blank),
            }
        }
    }

    /// Body of the class braces, before indentation by the enclosing block.
    fn body(&self) -> Vec<CodeFragment> {
        // Empty first line marks the start of the body
        let mut body = vec![CodeFragment::line("")];

        for inner in &self.inner_classes {
            body.extend(inner.to_fragments());
            body.push(CodeFragment::line(""));
        }

        for field in &self.fields {
            body.extend(field.member_fragments());
        }

        if !self.methods.is_empty() {
            if !self.fields.is_empty() {
                body.push(CodeFragment::line(""));
            }
            for (i, method) in self.methods.iter().enumerate() {
                if i > 0 {
                    body.push(CodeFragment::line(""));
                }
                body.extend(method.to_fragments());
            }
        }

        body
    }
}

/// Builder for [`Class`].
///
/// `class_name` is always required. A top-level class also needs a
/// `package_name` and cannot be static; an inner class cannot have a
/// package or imports.
#[derive(Debug, Clone, Default)]
pub struct ClassBuilder {
    is_inner_class: bool,
    package_name: Option<String>,
    imports: Vec<Option<String>>,
    static_imports: Vec<Option<String>>,
    javadoc: Option<Javadoc>,
    annotations: Vec<Annotation>,
    visibility: Visibility,
    is_static: bool,
    class_name: Option<String>,
    super_class_name: Option<String>,
    inner_classes: Vec<Class>,
    fields: Vec<Field>,
    methods: Vec<Method>,
}

impl ClassBuilder {
    /// Mark this class as an inner class.
    pub fn inner_class(mut self) -> Self {
        self.is_inner_class = true;
        self
    }

    pub fn set_inner_class(mut self, is_inner_class: bool) -> Self {
        self.is_inner_class = is_inner_class;
        self
    }

    pub fn package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = Some(package_name.into());
        self
    }

    /// Replace all imports. `None` entries become spacer lines.
    pub fn imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        self.imports = imports.into_iter().map(|i| i.map(Into::into)).collect();
        self
    }

    /// Append one import.
    pub fn single_import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(Some(import.into()));
        self
    }

    /// Append a spacer line between imports.
    pub fn blank_import(mut self) -> Self {
        self.imports.push(None);
        self
    }

    /// Replace all static imports. `None` entries become spacer lines.
    pub fn static_imports<I, S>(mut self, static_imports: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        self.static_imports = static_imports
            .into_iter()
            .map(|i| i.map(Into::into))
            .collect();
        self
    }

    /// Append one static import.
    pub fn static_import(mut self, static_import: impl Into<String>) -> Self {
        self.static_imports.push(Some(static_import.into()));
        self
    }

    /// Append a spacer line between static imports.
    pub fn blank_static_import(mut self) -> Self {
        self.static_imports.push(None);
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

    /// Make the class `static`. Only legal for inner classes.
    pub fn is_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn set_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn super_class_name(mut self, super_class_name: impl Into<String>) -> Self {
        self.super_class_name = Some(super_class_name.into());
        self
    }

    /// Replace all nested classes. Each must be built with
    /// [`inner_class`](Self::inner_class).
    pub fn inner_classes(mut self, inner_classes: impl IntoIterator<Item = Class>) -> Self {
        self.inner_classes = inner_classes.into_iter().collect();
        self
    }

    /// Append one nested class.
    pub fn with_inner_class(mut self, inner_class: Class) -> Self {
        self.inner_classes.push(inner_class);
        self
    }

    /// Replace all fields.
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    /// Append one field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Replace all methods.
    pub fn methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.methods = methods.into_iter().collect();
        self
    }

    /// Append one method.
    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Every rule the current parameters break, in reporting order.
    pub fn violations(&self) -> Violations {
        let mut violations = Violations::new("class");

        // General problems
        violations.require(self.class_name.as_deref(), "Must specify className!");
        for inner in self.inner_classes.iter().filter(|c| !c.is_inner_class()) {
            violations.push(format!(
                "Inner class '{}' is not an inner class!",
                inner.class_name()
            ));
        }

        if self.is_inner_class {
            violations
                .check(
                    is_not_blank(self.package_name.as_deref()),
                    "Not allowed to have packageName for an inner class!",
                )
                .check(
                    !self.imports.is_empty(),
                    "Not allowed to have imports for an inner class!",
                )
                .check(
                    !self.static_imports.is_empty(),
                    "Not allowed to have static imports for an inner class!",
                );
        } else {
            violations
                .check(
                    is_blank(self.package_name.as_deref()),
                    "Must specify packageName when not making an inner class!",
                )
                .check(self.is_static, "Only inner classes can be static!");
        }

        violations
    }

    pub fn build(self) -> Result<Class> {
        self.violations().finish()?;

        Ok(Class {
            is_inner_class: self.is_inner_class,
            package_name: self.package_name,
            imports: self.imports,
            static_imports: self.static_imports,
            javadoc: self.javadoc,
            annotations: self.annotations,
            visibility: self.visibility,
            is_static: self.is_static,
            class_name: self.class_name.unwrap_or_default(),
            super_class_name: self.super_class_name,
            inner_classes: self.inner_classes,
            fields: self.fields,
            methods: self.methods,
        })
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        self.push_package(&mut fragments);
        Self::push_imports(&mut fragments, "import", &self.imports);
        Self::push_imports(&mut fragments, "import static", &self.static_imports);
        if !self.is_inner_class {
            fragments.push(CodeFragment::Blank);
        }

        header::javadoc(&mut fragments, self.javadoc.as_ref());
        header::annotations(&mut fragments, &self.annotations);

        fragments.push(CodeFragment::block(
            self.declaration(),
            self.body(),
            Some("}".to_string()),
        ));
        fragments
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::terminated(self))
    }
}

render::textual_identity!(Class);
