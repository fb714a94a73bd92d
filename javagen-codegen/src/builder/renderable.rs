//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Model nodes describe their output as fragments, and the
//! [`CodeBuilder`](super::CodeBuilder) decides indentation when the nodes
//! are nested.

/// A fragment of generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// A line of code. Every physical line gets the current indentation and
    /// a newline, including an empty line.
    Line(String),
    /// A blank line with no indentation.
    Blank,
    /// A header line, a body indented one level, and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
