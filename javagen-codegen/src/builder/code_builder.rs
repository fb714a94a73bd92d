//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Renderable};

/// One level of Java indentation.
const INDENT: &str = "\t";

/// Accumulates rendered fragments into tab-indented source text.
///
/// # Example
///
/// ```
/// use javagen_codegen::{CodeBuilder, CodeFragment, Renderable};
///
/// struct Getter;
///
/// impl Renderable for Getter {
///     fn to_fragments(&self) -> Vec<CodeFragment> {
///         vec![CodeFragment::block(
///             "public int size(){",
///             vec![CodeFragment::line("return 0;")],
///             Some("}".to_string()),
///         )]
///     }
/// }
///
/// let mut builder = CodeBuilder::java();
/// builder.emit(&Getter);
/// assert_eq!(builder.build_joined(), "public int size(){\n\treturn 0;\n}");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty builder at indentation level zero.
    pub fn java() -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
        }
    }

    /// Add a line of code at the current indentation.
    ///
    /// Text containing `\n` is split, and every physical line gets the
    /// indentation. An empty line still gets the indentation, so blank lines
    /// inside an indented body come out as indent-only lines.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for line in s.split('\n') {
            for _ in 0..self.indent_level {
                self.buffer.push_str(INDENT);
            }
            self.buffer.push_str(line);
            self.buffer.push('\n');
        }
        self
    }

    /// Add a blank line without indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Emit every fragment of a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.indent_level += 1;
                for f in body {
                    self.apply_fragment(f);
                }
                self.indent_level -= 1;
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
        }
    }

    /// Consume the builder and return the generated code, every line
    /// newline-terminated.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Consume the builder and return the generated lines joined by
    /// newlines, without the terminator after the last line.
    pub fn build_joined(mut self) -> String {
        if self.buffer.ends_with('\n') {
            self.buffer.pop();
        }
        self.buffer
    }
}
