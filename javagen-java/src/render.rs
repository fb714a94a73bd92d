//! Shared rendering helpers for Java entities.

use javagen_codegen::{CodeBuilder, Renderable};

/// Render a node with Java indentation, lines joined by `\n` and no
/// trailing newline.
pub(crate) fn joined(node: &impl Renderable) -> String {
    let mut builder = CodeBuilder::java();
    builder.emit(node);
    builder.build_joined()
}

/// Render a node with Java indentation, every line newline-terminated.
pub(crate) fn terminated(node: &impl Renderable) -> String {
    let mut builder = CodeBuilder::java();
    builder.emit(node);
    builder.build()
}

/// Implement `PartialEq`, `Eq` and `Hash` on the rendered text of an
/// entity, so entities built along different paths compare equal when
/// they produce the same source.
macro_rules! textual_identity {
    ($($ty:ty),+ $(,)?) => {$(
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.to_string() == other.to_string()
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.to_string().hash(state);
            }
        }
    )+};
}

pub(crate) use textual_identity;
