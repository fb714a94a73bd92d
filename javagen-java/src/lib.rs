//! Immutable Java source models that render to exact source text.
//!
//! Every entity is created through its builder. `build()` checks every rule
//! at once and either returns the entity or a single
//! [`Error::Validation`] listing all problems. Built entities render through
//! [`Display`](std::fmt::Display), and also implement
//! [`Renderable`](javagen_codegen::Renderable) so they can be embedded in
//! larger [`CodeBuilder`](javagen_codegen::CodeBuilder) output.
//!
//! Two entities are equal when they render to the same text.
//!
//! # Example
//!
//! ```
//! use javagen_java::{Class, Field, Method};
//!
//! let class = Class::builder()
//!     .package_name("some.package")
//!     .class_name("AClassName")
//!     .field(Field::builder().ty("int").name("test").build()?)
//!     .method(
//!         Method::builder()
//!             .return_type("String")
//!             .name("getSomething")
//!             .parameter("int", "test")
//!             .line("return doSomething();")
//!             .build()?,
//!     )
//!     .build()?;
//!
//! assert_eq!(
//!     class.to_string(),
//!     "package some.package;\n\npublic class AClassName{\n\t\n\tprivate int test;\n\t\n\
//!      \tpublic String getSomething(int test){\n\t\treturn doSomething();\n\t}\n}\n"
//! );
//! # Ok::<(), Box<javagen_java::Error>>(())
//! ```

mod annotation;
mod class;
mod field;
mod header;
mod javadoc;
mod method;
mod render;

pub use annotation::{Annotation, AnnotationBuilder};
pub use class::{Class, ClassBuilder};
pub use field::{Field, FieldBuilder};
pub use javadoc::{Javadoc, JavadocBuilder};
pub use javagen_core::{Error, Result, Visibility};
pub use method::{Method, MethodBuilder, Parameter};
