//! Code building blocks for javagen.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)

pub mod builder;

pub use builder::{CodeBuilder, CodeFragment, Renderable};
