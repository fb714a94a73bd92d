//! Section contributors shared by members and classes.
//!
//! Each contributor appends nothing when its data is absent, so callers can
//! run them in a fixed order without branching.

use javagen_codegen::{CodeFragment, Renderable};
use javagen_core::is_not_blank;

use crate::{Annotation, Javadoc};

/// A `/* comment */` banner followed by an empty line.
pub(crate) fn section_comment(fragments: &mut Vec<CodeFragment>, comment: Option<&str>) {
    if let Some(comment) = comment.filter(|c| is_not_blank(Some(*c))) {
        fragments.push(CodeFragment::line("/*"));
        fragments.push(CodeFragment::Line(format!(" * {}", comment)));
        fragments.push(CodeFragment::line(" */"));
        fragments.push(CodeFragment::line(""));
    }
}

pub(crate) fn javadoc(fragments: &mut Vec<CodeFragment>, javadoc: Option<&Javadoc>) {
    if let Some(javadoc) = javadoc {
        fragments.extend(javadoc.to_fragments());
    }
}

pub(crate) fn annotations(fragments: &mut Vec<CodeFragment>, annotations: &[Annotation]) {
    for annotation in annotations {
        fragments.extend(annotation.to_fragments());
    }
}

/// Join declaration words with single spaces, skipping empty ones (the
/// package-private visibility keyword is empty).
pub(crate) fn words<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    words
        .into_iter()
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
