//! Javadoc comment model.
//!
//! A Javadoc is rendered from up to three groups of logical lines:
//! free-text content, the info tags (`@author`, `@version`, `@since`) and
//! the code tags (`@param`, `@return`). Groups that are present are
//! separated by one blank ` * ` line; absent groups contribute nothing.

use std::fmt;

use javagen_codegen::{CodeFragment, Renderable};
use javagen_core::{Result, Violations, is_not_blank};

use crate::render;

/// A Javadoc block, in expanded or condensed layout.
///
/// Expanded:
///
/// ```text
/// /**
///  * content
///  */
/// ```
///
/// Condensed: `/** content */`
#[derive(Debug, Clone)]
pub struct Javadoc {
    condensed: bool,
    content: Vec<String>,
    author: Option<String>,
    version: Option<String>,
    since: Option<String>,
    params: Vec<(String, String)>,
    return_val: Option<String>,
}

impl Javadoc {
    pub fn builder() -> JavadocBuilder {
        JavadocBuilder::default()
    }

    pub fn is_condensed(&self) -> bool {
        self.condensed
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn since(&self) -> Option<&str> {
        self.since.as_deref()
    }

    /// `(name, description)` pairs, in insertion order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn return_val(&self) -> Option<&str> {
        self.return_val.as_deref()
    }

    fn info_lines(&self) -> Vec<String> {
        [
            ("author", &self.author),
            ("version", &self.version),
            ("since", &self.since),
        ]
        .into_iter()
        .filter_map(|(tag, value)| {
            value
                .as_deref()
                .filter(|v| is_not_blank(Some(*v)))
                .map(|v| format!("@{} {}", tag, v))
        })
        .collect()
    }

    fn code_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .params
            .iter()
            .map(|(name, description)| format!("@param {} {}", name, description))
            .collect();
        if let Some(return_val) = self.return_val.as_deref().filter(|r| is_not_blank(Some(*r))) {
            lines.push(format!("@return {}", return_val));
        }
        lines
    }

    /// The comment text without the ` * ` prefixes, with an empty string for
    /// each separator between groups.
    fn logical_lines(&self) -> Vec<String> {
        let groups = [self.content.clone(), self.info_lines(), self.code_lines()];

        let mut lines = Vec::new();
        for group in groups.into_iter().filter(|g| !g.is_empty()) {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.extend(group);
        }
        lines
    }

    fn layout_expanded(lines: Vec<String>) -> Vec<String> {
        let mut out = Vec::with_capacity(lines.len() + 2);
        out.push("/**".to_string());
        out.extend(lines.into_iter().map(|line| format!(" * {}", line)));
        out.push(" */".to_string());
        out
    }

    fn layout_condensed(lines: Vec<String>) -> Vec<String> {
        let mut out: Vec<String> = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                if i == 0 {
                    format!("/** {}", line)
                } else {
                    format!(" * {}", line)
                }
            })
            .collect();

        match out.last_mut() {
            Some(last) => last.push_str(" */"),
            None => out.push("/** */".to_string()),
        }
        out
    }

    /// The rendered comment, one entry per output line.
    fn rendered_lines(&self) -> Vec<String> {
        let lines = self.logical_lines();
        if self.condensed {
            Self::layout_condensed(lines)
        } else {
            Self::layout_expanded(lines)
        }
    }
}

/// Builder for [`Javadoc`]. Nothing is required.
#[derive(Debug, Clone, Default)]
pub struct JavadocBuilder {
    condensed: bool,
    content: Vec<String>,
    author: Option<String>,
    version: Option<String>,
    since: Option<String>,
    params: Vec<(String, String)>,
    return_val: Option<String>,
}

impl JavadocBuilder {
    /// Use the condensed layout.
    pub fn condensed(mut self) -> Self {
        self.condensed = true;
        self
    }

    pub fn set_condensed(mut self, condensed: bool) -> Self {
        self.condensed = condensed;
        self
    }

    /// Append one line of free-text content.
    pub fn content(mut self, line: impl Into<String>) -> Self {
        self.content.push(line.into());
        self
    }

    /// Replace all content lines.
    pub fn content_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn since(mut self, since: impl Into<String>) -> Self {
        self.since = Some(since.into());
        self
    }

    /// Append one `@param`.
    pub fn param(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.params.push((name.into(), description.into()));
        self
    }

    /// Replace all `@param` entries.
    pub fn params<I, N, D>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (N, D)>,
        N: Into<String>,
        D: Into<String>,
    {
        self.params = params
            .into_iter()
            .map(|(name, description)| (name.into(), description.into()))
            .collect();
        self
    }

    pub fn return_val(mut self, return_val: impl Into<String>) -> Self {
        self.return_val = Some(return_val.into());
        self
    }

    /// Every rule the current parameters break. Javadoc has none, so this is
    /// always empty.
    pub fn violations(&self) -> Violations {
        Violations::new("javadoc")
    }

    pub fn build(self) -> Result<Javadoc> {
        self.violations().finish()?;

        Ok(Javadoc {
            condensed: self.condensed,
            content: self.content,
            author: self.author,
            version: self.version,
            since: self.since,
            params: self.params,
            return_val: self.return_val,
        })
    }
}

impl Renderable for Javadoc {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.rendered_lines()
            .into_iter()
            .map(CodeFragment::Line)
            .collect()
    }
}

impl fmt::Display for Javadoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::joined(self))
    }
}

render::textual_identity!(Javadoc);

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> JavadocBuilder {
        Javadoc::builder()
    }

    #[test]
    fn test_defaults() {
        let doc = doc().build().unwrap();
        assert!(!doc.is_condensed());
        assert!(doc.content().is_empty());
        assert_eq!(doc.author(), None);
        assert_eq!(doc.version(), None);
        assert_eq!(doc.since(), None);
        assert!(doc.params().is_empty());
        assert_eq!(doc.return_val(), None);
    }

    #[test]
    fn test_set_all() {
        let doc = doc()
            .condensed()
            .content_lines(["test", "derp"])
            .author("Logan Ferree (Tadukoo)")
            .version("Alpha v.0.1")
            .since("Alpha v.0.0.1")
            .params([("test", "yes"), ("derp", "no")])
            .return_val("this, to continue building")
            .build()
            .unwrap();

        assert!(doc.is_condensed());
        assert_eq!(doc.content(), ["test", "derp"]);
        assert_eq!(doc.author(), Some("Logan Ferree (Tadukoo)"));
        assert_eq!(doc.version(), Some("Alpha v.0.1"));
        assert_eq!(doc.since(), Some("Alpha v.0.0.1"));
        assert_eq!(
            doc.params(),
            [
                ("test".to_string(), "yes".to_string()),
                ("derp".to_string(), "no".to_string())
            ]
        );
        assert_eq!(doc.return_val(), Some("this, to continue building"));
    }

    #[test]
    fn test_set_condensed_explicitly() {
        let doc = doc().condensed().set_condensed(false).build().unwrap();
        assert!(!doc.is_condensed());
    }

    #[test]
    fn test_to_string_empty() {
        assert_eq!(doc().build().unwrap().to_string(), "/**\n */");
    }

    #[test]
    fn test_to_string_with_content() {
        let doc = doc().content("test").content("derp").build().unwrap();
        assert_eq!(doc.to_string(), "/**\n * test\n * derp\n */");
    }

    #[test]
    fn test_to_string_with_author() {
        let doc = doc().author("Logan Ferree (Tadukoo)").build().unwrap();
        assert_eq!(doc.to_string(), "/**\n * @author Logan Ferree (Tadukoo)\n */");
    }

    #[test]
    fn test_to_string_with_version() {
        let doc = doc().version("Alpha v.0.1").build().unwrap();
        assert_eq!(doc.to_string(), "/**\n * @version Alpha v.0.1\n */");
    }

    #[test]
    fn test_to_string_with_since() {
        let doc = doc().since("Alpha v.0.0.1").build().unwrap();
        assert_eq!(doc.to_string(), "/**\n * @since Alpha v.0.0.1\n */");
    }

    #[test]
    fn test_to_string_with_params() {
        let doc = doc().param("test", "yes").param("derp", "no").build().unwrap();
        assert_eq!(
            doc.to_string(),
            "/**\n * @param test yes\n * @param derp no\n */"
        );
    }

    #[test]
    fn test_to_string_with_return_val() {
        let doc = doc().return_val("this, to continue building").build().unwrap();
        assert_eq!(
            doc.to_string(),
            "/**\n * @return this, to continue building\n */"
        );
    }

    #[test]
    fn test_to_string_with_everything() {
        let doc = doc()
            .content("test")
            .content("derp")
            .author("Logan Ferree (Tadukoo)")
            .version("Alpha v.0.1")
            .since("Alpha v.0.0.1")
            .param("test", "yes")
            .param("derp", "no")
            .return_val("this, to continue building")
            .build()
            .unwrap();

        assert_eq!(
            doc.to_string(),
            "/**\n * test\n * derp\n * \n * @author Logan Ferree (Tadukoo)\n \
             * @version Alpha v.0.1\n * @since Alpha v.0.0.1\n * \n * @param test yes\n \
             * @param derp no\n * @return this, to continue building\n */"
        );
    }

    #[test]
    fn test_content_then_code_tags() {
        let doc = doc().content("Adds things").param("a", "first").build().unwrap();
        assert_eq!(doc.to_string(), "/**\n * Adds things\n * \n * @param a first\n */");
    }

    #[test]
    fn test_info_then_code_tags() {
        let doc = doc().since("1.0").return_val("nothing").build().unwrap();
        assert_eq!(
            doc.to_string(),
            "/**\n * @since 1.0\n * \n * @return nothing\n */"
        );
    }

    #[test]
    fn test_blank_tags_are_skipped() {
        let doc = doc().author(" ").return_val("").build().unwrap();
        assert_eq!(doc.to_string(), "/**\n */");
    }

    #[test]
    fn test_condensed_empty() {
        assert_eq!(doc().condensed().build().unwrap().to_string(), "/** */");
    }

    #[test]
    fn test_condensed_with_content() {
        let doc = doc()
            .condensed()
            .content_lines(vec!["test".to_string(), "derp".to_string()])
            .build()
            .unwrap();
        assert_eq!(doc.to_string(), "/** test\n * derp */");
    }

    #[test]
    fn test_condensed_single_tags() {
        let author = doc().condensed().author("Logan Ferree (Tadukoo)").build().unwrap();
        assert_eq!(author.to_string(), "/** @author Logan Ferree (Tadukoo) */");

        let version = doc().condensed().version("Alpha v.0.1").build().unwrap();
        assert_eq!(version.to_string(), "/** @version Alpha v.0.1 */");

        let since = doc().condensed().since("Alpha v.0.0.1").build().unwrap();
        assert_eq!(since.to_string(), "/** @since Alpha v.0.0.1 */");

        let param = doc().condensed().param("test", "yes").build().unwrap();
        assert_eq!(param.to_string(), "/** @param test yes */");

        let ret = doc().condensed().return_val("this").build().unwrap();
        assert_eq!(ret.to_string(), "/** @return this */");
    }

    #[test]
    fn test_condensed_multiple_params() {
        let doc = doc()
            .condensed()
            .param("test", "yes")
            .param("derp", "no")
            .build()
            .unwrap();
        assert_eq!(doc.to_string(), "/** @param test yes\n * @param derp no */");
    }

    #[test]
    fn test_condensed_with_everything() {
        let doc = doc()
            .condensed()
            .content("test")
            .content("derp")
            .author("Logan Ferree (Tadukoo)")
            .version("Alpha v.0.1")
            .since("Alpha v.0.0.1")
            .param("test", "yes")
            .param("derp", "no")
            .return_val("this, to continue building")
            .build()
            .unwrap();

        assert_eq!(
            doc.to_string(),
            "/** test\n * derp\n * \n * @author Logan Ferree (Tadukoo)\n \
             * @version Alpha v.0.1\n * @since Alpha v.0.0.1\n * \n * @param test yes\n \
             * @param derp no\n * @return this, to continue building */"
        );
    }

    #[test]
    fn test_equality_is_textual() {
        let a = doc().content("x").author("").build().unwrap();
        let b = doc().content_lines(["x"]).build().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, doc().condensed().content("x").build().unwrap());
    }

    #[test]
    fn test_render_is_idempotent() {
        let doc = doc().content("x").since("2").build().unwrap();
        assert_eq!(doc.to_string(), doc.to_string());
    }
}
