//! Shared string helpers for builders and renderers.

/// Check whether an optional string is absent or only whitespace.
pub fn is_blank(s: Option<&str>) -> bool {
    s.is_none_or(|s| s.trim().is_empty())
}

/// Check whether an optional string has any non-whitespace content.
pub fn is_not_blank(s: Option<&str>) -> bool {
    !is_blank(s)
}
