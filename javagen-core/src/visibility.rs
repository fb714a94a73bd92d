//! Java access modifiers.

use std::fmt;

/// Visibility/access level for classes and members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// `public`
    #[default]
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
    /// No modifier (package-private).
    PackagePrivate,
}

impl Visibility {
    /// The keyword written in declarations. Empty for package-private.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::PackagePrivate => "",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(Visibility::Public.keyword(), "public");
        assert_eq!(Visibility::Protected.keyword(), "protected");
        assert_eq!(Visibility::Private.keyword(), "private");
        assert_eq!(Visibility::PackagePrivate.keyword(), "");
    }

    #[test]
    fn test_default_is_public() {
        assert_eq!(Visibility::default(), Visibility::Public);
    }

    #[test]
    fn test_display() {
        assert_eq!(Visibility::Protected.to_string(), "protected");
    }
}
