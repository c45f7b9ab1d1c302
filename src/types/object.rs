//! Documentation object model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a documented Objective-C object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Class,
    Category,
    Protocol,
}

impl ObjectKind {
    /// Index and scan order
    pub const ALL: [ObjectKind; 3] = [Self::Class, Self::Category, Self::Protocol];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Category => "category",
            Self::Protocol => "protocol",
        }
    }

    /// Directory holding objects of this kind, on both the XML and XHTML side
    pub fn subdirectory(&self) -> &'static str {
        match self {
            Self::Class => "Classes",
            Self::Category => "Categories",
            Self::Protocol => "Protocols",
        }
    }

    /// File stem for an object of this kind.
    ///
    /// Category names look like `NSString(Additions)`; the parentheses are
    /// dropped so the file name stays URL-safe.
    pub fn file_stem(&self, name: &str) -> String {
        match self {
            Self::Category => name.chars().filter(|c| !matches!(c, '(' | ')')).collect(),
            Self::Class | Self::Protocol => name.to_string(),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "class" => Some(Self::Class),
            "category" => Some(Self::Category),
            "protocol" => Some(Self::Protocol),
            _ => None,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ObjectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "Unknown object kind: {}. Valid values: class, category, protocol",
                s
            )
        })
    }
}

/// A relocated documentation object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocObject {
    pub name: String,
    pub kind: ObjectKind,
}

impl DocObject {
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Path of this object relative to an XML or XHTML root
    pub fn relative_path(&self, extension: &str) -> std::path::PathBuf {
        std::path::Path::new(self.kind.subdirectory()).join(format!("{}.{}", self.name, extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_subdirectories() {
        assert_eq!(ObjectKind::Class.subdirectory(), "Classes");
        assert_eq!(ObjectKind::Category.subdirectory(), "Categories");
        assert_eq!(ObjectKind::Protocol.subdirectory(), "Protocols");
    }

    #[test]
    fn test_category_stem_strips_parentheses() {
        assert_eq!(ObjectKind::Category.file_stem("Foo(Bar)"), "FooBar");
        assert_eq!(ObjectKind::Class.file_stem("Foo(Bar)"), "Foo(Bar)");
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(ObjectKind::parse("struct").is_none());
        assert!(ObjectKind::parse("Class").is_none());
        assert!("interface".parse::<ObjectKind>().is_err());
    }

    #[test]
    fn test_relative_path() {
        let obj = DocObject::new("NSStringExtras", ObjectKind::Category);
        assert_eq!(
            obj.relative_path("html"),
            std::path::PathBuf::from("Categories/NSStringExtras.html")
        );
    }

    proptest! {
        #[test]
        fn category_stem_never_contains_parentheses(name in "[A-Za-z()_ ]{0,24}") {
            let stem = ObjectKind::Category.file_stem(&name);
            prop_assert!(!stem.contains('(') && !stem.contains(')'));
            prop_assert_eq!(stem.len(), name.len() - name.matches(['(', ')']).count());
        }

        #[test]
        fn kind_names_parse_back(idx in 0usize..3) {
            let kind = ObjectKind::ALL[idx];
            prop_assert_eq!(kind.as_str().parse::<ObjectKind>(), Ok(kind));
        }
    }
}
