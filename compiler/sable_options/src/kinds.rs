//! Source code kinds and documentation modes.

use std::fmt;

/// How top-level code is interpreted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum SourceCodeKind {
    #[default]
    Regular,
    Script,
    /// Obsolete alias of `Script`. Still accepted, resolved to `Script`,
    /// and reported as unsupported.
    Interactive,
    Other(i32),
}

impl SourceCodeKind {
    pub const fn raw(self) -> i32 {
        match self {
            SourceCodeKind::Regular => 0,
            SourceCodeKind::Script => 1,
            SourceCodeKind::Interactive => 2,
            SourceCodeKind::Other(raw) => raw,
        }
    }

    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            0 => SourceCodeKind::Regular,
            1 => SourceCodeKind::Script,
            2 => SourceCodeKind::Interactive,
            other => SourceCodeKind::Other(other),
        }
    }

    /// Only `Regular` and `Script` are supported kinds.
    pub const fn is_valid(self) -> bool {
        matches!(self, SourceCodeKind::Regular | SourceCodeKind::Script)
    }

    /// The kind the parser actually uses.
    #[must_use]
    pub const fn effective(self) -> Self {
        match self {
            SourceCodeKind::Interactive => SourceCodeKind::Script,
            other => other,
        }
    }
}

impl fmt::Display for SourceCodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceCodeKind::Regular => f.write_str("Regular"),
            SourceCodeKind::Script => f.write_str("Script"),
            SourceCodeKind::Interactive => f.write_str("Interactive"),
            SourceCodeKind::Other(raw) => write!(f, "{raw}"),
        }
    }
}

/// How documentation comments are treated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum DocumentationMode {
    /// `///` and `/** */` are ordinary comments.
    None,
    /// Documentation comments are classified as such.
    #[default]
    Parse,
    /// Classified, and problems inside them are reportable.
    Diagnose,
    Other(i32),
}

impl DocumentationMode {
    pub const fn raw(self) -> i32 {
        match self {
            DocumentationMode::None => 0,
            DocumentationMode::Parse => 1,
            DocumentationMode::Diagnose => 2,
            DocumentationMode::Other(raw) => raw,
        }
    }

    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            0 => DocumentationMode::None,
            1 => DocumentationMode::Parse,
            2 => DocumentationMode::Diagnose,
            other => DocumentationMode::Other(other),
        }
    }

    pub const fn is_valid(self) -> bool {
        !matches!(self, DocumentationMode::Other(_))
    }

    /// Are documentation comments recognised at all?
    pub const fn parses_doc_comments(self) -> bool {
        matches!(self, DocumentationMode::Parse | DocumentationMode::Diagnose)
    }
}

impl fmt::Display for DocumentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentationMode::None => f.write_str("None"),
            DocumentationMode::Parse => f.write_str("Parse"),
            DocumentationMode::Diagnose => f.write_str("Diagnose"),
            DocumentationMode::Other(raw) => write!(f, "{raw}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_resolves_to_script() {
        assert_eq!(SourceCodeKind::Interactive.effective(), SourceCodeKind::Script);
        assert!(!SourceCodeKind::Interactive.is_valid());
        assert_ne!(SourceCodeKind::Interactive, SourceCodeKind::Script);
    }

    #[test]
    fn test_unknown_raw_values_are_kept() {
        assert_eq!(SourceCodeKind::from_raw(7), SourceCodeKind::Other(7));
        assert_eq!(SourceCodeKind::Other(7).to_string(), "7");
        assert_eq!(DocumentationMode::from_raw(100).to_string(), "100");
        assert!(!DocumentationMode::from_raw(100).is_valid());
    }

    #[test]
    fn test_raw_round_trip() {
        for raw in -1..4 {
            assert_eq!(SourceCodeKind::from_raw(raw).raw(), raw);
            assert_eq!(DocumentationMode::from_raw(raw).raw(), raw);
        }
    }
}
