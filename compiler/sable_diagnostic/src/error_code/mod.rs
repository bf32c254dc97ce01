//! Error codes for every diagnostic the front-end can report.
//!
//! Each code is the stable `CS####` identifier users search for, paired with
//! a message template. Templates use positional `{0}`, `{1}`, … placeholders
//! that [`crate::Diagnostic::message`] fills from the diagnostic's arguments.

use std::fmt;

use crate::Severity;

/// Error codes for all front-end diagnostics.
///
/// Grouped by the phase that reports them:
/// - options validation (`CS8190`-`CS8192`, `CS8301`)
/// - lexer and preprocessor
/// - parser
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    // Options
    /// Source code kind is not a known kind
    CS8190,
    /// Documentation mode is not a known mode
    CS8191,
    /// Language version is not a known version
    CS8192,
    /// Preprocessor symbol is not a valid identifier
    CS8301,

    // Lexer
    /// Unrecognized escape sequence
    CS1009,
    /// Newline in constant
    CS1010,
    /// Empty character literal
    CS1011,
    /// Too many characters in character literal
    CS1012,
    /// Invalid number
    CS1013,
    /// End-of-file inside a delimited comment
    CS1035,
    /// Unterminated verbatim or interpolated string literal
    CS1039,
    /// Unexpected character
    CS1056,
    /// `...` is not a token
    CS8635,
    /// Unterminated raw string literal
    CS8997,
    /// Raw string content contains a quote run as long as its delimiter
    CS8998,
    /// Raw string line does not start with the closing line's whitespace
    CS8999,
    /// Raw string closing delimiter is not on its own line
    CS9000,
    /// Single-line raw string literal without content
    CS9001,
    /// Multi-line raw string content on the opening line
    CS9002,
    /// Raw string line uses different whitespace than the closing line
    CS9003,

    // Preprocessor
    /// Preprocessor directive expected
    CS1024,
    /// End of directive expected
    CS1025,
    /// `#endif` expected
    CS1027,
    /// Unexpected preprocessor directive
    CS1028,
    /// `#error` directive
    CS1029,
    /// `#warning` directive
    CS1030,
    /// `#define`/`#undef` after the first token
    CS1032,
    /// `#endregion` expected
    CS1038,
    /// Directive is not the first thing on its line
    CS1040,
    /// Invalid preprocessor expression
    CS1517,

    // Parser
    /// Identifier expected
    CS1001,
    /// `;` expected
    CS1002,
    /// A specific token expected
    CS1003,
    /// Duplicate modifier
    CS1004,
    /// Accessor other than `get`/`set`/`init`
    CS1014,
    /// Type or namespace definition, or end-of-file expected
    CS1022,
    /// `)` expected
    CS1026,
    /// Type expected
    CS1031,
    /// Identifier expected, found a keyword
    CS1041,
    /// `{` or `;` expected
    CS1043,
    /// Accessor other than `add`/`remove`
    CS1055,
    /// Unexpected token
    CS1073,
    /// `}` expected
    CS1513,
    /// `{` expected
    CS1514,
    /// Invalid token in a member declaration
    CS1519,
    /// Invalid expression term
    CS1525,
    /// `new` without argument list, initializer or array size
    CS1526,
    /// Using directive after other elements
    CS1529,
    /// Array creation without size or initializer
    CS1586,
    /// Expected expression
    CS1733,
    /// Misplaced `partial` modifier
    CS0267,
    /// Value expected
    CS0443,
    /// Tuple with fewer than two elements
    CS8124,
    /// Preview-only feature used without `preview`
    CS8652,
    /// Feature requires a newer language version
    CS8773,
    /// Top-level statement after a namespace or type declaration
    CS8803,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::CS8190,
        ErrorCode::CS8191,
        ErrorCode::CS8192,
        ErrorCode::CS8301,
        ErrorCode::CS1009,
        ErrorCode::CS1010,
        ErrorCode::CS1011,
        ErrorCode::CS1012,
        ErrorCode::CS1013,
        ErrorCode::CS1035,
        ErrorCode::CS1039,
        ErrorCode::CS1056,
        ErrorCode::CS8635,
        ErrorCode::CS8997,
        ErrorCode::CS8998,
        ErrorCode::CS8999,
        ErrorCode::CS9000,
        ErrorCode::CS9001,
        ErrorCode::CS9002,
        ErrorCode::CS9003,
        ErrorCode::CS1024,
        ErrorCode::CS1025,
        ErrorCode::CS1027,
        ErrorCode::CS1028,
        ErrorCode::CS1029,
        ErrorCode::CS1030,
        ErrorCode::CS1032,
        ErrorCode::CS1038,
        ErrorCode::CS1040,
        ErrorCode::CS1517,
        ErrorCode::CS1001,
        ErrorCode::CS1002,
        ErrorCode::CS1003,
        ErrorCode::CS1004,
        ErrorCode::CS1014,
        ErrorCode::CS1022,
        ErrorCode::CS1026,
        ErrorCode::CS1031,
        ErrorCode::CS1041,
        ErrorCode::CS1043,
        ErrorCode::CS1055,
        ErrorCode::CS1073,
        ErrorCode::CS1513,
        ErrorCode::CS1514,
        ErrorCode::CS1519,
        ErrorCode::CS1525,
        ErrorCode::CS1526,
        ErrorCode::CS1529,
        ErrorCode::CS1586,
        ErrorCode::CS1733,
        ErrorCode::CS0267,
        ErrorCode::CS0443,
        ErrorCode::CS8124,
        ErrorCode::CS8652,
        ErrorCode::CS8773,
        ErrorCode::CS8803,
    ];

    /// The code as a string (e.g., `"CS1002"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::CS8190 => "CS8190",
            ErrorCode::CS8191 => "CS8191",
            ErrorCode::CS8192 => "CS8192",
            ErrorCode::CS8301 => "CS8301",
            ErrorCode::CS1009 => "CS1009",
            ErrorCode::CS1010 => "CS1010",
            ErrorCode::CS1011 => "CS1011",
            ErrorCode::CS1012 => "CS1012",
            ErrorCode::CS1013 => "CS1013",
            ErrorCode::CS1035 => "CS1035",
            ErrorCode::CS1039 => "CS1039",
            ErrorCode::CS1056 => "CS1056",
            ErrorCode::CS8635 => "CS8635",
            ErrorCode::CS8997 => "CS8997",
            ErrorCode::CS8998 => "CS8998",
            ErrorCode::CS8999 => "CS8999",
            ErrorCode::CS9000 => "CS9000",
            ErrorCode::CS9001 => "CS9001",
            ErrorCode::CS9002 => "CS9002",
            ErrorCode::CS9003 => "CS9003",
            ErrorCode::CS1024 => "CS1024",
            ErrorCode::CS1025 => "CS1025",
            ErrorCode::CS1027 => "CS1027",
            ErrorCode::CS1028 => "CS1028",
            ErrorCode::CS1029 => "CS1029",
            ErrorCode::CS1030 => "CS1030",
            ErrorCode::CS1032 => "CS1032",
            ErrorCode::CS1038 => "CS1038",
            ErrorCode::CS1040 => "CS1040",
            ErrorCode::CS1517 => "CS1517",
            ErrorCode::CS1001 => "CS1001",
            ErrorCode::CS1002 => "CS1002",
            ErrorCode::CS1003 => "CS1003",
            ErrorCode::CS1004 => "CS1004",
            ErrorCode::CS1014 => "CS1014",
            ErrorCode::CS1022 => "CS1022",
            ErrorCode::CS1026 => "CS1026",
            ErrorCode::CS1031 => "CS1031",
            ErrorCode::CS1041 => "CS1041",
            ErrorCode::CS1043 => "CS1043",
            ErrorCode::CS1055 => "CS1055",
            ErrorCode::CS1073 => "CS1073",
            ErrorCode::CS1513 => "CS1513",
            ErrorCode::CS1514 => "CS1514",
            ErrorCode::CS1519 => "CS1519",
            ErrorCode::CS1525 => "CS1525",
            ErrorCode::CS1526 => "CS1526",
            ErrorCode::CS1529 => "CS1529",
            ErrorCode::CS1586 => "CS1586",
            ErrorCode::CS1733 => "CS1733",
            ErrorCode::CS0267 => "CS0267",
            ErrorCode::CS0443 => "CS0443",
            ErrorCode::CS8124 => "CS8124",
            ErrorCode::CS8652 => "CS8652",
            ErrorCode::CS8773 => "CS8773",
            ErrorCode::CS8803 => "CS8803",
        }
    }

    /// The message template, with `{N}` placeholders for arguments.
    pub fn template(&self) -> &'static str {
        match self {
            ErrorCode::CS8190 => "Provided source code kind is unsupported or invalid: '{0}'",
            ErrorCode::CS8191 => "Provided documentation mode is unsupported or invalid: '{0}'.",
            ErrorCode::CS8192 => "Provided language version is unsupported or invalid: '{0}'.",
            ErrorCode::CS8301 => {
                "Invalid name for a preprocessing symbol; '{0}' is not a valid identifier"
            }
            ErrorCode::CS1009 => "Unrecognized escape sequence",
            ErrorCode::CS1010 => "Newline in constant",
            ErrorCode::CS1011 => "Empty character literal",
            ErrorCode::CS1012 => "Too many characters in character literal",
            ErrorCode::CS1013 => "Invalid number",
            ErrorCode::CS1035 => "End-of-file found, '*/' expected",
            ErrorCode::CS1039 => "Unterminated string literal",
            ErrorCode::CS1056 => "Unexpected character '{0}'",
            ErrorCode::CS8635 => "Unexpected character sequence '...'",
            ErrorCode::CS8997 => "Unterminated raw string literal.",
            ErrorCode::CS8998 => {
                "The raw string literal does not start with enough quote characters to allow this many consecutive quote characters as content."
            }
            ErrorCode::CS8999 => {
                "Line does not start with the same whitespace as the closing line of the raw string literal."
            }
            ErrorCode::CS9000 => {
                "The closing delimiter of a multi-line raw string literal must appear on its own line."
            }
            ErrorCode::CS9001 => "A single-line raw string literal must contain content.",
            ErrorCode::CS9002 => {
                "Multi-line raw string literal content must start on the line after the opening delimiter."
            }
            ErrorCode::CS9003 => {
                "Line contains different whitespace than the closing line of the raw string literal: '{0}' versus '{1}'"
            }
            ErrorCode::CS1024 => "Preprocessor directive expected",
            ErrorCode::CS1025 => "Single-line comment or end-of-line expected",
            ErrorCode::CS1027 => "#endif directive expected",
            ErrorCode::CS1028 => "Unexpected preprocessor directive",
            ErrorCode::CS1029 => "#error: '{0}'",
            ErrorCode::CS1030 => "#warning: '{0}'",
            ErrorCode::CS1032 => {
                "Cannot define/undefine preprocessor symbols after first token in file"
            }
            ErrorCode::CS1038 => "#endregion directive expected",
            ErrorCode::CS1040 => {
                "Preprocessor directives must appear as the first non-whitespace character on a line"
            }
            ErrorCode::CS1517 => "Invalid preprocessor expression",
            ErrorCode::CS1001 => "Identifier expected",
            ErrorCode::CS1002 => "; expected",
            ErrorCode::CS1003 => "Syntax error, '{0}' expected",
            ErrorCode::CS1004 => "Duplicate '{0}' modifier",
            ErrorCode::CS1014 => "A get or set accessor expected",
            ErrorCode::CS1022 => "Type or namespace definition, or end-of-file expected",
            ErrorCode::CS1026 => ") expected",
            ErrorCode::CS1031 => "Type expected",
            ErrorCode::CS1041 => "Identifier expected; '{0}' is a keyword",
            ErrorCode::CS1043 => "{ or ; expected",
            ErrorCode::CS1055 => "An add or remove accessor expected",
            ErrorCode::CS1073 => "Unexpected token '{0}'",
            ErrorCode::CS1513 => "} expected",
            ErrorCode::CS1514 => "{ expected",
            ErrorCode::CS1519 => {
                "Invalid token '{0}' in class, record, struct, or interface member declaration"
            }
            ErrorCode::CS1525 => "Invalid expression term '{0}'",
            ErrorCode::CS1526 => {
                "A new expression requires an argument list or (), [], or {} after type"
            }
            ErrorCode::CS1529 => {
                "A using clause must precede all other elements defined in the namespace except extern alias declarations"
            }
            ErrorCode::CS1586 => "Array creation must have array size or array initializer",
            ErrorCode::CS1733 => "Expected expression",
            ErrorCode::CS0267 => {
                "The 'partial' modifier can only appear immediately before 'class', 'record', 'struct', 'interface', or a method return type."
            }
            ErrorCode::CS0443 => "Syntax error; value expected",
            ErrorCode::CS8124 => "Tuple must contain at least two elements.",
            ErrorCode::CS8652 => {
                "The feature '{0}' is currently in Preview and *unsupported*. To use Preview features, use the 'preview' language version."
            }
            ErrorCode::CS8773 => {
                "Feature '{0}' is not available in C# {1}. Please use language version {2} or greater."
            }
            ErrorCode::CS8803 => {
                "Top-level statements must precede namespace and type declarations."
            }
        }
    }

    /// Severity a diagnostic with this code is reported at.
    pub fn default_severity(&self) -> Severity {
        if self.is_warning() {
            Severity::Warning
        } else {
            Severity::Error
        }
    }

    /// Is this an options-validation code?
    pub fn is_options_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::CS8190 | ErrorCode::CS8191 | ErrorCode::CS8192 | ErrorCode::CS8301
        )
    }

    /// Is this a lexer or preprocessor code?
    pub fn is_lexer_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::CS1009
                | ErrorCode::CS1010
                | ErrorCode::CS1011
                | ErrorCode::CS1012
                | ErrorCode::CS1013
                | ErrorCode::CS1035
                | ErrorCode::CS1039
                | ErrorCode::CS1056
                | ErrorCode::CS8635
                | ErrorCode::CS8997
                | ErrorCode::CS8998
                | ErrorCode::CS8999
                | ErrorCode::CS9000
                | ErrorCode::CS9001
                | ErrorCode::CS9002
                | ErrorCode::CS9003
                | ErrorCode::CS1024
                | ErrorCode::CS1025
                | ErrorCode::CS1027
                | ErrorCode::CS1028
                | ErrorCode::CS1029
                | ErrorCode::CS1030
                | ErrorCode::CS1032
                | ErrorCode::CS1038
                | ErrorCode::CS1040
                | ErrorCode::CS1517
        )
    }

    /// Is this a parser code?
    pub fn is_parser_error(&self) -> bool {
        !self.is_options_error() && !self.is_lexer_error()
    }

    /// Is this code reported as a warning?
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::CS1030)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a code string like `"CS1002"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
