//! Tokens with attached trivia.

use std::fmt;

use sable_diagnostic::Diagnostic;
use sable_ir::{Span, SyntaxKind};

use crate::trivia::{list_width, Trivia, TriviaList};

bitflags::bitflags! {
    /// Per-token metadata.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u8 {
        /// Synthesised by error recovery; zero width, no trivia.
        const MISSING = 1 << 0;
        /// Identifier written with a leading `@`.
        const VERBATIM = 1 << 1;
        /// Produced by joining adjacent `>` tokens.
        const JOINED = 1 << 2;
    }
}

/// A token: kind, exact source text, surrounding trivia and position.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: SyntaxKind,
    /// For identifiers spelled like a contextual keyword, that keyword's kind;
    /// otherwise [`SyntaxKind::None`].
    pub contextual_kind: SyntaxKind,
    pub text: String,
    /// Decoded value of string, character and raw string literals.
    pub value: Option<String>,
    pub leading: TriviaList,
    pub trailing: TriviaList,
    /// Offset of the first byte of leading trivia.
    pub full_start: u32,
    pub flags: TokenFlags,
    /// Lexical diagnostics for this token.
    pub diagnostics: Vec<Diagnostic>,
}

impl Token {
    /// A present token without trivia.
    pub fn new(kind: SyntaxKind, text: impl Into<String>, full_start: u32) -> Self {
        Token {
            kind,
            contextual_kind: SyntaxKind::None,
            text: text.into(),
            value: None,
            leading: TriviaList::new(),
            trailing: TriviaList::new(),
            full_start,
            flags: TokenFlags::empty(),
            diagnostics: Vec::new(),
        }
    }

    /// A zero-width placeholder for a token the grammar required.
    pub fn missing(kind: SyntaxKind, position: u32) -> Self {
        let mut token = Token::new(kind, "", position);
        token.flags = TokenFlags::MISSING;
        token
    }

    pub fn is_missing(&self) -> bool {
        self.flags.contains(TokenFlags::MISSING)
    }

    /// Is this an identifier spelled as the given contextual keyword?
    pub fn is_contextual(&self, keyword: SyntaxKind) -> bool {
        self.kind == SyntaxKind::IdentifierToken
            && self.contextual_kind == keyword
            && !self.flags.contains(TokenFlags::VERBATIM)
    }

    pub fn leading_width(&self) -> u32 {
        list_width(&self.leading)
    }

    pub fn trailing_width(&self) -> u32 {
        list_width(&self.trailing)
    }

    pub fn text_width(&self) -> u32 {
        u32::try_from(self.text.len()).unwrap_or(u32::MAX)
    }

    pub fn full_width(&self) -> u32 {
        self.leading_width() + self.text_width() + self.trailing_width()
    }

    /// Span of the token text alone.
    pub fn span(&self) -> Span {
        Span::at(self.full_start + self.leading_width(), self.text_width())
    }

    /// Span including leading and trailing trivia.
    pub fn full_span(&self) -> Span {
        Span::at(self.full_start, self.full_width())
    }

    /// Offset just past the token text.
    pub fn text_end(&self) -> u32 {
        self.span().end
    }

    pub fn full_text(&self) -> String {
        let mut out = String::with_capacity(self.full_width() as usize);
        self.write_full_text(&mut out);
        out
    }

    pub fn write_full_text(&self, out: &mut String) {
        for trivia in &self.leading {
            out.push_str(&trivia.text);
        }
        out.push_str(&self.text);
        for trivia in &self.trailing {
            out.push_str(&trivia.text);
        }
    }

    /// Does trailing trivia end the line?
    pub fn ends_line(&self) -> bool {
        self.trailing.iter().any(Trivia::is_end_of_line)
    }

    /// Does any end-of-line appear in the leading trivia?
    pub fn starts_line(&self) -> bool {
        self.leading.iter().any(Trivia::is_end_of_line)
    }

    /// Move every position by `delta` bytes.
    pub fn shift(&mut self, delta: i64) {
        self.full_start = shift_offset(self.full_start, delta);
        for diag in &mut self.diagnostics {
            diag.span = Span::new(
                shift_offset(diag.span.start, delta),
                shift_offset(diag.span.end, delta),
            );
        }
    }
}

fn shift_offset(offset: u32, delta: i64) -> u32 {
    u32::try_from(i64::from(offset) + delta).unwrap_or(0)
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_missing() {
            write!(f, "{:?} <missing> @ {}", self.kind, self.full_start)
        } else {
            write!(f, "{:?} {:?} @ {}", self.kind, self.text, self.span())
        }
    }
}
