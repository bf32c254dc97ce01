//! Trivia: text between tokens that carries no grammar meaning.

use sable_ir::SyntaxKind;
use smallvec::SmallVec;

/// One piece of whitespace, end-of-line, comment, directive or disabled text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Trivia {
    pub kind: SyntaxKind,
    pub text: String,
}

impl Trivia {
    pub fn new(kind: SyntaxKind, text: impl Into<String>) -> Self {
        debug_assert!(kind.is_trivia(), "{kind:?} is not a trivia kind");
        Trivia {
            kind,
            text: text.into(),
        }
    }

    pub fn width(&self) -> u32 {
        u32::try_from(self.text.len()).unwrap_or(u32::MAX)
    }

    pub fn is_end_of_line(&self) -> bool {
        self.kind == SyntaxKind::EndOfLineTrivia
    }
}

/// Most tokens carry zero to two trivia entries on each side.
pub type TriviaList = SmallVec<[Trivia; 2]>;

/// Total width of a trivia list.
pub(crate) fn list_width(list: &[Trivia]) -> u32 {
    list.iter().map(Trivia::width).sum()
}
