//! Error recovery for the parser.
//!
//! Provides token sets and the recovery decision used when a production
//! meets a token it cannot use. Uses bitset-based O(1) membership testing.
//!
//! Three outcomes exist. A required token that is simply absent is
//! synthesised as a zero-width missing token. A token that cannot continue
//! anything nearby is skipped into a `SkippedTokens` node. A token that an
//! enclosing production knows how to handle makes the current list bail
//! out and leave it in place.

use sable_ir::SyntaxKind;
use SyntaxKind as K;

// `TokenSet` is four u64 words; token discriminants must stay below 256.
const _: () = assert!(
    (SyntaxKind::EndOfFileToken as u16) < 256,
    "TokenSet holds 256 bits; all token discriminants must be < 256"
);

/// A set of token kinds using bitset representation for O(1) membership testing.
///
/// Node and trivia kinds are never members: `contains` answers `false`
/// for any discriminant outside the token range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) struct TokenSet([u64; 4]);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub(crate) const fn new() -> Self {
        Self([0; 4])
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub(crate) const fn with(self, kind: SyntaxKind) -> Self {
        let i = kind.index();
        if i >= 256 {
            return self;
        }
        let mut words = self.0;
        words[i / 64] |= 1u64 << (i % 64);
        Self(words)
    }

    /// Union of two token sets.
    #[inline]
    #[must_use]
    pub(crate) const fn union(self, other: Self) -> Self {
        let (a, b) = (self.0, other.0);
        Self([a[0] | b[0], a[1] | b[1], a[2] | b[2], a[3] | b[3]])
    }

    /// Check if this set contains a token kind.
    #[inline]
    pub(crate) const fn contains(&self, kind: SyntaxKind) -> bool {
        let i = kind.index();
        i < 256 && (self.0[i / 64] & (1u64 << (i % 64))) != 0
    }

    /// A set holding every kind in `kinds`.
    pub(crate) const fn of(kinds: &[SyntaxKind]) -> Self {
        let mut set = Self::new();
        let mut i = 0;
        while i < kinds.len() {
            set = set.with(kinds[i]);
            i += 1;
        }
        set
    }
}

/// Where the parser is in handling an error at the current position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum RecoveryState {
    /// Tokens match the grammar.
    #[default]
    Matching,
    /// Unexpected tokens are being consumed.
    Skipping,
    /// A missing token was just inserted at the current position.
    Synthesizing,
    /// Skipping ended on a token that resumes a production.
    Recovered,
}

impl RecoveryState {
    /// Is an error at the current position already being handled?
    pub(crate) fn is_recovering(self) -> bool {
        matches!(self, RecoveryState::Synthesizing | RecoveryState::Recovered)
    }
}

/// What to do with a token that does not fit the current list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RecoveryAction {
    /// The token starts another element; insert the missing piece before it.
    Synthesize,
    /// The token is noise; consume it as skipped.
    Skip,
    /// An enclosing production owns the token; stop the current list.
    Bail,
}

/// Decide how a list reacts to `current`.
///
/// `resumes` holds tokens that can start another element of the list;
/// `terminators` holds tokens that end the list or belong to an enclosing
/// production. End of file always bails.
pub(crate) fn recovery_action(
    current: SyntaxKind,
    resumes: TokenSet,
    terminators: TokenSet,
) -> RecoveryAction {
    if current == SyntaxKind::EndOfFileToken || terminators.contains(current) {
        RecoveryAction::Bail
    } else if resumes.contains(current) {
        RecoveryAction::Synthesize
    } else {
        RecoveryAction::Skip
    }
}

// Pre-defined token sets. These are computed at compile time using const fn.

/// Keywords that name a built-in type.
pub(crate) const PREDEFINED_TYPES: TokenSet = TokenSet::of(&[
    K::BoolKeyword,
    K::ByteKeyword,
    K::SByteKeyword,
    K::ShortKeyword,
    K::UShortKeyword,
    K::IntKeyword,
    K::UIntKeyword,
    K::LongKeyword,
    K::ULongKeyword,
    K::DoubleKeyword,
    K::FloatKeyword,
    K::DecimalKeyword,
    K::StringKeyword,
    K::CharKeyword,
    K::VoidKeyword,
    K::ObjectKeyword,
]);

pub(crate) const LITERALS: TokenSet = TokenSet::of(&[
    K::NumericLiteralToken,
    K::CharacterLiteralToken,
    K::StringLiteralToken,
    K::Utf8StringLiteralToken,
    K::SingleLineRawStringLiteralToken,
    K::MultiLineRawStringLiteralToken,
    K::InterpolatedStringToken,
    K::InterpolatedRawStringToken,
]);

/// Tokens that can begin an expression.
pub(crate) const EXPRESSION_START: TokenSet = TokenSet::of(&[
    K::IdentifierToken,
    K::OpenParenToken,
    K::OpenBracketToken,
    K::ExclamationToken,
    K::TildeToken,
    K::PlusToken,
    K::MinusToken,
    K::PlusPlusToken,
    K::MinusMinusToken,
    K::AmpersandToken,
    K::AsteriskToken,
    K::CaretToken,
    K::DotDotToken,
    K::ThisKeyword,
    K::BaseKeyword,
    K::NewKeyword,
    K::TypeOfKeyword,
    K::SizeOfKeyword,
    K::CheckedKeyword,
    K::UncheckedKeyword,
    K::DefaultKeyword,
    K::NullKeyword,
    K::TrueKeyword,
    K::FalseKeyword,
    K::DelegateKeyword,
    K::StackAllocKeyword,
    K::ThrowKeyword,
    K::RefKeyword,
    K::ArgListKeyword,
    K::StaticKeyword,
])
.union(LITERALS)
.union(PREDEFINED_TYPES);

/// Reserved keywords usable as declaration modifiers.
pub(crate) const MODIFIERS: TokenSet = TokenSet::of(&[
    K::PublicKeyword,
    K::PrivateKeyword,
    K::InternalKeyword,
    K::ProtectedKeyword,
    K::StaticKeyword,
    K::ReadOnlyKeyword,
    K::SealedKeyword,
    K::ConstKeyword,
    K::FixedKeyword,
    K::VolatileKeyword,
    K::NewKeyword,
    K::OverrideKeyword,
    K::AbstractKeyword,
    K::VirtualKeyword,
    K::ExternKeyword,
    K::UnsafeKeyword,
    K::RefKeyword,
]);

/// Keywords that begin a statement form of their own.
const STATEMENT_KEYWORDS: TokenSet = TokenSet::of(&[
    K::OpenBraceToken,
    K::SemicolonToken,
    K::IfKeyword,
    K::WhileKeyword,
    K::ForKeyword,
    K::ForEachKeyword,
    K::DoKeyword,
    K::SwitchKeyword,
    K::BreakKeyword,
    K::ContinueKeyword,
    K::GotoKeyword,
    K::ReturnKeyword,
    K::TryKeyword,
    K::LockKeyword,
    K::UsingKeyword,
    K::FixedKeyword,
    K::ConstKeyword,
    K::UnsafeKeyword,
    K::ExternKeyword,
    K::VolatileKeyword,
    K::ReadOnlyKeyword,
]);

/// Tokens that can begin a statement.
pub(crate) const STATEMENT_START: TokenSet = STATEMENT_KEYWORDS.union(EXPRESSION_START);

/// Keywords that begin a type or namespace declaration.
pub(crate) const TYPE_DECLARATION_START: TokenSet = TokenSet::of(&[
    K::ClassKeyword,
    K::StructKeyword,
    K::InterfaceKeyword,
    K::EnumKeyword,
    K::DelegateKeyword,
    K::NamespaceKeyword,
]);

/// Tokens that can begin a member of a type.
pub(crate) const MEMBER_START: TokenSet = TokenSet::of(&[
    K::IdentifierToken,
    K::OpenBracketToken,
    K::OpenParenToken,
    K::TildeToken,
    K::EventKeyword,
    K::ImplicitKeyword,
    K::ExplicitKeyword,
])
.union(MODIFIERS)
.union(TYPE_DECLARATION_START)
.union(PREDEFINED_TYPES);

/// Tokens that close an enclosing block or bracket.
pub(crate) const CLOSERS: TokenSet = TokenSet::of(&[
    K::CloseBraceToken,
    K::CloseParenToken,
    K::CloseBracketToken,
]);

/// Tokens that end an expression list element or the list itself.
pub(crate) const LIST_FOLLOW: TokenSet = CLOSERS.union(TokenSet::of(&[K::SemicolonToken]));

#[cfg(test)]
mod tests;
