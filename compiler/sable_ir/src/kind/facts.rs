//! Lexical facts about syntax kinds: fixed text and keyword lookup.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::SyntaxKind;

impl SyntaxKind {
    /// The fixed source text of a punctuation or keyword kind.
    ///
    /// Returns `""` for kinds whose text varies (identifiers, literals),
    /// trivia and nodes.
    pub const fn fixed_text(self) -> &'static str {
        use SyntaxKind as K;
        match self {
            K::TildeToken => "~",
            K::ExclamationToken => "!",
            K::DollarToken => "$",
            K::PercentToken => "%",
            K::CaretToken => "^",
            K::AmpersandToken => "&",
            K::AsteriskToken => "*",
            K::OpenParenToken => "(",
            K::CloseParenToken => ")",
            K::MinusToken => "-",
            K::PlusToken => "+",
            K::EqualsToken => "=",
            K::OpenBraceToken => "{",
            K::CloseBraceToken => "}",
            K::OpenBracketToken => "[",
            K::CloseBracketToken => "]",
            K::BarToken => "|",
            K::ColonToken => ":",
            K::SemicolonToken => ";",
            K::LessThanToken => "<",
            K::CommaToken => ",",
            K::GreaterThanToken => ">",
            K::DotToken => ".",
            K::QuestionToken => "?",
            K::HashToken => "#",
            K::SlashToken => "/",
            K::DotDotToken => "..",
            K::BarBarToken => "||",
            K::AmpersandAmpersandToken => "&&",
            K::MinusMinusToken => "--",
            K::PlusPlusToken => "++",
            K::ColonColonToken => "::",
            K::QuestionQuestionToken => "??",
            K::MinusGreaterThanToken => "->",
            K::ExclamationEqualsToken => "!=",
            K::EqualsEqualsToken => "==",
            K::EqualsGreaterThanToken => "=>",
            K::LessThanEqualsToken => "<=",
            K::LessThanLessThanToken => "<<",
            K::LessThanLessThanEqualsToken => "<<=",
            K::GreaterThanEqualsToken => ">=",
            K::GreaterThanGreaterThanToken => ">>",
            K::GreaterThanGreaterThanEqualsToken => ">>=",
            K::GreaterThanGreaterThanGreaterThanToken => ">>>",
            K::GreaterThanGreaterThanGreaterThanEqualsToken => ">>>=",
            K::SlashEqualsToken => "/=",
            K::AsteriskEqualsToken => "*=",
            K::BarEqualsToken => "|=",
            K::AmpersandEqualsToken => "&=",
            K::PlusEqualsToken => "+=",
            K::MinusEqualsToken => "-=",
            K::CaretEqualsToken => "^=",
            K::PercentEqualsToken => "%=",
            K::QuestionQuestionEqualsToken => "??=",

            K::BoolKeyword => "bool",
            K::ByteKeyword => "byte",
            K::SByteKeyword => "sbyte",
            K::ShortKeyword => "short",
            K::UShortKeyword => "ushort",
            K::IntKeyword => "int",
            K::UIntKeyword => "uint",
            K::LongKeyword => "long",
            K::ULongKeyword => "ulong",
            K::DoubleKeyword => "double",
            K::FloatKeyword => "float",
            K::DecimalKeyword => "decimal",
            K::StringKeyword => "string",
            K::CharKeyword => "char",
            K::VoidKeyword => "void",
            K::ObjectKeyword => "object",
            K::TypeOfKeyword => "typeof",
            K::SizeOfKeyword => "sizeof",
            K::NullKeyword => "null",
            K::TrueKeyword => "true",
            K::FalseKeyword => "false",
            K::IfKeyword => "if",
            K::ElseKeyword => "else",
            K::WhileKeyword => "while",
            K::ForKeyword => "for",
            K::ForEachKeyword => "foreach",
            K::DoKeyword => "do",
            K::SwitchKeyword => "switch",
            K::CaseKeyword => "case",
            K::DefaultKeyword => "default",
            K::TryKeyword => "try",
            K::CatchKeyword => "catch",
            K::FinallyKeyword => "finally",
            K::LockKeyword => "lock",
            K::GotoKeyword => "goto",
            K::BreakKeyword => "break",
            K::ContinueKeyword => "continue",
            K::ReturnKeyword => "return",
            K::ThrowKeyword => "throw",
            K::PublicKeyword => "public",
            K::PrivateKeyword => "private",
            K::InternalKeyword => "internal",
            K::ProtectedKeyword => "protected",
            K::StaticKeyword => "static",
            K::ReadOnlyKeyword => "readonly",
            K::SealedKeyword => "sealed",
            K::ConstKeyword => "const",
            K::FixedKeyword => "fixed",
            K::StackAllocKeyword => "stackalloc",
            K::VolatileKeyword => "volatile",
            K::NewKeyword => "new",
            K::OverrideKeyword => "override",
            K::AbstractKeyword => "abstract",
            K::VirtualKeyword => "virtual",
            K::EventKeyword => "event",
            K::ExternKeyword => "extern",
            K::RefKeyword => "ref",
            K::OutKeyword => "out",
            K::InKeyword => "in",
            K::IsKeyword => "is",
            K::AsKeyword => "as",
            K::ParamsKeyword => "params",
            K::ArgListKeyword => "__arglist",
            K::ThisKeyword => "this",
            K::BaseKeyword => "base",
            K::NamespaceKeyword => "namespace",
            K::UsingKeyword => "using",
            K::ClassKeyword => "class",
            K::StructKeyword => "struct",
            K::InterfaceKeyword => "interface",
            K::EnumKeyword => "enum",
            K::DelegateKeyword => "delegate",
            K::CheckedKeyword => "checked",
            K::UncheckedKeyword => "unchecked",
            K::UnsafeKeyword => "unsafe",
            K::OperatorKeyword => "operator",
            K::ExplicitKeyword => "explicit",
            K::ImplicitKeyword => "implicit",

            K::YieldKeyword => "yield",
            K::PartialKeyword => "partial",
            K::AliasKeyword => "alias",
            K::GlobalKeyword => "global",
            K::AssemblyKeyword => "assembly",
            K::ModuleKeyword => "module",
            K::TypeKeyword => "type",
            K::FieldKeyword => "field",
            K::MethodKeyword => "method",
            K::ParamKeyword => "param",
            K::PropertyKeyword => "property",
            K::TypeVarKeyword => "typevar",
            K::GetKeyword => "get",
            K::SetKeyword => "set",
            K::AddKeyword => "add",
            K::RemoveKeyword => "remove",
            K::WhereKeyword => "where",
            K::FromKeyword => "from",
            K::GroupKeyword => "group",
            K::JoinKeyword => "join",
            K::IntoKeyword => "into",
            K::LetKeyword => "let",
            K::ByKeyword => "by",
            K::SelectKeyword => "select",
            K::OrderByKeyword => "orderby",
            K::OnKeyword => "on",
            K::EqualsKeyword => "equals",
            K::AscendingKeyword => "ascending",
            K::DescendingKeyword => "descending",
            K::NameOfKeyword => "nameof",
            K::AsyncKeyword => "async",
            K::AwaitKeyword => "await",
            K::WhenKeyword => "when",
            K::OrKeyword => "or",
            K::AndKeyword => "and",
            K::NotKeyword => "not",
            K::WithKeyword => "with",
            K::InitKeyword => "init",
            K::RecordKeyword => "record",
            K::ManagedKeyword => "managed",
            K::UnmanagedKeyword => "unmanaged",
            K::RequiredKeyword => "required",
            K::ScopedKeyword => "scoped",
            K::FileKeyword => "file",
            K::VarKeyword => "var",
            K::UnderscoreToken => "_",
            _ => "",
        }
    }

    /// Look up a reserved keyword by its text.
    pub fn keyword(text: &str) -> Option<SyntaxKind> {
        KEYWORDS.get(text).copied()
    }

    /// Look up a contextual keyword by its text.
    pub fn contextual_keyword(text: &str) -> Option<SyntaxKind> {
        CONTEXTUAL_KEYWORDS.get(text).copied()
    }

    /// Is this a token that may appear as a declaration modifier?
    pub const fn is_modifier_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::PublicKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::InternalKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::StaticKeyword
                | SyntaxKind::ReadOnlyKeyword
                | SyntaxKind::SealedKeyword
                | SyntaxKind::ConstKeyword
                | SyntaxKind::FixedKeyword
                | SyntaxKind::VolatileKeyword
                | SyntaxKind::NewKeyword
                | SyntaxKind::OverrideKeyword
                | SyntaxKind::AbstractKeyword
                | SyntaxKind::VirtualKeyword
                | SyntaxKind::ExternKeyword
                | SyntaxKind::UnsafeKeyword
                | SyntaxKind::RefKeyword
                | SyntaxKind::PartialKeyword
                | SyntaxKind::AsyncKeyword
                | SyntaxKind::RequiredKeyword
                | SyntaxKind::FileKeyword
                | SyntaxKind::ScopedKeyword
        )
    }

    /// Is this an assignment operator token?
    pub const fn is_assignment_operator(self) -> bool {
        matches!(
            self,
            SyntaxKind::EqualsToken
                | SyntaxKind::PlusEqualsToken
                | SyntaxKind::MinusEqualsToken
                | SyntaxKind::AsteriskEqualsToken
                | SyntaxKind::SlashEqualsToken
                | SyntaxKind::PercentEqualsToken
                | SyntaxKind::AmpersandEqualsToken
                | SyntaxKind::BarEqualsToken
                | SyntaxKind::CaretEqualsToken
                | SyntaxKind::LessThanLessThanEqualsToken
                | SyntaxKind::GreaterThanGreaterThanEqualsToken
                | SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken
                | SyntaxKind::QuestionQuestionEqualsToken
        )
    }
}

const RESERVED: &[SyntaxKind] = &[
    SyntaxKind::BoolKeyword,
    SyntaxKind::ByteKeyword,
    SyntaxKind::SByteKeyword,
    SyntaxKind::ShortKeyword,
    SyntaxKind::UShortKeyword,
    SyntaxKind::IntKeyword,
    SyntaxKind::UIntKeyword,
    SyntaxKind::LongKeyword,
    SyntaxKind::ULongKeyword,
    SyntaxKind::DoubleKeyword,
    SyntaxKind::FloatKeyword,
    SyntaxKind::DecimalKeyword,
    SyntaxKind::StringKeyword,
    SyntaxKind::CharKeyword,
    SyntaxKind::VoidKeyword,
    SyntaxKind::ObjectKeyword,
    SyntaxKind::TypeOfKeyword,
    SyntaxKind::SizeOfKeyword,
    SyntaxKind::NullKeyword,
    SyntaxKind::TrueKeyword,
    SyntaxKind::FalseKeyword,
    SyntaxKind::IfKeyword,
    SyntaxKind::ElseKeyword,
    SyntaxKind::WhileKeyword,
    SyntaxKind::ForKeyword,
    SyntaxKind::ForEachKeyword,
    SyntaxKind::DoKeyword,
    SyntaxKind::SwitchKeyword,
    SyntaxKind::CaseKeyword,
    SyntaxKind::DefaultKeyword,
    SyntaxKind::TryKeyword,
    SyntaxKind::CatchKeyword,
    SyntaxKind::FinallyKeyword,
    SyntaxKind::LockKeyword,
    SyntaxKind::GotoKeyword,
    SyntaxKind::BreakKeyword,
    SyntaxKind::ContinueKeyword,
    SyntaxKind::ReturnKeyword,
    SyntaxKind::ThrowKeyword,
    SyntaxKind::PublicKeyword,
    SyntaxKind::PrivateKeyword,
    SyntaxKind::InternalKeyword,
    SyntaxKind::ProtectedKeyword,
    SyntaxKind::StaticKeyword,
    SyntaxKind::ReadOnlyKeyword,
    SyntaxKind::SealedKeyword,
    SyntaxKind::ConstKeyword,
    SyntaxKind::FixedKeyword,
    SyntaxKind::StackAllocKeyword,
    SyntaxKind::VolatileKeyword,
    SyntaxKind::NewKeyword,
    SyntaxKind::OverrideKeyword,
    SyntaxKind::AbstractKeyword,
    SyntaxKind::VirtualKeyword,
    SyntaxKind::EventKeyword,
    SyntaxKind::ExternKeyword,
    SyntaxKind::RefKeyword,
    SyntaxKind::OutKeyword,
    SyntaxKind::InKeyword,
    SyntaxKind::IsKeyword,
    SyntaxKind::AsKeyword,
    SyntaxKind::ParamsKeyword,
    SyntaxKind::ArgListKeyword,
    SyntaxKind::ThisKeyword,
    SyntaxKind::BaseKeyword,
    SyntaxKind::NamespaceKeyword,
    SyntaxKind::UsingKeyword,
    SyntaxKind::ClassKeyword,
    SyntaxKind::StructKeyword,
    SyntaxKind::InterfaceKeyword,
    SyntaxKind::EnumKeyword,
    SyntaxKind::DelegateKeyword,
    SyntaxKind::CheckedKeyword,
    SyntaxKind::UncheckedKeyword,
    SyntaxKind::UnsafeKeyword,
    SyntaxKind::OperatorKeyword,
    SyntaxKind::ExplicitKeyword,
    SyntaxKind::ImplicitKeyword,
];

const CONTEXTUAL: &[SyntaxKind] = &[
    SyntaxKind::YieldKeyword,
    SyntaxKind::PartialKeyword,
    SyntaxKind::AliasKeyword,
    SyntaxKind::GlobalKeyword,
    SyntaxKind::AssemblyKeyword,
    SyntaxKind::ModuleKeyword,
    SyntaxKind::TypeKeyword,
    SyntaxKind::FieldKeyword,
    SyntaxKind::MethodKeyword,
    SyntaxKind::ParamKeyword,
    SyntaxKind::PropertyKeyword,
    SyntaxKind::TypeVarKeyword,
    SyntaxKind::GetKeyword,
    SyntaxKind::SetKeyword,
    SyntaxKind::AddKeyword,
    SyntaxKind::RemoveKeyword,
    SyntaxKind::WhereKeyword,
    SyntaxKind::FromKeyword,
    SyntaxKind::GroupKeyword,
    SyntaxKind::JoinKeyword,
    SyntaxKind::IntoKeyword,
    SyntaxKind::LetKeyword,
    SyntaxKind::ByKeyword,
    SyntaxKind::SelectKeyword,
    SyntaxKind::OrderByKeyword,
    SyntaxKind::OnKeyword,
    SyntaxKind::EqualsKeyword,
    SyntaxKind::AscendingKeyword,
    SyntaxKind::DescendingKeyword,
    SyntaxKind::NameOfKeyword,
    SyntaxKind::AsyncKeyword,
    SyntaxKind::AwaitKeyword,
    SyntaxKind::WhenKeyword,
    SyntaxKind::OrKeyword,
    SyntaxKind::AndKeyword,
    SyntaxKind::NotKeyword,
    SyntaxKind::WithKeyword,
    SyntaxKind::InitKeyword,
    SyntaxKind::RecordKeyword,
    SyntaxKind::ManagedKeyword,
    SyntaxKind::UnmanagedKeyword,
    SyntaxKind::RequiredKeyword,
    SyntaxKind::ScopedKeyword,
    SyntaxKind::FileKeyword,
    SyntaxKind::VarKeyword,
    SyntaxKind::UnderscoreToken,
];

static KEYWORDS: LazyLock<FxHashMap<&'static str, SyntaxKind>> = LazyLock::new(|| {
    RESERVED
        .iter()
        .map(|&kind| (kind.fixed_text(), kind))
        .collect()
});

static CONTEXTUAL_KEYWORDS: LazyLock<FxHashMap<&'static str, SyntaxKind>> = LazyLock::new(|| {
    CONTEXTUAL
        .iter()
        .map(|&kind| (kind.fixed_text(), kind))
        .collect()
});

#[cfg(test)]
pub(super) fn reserved_keywords() -> &'static [SyntaxKind] {
    RESERVED
}

#[cfg(test)]
pub(super) fn contextual_keywords() -> &'static [SyntaxKind] {
    CONTEXTUAL
}
