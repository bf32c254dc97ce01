//! The closed enumeration of syntax kinds.
//!
//! One enum covers tokens, trivia and nodes so that a tree element can be
//! classified with a single comparison. Discriminants are laid out in
//! contiguous ranges:
//!
//! | Range                       | Category                         |
//! |-----------------------------|----------------------------------|
//! | `None`                      | placeholder, never in a tree     |
//! | `TildeToken..=EndOfFileToken` | tokens (must stay below 256)   |
//! | `EndOfLineTrivia..=BadDirectiveTrivia` | trivia                |
//! | `IdentifierName..`          | nodes                            |
//!
//! The parser's `TokenSet` is a 256-bit set indexed by discriminant, so every
//! token kind must have a discriminant below 256; a const assertion below
//! enforces it.

mod facts;

/// Every token, trivia and node kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    None = 0,

    // === Punctuation ===
    TildeToken,
    ExclamationToken,
    DollarToken,
    PercentToken,
    CaretToken,
    AmpersandToken,
    AsteriskToken,
    OpenParenToken,
    CloseParenToken,
    MinusToken,
    PlusToken,
    EqualsToken,
    OpenBraceToken,
    CloseBraceToken,
    OpenBracketToken,
    CloseBracketToken,
    BarToken,
    ColonToken,
    SemicolonToken,
    LessThanToken,
    CommaToken,
    GreaterThanToken,
    DotToken,
    QuestionToken,
    HashToken,
    SlashToken,
    DotDotToken,

    // === Compound punctuation ===
    BarBarToken,
    AmpersandAmpersandToken,
    MinusMinusToken,
    PlusPlusToken,
    ColonColonToken,
    QuestionQuestionToken,
    MinusGreaterThanToken,
    ExclamationEqualsToken,
    EqualsEqualsToken,
    EqualsGreaterThanToken,
    LessThanEqualsToken,
    LessThanLessThanToken,
    LessThanLessThanEqualsToken,
    GreaterThanEqualsToken,
    GreaterThanGreaterThanToken,
    GreaterThanGreaterThanEqualsToken,
    GreaterThanGreaterThanGreaterThanToken,
    GreaterThanGreaterThanGreaterThanEqualsToken,
    SlashEqualsToken,
    AsteriskEqualsToken,
    BarEqualsToken,
    AmpersandEqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,
    CaretEqualsToken,
    PercentEqualsToken,
    QuestionQuestionEqualsToken,

    // === Reserved keywords ===
    BoolKeyword,
    ByteKeyword,
    SByteKeyword,
    ShortKeyword,
    UShortKeyword,
    IntKeyword,
    UIntKeyword,
    LongKeyword,
    ULongKeyword,
    DoubleKeyword,
    FloatKeyword,
    DecimalKeyword,
    StringKeyword,
    CharKeyword,
    VoidKeyword,
    ObjectKeyword,
    TypeOfKeyword,
    SizeOfKeyword,
    NullKeyword,
    TrueKeyword,
    FalseKeyword,
    IfKeyword,
    ElseKeyword,
    WhileKeyword,
    ForKeyword,
    ForEachKeyword,
    DoKeyword,
    SwitchKeyword,
    CaseKeyword,
    DefaultKeyword,
    TryKeyword,
    CatchKeyword,
    FinallyKeyword,
    LockKeyword,
    GotoKeyword,
    BreakKeyword,
    ContinueKeyword,
    ReturnKeyword,
    ThrowKeyword,
    PublicKeyword,
    PrivateKeyword,
    InternalKeyword,
    ProtectedKeyword,
    StaticKeyword,
    ReadOnlyKeyword,
    SealedKeyword,
    ConstKeyword,
    FixedKeyword,
    StackAllocKeyword,
    VolatileKeyword,
    NewKeyword,
    OverrideKeyword,
    AbstractKeyword,
    VirtualKeyword,
    EventKeyword,
    ExternKeyword,
    RefKeyword,
    OutKeyword,
    InKeyword,
    IsKeyword,
    AsKeyword,
    ParamsKeyword,
    ArgListKeyword,
    ThisKeyword,
    BaseKeyword,
    NamespaceKeyword,
    UsingKeyword,
    ClassKeyword,
    StructKeyword,
    InterfaceKeyword,
    EnumKeyword,
    DelegateKeyword,
    CheckedKeyword,
    UncheckedKeyword,
    UnsafeKeyword,
    OperatorKeyword,
    ExplicitKeyword,
    ImplicitKeyword,

    // === Contextual keywords ===
    YieldKeyword,
    PartialKeyword,
    AliasKeyword,
    GlobalKeyword,
    AssemblyKeyword,
    ModuleKeyword,
    TypeKeyword,
    FieldKeyword,
    MethodKeyword,
    ParamKeyword,
    PropertyKeyword,
    TypeVarKeyword,
    GetKeyword,
    SetKeyword,
    AddKeyword,
    RemoveKeyword,
    WhereKeyword,
    FromKeyword,
    GroupKeyword,
    JoinKeyword,
    IntoKeyword,
    LetKeyword,
    ByKeyword,
    SelectKeyword,
    OrderByKeyword,
    OnKeyword,
    EqualsKeyword,
    AscendingKeyword,
    DescendingKeyword,
    NameOfKeyword,
    AsyncKeyword,
    AwaitKeyword,
    WhenKeyword,
    OrKeyword,
    AndKeyword,
    NotKeyword,
    WithKeyword,
    InitKeyword,
    RecordKeyword,
    ManagedKeyword,
    UnmanagedKeyword,
    RequiredKeyword,
    ScopedKeyword,
    FileKeyword,
    VarKeyword,
    UnderscoreToken,

    // === Variable-text tokens ===
    IdentifierToken,
    NumericLiteralToken,
    CharacterLiteralToken,
    StringLiteralToken,
    Utf8StringLiteralToken,
    SingleLineRawStringLiteralToken,
    MultiLineRawStringLiteralToken,
    InterpolatedStringToken,
    InterpolatedRawStringToken,
    BadToken,
    EndOfFileToken,

    // === Trivia ===
    EndOfLineTrivia,
    WhitespaceTrivia,
    SingleLineCommentTrivia,
    MultiLineCommentTrivia,
    SingleLineDocumentationCommentTrivia,
    MultiLineDocumentationCommentTrivia,
    DisabledTextTrivia,
    IfDirectiveTrivia,
    ElifDirectiveTrivia,
    ElseDirectiveTrivia,
    EndIfDirectiveTrivia,
    RegionDirectiveTrivia,
    EndRegionDirectiveTrivia,
    DefineDirectiveTrivia,
    UndefDirectiveTrivia,
    ErrorDirectiveTrivia,
    WarningDirectiveTrivia,
    LineDirectiveTrivia,
    PragmaDirectiveTrivia,
    NullableDirectiveTrivia,
    BadDirectiveTrivia,

    // === Names and types ===
    IdentifierName,
    QualifiedName,
    GenericName,
    TypeArgumentList,
    AliasQualifiedName,
    PredefinedType,
    ArrayType,
    ArrayRankSpecifier,
    PointerType,
    NullableType,
    TupleType,
    TupleElement,
    OmittedTypeArgument,
    RefType,
    OmittedArraySizeExpression,

    // === Expressions ===
    ParenthesizedExpression,
    TupleExpression,
    UnaryPlusExpression,
    UnaryMinusExpression,
    BitwiseNotExpression,
    LogicalNotExpression,
    PreIncrementExpression,
    PreDecrementExpression,
    PointerIndirectionExpression,
    AddressOfExpression,
    IndexExpression,
    PostIncrementExpression,
    PostDecrementExpression,
    SuppressNullableWarningExpression,
    AwaitExpression,
    SimpleMemberAccessExpression,
    PointerMemberAccessExpression,
    ConditionalAccessExpression,
    MemberBindingExpression,
    ElementBindingExpression,
    InvocationExpression,
    ElementAccessExpression,
    ArgumentList,
    BracketedArgumentList,
    Argument,
    NameColon,
    ExpressionColon,
    NameEquals,
    CastExpression,
    AnonymousMethodExpression,
    SimpleLambdaExpression,
    ParenthesizedLambdaExpression,
    ObjectInitializerExpression,
    CollectionInitializerExpression,
    ArrayInitializerExpression,
    ComplexElementInitializerExpression,
    WithInitializerExpression,
    ObjectCreationExpression,
    ImplicitObjectCreationExpression,
    AnonymousObjectCreationExpression,
    AnonymousObjectMemberDeclarator,
    ArrayCreationExpression,
    ImplicitArrayCreationExpression,
    StackAllocArrayCreationExpression,
    ImplicitStackAllocArrayCreationExpression,
    CollectionExpression,
    ExpressionElement,
    SpreadElement,
    AddExpression,
    SubtractExpression,
    MultiplyExpression,
    DivideExpression,
    ModuloExpression,
    LeftShiftExpression,
    RightShiftExpression,
    UnsignedRightShiftExpression,
    LogicalOrExpression,
    LogicalAndExpression,
    BitwiseOrExpression,
    BitwiseAndExpression,
    ExclusiveOrExpression,
    EqualsExpression,
    NotEqualsExpression,
    LessThanExpression,
    LessThanOrEqualExpression,
    GreaterThanExpression,
    GreaterThanOrEqualExpression,
    IsExpression,
    AsExpression,
    CoalesceExpression,
    RangeExpression,
    IsPatternExpression,
    SwitchExpression,
    SwitchExpressionArm,
    WithExpression,
    SimpleAssignmentExpression,
    AddAssignmentExpression,
    SubtractAssignmentExpression,
    MultiplyAssignmentExpression,
    DivideAssignmentExpression,
    ModuloAssignmentExpression,
    AndAssignmentExpression,
    ExclusiveOrAssignmentExpression,
    OrAssignmentExpression,
    LeftShiftAssignmentExpression,
    RightShiftAssignmentExpression,
    UnsignedRightShiftAssignmentExpression,
    CoalesceAssignmentExpression,
    ConditionalExpression,
    ThisExpression,
    BaseExpression,
    ArgListExpression,
    NumericLiteralExpression,
    StringLiteralExpression,
    Utf8StringLiteralExpression,
    CharacterLiteralExpression,
    TrueLiteralExpression,
    FalseLiteralExpression,
    NullLiteralExpression,
    DefaultLiteralExpression,
    InterpolatedStringExpression,
    TypeOfExpression,
    SizeOfExpression,
    CheckedExpression,
    UncheckedExpression,
    DefaultExpression,
    ThrowExpression,
    DeclarationExpression,
    RefExpression,

    // === Query expressions ===
    QueryExpression,
    QueryBody,
    FromClause,
    LetClause,
    JoinClause,
    JoinIntoClause,
    WhereClause,
    OrderByClause,
    AscendingOrdering,
    DescendingOrdering,
    SelectClause,
    GroupClause,
    QueryContinuation,

    // === Designations ===
    SingleVariableDesignation,
    DiscardDesignation,
    ParenthesizedVariableDesignation,

    // === Patterns ===
    DiscardPattern,
    DeclarationPattern,
    VarPattern,
    RecursivePattern,
    PositionalPatternClause,
    PropertyPatternClause,
    Subpattern,
    ConstantPattern,
    ParenthesizedPattern,
    RelationalPattern,
    TypePattern,
    OrPattern,
    AndPattern,
    NotPattern,
    ListPattern,
    SlicePattern,

    // === Statements ===
    Block,
    LocalDeclarationStatement,
    VariableDeclaration,
    VariableDeclarator,
    EqualsValueClause,
    ExpressionStatement,
    EmptyStatement,
    LabeledStatement,
    GotoStatement,
    GotoCaseStatement,
    GotoDefaultStatement,
    BreakStatement,
    ContinueStatement,
    ReturnStatement,
    YieldReturnStatement,
    YieldBreakStatement,
    ThrowStatement,
    WhileStatement,
    DoStatement,
    ForStatement,
    ForEachStatement,
    ForEachVariableStatement,
    UsingStatement,
    FixedStatement,
    CheckedStatement,
    UncheckedStatement,
    UnsafeStatement,
    LockStatement,
    IfStatement,
    ElseClause,
    SwitchStatement,
    SwitchSection,
    CaseSwitchLabel,
    CasePatternSwitchLabel,
    DefaultSwitchLabel,
    WhenClause,
    TryStatement,
    CatchClause,
    CatchDeclaration,
    CatchFilterClause,
    FinallyClause,
    LocalFunctionStatement,

    // === Declarations ===
    CompilationUnit,
    GlobalStatement,
    NamespaceDeclaration,
    FileScopedNamespaceDeclaration,
    UsingDirective,
    ExternAliasDirective,
    AttributeList,
    AttributeTargetSpecifier,
    Attribute,
    AttributeArgumentList,
    AttributeArgument,
    ClassDeclaration,
    StructDeclaration,
    InterfaceDeclaration,
    RecordDeclaration,
    RecordStructDeclaration,
    EnumDeclaration,
    DelegateDeclaration,
    EnumMemberDeclaration,
    BaseList,
    SimpleBaseType,
    PrimaryConstructorBaseType,
    TypeParameterList,
    TypeParameter,
    TypeParameterConstraintClause,
    ConstructorConstraint,
    ClassConstraint,
    StructConstraint,
    TypeConstraint,
    DefaultConstraint,
    FieldDeclaration,
    EventFieldDeclaration,
    MethodDeclaration,
    OperatorDeclaration,
    ConversionOperatorDeclaration,
    ConstructorDeclaration,
    BaseConstructorInitializer,
    ThisConstructorInitializer,
    DestructorDeclaration,
    PropertyDeclaration,
    EventDeclaration,
    IndexerDeclaration,
    AccessorList,
    GetAccessorDeclaration,
    SetAccessorDeclaration,
    InitAccessorDeclaration,
    AddAccessorDeclaration,
    RemoveAccessorDeclaration,
    UnknownAccessorDeclaration,
    ArrowExpressionClause,
    ExplicitInterfaceSpecifier,
    ParameterList,
    BracketedParameterList,
    Parameter,
    IncompleteMember,

    // === Error recovery ===
    SkippedTokens,
}

const _: () = assert!((SyntaxKind::EndOfFileToken as u16) < 256);

impl SyntaxKind {
    /// Discriminant as an index (used by bitsets and tables).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Is this a token kind (punctuation, keyword, literal, identifier, EOF)?
    #[inline]
    pub const fn is_token(self) -> bool {
        let i = self as u16;
        i >= SyntaxKind::TildeToken as u16 && i <= SyntaxKind::EndOfFileToken as u16
    }

    /// Is this a trivia kind?
    #[inline]
    pub const fn is_trivia(self) -> bool {
        let i = self as u16;
        i >= SyntaxKind::EndOfLineTrivia as u16 && i <= SyntaxKind::BadDirectiveTrivia as u16
    }

    /// Is this a node kind?
    #[inline]
    pub const fn is_node(self) -> bool {
        self as u16 >= SyntaxKind::IdentifierName as u16
    }

    /// Is this a reserved keyword (never usable as an identifier without `@`)?
    #[inline]
    pub const fn is_reserved_keyword(self) -> bool {
        let i = self as u16;
        i >= SyntaxKind::BoolKeyword as u16 && i <= SyntaxKind::ImplicitKeyword as u16
    }

    /// Is this a contextual keyword (lexed as an identifier)?
    #[inline]
    pub const fn is_contextual_keyword(self) -> bool {
        let i = self as u16;
        i >= SyntaxKind::YieldKeyword as u16 && i <= SyntaxKind::VarKeyword as u16
    }

    /// Is this a preprocessor directive trivia kind?
    #[inline]
    pub const fn is_directive(self) -> bool {
        let i = self as u16;
        i >= SyntaxKind::IfDirectiveTrivia as u16 && i <= SyntaxKind::BadDirectiveTrivia as u16
    }

    /// Is this a comment trivia kind (including documentation comments)?
    #[inline]
    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            SyntaxKind::SingleLineCommentTrivia
                | SyntaxKind::MultiLineCommentTrivia
                | SyntaxKind::SingleLineDocumentationCommentTrivia
                | SyntaxKind::MultiLineDocumentationCommentTrivia
        )
    }

    /// Is this one of the built-in type keywords (`int`, `string`, …)?
    #[inline]
    pub const fn is_predefined_type(self) -> bool {
        let i = self as u16;
        i >= SyntaxKind::BoolKeyword as u16 && i <= SyntaxKind::ObjectKeyword as u16
    }

    /// Is this a literal token kind?
    #[inline]
    pub const fn is_literal_token(self) -> bool {
        matches!(
            self,
            SyntaxKind::NumericLiteralToken
                | SyntaxKind::CharacterLiteralToken
                | SyntaxKind::StringLiteralToken
                | SyntaxKind::Utf8StringLiteralToken
                | SyntaxKind::SingleLineRawStringLiteralToken
                | SyntaxKind::MultiLineRawStringLiteralToken
                | SyntaxKind::InterpolatedStringToken
                | SyntaxKind::InterpolatedRawStringToken
        )
    }
}

#[cfg(test)]
mod tests;
