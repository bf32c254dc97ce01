//! Disambiguation by lookahead.
//!
//! Several constructs share a prefix and are told apart only by what comes
//! later: `(a)` may be a cast, a parenthesized expression, a tuple or a
//! lambda parameter list; `a < b` may open a type argument list; `T x`
//! may be a declaration or the start of an expression.
//!
//! Every classifier here scans a *copy* of the cursor. The parser's own
//! cursor, its diagnostic bag and its context are never touched, so a
//! verdict has no side effects and no rewinding is needed.

use smallvec::SmallVec;
use tracing::debug;

use sable_ir::SyntaxKind;

use crate::cursor::Cursor;
use crate::recovery::{TokenSet, EXPRESSION_START, LITERALS, PREDEFINED_TYPES};

use SyntaxKind as K;

/// What a type scan found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TypeScan {
    /// Not a type.
    NotType,
    /// A simple or qualified name; also a valid expression.
    Name,
    /// A name with type arguments; may still be a generic method name.
    GenericName,
    /// A built-in type keyword.
    Predefined,
    /// A type ending in a nullable `?`, which may be a conditional instead.
    Nullable,
    /// Syntax only types have: arrays, pointers, tuples, `ref`.
    Definite,
}

impl TypeScan {
    pub(crate) fn is_type(self) -> bool {
        self != TypeScan::NotType
    }
}

/// How a nullable `?` suffix is treated while scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NullableMode {
    /// Every `?` after a type is a nullable suffix.
    Greedy,
    /// Inside patterns and after `as`: `?` is a suffix only when the
    /// conditional operator cannot follow.
    Pattern,
}

/// Tokens that may follow a type argument list in an expression. Anything
/// else means the `<` was a less-than operator.
const TYPE_ARGUMENT_FOLLOW: TokenSet = TokenSet::of(&[
    K::OpenParenToken,
    K::CloseParenToken,
    K::CloseBracketToken,
    K::CloseBraceToken,
    K::ColonToken,
    K::SemicolonToken,
    K::CommaToken,
    K::DotToken,
    K::QuestionToken,
    K::EqualsEqualsToken,
    K::ExclamationEqualsToken,
    K::BarToken,
    K::CaretToken,
    K::AmpersandAmpersandToken,
    K::BarBarToken,
    K::AmpersandToken,
    K::OpenBracketToken,
    K::EndOfFileToken,
]);

/// After `T? x` inside a pattern, tokens that confirm `?` was nullable.
const NULLABLE_DESIGNATION_FOLLOW: TokenSet = TokenSet::of(&[
    K::CloseParenToken,
    K::CommaToken,
    K::SemicolonToken,
    K::EqualsGreaterThanToken,
    K::CloseBracketToken,
    K::CloseBraceToken,
    K::AmpersandAmpersandToken,
    K::BarBarToken,
    K::EndOfFileToken,
]);

/// Keywords that can start the operand of a cast to a named type.
const CAST_OPERAND_KEYWORDS: TokenSet = TokenSet::of(&[
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
    K::ArgListKeyword,
])
.union(PREDEFINED_TYPES)
.union(LITERALS);

/// Unary operators that only start a cast operand after a definite type.
/// After a plain name they continue a binary expression: `(x)-1`.
const DEFINITE_CAST_OPERATORS: TokenSet = TokenSet::of(&[
    K::PlusToken,
    K::MinusToken,
    K::AmpersandToken,
    K::AsteriskToken,
    K::CaretToken,
    K::PlusPlusToken,
    K::MinusMinusToken,
]);

/// Contextual keywords that end an expression instead of starting one.
const CLAUSE_KEYWORDS: &[SyntaxKind] = &[K::WhenKeyword, K::AndKeyword, K::OrKeyword, K::WithKeyword];

const QUERY_KEYWORDS: &[SyntaxKind] = &[
    K::FromKeyword,
    K::WhereKeyword,
    K::SelectKeyword,
    K::GroupKeyword,
    K::JoinKeyword,
    K::LetKeyword,
    K::OrderByKeyword,
    K::IntoKeyword,
    K::OnKeyword,
    K::EqualsKeyword,
    K::ByKeyword,
    K::AscendingKeyword,
    K::DescendingKeyword,
];

/// Is the token at `n` spelled as one of `keywords`?
fn is_any_contextual(c: &Cursor<'_>, n: usize, keywords: &[SyntaxKind]) -> bool {
    let token = c.peek(n);
    keywords.iter().any(|&kw| token.is_contextual(kw))
}

/// Is the current token an identifier usable as a designation or name,
/// rather than a pattern combinator or clause keyword?
pub(crate) fn is_plain_identifier(c: &Cursor<'_>, n: usize) -> bool {
    c.peek_kind(n) == K::IdentifierToken && !is_any_contextual(c, n, CLAUSE_KEYWORDS)
}

// ─── Types ──────────────────────────────────────────────────────────────

/// Scan a type, advancing `c` past it. On `NotType` the position of `c`
/// is unspecified.
///
/// Tuple element types and type arguments recurse back through here, once
/// per nesting level.
pub(crate) fn scan_type(c: &mut Cursor<'_>, mode: NullableMode) -> TypeScan {
    sable_stack::ensure_sufficient_stack(|| scan_type_inner(c, mode))
}

fn scan_type_inner(c: &mut Cursor<'_>, mode: NullableMode) -> TypeScan {
    if c.eat(K::RefKeyword) {
        c.eat(K::ReadOnlyKeyword);
        return match scan_type(c, mode) {
            TypeScan::NotType => TypeScan::NotType,
            _ => TypeScan::Definite,
        };
    }
    let mut result = scan_non_array_type(c, mode);
    if !result.is_type() {
        return TypeScan::NotType;
    }
    while c.check(K::OpenBracketToken) && skip_rank_specifier(c) {
        result = TypeScan::Definite;
    }
    result
}

/// Scan a type without array rank specifiers.
pub(crate) fn scan_non_array_type(c: &mut Cursor<'_>, mode: NullableMode) -> TypeScan {
    let mut result = match c.current_kind() {
        K::OpenParenToken => scan_tuple_type(c, mode),
        kind if PREDEFINED_TYPES.contains(kind) => {
            c.advance();
            TypeScan::Predefined
        }
        K::IdentifierToken => scan_named_type(c),
        _ => TypeScan::NotType,
    };
    if !result.is_type() {
        return result;
    }
    loop {
        match c.current_kind() {
            K::QuestionToken if nullable_suffix_allowed(c, mode) => {
                c.advance();
                result = TypeScan::Nullable;
            }
            K::AsteriskToken => {
                c.advance();
                result = TypeScan::Definite;
            }
            _ => return result,
        }
    }
}

/// Decide whether the `?` at the cursor is a nullable suffix.
pub(crate) fn nullable_suffix_allowed(c: &Cursor<'_>, mode: NullableMode) -> bool {
    match mode {
        NullableMode::Greedy => !matches!(
            c.peek_kind(1),
            K::DotToken | K::OpenBracketToken | K::QuestionToken
        ),
        NullableMode::Pattern => {
            let next = c.peek_kind(1);
            if !EXPRESSION_START.contains(next) {
                return true;
            }
            next == K::IdentifierToken && NULLABLE_DESIGNATION_FOLLOW.contains(c.peek_kind(2))
        }
    }
}

/// `(T1 a, T2 b, ...)` with at least two elements.
fn scan_tuple_type(c: &mut Cursor<'_>, mode: NullableMode) -> TypeScan {
    c.advance();
    let mut elements = 0;
    loop {
        if !scan_type(c, mode).is_type() {
            return TypeScan::NotType;
        }
        elements += 1;
        if is_plain_identifier(c, 0) {
            c.advance();
        }
        if !c.eat(K::CommaToken) {
            break;
        }
    }
    if elements >= 2 && c.eat(K::CloseParenToken) {
        TypeScan::Definite
    } else {
        TypeScan::NotType
    }
}

fn scan_named_type(c: &mut Cursor<'_>) -> TypeScan {
    let mut result = TypeScan::Name;
    c.advance();
    if c.check(K::ColonColonToken) {
        c.advance();
        if !c.eat(K::IdentifierToken) {
            return TypeScan::NotType;
        }
    }
    if c.check(K::LessThanToken) && scan_type_argument_list(c, false) {
        result = TypeScan::GenericName;
    }
    while c.check(K::DotToken) && c.peek_kind(1) == K::IdentifierToken {
        c.advance();
        c.advance();
        if c.check(K::LessThanToken) && scan_type_argument_list(c, false) {
            result = TypeScan::GenericName;
        }
    }
    result
}

/// Skip `[` `,`* `]`. Restores `c` and returns `false` for anything else,
/// such as a sized rank or an element access.
fn skip_rank_specifier(c: &mut Cursor<'_>) -> bool {
    let saved = *c;
    c.advance();
    while c.eat(K::CommaToken) {}
    if c.eat(K::CloseBracketToken) {
        true
    } else {
        *c = saved;
        false
    }
}

/// Scan `<` type-arguments `>` at the cursor.
///
/// With `check_follow`, the token after `>` must be one that can follow a
/// generic name in an expression; otherwise the `<` is a less-than
/// operator. On failure `c` is left where it was.
pub(crate) fn scan_type_argument_list(c: &mut Cursor<'_>, check_follow: bool) -> bool {
    debug_assert!(c.check(K::LessThanToken));
    let saved = *c;
    c.advance();
    loop {
        let omitted = matches!(c.current_kind(), K::CommaToken | K::GreaterThanToken);
        if !omitted && !scan_type(c, NullableMode::Greedy).is_type() {
            *c = saved;
            return false;
        }
        if !c.eat(K::CommaToken) {
            break;
        }
    }
    if !c.eat(K::GreaterThanToken) {
        *c = saved;
        return false;
    }
    if check_follow && !TYPE_ARGUMENT_FOLLOW.contains(c.current_kind()) {
        *c = saved;
        return false;
    }
    true
}

/// Does the `<` at token `n` open a type argument list in an expression?
pub(crate) fn is_generic_name_in_expression(c: Cursor<'_>, n: usize) -> bool {
    let mut t = c;
    t.set_position(c.position() + n);
    t.check(K::LessThanToken) && scan_type_argument_list(&mut t, true)
}

/// From an opening bracket, the cursor just past its matching closer.
/// `None` when the brackets never balance.
pub(crate) fn skip_balanced(mut c: Cursor<'_>) -> Option<Cursor<'_>> {
    let mut stack: SmallVec<[SyntaxKind; 8]> = SmallVec::new();
    loop {
        let kind = c.current_kind();
        match kind {
            K::OpenParenToken => stack.push(K::CloseParenToken),
            K::OpenBracketToken => stack.push(K::CloseBracketToken),
            K::OpenBraceToken => stack.push(K::CloseBraceToken),
            K::CloseParenToken | K::CloseBracketToken | K::CloseBraceToken => {
                if stack.pop() != Some(kind) {
                    return None;
                }
            }
            K::EndOfFileToken => return None,
            _ => {}
        }
        c.advance();
        if stack.is_empty() {
            return Some(c);
        }
    }
}

// ─── Parentheses ────────────────────────────────────────────────────────

/// What a parenthesized prefix turned out to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ParenKind {
    /// A lambda parameter list: the matching `)` is followed by `=>`.
    Lambda,
    /// `(T)` followed by a cast operand.
    Cast,
    /// A tuple literal: a top-level comma or a named first element.
    Tuple,
    Parenthesized,
}

/// Classify the `(` at the cursor.
pub(crate) fn classify_parenthesized(c: Cursor<'_>, in_query: bool) -> ParenKind {
    debug_assert!(c.check(K::OpenParenToken));
    let verdict = classify_parenthesized_inner(c, in_query);
    debug!(pos = c.position(), ?verdict, "classified parenthesized expression");
    verdict
}

fn classify_parenthesized_inner(c: Cursor<'_>, in_query: bool) -> ParenKind {
    if skip_balanced(c).is_some_and(|after| after.check(K::EqualsGreaterThanToken)) {
        return ParenKind::Lambda;
    }

    let mut t = c;
    t.advance();
    let scan = scan_type(&mut t, NullableMode::Greedy);
    if scan.is_type() && t.check(K::CloseParenToken) {
        t.advance();
        let is_cast = match scan {
            TypeScan::Predefined => true,
            TypeScan::Name => can_start_cast_operand(&t, in_query),
            _ => {
                can_start_cast_operand(&t, in_query)
                    || DEFINITE_CAST_OPERATORS.contains(t.current_kind())
            }
        };
        if is_cast {
            return ParenKind::Cast;
        }
    }

    if c.peek_kind(1) == K::IdentifierToken && c.peek_kind(2) == K::ColonToken {
        return ParenKind::Tuple;
    }
    if has_top_level_comma(c) {
        ParenKind::Tuple
    } else {
        ParenKind::Parenthesized
    }
}

/// Can the token at `t` start the operand of a cast to a named type?
fn can_start_cast_operand(t: &Cursor<'_>, in_query: bool) -> bool {
    match t.current_kind() {
        K::TildeToken | K::ExclamationToken | K::OpenParenToken => true,
        K::IdentifierToken => {
            !is_any_contextual(t, 0, CLAUSE_KEYWORDS)
                && !(in_query && is_any_contextual(t, 0, QUERY_KEYWORDS))
        }
        kind => CAST_OPERAND_KEYWORDS.contains(kind),
    }
}

/// Is there a `,` directly inside the parentheses at `c`? Generic argument
/// lists are skipped so `(A<B, C>.D)` has no top-level comma.
fn has_top_level_comma(mut c: Cursor<'_>) -> bool {
    let mut depth = 0usize;
    loop {
        match c.current_kind() {
            K::OpenParenToken | K::OpenBracketToken | K::OpenBraceToken => depth += 1,
            K::CloseParenToken | K::CloseBracketToken | K::CloseBraceToken => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return false;
                }
            }
            K::CommaToken if depth == 1 => return true,
            K::SemicolonToken | K::EndOfFileToken => return false,
            K::IdentifierToken if c.peek_kind(1) == K::LessThanToken => {
                c.advance();
                scan_type_argument_list(&mut c, true);
                continue;
            }
            _ => {}
        }
        c.advance();
    }
}

// ─── Object creation ────────────────────────────────────────────────────

/// The form of a `new` expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NewKind {
    /// `new T(...)`, `new T { ... }`, and a bare `new` with nothing usable.
    Object,
    /// `new T[n]`, `new T[] { ... }`.
    Array,
    /// `new[] { ... }`.
    ImplicitArray,
    /// `new { A = 1 }`.
    Anonymous,
    /// `new(...)`.
    TargetTyped,
    /// `new (int, int)(...)` or `new (int, int)[n]`.
    TupleTyped,
}

/// Classify the `new` at the cursor.
pub(crate) fn classify_new(c: Cursor<'_>) -> NewKind {
    debug_assert!(c.check(K::NewKeyword));
    let mut t = c;
    t.advance();
    let verdict = match t.current_kind() {
        K::OpenParenToken => {
            let mut u = t;
            if scan_tuple_type(&mut u, NullableMode::Greedy).is_type()
                && matches!(
                    u.current_kind(),
                    K::OpenParenToken | K::OpenBracketToken | K::OpenBraceToken
                )
            {
                NewKind::TupleTyped
            } else {
                NewKind::TargetTyped
            }
        }
        K::OpenBracketToken => NewKind::ImplicitArray,
        K::OpenBraceToken => NewKind::Anonymous,
        _ => {
            if scan_non_array_type(&mut t, NullableMode::Greedy).is_type()
                && t.check(K::OpenBracketToken)
            {
                NewKind::Array
            } else {
                NewKind::Object
            }
        }
    };
    debug!(pos = c.position(), ?verdict, "classified new expression");
    verdict
}

// ─── Statements and declarations ────────────────────────────────────────

/// What a statement starting with a possible type is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LocalKind {
    /// `T x ...;`
    Declaration,
    /// `T f(...)` or `T f<U>(...)`.
    LocalFunction,
    Expression,
}

const NULLABLE_DECLARATION_FOLLOW: TokenSet = TokenSet::of(&[
    K::EqualsToken,
    K::SemicolonToken,
    K::CommaToken,
    K::EndOfFileToken,
]);

/// Classify a statement whose modifiers, if any, have been consumed.
pub(crate) fn classify_local(c: Cursor<'_>) -> LocalKind {
    let verdict = classify_local_inner(c);
    debug!(pos = c.position(), ?verdict, "classified statement");
    verdict
}

fn classify_local_inner(c: Cursor<'_>) -> LocalKind {
    let mut t = c;
    let scan = scan_type(&mut t, NullableMode::Greedy);
    if !scan.is_type() || t.current_kind() != K::IdentifierToken {
        return LocalKind::Expression;
    }
    match t.peek_kind(1) {
        K::OpenParenToken => return LocalKind::LocalFunction,
        K::LessThanToken => {
            let mut u = t;
            u.advance();
            if scan_type_argument_list(&mut u, false) && u.check(K::OpenParenToken) {
                return LocalKind::LocalFunction;
            }
        }
        _ => {}
    }
    if scan == TypeScan::Nullable && !NULLABLE_DECLARATION_FOLLOW.contains(t.peek_kind(1)) {
        return LocalKind::Expression;
    }
    LocalKind::Declaration
}

/// Is the cursor at `T name` where `name` ends the element: an `out var x`
/// argument, a tuple element `(int a, ...)` or a deconstruction `var (a, b)`?
pub(crate) fn is_declaration_expression(c: Cursor<'_>) -> bool {
    if c.current().is_contextual(K::VarKeyword) && c.peek_kind(1) == K::OpenParenToken {
        let mut t = c;
        t.advance();
        return skip_balanced(t).is_some_and(|after| {
            matches!(
                after.current_kind(),
                K::EqualsToken | K::InKeyword | K::CloseParenToken | K::CommaToken
            )
        });
    }
    let mut t = c;
    if !scan_type(&mut t, NullableMode::Greedy).is_type() || !is_plain_identifier(&t, 0) {
        return false;
    }
    matches!(
        t.peek_kind(1),
        K::CommaToken
            | K::CloseParenToken
            | K::EqualsToken
            | K::InKeyword
            | K::CloseBracketToken
            | K::EndOfFileToken
    )
}

/// Is the cursor at the start of a query expression, `from x in ...`?
pub(crate) fn is_query_start(c: Cursor<'_>) -> bool {
    if !c.current().is_contextual(K::FromKeyword) {
        return false;
    }
    if c.peek_kind(1) == K::IdentifierToken && c.peek_kind(2) == K::InKeyword {
        return true;
    }
    let mut t = c;
    t.advance();
    scan_type(&mut t, NullableMode::Greedy).is_type()
        && t.check(K::IdentifierToken)
        && t.peek_kind(1) == K::InKeyword
}

/// Does the cursor start a type followed by a member or parameter name?
/// Used to tell contextual modifiers such as `async` from type names.
pub(crate) fn is_type_then_name(c: Cursor<'_>) -> bool {
    let mut t = c;
    scan_type(&mut t, NullableMode::Greedy).is_type()
        && matches!(
            t.current_kind(),
            K::IdentifierToken | K::ThisKeyword | K::OperatorKeyword
        )
}

/// Count the `Name.` segments of an explicit interface specifier before a
/// member name: `IA.IB.M()` has two. Zero when there is none.
pub(crate) fn explicit_interface_segments(c: Cursor<'_>) -> usize {
    let mut t = c;
    let mut segments = 0;
    loop {
        if !t.check(K::IdentifierToken) {
            return segments;
        }
        let mut u = t;
        u.advance();
        if u.check(K::LessThanToken) && !scan_type_argument_list(&mut u, false) {
            return segments;
        }
        if !u.check(K::DotToken)
            || !matches!(
                u.peek_kind(1),
                K::IdentifierToken | K::ThisKeyword | K::OperatorKeyword
            )
        {
            return segments;
        }
        u.advance();
        segments += 1;
        t = u;
    }
}

/// Does the token after `async` or `static` begin a lambda?
pub(crate) fn is_lambda_after_modifiers(c: Cursor<'_>) -> bool {
    let mut t = c;
    while t.current().is_contextual(K::AsyncKeyword) || t.check(K::StaticKeyword) {
        t.advance();
    }
    match t.current_kind() {
        K::IdentifierToken => t.peek_kind(1) == K::EqualsGreaterThanToken,
        K::OpenParenToken => {
            skip_balanced(t).is_some_and(|after| after.check(K::EqualsGreaterThanToken))
        }
        K::DelegateKeyword => true,
        _ => false,
    }
}
