//! Names and types.
//!
//! Grammar:
//! ```text
//! type          = "ref" ["readonly"] type | non_array_type { rank }
//! non_array     = predefined | name | tuple_type { "?" | "*" }
//! name          = simple_name [ "::" simple_name ] { "." simple_name }
//! simple_name   = identifier [ type_arguments ]
//! tuple_type    = "(" tuple_element { "," tuple_element } ")"
//! rank          = "[" { "," } "]"
//! ```

use sable_diagnostic::{Diagnostic, ErrorCode};
use sable_ir::{Span, SyntaxKind};
use sable_options::Feature;
use sable_syntax::SyntaxNode;

use crate::disambiguate::{self, NullableMode};
use crate::parser::Parser;
use crate::recovery::PREDEFINED_TYPES;

use SyntaxKind as K;

impl Parser<'_> {
    /// Parse a type. When none is present, reports "Type expected" and
    /// returns an identifier name holding a missing identifier.
    pub(crate) fn parse_type(&mut self) -> SyntaxNode {
        self.parse_type_with(NullableMode::Greedy)
    }

    /// A type whose trailing `?` is read by context: inside patterns and
    /// after `as` it is a suffix only when no conditional operator follows.
    pub(crate) fn parse_context_type(&mut self) -> SyntaxNode {
        let mode = if self.context.in_pattern() {
            NullableMode::Pattern
        } else {
            NullableMode::Greedy
        };
        self.parse_type_with(mode)
    }

    fn parse_type_with(&mut self, mode: NullableMode) -> SyntaxNode {
        sable_stack::ensure_sufficient_stack(|| {
            if self.at(K::RefKeyword) {
                return self.parse_ref_type(mode);
            }
            let ty = self.parse_non_array_type(mode);
            self.parse_rank_suffix(ty)
        })
    }

    fn parse_ref_type(&mut self, mode: NullableMode) -> SyntaxNode {
        let mut b = self.start();
        let ref_kw = self.bump();
        self.require_feature(Feature::RefLocalsReturns, ref_kw.span());
        b.push(ref_kw);
        if let Some(readonly) = self.eat(K::ReadOnlyKeyword) {
            self.require_feature(Feature::ReadOnlyReferences, readonly.span());
            b.push(readonly);
        }
        b.push(self.parse_type_with(mode));
        self.finish(b, K::RefType)
    }

    /// Array rank specifiers without sizes: `T[]`, `T[,][]`.
    fn parse_rank_suffix(&mut self, mut ty: SyntaxNode) -> SyntaxNode {
        while self.at(K::OpenBracketToken) && self.at_omitted_rank() {
            let mut b = self.start_with(ty);
            while self.at(K::OpenBracketToken) && self.at_omitted_rank() {
                b.push(self.parse_rank_specifier(false));
            }
            ty = self.finish(b, K::ArrayType);
        }
        ty
    }

    /// Is the `[` at the cursor followed only by commas and `]`?
    fn at_omitted_rank(&self) -> bool {
        let mut n = 1;
        while self.nth(n) == K::CommaToken {
            n += 1;
        }
        self.nth(n) == K::CloseBracketToken
    }

    /// `[` sizes `]`. With `sizes`, each slot may hold an expression;
    /// empty slots become omitted-size nodes.
    pub(crate) fn parse_rank_specifier(&mut self, sizes: bool) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        loop {
            if matches!(self.kind(), K::CommaToken | K::CloseBracketToken) || !sizes {
                let omitted = self.start();
                b.push(self.finish(omitted, K::OmittedArraySizeExpression));
            } else {
                b.push(self.parse_expression());
            }
            match self.eat(K::CommaToken) {
                Some(comma) => b.push(comma),
                None => break,
            }
        }
        b.push(self.expect(K::CloseBracketToken));
        self.finish(b, K::ArrayRankSpecifier)
    }

    /// A type without array ranks: the element type of `new T[n]`.
    pub(crate) fn parse_non_array_type(&mut self, mode: NullableMode) -> SyntaxNode {
        let kind = self.kind();
        let mut ty = if PREDEFINED_TYPES.contains(kind) {
            let keyword = self.bump();
            self.wrap(keyword, K::PredefinedType)
        } else if kind == K::IdentifierToken {
            self.parse_name()
        } else if kind == K::OpenParenToken {
            self.parse_tuple_type()
        } else {
            self.report_missing_type();
            self.missing_name()
        };
        loop {
            let suffix = match self.kind() {
                K::QuestionToken if disambiguate::nullable_suffix_allowed(&self.cursor, mode) => {
                    K::NullableType
                }
                K::AsteriskToken => K::PointerType,
                _ => return ty,
            };
            let mut b = self.start_with(ty);
            b.push(self.bump());
            ty = self.finish(b, suffix);
        }
    }

    pub(crate) fn report_missing_type(&mut self) {
        let span = if self.at_eof() {
            self.cursor.expected_span()
        } else {
            self.current().span()
        };
        self.report_error(Diagnostic::new(ErrorCode::CS1031, span));
    }

    /// An identifier name holding a missing identifier, reported by the caller.
    pub(crate) fn missing_name(&mut self) -> SyntaxNode {
        let missing = self.missing(K::IdentifierToken);
        self.wrap(missing, K::IdentifierName)
    }

    fn parse_tuple_type(&mut self) -> SyntaxNode {
        let mut b = self.start();
        let open = self.bump();
        self.require_feature(Feature::Tuples, open.span());
        let start = open.span().start;
        b.push(open);
        let mut elements = 0;
        loop {
            let mut element = self.start();
            element.push(self.parse_type());
            if disambiguate::is_plain_identifier(&self.cursor, 0) {
                element.push(self.bump());
            }
            b.push(self.finish(element, K::TupleElement));
            elements += 1;
            match self.eat(K::CommaToken) {
                Some(comma) => b.push(comma),
                None => break,
            }
        }
        let close = self.expect(K::CloseParenToken);
        if elements < 2 {
            let end = close.text_end().max(start);
            self.report_error(Diagnostic::new(ErrorCode::CS8124, Span::new(start, end)));
        }
        b.push(close);
        self.finish(b, K::TupleType)
    }

    // ─── Names ──────────────────────────────────────────────────────────

    /// A possibly qualified name in a type context.
    pub(crate) fn parse_name(&mut self) -> SyntaxNode {
        let mut name = self.parse_alias_qualified_or_simple(false);
        while self.at(K::DotToken) && self.nth(1) == K::IdentifierToken {
            let mut b = self.start_with(name);
            b.push(self.bump());
            b.push(self.parse_simple_name(false));
            name = self.finish(b, K::QualifiedName);
        }
        name
    }

    /// `alias::Name` or a simple name.
    pub(crate) fn parse_alias_qualified_or_simple(&mut self, in_expression: bool) -> SyntaxNode {
        if self.at(K::IdentifierToken) && self.nth(1) == K::ColonColonToken {
            let alias = if self.at_contextual(K::GlobalKeyword) {
                self.bump_as(K::GlobalKeyword)
            } else {
                self.bump()
            };
            let alias = self.wrap(alias, K::IdentifierName);
            let mut b = self.start_with(alias);
            b.push(self.bump());
            b.push(self.parse_simple_name(in_expression));
            return self.finish(b, K::AliasQualifiedName);
        }
        self.parse_simple_name(in_expression)
    }

    /// An identifier with optional type arguments. In expressions the `<`
    /// must pass the type-argument-list check, otherwise it is left for the
    /// less-than operator.
    pub(crate) fn parse_simple_name(&mut self, in_expression: bool) -> SyntaxNode {
        let identifier = self.expect_identifier();
        let generic = self.at(K::LessThanToken) && {
            if in_expression {
                disambiguate::is_generic_name_in_expression(self.cursor, 0)
            } else {
                let mut lookahead = self.cursor;
                disambiguate::scan_type_argument_list(&mut lookahead, false)
            }
        };
        let mut b = self.start_with(identifier);
        if generic {
            b.push(self.parse_type_argument_list());
            return self.finish(b, K::GenericName);
        }
        self.finish(b, K::IdentifierName)
    }

    /// `<` (type | omitted) { "," (type | omitted) } `>`
    fn parse_type_argument_list(&mut self) -> SyntaxNode {
        let mut b = self.start();
        b.push(self.bump());
        loop {
            if matches!(self.kind(), K::CommaToken | K::GreaterThanToken) {
                let omitted = self.start();
                b.push(self.finish(omitted, K::OmittedTypeArgument));
            } else {
                b.push(self.parse_type());
            }
            match self.eat(K::CommaToken) {
                Some(comma) => b.push(comma),
                None => break,
            }
        }
        b.push(self.expect(K::GreaterThanToken));
        self.finish(b, K::TypeArgumentList)
    }
}
