//! Declaration modifiers.
//!
//! Reserved modifiers are always modifiers. Contextual ones (`partial`,
//! `async`, `required`, `file`) and `ref` only count when what follows
//! still looks like the rest of a declaration.

use bitflags::bitflags;
use smallvec::SmallVec;

use sable_diagnostic::{Diagnostic, ErrorCode};
use sable_ir::{Span, SyntaxKind};
use sable_options::Feature;
use sable_syntax::Token;

use crate::builder::NodeBuilder;
use crate::disambiguate;
use crate::parser::Parser;

use SyntaxKind as K;

bitflags! {
    /// Modifiers seen on one declaration.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub(crate) struct DeclarationModifiers: u32 {
        const PUBLIC = 1 << 0;
        const PRIVATE = 1 << 1;
        const INTERNAL = 1 << 2;
        const PROTECTED = 1 << 3;
        const STATIC = 1 << 4;
        const READONLY = 1 << 5;
        const SEALED = 1 << 6;
        const CONST = 1 << 7;
        const FIXED = 1 << 8;
        const VOLATILE = 1 << 9;
        const NEW = 1 << 10;
        const OVERRIDE = 1 << 11;
        const ABSTRACT = 1 << 12;
        const VIRTUAL = 1 << 13;
        const EXTERN = 1 << 14;
        const UNSAFE = 1 << 15;
        const REF = 1 << 16;
        const PARTIAL = 1 << 17;
        const ASYNC = 1 << 18;
        const REQUIRED = 1 << 19;
        const FILE = 1 << 20;
    }
}

impl DeclarationModifiers {
    /// The flag for a modifier keyword kind.
    fn of(kind: SyntaxKind) -> Option<Self> {
        let flag = match kind {
            K::PublicKeyword => Self::PUBLIC,
            K::PrivateKeyword => Self::PRIVATE,
            K::InternalKeyword => Self::INTERNAL,
            K::ProtectedKeyword => Self::PROTECTED,
            K::StaticKeyword => Self::STATIC,
            K::ReadOnlyKeyword => Self::READONLY,
            K::SealedKeyword => Self::SEALED,
            K::ConstKeyword => Self::CONST,
            K::FixedKeyword => Self::FIXED,
            K::VolatileKeyword => Self::VOLATILE,
            K::NewKeyword => Self::NEW,
            K::OverrideKeyword => Self::OVERRIDE,
            K::AbstractKeyword => Self::ABSTRACT,
            K::VirtualKeyword => Self::VIRTUAL,
            K::ExternKeyword => Self::EXTERN,
            K::UnsafeKeyword => Self::UNSAFE,
            K::RefKeyword => Self::REF,
            K::PartialKeyword => Self::PARTIAL,
            K::AsyncKeyword => Self::ASYNC,
            K::RequiredKeyword => Self::REQUIRED,
            K::FileKeyword => Self::FILE,
            _ => return None,
        };
        Some(flag)
    }
}

/// Modifiers of a declaration, plus where `partial` was written.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Modifiers {
    pub(crate) flags: DeclarationModifiers,
    pub(crate) partial: Option<Span>,
}

impl Modifiers {
    pub(crate) fn is_async(self) -> bool {
        self.flags.contains(DeclarationModifiers::ASYNC)
    }
}

impl Parser<'_> {
    /// Consume the modifiers at the cursor into `b`.
    pub(crate) fn parse_modifiers(&mut self, b: &mut NodeBuilder) -> Modifiers {
        let mut modifiers = Modifiers::default();
        let mut tokens: SmallVec<[Token; 4]> = SmallVec::new();
        while let Some(kind) = self.modifier_at(0) {
            let token = if self.at(K::IdentifierToken) {
                self.bump_as(kind)
            } else {
                self.bump()
            };
            let flag = DeclarationModifiers::of(kind).unwrap_or_default();
            if !flag.is_empty() && modifiers.flags.contains(flag) {
                self.report(
                    Diagnostic::new(ErrorCode::CS1004, token.span()).with_arg(token.text.clone()),
                );
            }
            modifiers.flags |= flag;
            match kind {
                K::PartialKeyword => modifiers.partial = Some(token.span()),
                K::RequiredKeyword => self.require_feature(Feature::RequiredMembers, token.span()),
                K::FileKeyword => self.require_feature(Feature::FileTypes, token.span()),
                K::RefKeyword => self.require_feature(Feature::RefStructs, token.span()),
                _ => {}
            }
            tokens.push(token);
        }
        // `partial` must come last unless relaxed ordering is on.
        if let Some(partial) = modifiers.partial {
            let last = tokens.last().map(|t| t.kind);
            if last != Some(K::PartialKeyword) {
                self.require_feature(Feature::RelaxedPartialOrdering, partial);
            }
        }
        b.extend(tokens);
        modifiers
    }

    /// The modifier kind of the token `n` ahead, if it is one here.
    pub(crate) fn modifier_at(&self, n: usize) -> Option<SyntaxKind> {
        let token = self.nth_token(n);
        match token.kind {
            K::RefKeyword => self.ref_is_modifier(n).then_some(K::RefKeyword),
            kind if kind.is_modifier_keyword() && kind.is_reserved_keyword() => Some(kind),
            K::IdentifierToken => {
                let kind = token.contextual_kind;
                let contextual = matches!(
                    kind,
                    K::PartialKeyword | K::AsyncKeyword | K::RequiredKeyword | K::FileKeyword
                );
                (contextual && self.declaration_follows(n + 1)).then_some(kind)
            }
            _ => None,
        }
    }

    /// `ref` modifies only `struct`, possibly through `partial` or
    /// `readonly`.
    fn ref_is_modifier(&self, n: usize) -> bool {
        let mut i = n + 1;
        while self.nth(i) == K::ReadOnlyKeyword || self.nth_contextual(i, K::PartialKeyword) {
            i += 1;
        }
        self.nth(i) == K::StructKeyword
    }

    /// Does the rest of a declaration start at token `n`: another modifier,
    /// a declaration keyword, or a type followed by a member name?
    fn declaration_follows(&self, n: usize) -> bool {
        let token = self.nth_token(n);
        if token.kind.is_modifier_keyword() && token.kind.is_reserved_keyword() {
            return true;
        }
        if matches!(
            token.kind,
            K::ClassKeyword
                | K::StructKeyword
                | K::InterfaceKeyword
                | K::EnumKeyword
                | K::DelegateKeyword
                | K::EventKeyword
                | K::ImplicitKeyword
                | K::ExplicitKeyword
        ) {
            return true;
        }
        if token.kind == K::IdentifierToken
            && matches!(
                token.contextual_kind,
                K::PartialKeyword
                    | K::AsyncKeyword
                    | K::RequiredKeyword
                    | K::FileKeyword
                    | K::RecordKeyword
            )
            && self.modifier_or_record_at(n)
        {
            return true;
        }
        let mut lookahead = self.cursor;
        lookahead.set_position(self.position() + n);
        disambiguate::is_type_then_name(lookahead)
            || (token.kind == K::IdentifierToken && self.nth(n + 1) == K::OpenParenToken)
    }

    /// Is the contextual keyword at `n` a modifier or the `record` keyword?
    fn modifier_or_record_at(&self, n: usize) -> bool {
        if self.nth_contextual(n, K::RecordKeyword) {
            return matches!(
                self.nth(n + 1),
                K::IdentifierToken | K::ClassKeyword | K::StructKeyword
            );
        }
        self.modifier_at(n).is_some()
    }

    /// `partial` on a declaration that cannot be partial.
    pub(crate) fn reject_partial(&mut self, modifiers: Modifiers) {
        if let Some(span) = modifiers.partial {
            self.report(Diagnostic::new(ErrorCode::CS0267, span));
        }
    }
}
