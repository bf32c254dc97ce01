//! Preprocessor directives and conditional compilation.
//!
//! A directive is one trivia entry running from `#` to the end of its line
//! (the line break is separate `EndOfLineTrivia`). Conditional directives
//! are evaluated as they are lexed; text in a false branch becomes a single
//! `DisabledTextTrivia` entry.

use rustc_hash::FxHashSet;
use sable_diagnostic::{Diagnostic, ErrorCode};
use sable_ir::{Span, SyntaxKind};
use sable_options::ParseOptions;
use sable_syntax::TriviaList;

use crate::cursor::{is_identifier_part, is_identifier_start, is_whitespace, to_offset};
use crate::scanner::Lexer;

/// One open `#if` group.
#[derive(Copy, Clone, Debug)]
struct Conditional {
    /// Was the surrounding text active when the group opened?
    parent_active: bool,
    /// Has any branch of the group been taken?
    taken: bool,
    /// Is the current branch active?
    active: bool,
    seen_else: bool,
}

/// Symbols and open conditional/region groups.
#[derive(Clone, Debug, Default)]
pub(crate) struct DirectiveState {
    symbols: FxHashSet<String>,
    conditionals: Vec<Conditional>,
    regions: usize,
}

impl DirectiveState {
    pub(crate) fn new(options: &ParseOptions) -> Self {
        DirectiveState {
            symbols: options
                .preprocessor_symbols()
                .flatten()
                .map(str::to_string)
                .collect(),
            conditionals: Vec::new(),
            regions: 0,
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.conditionals.last().map_or(true, |c| c.active)
    }
}

/// Does `text` (starting at `#`) hold `#if`, `#elif`, `#else` or `#endif`?
pub(crate) fn is_conditional(text: &str) -> bool {
    matches!(directive_name(text).0, "if" | "elif" | "else" | "endif")
}

/// Split `#  name rest` into `(name, rest)`.
fn directive_name(text: &str) -> (&str, &str) {
    let after_hash = text.strip_prefix('#').unwrap_or(text);
    let trimmed = after_hash.trim_start_matches(is_whitespace);
    let len = trimmed
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(trimmed.len());
    trimmed.split_at(len)
}

impl Lexer<'_> {
    /// Lex one directive line into `list`, plus any disabled text it opens.
    pub(crate) fn directive(&mut self, at_line_start: bool, list: &mut TriviaList) {
        let start = self.cursor.byte_pos();
        let line_end = self.cursor.line_end();
        let line = self.cursor.slice(start, line_end);
        self.cursor.skip_to_line_end();
        let span = Span::new(to_offset(start), to_offset(line_end));
        let (name, rest) = directive_name(line);
        let args = strip_comment(rest).trim();

        let kind = if at_line_start {
            self.apply_directive(name, args, span)
        } else {
            self.report(Diagnostic::new(ErrorCode::CS1040, span));
            SyntaxKind::BadDirectiveTrivia
        };
        tracing::debug!(directive = name, ?kind, active = self.directives.is_active(), "directive");
        self.push(list, kind, start);

        if !self.directives.is_active() {
            let eol = self.cursor.byte_pos();
            self.end_of_line();
            self.push(list, SyntaxKind::EndOfLineTrivia, eol);
            self.disabled_text(list);
        }
    }

    fn apply_directive(&mut self, name: &str, args: &str, span: Span) -> SyntaxKind {
        match name {
            "if" => {
                let parent_active = self.directives.is_active();
                let value = parent_active && self.condition(args, span);
                self.directives.conditionals.push(Conditional {
                    parent_active,
                    taken: value || !parent_active,
                    active: value,
                    seen_else: false,
                });
                SyntaxKind::IfDirectiveTrivia
            }
            "elif" => match self.directives.conditionals.last().copied() {
                Some(group) if !group.seen_else => {
                    let value =
                        group.parent_active && !group.taken && self.condition(args, span);
                    if let Some(top) = self.directives.conditionals.last_mut() {
                        top.active = value;
                        top.taken |= value;
                    }
                    SyntaxKind::ElifDirectiveTrivia
                }
                _ => self.unexpected_directive(span),
            },
            "else" => match self.directives.conditionals.last().copied() {
                Some(group) if !group.seen_else => {
                    if let Some(top) = self.directives.conditionals.last_mut() {
                        top.active = group.parent_active && !group.taken;
                        top.taken = true;
                        top.seen_else = true;
                    }
                    self.expect_end_of_directive(args, span);
                    SyntaxKind::ElseDirectiveTrivia
                }
                _ => self.unexpected_directive(span),
            },
            "endif" => {
                if self.directives.conditionals.pop().is_none() {
                    return self.unexpected_directive(span);
                }
                self.expect_end_of_directive(args, span);
                SyntaxKind::EndIfDirectiveTrivia
            }
            "define" | "undef" => {
                if self.seen_token {
                    self.report(Diagnostic::new(ErrorCode::CS1032, span));
                }
                let symbol = args.split(is_whitespace).next().unwrap_or("");
                let valid = symbol.chars().next().is_some_and(is_identifier_start)
                    && symbol.chars().all(is_identifier_part);
                if !valid {
                    self.report(Diagnostic::new(ErrorCode::CS1001, span));
                } else if name == "define" {
                    self.directives.symbols.insert(symbol.to_string());
                } else {
                    self.directives.symbols.remove(symbol);
                }
                if name == "define" {
                    SyntaxKind::DefineDirectiveTrivia
                } else {
                    SyntaxKind::UndefDirectiveTrivia
                }
            }
            "region" => {
                self.directives.regions += 1;
                SyntaxKind::RegionDirectiveTrivia
            }
            "endregion" => {
                if self.directives.regions == 0 {
                    return self.unexpected_directive(span);
                }
                self.directives.regions -= 1;
                SyntaxKind::EndRegionDirectiveTrivia
            }
            "error" => {
                self.report(Diagnostic::new(ErrorCode::CS1029, span).with_arg(args));
                SyntaxKind::ErrorDirectiveTrivia
            }
            "warning" => {
                self.report(Diagnostic::new(ErrorCode::CS1030, span).with_arg(args));
                SyntaxKind::WarningDirectiveTrivia
            }
            "line" => SyntaxKind::LineDirectiveTrivia,
            "pragma" => SyntaxKind::PragmaDirectiveTrivia,
            "nullable" => SyntaxKind::NullableDirectiveTrivia,
            _ => {
                self.report(Diagnostic::new(ErrorCode::CS1024, span));
                SyntaxKind::BadDirectiveTrivia
            }
        }
    }

    fn unexpected_directive(&mut self, span: Span) -> SyntaxKind {
        self.report(Diagnostic::new(ErrorCode::CS1028, span));
        SyntaxKind::BadDirectiveTrivia
    }

    fn expect_end_of_directive(&mut self, args: &str, span: Span) {
        if !args.is_empty() {
            self.report(Diagnostic::new(ErrorCode::CS1025, span));
        }
    }

    fn condition(&mut self, args: &str, span: Span) -> bool {
        if let Some(value) = evaluate(args, &self.directives.symbols) {
            value
        } else {
            self.report(Diagnostic::new(ErrorCode::CS1517, span));
            false
        }
    }

    /// Report groups still open at end of file.
    pub(crate) fn finish_directives(&mut self) {
        let at = self.cursor.pos();
        if !self.directives.conditionals.is_empty() {
            self.directives.conditionals.clear();
            self.report(Diagnostic::new(ErrorCode::CS1027, Span::point(at)));
        }
        if self.directives.regions > 0 {
            self.directives.regions = 0;
            self.report(Diagnostic::new(ErrorCode::CS1038, Span::point(at)));
        }
    }
}

fn strip_comment(text: &str) -> &str {
    match memchr::memmem::find(text.as_bytes(), b"//") {
        Some(i) => &text[..i],
        None => text,
    }
}

// ─── Conditional expressions ────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum CondToken<'s> {
    Name(&'s str),
    Not,
    And,
    Or,
    Equals,
    NotEquals,
    Open,
    Close,
}

fn tokenize(text: &str) -> Option<Vec<CondToken<'_>>> {
    let mut tokens = Vec::new();
    let mut rest = text;
    loop {
        rest = rest.trim_start_matches(is_whitespace);
        let Some(c) = rest.chars().next() else {
            return Some(tokens);
        };
        let (token, len) = match c {
            '(' => (CondToken::Open, 1),
            ')' => (CondToken::Close, 1),
            '!' if rest.starts_with("!=") => (CondToken::NotEquals, 2),
            '!' => (CondToken::Not, 1),
            '=' if rest.starts_with("==") => (CondToken::Equals, 2),
            '&' if rest.starts_with("&&") => (CondToken::And, 2),
            '|' if rest.starts_with("||") => (CondToken::Or, 2),
            c if is_identifier_part(c) => {
                let len = rest
                    .find(|c: char| !is_identifier_part(c))
                    .unwrap_or(rest.len());
                (CondToken::Name(&rest[..len]), len)
            }
            _ => return None,
        };
        tokens.push(token);
        rest = &rest[len..];
    }
}

/// Evaluate a `#if` condition. `None` means the expression is malformed.
pub(crate) fn evaluate(text: &str, symbols: &FxHashSet<String>) -> Option<bool> {
    let tokens = tokenize(text)?;
    let mut eval = CondEval {
        tokens: &tokens,
        pos: 0,
        symbols,
    };
    let value = eval.or()?;
    (eval.pos == tokens.len()).then_some(value)
}

struct CondEval<'t, 's> {
    tokens: &'t [CondToken<'s>],
    pos: usize,
    symbols: &'t FxHashSet<String>,
}

impl<'s> CondEval<'_, 's> {
    fn peek(&self) -> Option<CondToken<'s>> {
        self.tokens.get(self.pos).copied()
    }

    fn eat(&mut self, token: CondToken<'s>) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn or(&mut self) -> Option<bool> {
        let mut value = self.and()?;
        while self.eat(CondToken::Or) {
            value |= self.and()?;
        }
        Some(value)
    }

    fn and(&mut self) -> Option<bool> {
        let mut value = self.equality()?;
        while self.eat(CondToken::And) {
            value &= self.equality()?;
        }
        Some(value)
    }

    fn equality(&mut self) -> Option<bool> {
        let mut value = self.unary()?;
        loop {
            if self.eat(CondToken::Equals) {
                value = value == self.unary()?;
            } else if self.eat(CondToken::NotEquals) {
                value = value != self.unary()?;
            } else {
                return Some(value);
            }
        }
    }

    fn unary(&mut self) -> Option<bool> {
        if self.eat(CondToken::Not) {
            return self.unary().map(|v| !v);
        }
        self.primary()
    }

    fn primary(&mut self) -> Option<bool> {
        match self.peek()? {
            CondToken::Open => {
                self.pos += 1;
                let value = self.or()?;
                self.eat(CondToken::Close).then_some(value)
            }
            CondToken::Name(name) => {
                self.pos += 1;
                Some(match name {
                    "true" => true,
                    "false" => false,
                    _ => self.symbols.contains(name),
                })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
