//! Documentation-comment references.
//!
//! `cref` and `name` attribute values inside documentation comments hold a
//! small name grammar of their own. Values are entity-decoded, re-lexed and
//! parsed as a dotted, possibly generic name. Whatever follows the name is
//! dropped and nothing is ever reported: documentation text is advisory.

use memchr::{memchr, memchr2, memchr3_iter, memchr_iter};

use sable_ir::{Span, SyntaxKind};
use sable_options::ParseOptions;
use sable_syntax::SyntaxNode;

use crate::parser::Parser;

/// Which documentation attribute a value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocAttributeKind {
    Cref,
    Name,
}

/// A `cref` or `name` attribute value found in a documentation comment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocAttribute {
    pub kind: DocAttributeKind,
    /// The raw value between the quotes, entities still encoded.
    pub value: String,
    /// Where the value sits in the comment text.
    pub span: Span,
}

/// Parse a `cref` value. `{` and `}` stand for `<` and `>`, so that
/// `List{T}` names the generic type.
pub fn parse_cref(value: &str) -> SyntaxNode {
    parse_reference(&decode(value, true))
}

/// Parse a `name` value, such as a parameter name.
pub fn parse_name_attribute(value: &str) -> SyntaxNode {
    parse_reference(&decode(value, false))
}

/// Every `cref="..."` and `name="..."` attribute in `comment`, in order.
/// Either quote character may delimit a value.
pub fn doc_comment_attributes(comment: &str) -> Vec<DocAttribute> {
    let bytes = comment.as_bytes();
    let mut attributes = Vec::new();
    let mut resume = 0;
    for eq in memchr_iter(b'=', bytes) {
        if eq < resume {
            continue;
        }
        let kind = match attribute_name_before(bytes, eq) {
            Some(b"cref") => DocAttributeKind::Cref,
            Some(b"name") => DocAttributeKind::Name,
            _ => continue,
        };
        let mut open = eq + 1;
        while bytes.get(open).is_some_and(u8::is_ascii_whitespace) {
            open += 1;
        }
        let Some(&quote) = bytes.get(open).filter(|&&b| b == b'"' || b == b'\'') else {
            continue;
        };
        let value_start = open + 1;
        let Some(len) = memchr(quote, &bytes[value_start..]) else {
            continue;
        };
        let value_end = value_start + len;
        resume = value_end + 1;
        let Ok(span) = Span::try_from_range(value_start..value_end) else {
            continue;
        };
        attributes.push(DocAttribute {
            kind,
            value: comment[value_start..value_end].to_string(),
            span,
        });
    }
    attributes
}

/// The attribute name ending just before `eq`, ignoring whitespace.
fn attribute_name_before(bytes: &[u8], eq: usize) -> Option<&[u8]> {
    let mut end = eq;
    while end > 0 && bytes[end - 1].is_ascii_whitespace() {
        end -= 1;
    }
    let mut start = end;
    while start > 0 && is_name_byte(bytes[start - 1]) {
        start -= 1;
    }
    // The name must stand alone, as in `<see cref=`, not `xcref=`.
    let separated = start == 0 || bytes[start - 1].is_ascii_whitespace();
    (start < end && separated).then(|| &bytes[start..end])
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b':')
}

/// Replace XML entities, and in crefs the brace spelling of type argument
/// brackets. Unknown entities stay as written.
fn decode(value: &str, braces: bool) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    loop {
        let bytes = rest.as_bytes();
        let next = if braces {
            memchr3_iter(b'&', b'{', b'}', bytes).next()
        } else {
            memchr(b'&', bytes)
        };
        let Some(i) = next else {
            out.push_str(rest);
            return out;
        };
        out.push_str(&rest[..i]);
        rest = &rest[i..];
        match rest.as_bytes()[0] {
            b'{' => {
                out.push('<');
                rest = &rest[1..];
            }
            b'}' => {
                out.push('>');
                rest = &rest[1..];
            }
            _ => match decode_entity(rest) {
                Some((ch, len)) => {
                    out.push(ch);
                    rest = &rest[len..];
                }
                None => {
                    out.push('&');
                    rest = &rest[1..];
                }
            },
        }
    }
}

/// The character of the entity at the start of `text` and the entity's
/// length in bytes.
fn decode_entity(text: &str) -> Option<(char, usize)> {
    let end = memchr2(b';', b'&', &text.as_bytes()[1..])? + 1;
    if text.as_bytes()[end] != b';' {
        return None;
    }
    let body = &text[1..end];
    let ch = match body {
        "lt" => '<',
        "gt" => '>',
        "amp" => '&',
        "quot" => '"',
        "apos" => '\'',
        _ => {
            let digits = body.strip_prefix('#')?;
            let hex = digits.strip_prefix('x').or_else(|| digits.strip_prefix('X'));
            let code = match hex {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse().ok()?,
            };
            char::from_u32(code)?
        }
    };
    Some((ch, end + 1))
}

/// Lex `text` and parse one name from its start, discarding every
/// diagnostic and any residue.
fn parse_reference(text: &str) -> SyntaxNode {
    let options = ParseOptions::default();
    let mut tokens = sable_lexer::lex(text, &options);
    for token in &mut tokens {
        token.diagnostics.clear();
    }
    let mut parser = Parser::quiet(&tokens, &options);
    let node = if parser.at(SyntaxKind::IdentifierToken) {
        parser.parse_name()
    } else {
        parser.parse_type()
    };
    tracing::trace!(
        consumed = parser.position(),
        total = tokens.len(),
        "parsed documentation reference"
    );
    node
}
