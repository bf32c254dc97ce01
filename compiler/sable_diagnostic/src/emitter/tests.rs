use pretty_assertions::assert_eq;
use sable_ir::Span;

use super::*;
use crate::ErrorCode;

#[test]
fn test_escape_json() {
    assert_eq!(escape_json("hello"), "hello");
    assert_eq!(escape_json("\"quoted\""), "\\\"quoted\\\"");
    assert_eq!(escape_json("line1\nline2"), "line1\\nline2");
    assert_eq!(escape_json("\u{1}"), "\\u0001");
}

#[test]
fn test_text_emitter_format() {
    let index = LineIndex::new("new");
    let mut out = Vec::new();
    {
        let mut emitter = TextEmitter::new(&mut out, "a.cs", &index);
        emitter.emit(&Diagnostic::new(ErrorCode::CS1526, Span::new(3, 3)));
        emitter.emit_summary(1, 0);
    }
    let text = String::from_utf8_lossy(&out);
    assert_eq!(
        text,
        "a.cs(1,4): error CS1526: A new expression requires an argument list or (), [], or {} after type\n\
         a.cs: 1 error(s), 0 warning(s)\n"
    );
}

#[test]
fn test_json_emitter_writes_array() {
    let index = LineIndex::new("x\ny");
    let mut out = Vec::new();
    {
        let mut emitter = JsonEmitter::new(&mut out, "b.cs", &index);
        emitter.begin();
        emitter.emit_all(&[
            Diagnostic::new(ErrorCode::CS1002, Span::new(1, 1)),
            Diagnostic::new(ErrorCode::CS1056, Span::new(2, 3)).with_arg("\\"),
        ]);
        emitter.end();
    }
    let text = String::from_utf8_lossy(&out);
    assert!(text.starts_with("[{\"code\":\"CS1002\""));
    assert!(text.contains("\"message\":\"Unexpected character '\\\\'\""));
    assert!(text.contains("\"start\":{\"offset\":2,\"line\":2,\"column\":1}"));
    assert!(text.trim_end().ends_with("}]"));
}

#[test]
fn test_count_by_severity() {
    let diags = [
        Diagnostic::new(ErrorCode::CS1002, Span::DUMMY),
        Diagnostic::new(ErrorCode::CS1030, Span::DUMMY),
        Diagnostic::new(ErrorCode::CS1026, Span::DUMMY),
    ];
    assert_eq!(count_by_severity(&diags), (2, 1));
}
