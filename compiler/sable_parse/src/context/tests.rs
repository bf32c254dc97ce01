use super::*;

#[test]
fn test_default_is_empty() {
    let ctx = ParseContext::default();
    assert_eq!(ctx, ParseContext::NONE);
    assert!(!ctx.in_async());
    assert!(!ctx.in_pattern());
    assert!(!ctx.in_query());
}

#[test]
fn test_with_and_without() {
    let ctx = ParseContext::NONE
        .with(ParseContext::IN_ASYNC)
        .with(ParseContext::IN_PATTERN);
    assert!(ctx.in_async());
    assert!(ctx.in_pattern());
    assert!(!ctx.in_query());

    let ctx = ctx.without(ParseContext::IN_ASYNC);
    assert!(!ctx.in_async());
    assert!(ctx.in_pattern());
}

#[test]
fn test_without_unset_flag_is_noop() {
    let ctx = ParseContext::IN_QUERY;
    assert_eq!(ctx.without(ParseContext::IN_PATTERN), ctx);
}
