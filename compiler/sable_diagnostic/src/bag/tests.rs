use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCode;

fn diag(code: ErrorCode, start: u32, end: u32) -> Diagnostic {
    Diagnostic::new(code, Span::new(start, end))
}

#[test]
fn test_dropped_fork_leaves_no_trace() {
    let mut bag = DiagnosticBag::new();
    bag.report(diag(ErrorCode::CS1002, 0, 1));
    {
        let mut fork = bag.fork();
        fork.report(diag(ErrorCode::CS1026, 2, 3));
        assert_eq!(fork.len(), 1);
    }
    assert_eq!(bag.len(), 1);
}

#[test]
fn test_committed_fork_appends_in_order() {
    let mut bag = DiagnosticBag::new();
    bag.report(diag(ErrorCode::CS1002, 0, 1));
    let mut fork = bag.fork();
    fork.report(diag(ErrorCode::CS1026, 2, 3));
    fork.report(diag(ErrorCode::CS1513, 4, 4));
    bag.commit(fork);
    let codes: Vec<_> = bag.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![ErrorCode::CS1002, ErrorCode::CS1026, ErrorCode::CS1513]
    );
}

#[test]
fn test_take_within_claims_only_contained_entries() {
    let mut bag = DiagnosticBag::new();
    bag.report(diag(ErrorCode::CS1001, 0, 1));
    let mark = bag.mark();
    bag.report(diag(ErrorCode::CS1002, 5, 5));
    bag.report(diag(ErrorCode::CS1026, 20, 21));
    bag.report(diag(ErrorCode::CS1003, 6, 7));

    let taken = bag.take_within(mark, Span::new(4, 10));
    let taken: Vec<_> = taken.iter().map(|d| d.code).collect();
    assert_eq!(taken, vec![ErrorCode::CS1002, ErrorCode::CS1003]);

    let left: Vec<_> = bag.iter().map(|d| d.code).collect();
    assert_eq!(left, vec![ErrorCode::CS1001, ErrorCode::CS1026]);
}

#[test]
fn test_take_within_ignores_entries_before_mark() {
    let mut bag = DiagnosticBag::new();
    bag.report(diag(ErrorCode::CS1001, 5, 6));
    let mark = bag.mark();
    assert!(bag.take_within(mark, Span::new(0, 100)).is_empty());
    assert_eq!(bag.len(), 1);
}

#[test]
fn test_into_sorted_is_stable() {
    let mut bag = DiagnosticBag::new();
    bag.report(diag(ErrorCode::CS1026, 9, 9));
    bag.report(diag(ErrorCode::CS1002, 3, 3));
    bag.report(diag(ErrorCode::CS1001, 3, 4));
    let sorted: Vec<_> = bag.into_sorted().iter().map(|d| d.code).collect();
    assert_eq!(
        sorted,
        vec![ErrorCode::CS1002, ErrorCode::CS1001, ErrorCode::CS1026]
    );
}

#[test]
fn test_has_errors_ignores_warnings() {
    let mut bag = DiagnosticBag::new();
    bag.report(diag(ErrorCode::CS1030, 0, 1));
    assert!(!bag.has_errors());
    bag.report(diag(ErrorCode::CS1002, 0, 1));
    assert!(bag.has_errors());
}

#[test]
fn test_take_since() {
    let mut bag = DiagnosticBag::new();
    bag.report(diag(ErrorCode::CS1001, 0, 1));
    let mark = bag.mark();
    bag.report(diag(ErrorCode::CS1002, 50, 51));
    assert_eq!(bag.take_since(mark).len(), 1);
    assert_eq!(bag.len(), 1);
}
