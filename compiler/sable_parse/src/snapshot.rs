//! Parser snapshots for speculative parsing.
//!
//! Most decisions are made by the classifiers in `disambiguate`, which scan
//! a copy of the cursor and touch nothing else. A few constructs can only
//! be told apart by parsing them; those use [`Parser::try_parse`], which
//! runs the attempt against a forked diagnostic bag and rewinds the cursor
//! when the attempt is rejected.
//!
//! Snapshots are small and only capture:
//! - Cursor position
//! - Parse context flags
//! - Recovery bookkeeping

use sable_diagnostic::ErrorCode;
use tracing::debug;

use crate::context::ParseContext;
use crate::parser::Parser;
use crate::recovery::RecoveryState;

/// A lightweight snapshot of parser state for speculative parsing.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Snapshot {
    /// Position in the token stream.
    pub(crate) cursor_pos: usize,
    /// Parse context flags (`IN_ASYNC`, `IN_PATTERN`, ...).
    pub(crate) context: ParseContext,
    recovery: RecoveryState,
    last_error: Option<(usize, ErrorCode)>,
}

impl Parser<'_> {
    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            cursor_pos: self.cursor.position(),
            context: self.context,
            recovery: self.recovery,
            last_error: self.last_error,
        }
    }

    pub(crate) fn restore(&mut self, snapshot: Snapshot) {
        self.cursor.set_position(snapshot.cursor_pos);
        self.context = snapshot.context;
        self.recovery = snapshot.recovery;
        self.last_error = snapshot.last_error;
    }

    /// Run `f` speculatively. On `Some` its diagnostics are kept; on `None`
    /// the parser is rewound and everything `f` reported is discarded.
    pub(crate) fn try_parse<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let snapshot = self.snapshot();
        let fork = self.diagnostics.fork();
        let outer = std::mem::replace(&mut self.diagnostics, fork);
        let result = f(self);
        let fork = std::mem::replace(&mut self.diagnostics, outer);
        if result.is_some() {
            debug!(from = snapshot.cursor_pos, to = self.position(), "speculation committed");
            self.diagnostics.commit(fork);
        } else {
            debug!(at = snapshot.cursor_pos, "speculation rewound");
            self.restore(snapshot);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_size() {
        assert!(
            std::mem::size_of::<Snapshot>() <= 40,
            "Snapshot should be small (got {} bytes)",
            std::mem::size_of::<Snapshot>()
        );
    }

    #[test]
    fn test_snapshot_copy() {
        let snapshot1 = Snapshot {
            cursor_pos: 10,
            context: ParseContext::IN_PATTERN,
            recovery: RecoveryState::Matching,
            last_error: None,
        };
        let snapshot2 = snapshot1;
        assert_eq!(snapshot1.cursor_pos, snapshot2.cursor_pos);
        assert_eq!(snapshot1.context, snapshot2.context);
    }
}
