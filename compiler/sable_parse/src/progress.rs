//! Forward-progress tracking for list loops.
//!
//! Every loop that parses a sequence of elements compares the cursor
//! position before and after an iteration. An iteration that consumed
//! nothing must consume one token as skipped before trying again, so that
//! parsing a fixed-length input always terminates.

/// Indicates whether parsing made progress (consumed tokens).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Progress {
    /// One or more tokens were consumed.
    Made,
    /// No tokens were consumed.
    None,
}

impl Progress {
    /// Compare two cursor positions.
    pub(crate) fn since(start: usize, now: usize) -> Progress {
        debug_assert!(now >= start, "cursor moved backwards outside speculation");
        if now > start {
            Progress::Made
        } else {
            Progress::None
        }
    }

    /// Returns true if progress was made.
    pub(crate) fn made(self) -> bool {
        matches!(self, Progress::Made)
    }

    /// Returns true if no progress was made.
    pub(crate) fn none(self) -> bool {
        matches!(self, Progress::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_since() {
        assert_eq!(Progress::since(3, 3), Progress::None);
        assert_eq!(Progress::since(3, 5), Progress::Made);
    }

    #[test]
    fn test_progress_made() {
        assert!(Progress::Made.made());
        assert!(!Progress::Made.none());
    }

    #[test]
    fn test_progress_none() {
        assert!(!Progress::None.made());
        assert!(Progress::None.none());
    }
}
