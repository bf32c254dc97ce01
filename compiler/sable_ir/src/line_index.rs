//! Line index for byte-offset to line/column conversion.

use std::fmt;

/// A 1-based line/column pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.line, self.col)
    }
}

/// Pre-computed line start offsets for a source text.
///
/// `\n`, `\r\n` and a lone `\r` all terminate a line. Columns are byte
/// columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// `line_starts[0]` is always 0; `line_starts[n]` is the byte offset of line n+1.
    line_starts: Vec<u32>,
}

impl LineIndex {
    /// Build the index for `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut line_starts = vec![0];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    i += 2;
                    line_starts.push(to_u32(i));
                }
                b'\r' | b'\n' => {
                    i += 1;
                    line_starts.push(to_u32(i));
                }
                _ => i += 1,
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset to a 1-based (line, column).
    ///
    /// Offsets past the end clamp to the last line.
    #[must_use]
    pub fn line_col(&self, offset: u32) -> LineCol {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line_idx).copied().unwrap_or(0);
        LineCol {
            line: to_u32(line_idx + 1),
            col: offset - line_start + 1,
        }
    }

    /// Byte offset of the start of the given 1-based line.
    #[must_use]
    pub fn line_start(&self, line: u32) -> Option<u32> {
        let idx = usize::try_from(line).ok()?.checked_sub(1)?;
        self.line_starts.get(idx).copied()
    }

    /// Number of lines in the source.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_line() {
        let index = LineIndex::new("abc");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_col(0), LineCol { line: 1, col: 1 });
        assert_eq!(index.line_col(3), LineCol { line: 1, col: 4 });
    }

    #[test]
    fn test_mixed_line_endings() {
        let index = LineIndex::new("a\r\nb\rc\nd");
        assert_eq!(index.line_count(), 4);
        assert_eq!(index.line_col(3), LineCol { line: 2, col: 1 });
        assert_eq!(index.line_col(5), LineCol { line: 3, col: 1 });
        assert_eq!(index.line_col(7), LineCol { line: 4, col: 1 });
    }

    #[test]
    fn test_line_start_lookup() {
        let index = LineIndex::new("x\ny\n");
        assert_eq!(index.line_start(1), Some(0));
        assert_eq!(index.line_start(2), Some(2));
        assert_eq!(index.line_start(3), Some(4));
        assert_eq!(index.line_start(0), None);
        assert_eq!(index.line_start(9), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(LineCol { line: 1, col: 4 }.to_string(), "(1,4)");
    }
}
