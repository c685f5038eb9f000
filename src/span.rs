//! Line and column lookup for byte offsets.
//!
//! The AST and the errors only carry byte offsets. `LineIndex` turns them
//! into the 1-indexed line and column pairs used in human-readable
//! diagnostics.

use std::fmt;

/// A 1-indexed line and column. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Precomputed line starts of one source text.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    /// Byte offset where each line begins. Always starts with `0`.
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(memchr::memchr_iter(b'\n', source.as_bytes()).map(|i| i + 1))
            .collect();
        LineIndex {
            source,
            line_starts,
        }
    }

    /// Number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Locates a byte offset. Offsets past the end clamp to the end of the
    /// source; offsets inside a multi-byte character resolve to that
    /// character.
    pub fn location(&self, offset: usize) -> Location {
        let offset = offset.min(self.source.len());
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line];
        let column = self
            .source
            .get(line_start..)
            .unwrap_or_default()
            .char_indices()
            .take_while(|&(i, _)| line_start + i < offset)
            .filter(|&(i, c)| line_start + i + c.len_utf8() <= offset)
            .count();
        Location {
            line: line + 1,
            column: column + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let index = LineIndex::new("[1, 2]");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.location(0), Location { line: 1, column: 1 });
        assert_eq!(index.location(4), Location { line: 1, column: 5 });
    }

    #[test]
    fn test_multiple_lines() {
        let index = LineIndex::new("{\n  \"a\": 1,\n  \"b\": ?\n}");
        assert_eq!(index.line_count(), 4);
        assert_eq!(index.location(1), Location { line: 1, column: 2 });
        assert_eq!(index.location(2), Location { line: 2, column: 1 });
        assert_eq!(index.location(4), Location { line: 2, column: 3 });
        assert_eq!(index.location(19), Location { line: 3, column: 8 });
    }

    #[test]
    fn test_columns_count_characters() {
        let index = LineIndex::new("\"é✓\" ?");
        // '"' (1 byte) + 'é' (2 bytes) + '✓' (3 bytes) + '"' + ' '
        assert_eq!(index.location(8), Location { line: 1, column: 6 });
        // Inside the 'é' sequence.
        assert_eq!(index.location(2), Location { line: 1, column: 2 });
    }

    #[test]
    fn test_offset_past_end_clamps() {
        let index = LineIndex::new("ab\n");
        assert_eq!(index.location(99), Location { line: 2, column: 1 });
    }

    #[test]
    fn test_location_display() {
        let location = Location { line: 3, column: 7 };
        assert_eq!(location.to_string(), "line 3, column 7");
    }
}
