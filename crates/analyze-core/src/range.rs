use serde::{Deserialize, Serialize};

/// A single point in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 0-based column, in chars from the start of the line.
    pub column: usize,
}

impl Position {
    pub const fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

/// A contiguous span of original source text plus its start/end positions.
///
/// `source` is exactly the text between `start.offset` and `end.offset` (end-exclusive), so
/// `source.len() == end.offset - start.offset` always holds for ranges built by the
/// analyzer utilities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRange {
    pub source: String,
    pub start: Position,
    pub end: Position,
}

impl SourceRange {
    /// Length of the range in bytes. A hand-built range with `start` after `end` has
    /// length zero.
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Whether `offset` falls inside the range (end-exclusive).
    pub fn contains_offset(&self, offset: usize) -> bool {
        self.start.offset <= offset && offset < self.end.offset
    }

    /// Whether the range starts and ends on the same line.
    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    #[cfg(feature = "json")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SourceRange {
        SourceRange {
            source: "x".to_string(),
            start: Position::new(4, 1, 4),
            end: Position::new(5, 1, 5),
        }
    }

    #[test]
    fn len_matches_offsets() {
        let range = sample();
        assert_eq!(range.len(), 1);
        assert_eq!(range.len(), range.source.len());
        assert!(!range.is_empty());
    }

    #[test]
    fn inverted_range_has_zero_len() {
        let range = SourceRange {
            source: String::new(),
            start: Position::new(5, 1, 5),
            end: Position::new(4, 1, 4),
        };
        assert_eq!(range.len(), 0);
        assert!(!range.contains_offset(4));
    }

    #[test]
    fn contains_offset_is_end_exclusive() {
        let range = sample();
        assert!(!range.contains_offset(3));
        assert!(range.contains_offset(4));
        assert!(!range.contains_offset(5));
    }

    #[test]
    fn serializes_with_plain_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "source": "x",
                "start": { "offset": 4, "line": 1, "column": 4 },
                "end": { "offset": 5, "line": 1, "column": 5 },
            })
        );
    }
}
