use crate::Position;

/// Maps byte offsets in a source text to [`Position`]s.
///
/// Lines are split on `\n` only; a preceding `\r` is counted as an ordinary column.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    // Byte offset of the first char of each line. Always starts with 0.
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            line_starts,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Position of `offset`, or `None` if it lies past the end of the source or inside a
    /// multi-byte char.
    pub fn position(&self, offset: usize) -> Option<Position> {
        if !self.source.is_char_boundary(offset) {
            return None;
        }
        // `line_starts[0] == 0`, so at least one entry is `<= offset`.
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        let column = self.source[line_start..offset].chars().count();
        Some(Position::new(offset, line, column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_positions() {
        let index = LineIndex::new("let x = 1;");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.position(0), Some(Position::new(0, 1, 0)));
        assert_eq!(index.position(4), Some(Position::new(4, 1, 4)));
        // one past the last char is a valid end position
        assert_eq!(index.position(10), Some(Position::new(10, 1, 10)));
        assert_eq!(index.position(11), None);
    }

    #[test]
    fn positions_after_newlines() {
        let source = "a\nbc\n\nd";
        let index = LineIndex::new(source);
        assert_eq!(index.line_count(), 4);
        assert_eq!(index.position(1), Some(Position::new(1, 1, 1)));
        assert_eq!(index.position(2), Some(Position::new(2, 2, 0)));
        assert_eq!(index.position(4), Some(Position::new(4, 2, 2)));
        assert_eq!(index.position(5), Some(Position::new(5, 3, 0)));
        assert_eq!(index.position(6), Some(Position::new(6, 4, 0)));
    }

    #[test]
    fn columns_count_chars_not_bytes() {
        let source = "é = 1";
        let index = LineIndex::new(source);
        assert_eq!(index.position(2), Some(Position::new(2, 1, 1)));
        assert_eq!(index.position(1), None);
    }
}
