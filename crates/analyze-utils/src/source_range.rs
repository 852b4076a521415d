use analyze_core::{AnalyzerContext, Position, SourceRange, SyntaxNode};
use analyze_error::{InvalidNodeError, PositionField};
use tracing::debug;

use crate::logging::LOG_TARGET_SOURCE_RANGE;

/// Extracts the text a node covers, along with its start and end positions.
///
/// Offsets are byte offsets into `context.source()`, end-exclusive. The node must carry a
/// start offset, an end offset, and line/column locations; missing metadata is an error,
/// never treated as zero. Offsets must satisfy `start <= end <= source.len()` and fall on
/// char boundaries.
///
/// ```
/// use analyze_utils::{LineColumn, NodeLocation, NodeSpan, ScriptContext, create_source_range};
///
/// let ctx = ScriptContext::new("let x = 1;");
/// let node = NodeSpan::new(
///     4,
///     5,
///     NodeLocation { start: LineColumn::new(1, 4), end: LineColumn::new(1, 5) },
/// );
/// let range = create_source_range(&ctx, &node).unwrap();
/// assert_eq!(range.source, "x");
/// assert_eq!(range.start.offset, 4);
/// assert_eq!(range.end.column, 5);
/// ```
pub fn create_source_range<C, N>(context: &C, node: &N) -> Result<SourceRange, InvalidNodeError>
where
    C: AnalyzerContext + ?Sized,
    N: SyntaxNode + ?Sized,
{
    let source = context.source();
    build_range(source, node).inspect_err(|e| {
        debug!(
            target: LOG_TARGET_SOURCE_RANGE,
            error = %e,
            source_len = source.len(),
            "rejected node"
        );
    })
}

fn build_range<N>(source: &str, node: &N) -> Result<SourceRange, InvalidNodeError>
where
    N: SyntaxNode + ?Sized,
{
    let start = node
        .start()
        .ok_or(InvalidNodeError::missing(PositionField::Start))?;
    let end = node
        .end()
        .ok_or(InvalidNodeError::missing(PositionField::End))?;
    let loc = node
        .loc()
        .ok_or(InvalidNodeError::missing(PositionField::Location))?;

    if start > end {
        return Err(InvalidNodeError::InvertedRange { start, end });
    }
    if end > source.len() {
        return Err(InvalidNodeError::OffsetOutOfBounds {
            offset: end,
            source_len: source.len(),
        });
    }
    if let Some(offset) = [start, end]
        .into_iter()
        .find(|&offset| !source.is_char_boundary(offset))
    {
        return Err(InvalidNodeError::NotCharBoundary { offset });
    }

    Ok(SourceRange {
        source: source[start..end].to_owned(),
        start: Position::new(start, loc.start.line, loc.start.column),
        end: Position::new(end, loc.end.line, loc.end.column),
    })
}

#[cfg(test)]
mod tests {
    use analyze_core::{LineColumn, NodeLocation, NodeSpan, ScriptContext};
    use analyze_error::InvalidNodeKind;

    use super::*;

    fn loc(start: (usize, usize), end: (usize, usize)) -> NodeLocation {
        NodeLocation {
            start: LineColumn::new(start.0, start.1),
            end: LineColumn::new(end.0, end.1),
        }
    }

    #[test]
    fn slices_identifier() {
        let ctx = ScriptContext::new("let x = 1;");
        let node = NodeSpan::new(4, 5, loc((1, 4), (1, 5)));
        let range = create_source_range(&ctx, &node).unwrap();
        assert_eq!(
            range,
            SourceRange {
                source: "x".to_string(),
                start: Position::new(4, 1, 4),
                end: Position::new(5, 1, 5),
            }
        );
    }

    #[test]
    fn copies_location_without_recomputing() {
        // line/column come from the node as-is, even if they disagree with the offsets
        let node = NodeSpan::new(0, 3, loc((7, 2), (7, 5)));
        let range = create_source_range("abcdef", &node).unwrap();
        assert_eq!(range.source, "abc");
        assert_eq!(range.start, Position::new(0, 7, 2));
        assert_eq!(range.end, Position::new(3, 7, 5));
    }

    #[test]
    fn empty_and_full_ranges() {
        let src = "const a = 1";
        let empty = create_source_range(src, &NodeSpan::new(3, 3, loc((1, 3), (1, 3)))).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.source, "");

        let full = create_source_range(src, &NodeSpan::new(0, 11, loc((1, 0), (1, 11)))).unwrap();
        assert_eq!(full.source, src);
    }

    #[test]
    fn missing_metadata_is_reported_per_field() {
        let full = NodeSpan::new(0, 1, loc((1, 0), (1, 1)));
        let cases = [
            (NodeSpan { start: None, ..full }, PositionField::Start),
            (NodeSpan { end: None, ..full }, PositionField::End),
            (NodeSpan { loc: None, ..full }, PositionField::Location),
        ];
        for (node, field) in cases {
            let err = create_source_range("abc", &node).unwrap_err();
            assert_eq!(err, InvalidNodeError::MissingPositionMetadata { field });
            assert_eq!(err.kind(), InvalidNodeKind::MissingPositionMetadata);
        }
    }

    #[test]
    fn end_past_source_is_out_of_bounds() {
        let err = create_source_range("abc", &NodeSpan::new(1, 4, loc((1, 1), (1, 4))))
            .unwrap_err();
        assert_eq!(
            err,
            InvalidNodeError::OffsetOutOfBounds {
                offset: 4,
                source_len: 3
            }
        );
    }

    #[test]
    fn start_after_end_is_inverted() {
        let err = create_source_range("abc", &NodeSpan::new(2, 1, loc((1, 2), (1, 1))))
            .unwrap_err();
        assert_eq!(err.kind(), InvalidNodeKind::InvertedRange);
    }

    #[test]
    fn offsets_inside_a_char_are_rejected() {
        // 'é' is two bytes
        let err = create_source_range("é = 1", &NodeSpan::new(1, 3, loc((1, 1), (1, 2))))
            .unwrap_err();
        assert_eq!(err, InvalidNodeError::NotCharBoundary { offset: 1 });
    }
}
