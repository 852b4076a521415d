use serde::{Deserialize, Serialize};

use crate::LineIndex;

/// A line/column pair as reported by the parser: 1-based line, 0-based column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

impl LineColumn {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Line/column metadata for both endpoints of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeLocation {
    pub start: LineColumn,
    pub end: LineColumn,
}

/// The position metadata a parsed syntax node carries.
///
/// Every accessor is optional because parsers commonly leave offsets or locations unset on
/// synthesized nodes. Consumers must treat `None` as missing, never as zero.
pub trait SyntaxNode {
    /// Byte offset where the node starts.
    fn start(&self) -> Option<usize>;
    /// Byte offset where the node ends (exclusive).
    fn end(&self) -> Option<usize>;
    fn loc(&self) -> Option<NodeLocation>;
}

/// Plain-data [`SyntaxNode`], as produced by a parser that records offsets and locations
/// directly on each node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpan {
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub loc: Option<NodeLocation>,
}

impl NodeSpan {
    pub const fn new(start: usize, end: usize, loc: NodeLocation) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            loc: Some(loc),
        }
    }

    /// Builds a fully-populated span for `start..end` in `source`, computing line/column
    /// metadata with a [`LineIndex`].
    ///
    /// Returns `None` if either offset is past the end of `source` or not on a char boundary.
    pub fn from_offsets(source: &str, start: usize, end: usize) -> Option<Self> {
        let index = LineIndex::new(source);
        let start_pos = index.position(start)?;
        let end_pos = index.position(end)?;
        Some(Self::new(
            start,
            end,
            NodeLocation {
                start: LineColumn::new(start_pos.line, start_pos.column),
                end: LineColumn::new(end_pos.line, end_pos.column),
            },
        ))
    }
}

impl SyntaxNode for NodeSpan {
    fn start(&self) -> Option<usize> {
        self.start
    }

    fn end(&self) -> Option<usize> {
        self.end
    }

    fn loc(&self) -> Option<NodeLocation> {
        self.loc
    }
}

impl<T: SyntaxNode + ?Sized> SyntaxNode for &T {
    fn start(&self) -> Option<usize> {
        (**self).start()
    }

    fn end(&self) -> Option<usize> {
        (**self).end()
    }

    fn loc(&self) -> Option<NodeLocation> {
        (**self).loc()
    }
}
