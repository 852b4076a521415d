//! [`SyntaxNode`] adapter for `syn` nodes.
//!
//! Offsets come from `proc_macro2::Span::byte_range()` and line/column data from the
//! `span-locations` feature. Both are only accurate outside of a procedural macro (or on
//! nightly inside one), which covers the analyzer's use of `syn::parse_file`.

use analyze_core::{LineColumn, NodeLocation, SyntaxNode};
use syn::spanned::Spanned;

/// Borrows a `syn` node and exposes its span as a [`SyntaxNode`].
pub struct SpannedNode<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Clone for SpannedNode<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for SpannedNode<'_, T> {}

impl<'a, T: Spanned + ?Sized> SpannedNode<'a, T> {
    pub fn new(node: &'a T) -> Self {
        Self(node)
    }

    pub fn inner(&self) -> &'a T {
        self.0
    }
}

impl<T: Spanned + ?Sized> SyntaxNode for SpannedNode<'_, T> {
    fn start(&self) -> Option<usize> {
        Some(self.0.span().byte_range().start)
    }

    fn end(&self) -> Option<usize> {
        Some(self.0.span().byte_range().end)
    }

    fn loc(&self) -> Option<NodeLocation> {
        let span = self.0.span();
        let (start, end) = (span.start(), span.end());
        Some(NodeLocation {
            start: LineColumn::new(start.line, start.column),
            end: LineColumn::new(end.line, end.column),
        })
    }
}
