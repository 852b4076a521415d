//! Core data types for the analyzer utilities.
//!
//! Positions and ranges are expressed in byte offsets into the UTF-8 source text, with
//! 1-based lines and 0-based columns counted in chars. The collaborator traits
//! [`AnalyzerContext`] and [`SyntaxNode`] describe what the utilities consume from the
//! surrounding parser without tying them to any one AST.

mod context;
mod line_index;
mod node;
mod range;

pub use context::{AnalyzerContext, ScriptContext};
pub use line_index::LineIndex;
pub use node::{LineColumn, NodeLocation, NodeSpan, SyntaxNode};
pub use range::{Position, SourceRange};
