//! Leaf-level text utilities for the script analyzer.
//!
//! - [`is_not_null`]: `Option` presence predicate shaped for `Iterator::filter`.
//! - [`cache_string_function`] / [`CachedStringFn`]: memoization for pure `&str -> String`
//!   functions.
//! - [`camelize`], [`hyphenate`], [`capitalize`], [`pascal_case`], [`kebab_case`],
//!   [`is_kebab_case`]: identifier case conversions, each memoized for the process lifetime.
//! - [`create_source_range`]: slice a node's text out of the analyzed source along with its
//!   line/column positions.

pub mod cache;
pub mod case;
mod logging;
pub mod null;
pub mod source_range;
#[cfg(feature = "proc-span")]
pub mod span;

pub use cache::{CachedStringFn, cache_string_function};
pub use case::{camelize, capitalize, hyphenate, is_kebab_case, kebab_case, pascal_case};
pub use null::is_not_null;
pub use source_range::create_source_range;
#[cfg(feature = "proc-span")]
pub use span::SpannedNode;

// Re-export the shared types so callers only need this crate.
pub use analyze_core::{
    AnalyzerContext, LineColumn, LineIndex, NodeLocation, NodeSpan, Position, ScriptContext,
    SourceRange, SyntaxNode,
};
pub use analyze_error::{InvalidNodeError, InvalidNodeKind, PositionField};
