//! Errors raised when a syntax node cannot be turned into a source range.
//!
//! These are caller-contract violations: the node handed over by the parser is missing
//! position metadata, or its offsets do not describe a valid slice of the source text.

use std::fmt;

/// The piece of position metadata a node was missing.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionField {
    Start,
    End,
    Location,
}

impl fmt::Display for PositionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PositionField::Start => "start offset",
            PositionField::End => "end offset",
            PositionField::Location => "line/column location",
        };
        f.write_str(name)
    }
}

/// Coarse kind of an [`InvalidNodeError`], for callers that only need to branch on the
/// category.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidNodeKind {
    MissingPositionMetadata,
    OffsetOutOfBounds,
    InvertedRange,
    NotCharBoundary,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidNodeError {
    #[error("node is missing its {field}")]
    MissingPositionMetadata { field: PositionField },

    #[error("node offset {offset} is out of bounds for source of length {source_len}")]
    OffsetOutOfBounds { offset: usize, source_len: usize },

    #[error("node start offset {start} is after end offset {end}")]
    InvertedRange { start: usize, end: usize },

    #[error("node offset {offset} is not on a char boundary")]
    NotCharBoundary { offset: usize },
}

impl InvalidNodeError {
    pub fn kind(&self) -> InvalidNodeKind {
        match self {
            InvalidNodeError::MissingPositionMetadata { .. } => {
                InvalidNodeKind::MissingPositionMetadata
            }
            InvalidNodeError::OffsetOutOfBounds { .. } => InvalidNodeKind::OffsetOutOfBounds,
            InvalidNodeError::InvertedRange { .. } => InvalidNodeKind::InvertedRange,
            InvalidNodeError::NotCharBoundary { .. } => InvalidNodeKind::NotCharBoundary,
        }
    }

    pub fn missing(field: PositionField) -> Self {
        InvalidNodeError::MissingPositionMetadata { field }
    }
}
