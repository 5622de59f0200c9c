use std::num::{ParseFloatError, ParseIntError};

use crate::tag::Tag;

/// Why a tag value failed numeric parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    #[error("{0}")]
    Int(#[from] ParseIntError),
    #[error("{0}")]
    Float(#[from] ParseFloatError),
    #[error("duration must be a finite non-negative number")]
    InvalidDuration,
}

/// Errors that can occur when parsing a playlist.
///
/// Every variant carries the 1-based line number of the offending line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The first non-empty line is not `#EXTM3U`.
    #[error("failed to parse #EXTM3U at line {line}: missing required declaration")]
    MissingDeclaration { line: usize },
    /// A tag that requires a value has none after its `:`.
    #[error("failed to parse {tag} at line {line}: tag requires a value")]
    MissingFieldValue { tag: Tag, line: usize },
    /// A tag value is present but is not a valid number.
    #[error("failed to parse {tag} at line {line}: {source}")]
    FieldParse {
        tag: Tag,
        line: usize,
        source: ValueError,
    },
    /// An `#EXTINF` line was not followed by a path line.
    #[error("failed to parse #EXTINF at line {line}: missing segment path")]
    MissingSegmentPath { line: usize },
    /// A line that is neither a known tag nor the path of a pending segment.
    #[error("failed to parse {content} at line {line}: invalid line")]
    InvalidLine { content: String, line: usize },
}

impl ParseError {
    /// The 1-based line number where parsing failed.
    pub fn line(&self) -> usize {
        match self {
            ParseError::MissingDeclaration { line }
            | ParseError::MissingFieldValue { line, .. }
            | ParseError::FieldParse { line, .. }
            | ParseError::MissingSegmentPath { line }
            | ParseError::InvalidLine { line, .. } => *line,
        }
    }

    /// The field that caused the error: a tag name, or the raw line for
    /// [`ParseError::InvalidLine`].
    pub fn field(&self) -> &str {
        match self {
            ParseError::MissingDeclaration { .. } => Tag::Declaration.as_str(),
            ParseError::MissingFieldValue { tag, .. } | ParseError::FieldParse { tag, .. } => {
                tag.as_str()
            }
            ParseError::MissingSegmentPath { .. } => Tag::Segment.as_str(),
            ParseError::InvalidLine { content, .. } => content,
        }
    }
}
