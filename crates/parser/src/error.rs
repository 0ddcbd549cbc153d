//! Syntax error and source location types.
//!
//! The lexer and the bytecode compiler share a single error taxon: a message
//! paired with the 1-indexed source position it was raised at.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A 1-indexed (line, column) position, counted in bytes of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(line: u32, column: u32) -> Self {
        SourceLocation { line, column }
    }
}

impl Default for SourceLocation {
    /// The start of the source.
    fn default() -> Self {
        SourceLocation { line: 1, column: 1 }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A lexical or syntactic error, reported at the first position that made the
/// input unacceptable. The first error wins; nothing is reported past it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{location}: syntax error: {message}")]
pub struct SyntaxError {
    pub message: String,
    pub location: SourceLocation,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, location: SourceLocation) -> Self {
        SyntaxError {
            message: message.into(),
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SyntaxError::new("Unexpected character", SourceLocation::new(3, 14));
        assert_eq!(err.to_string(), "3:14: syntax error: Unexpected character");
    }
}
