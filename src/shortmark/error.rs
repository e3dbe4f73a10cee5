//! Error types
//!
//! [`ParseError`] is raised by the line grammar; it is the only failure the
//! conversion pipeline has. [`FormatError`] wraps it for the format registry,
//! which can also fail on lookups and capability checks.

use std::fmt;

/// A shorthand line that could not be converted.
///
/// The first offending line aborts the whole conversion. `line` is the source
/// line after tab expansion and trailing-whitespace removal; `line_number` is
/// 1-based and counts blank lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line does not match the line grammar end-to-end
    Syntax { line_number: usize, line: String },
    /// The leading whitespace is not an even-length run of spaces
    Indentation { line_number: usize, line: String },
}

impl ParseError {
    pub fn line(&self) -> &str {
        match self {
            ParseError::Syntax { line, .. } | ParseError::Indentation { line, .. } => line,
        }
    }

    pub fn line_number(&self) -> usize {
        match self {
            ParseError::Syntax { line_number, .. }
            | ParseError::Indentation { line_number, .. } => *line_number,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax { line_number, line } => {
                write!(f, "Invalid syntax on line {}: \"{}\"", line_number, line)
            }
            ParseError::Indentation { line_number, line } => write!(
                f,
                "Invalid indentation (use 2 spaces per level) on line {}: \"{}\"",
                line_number, line
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors raised by the format layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No format registered under this name or alias
    FormatNotFound(String),
    /// The format does not support the requested direction
    NotSupported(String),
    /// The source could not be parsed
    ParseError(ParseError),
    /// The forest could not be written out
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{}' not found", name),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {}", msg),
            FormatError::ParseError(err) => write!(f, "{}", err),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatError::ParseError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for FormatError {
    fn from(err: ParseError) -> Self {
        FormatError::ParseError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_message_contains_line() {
        let err = ParseError::Syntax {
            line_number: 3,
            line: "<div> [broken".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid syntax on line 3: \"<div> [broken\""
        );
        assert_eq!(err.line(), "<div> [broken");
        assert_eq!(err.line_number(), 3);
    }

    #[test]
    fn test_indentation_error_message_contains_line() {
        let err = ParseError::Indentation {
            line_number: 2,
            line: "   <p> x".to_string(),
        };
        assert!(err.to_string().contains("\"   <p> x\""));
        assert!(err.to_string().starts_with("Invalid indentation"));
    }

    #[test]
    fn test_format_error_wraps_parse_error() {
        let parse = ParseError::Syntax {
            line_number: 1,
            line: "oops".to_string(),
        };
        let err = FormatError::from(parse.clone());
        assert_eq!(err.to_string(), parse.to_string());
        assert!(std::error::Error::source(&err).is_some());
    }
}
