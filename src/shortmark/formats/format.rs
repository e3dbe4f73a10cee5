//! Format trait definition
//!
//! A format converts between text and an element forest in one or both
//! directions. The default methods report the direction as unsupported, so a
//! format only overrides what it can do.

use crate::shortmark::ast::ElementNode;
use crate::shortmark::error::FormatError;

pub trait Format: Send + Sync {
    /// The registry name of this format (e.g. "markup", "ast-json")
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Alternative names the registry resolves to this format
    fn aliases(&self) -> &[&str] {
        &[]
    }

    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → forest)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (forest → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    fn parse(&self, _source: &str) -> Result<Vec<ElementNode>, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    fn serialize(&self, _forest: &[ElementNode]) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
