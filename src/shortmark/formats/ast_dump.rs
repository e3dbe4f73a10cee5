//! Structured dumps of the element forest (`ast-json`, `ast-yaml`)
//!
//! Both serialize the [`ElementSnapshot`](crate::shortmark::ast::ElementSnapshot)
//! list of the forest, keeping attribute and style order.

use crate::shortmark::ast::{snapshot_from_forest, ElementNode};
use crate::shortmark::error::FormatError;
use crate::shortmark::formats::format::Format;

#[derive(Debug, Clone, Copy, Default)]
pub struct AstJsonFormat;

impl Format for AstJsonFormat {
    fn name(&self) -> &str {
        "ast-json"
    }

    fn description(&self) -> &str {
        "Element tree as pretty-printed JSON"
    }

    fn aliases(&self) -> &[&str] {
        &["json"]
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, forest: &[ElementNode]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&snapshot_from_forest(forest))
            .map_err(|e| FormatError::SerializationError(format!("JSON: {}", e)))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AstYamlFormat;

impl Format for AstYamlFormat {
    fn name(&self) -> &str {
        "ast-yaml"
    }

    fn description(&self) -> &str {
        "Element tree as YAML"
    }

    fn aliases(&self) -> &[&str] {
        &["yaml"]
    }

    fn file_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, forest: &[ElementNode]) -> Result<String, FormatError> {
        serde_yaml::to_string(&snapshot_from_forest(forest))
            .map_err(|e| FormatError::SerializationError(format!("YAML: {}", e)))
    }
}
