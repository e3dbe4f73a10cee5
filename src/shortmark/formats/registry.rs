//! Format registry for format discovery and selection
//!
//! Formats are registered under their name and their aliases, and retrieved
//! by either.

use crate::shortmark::ast::ElementNode;
use crate::shortmark::error::FormatError;
use crate::shortmark::formats::format::Format;
use log::debug;
use std::collections::HashMap;

/// Registry of formats
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let html = registry.convert(source, "shortmark", "markup")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
    aliases: HashMap<String, String>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        let name = format.name().to_string();
        for alias in format.aliases() {
            self.aliases.insert(alias.to_string(), name.clone());
        }
        self.formats.insert(name, Box::new(format));
    }

    /// Get a format by name or alias
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        let canonical = self.aliases.get(name).map(String::as_str).unwrap_or(name);
        self.formats
            .get(canonical)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// List all registered format names (sorted, aliases excluded)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// All registered formats, sorted by name
    pub fn formats(&self) -> Vec<&dyn Format> {
        let mut formats: Vec<&dyn Format> = self.formats.values().map(|f| f.as_ref()).collect();
        formats.sort_by(|a, b| a.name().cmp(b.name()));
        formats
    }

    /// Parse source text using the specified format
    pub fn parse(&self, source: &str, format: &str) -> Result<Vec<ElementNode>, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support parsing",
                format
            )));
        }
        fmt.parse(source)
    }

    /// Serialize a forest using the specified format
    pub fn serialize(&self, forest: &[ElementNode], format: &str) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support serialization",
                format
            )));
        }
        fmt.serialize(forest)
    }

    /// Parse with `from`, then serialize with `to`
    ///
    /// Both formats are resolved before any parsing happens.
    pub fn convert(&self, source: &str, from: &str, to: &str) -> Result<String, FormatError> {
        let target = self.get(to)?;
        if !target.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support serialization",
                to
            )));
        }
        debug!("converting {} bytes from {} to {}", source.len(), from, target.name());
        let forest = self.parse(source, from)?;
        target.serialize(&forest)
    }

    /// Create a registry with the built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::shortmark::formats::shorthand::ShortmarkFormat);
        registry.register(crate::shortmark::formats::markup::MarkupFormat);
        registry.register(crate::shortmark::formats::component::ComponentTemplateFormat);
        registry.register(crate::shortmark::formats::ast_dump::AstJsonFormat);
        registry.register(crate::shortmark::formats::ast_dump::AstYamlFormat);
        registry.register(crate::shortmark::formats::treeviz::TreevizFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
