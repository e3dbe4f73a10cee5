//! Output formats
//!
//! Every format implements the [`Format`] trait and is discoverable through
//! the [`FormatRegistry`]. The two document formats share one tree walker
//! ([`serializer`]) and differ only in their [`Dialect`](serializer::Dialect).
//!
//! | Name                 | Aliases      | Direction  |
//! |----------------------|--------------|------------|
//! | `shortmark`          |              | parse      |
//! | `markup`             | `html`       | serialize  |
//! | `component-template` | `jsx`, `tsx` | serialize  |
//! | `ast-json`           | `json`       | serialize  |
//! | `ast-yaml`           | `yaml`       | serialize  |
//! | `ast-treeviz`        | `treeviz`    | serialize  |

pub mod ast_dump;
pub mod component;
pub mod format;
pub mod markup;
pub mod registry;
pub mod serializer;
pub mod shorthand;
pub mod treeviz;

pub use ast_dump::{AstJsonFormat, AstYamlFormat};
pub use component::{ComponentDialect, ComponentTemplateFormat};
pub use format::Format;
pub use markup::{MarkupDialect, MarkupFormat};
pub use registry::FormatRegistry;
pub use serializer::{serialize_forest, Dialect};
pub use shorthand::ShortmarkFormat;
pub use treeviz::{to_treeviz_str, TreevizFormat};

use crate::shortmark::ast::ElementNode;
use crate::shortmark::error::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two document formats the converter renders to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// HTML-like markup: `class`, `style="..."`, explicit close tags
    #[default]
    #[serde(alias = "html")]
    Markup,
    /// JSX-like component template: `className`, `style={{ ... }}`, self-closing empty tags
    #[serde(alias = "jsx", alias = "tsx")]
    ComponentTemplate,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Markup, OutputFormat::ComponentTemplate];

    /// Registry name of the format.
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Markup => "markup",
            OutputFormat::ComponentTemplate => "component-template",
        }
    }

    pub fn render(&self, forest: &[ElementNode]) -> String {
        match self {
            OutputFormat::Markup => serialize_forest(forest, &MarkupDialect),
            OutputFormat::ComponentTemplate => serialize_forest(forest, &ComponentDialect),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "markup" | "html" => Ok(OutputFormat::Markup),
            "component-template" | "jsx" | "tsx" => Ok(OutputFormat::ComponentTemplate),
            other => Err(FormatError::FormatNotFound(other.to_string())),
        }
    }
}
