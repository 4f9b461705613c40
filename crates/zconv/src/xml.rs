//! XML codec: element trees and their mapping onto [`Value`](crate::Value)

pub mod mapping;
pub mod model;
pub mod reader;
pub mod writer;

pub use mapping::{document_to_value, element_to_value, value_to_document, value_to_element};
pub use model::Element;
pub use reader::parse_element;
pub use writer::write_element;

use crate::error::Result;
use crate::value::{Object, Value};

/// Default name of the synthetic document root
pub const DEFAULT_ROOT_NAME: &str = "root";
/// Default tag for sequence items
pub const DEFAULT_ITEM_NAME: &str = "item";

/// Configuration for the XML codec
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Root element used when a value has no single root key
    pub root_name: String,
    /// Element name written for each sequence item
    pub item_name: String,
    /// Spaces per nesting level in written documents
    pub indent: usize,
    /// Read `true`/`false` and plain numbers as typed scalars
    pub typed_scalars: bool,
    /// Read elements whose children are all `item_name` as sequences
    pub item_lists: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_name: DEFAULT_ROOT_NAME.to_string(),
            item_name: DEFAULT_ITEM_NAME.to_string(),
            indent: 2,
            typed_scalars: false,
            item_lists: false,
        }
    }
}

impl Config {
    /// Same as [`Config::default`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads back what the writer produces: typed scalars and item lists on
    pub fn lossless() -> Self {
        Self {
            typed_scalars: true,
            item_lists: true,
            ..Self::default()
        }
    }

    /// Sets the synthetic root element name
    #[must_use]
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    /// Sets the tag written for sequence items
    #[must_use]
    pub fn with_item_name(mut self, name: impl Into<String>) -> Self {
        self.item_name = name.into();
        self
    }

    #[must_use]
    pub const fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub const fn with_typed_scalars(mut self, enabled: bool) -> Self {
        self.typed_scalars = enabled;
        self
    }

    #[must_use]
    pub const fn with_item_lists(mut self, enabled: bool) -> Self {
        self.item_lists = enabled;
        self
    }
}

/// Parse an XML document into its mapping-shaped value
pub fn from_str(input: &str, config: &Config) -> Result<Object> {
    let root = parse_element(input)?;
    Ok(document_to_value(&root, config))
}

/// Serialize a value as an XML document
pub fn to_string(value: &Value, config: &Config) -> Result<String> {
    let root = value_to_document(value, config)?;
    write_element(&root, config.indent)
}
