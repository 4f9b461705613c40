//! zconv - convert documents between JSON, YAML and XML
//!
//! Every format is parsed into one [`Value`] and written back out from it.
//! JSON and YAML map onto values structurally; XML goes through the rules in
//! [`xml::mapping`].
//!
//! # Quick Start
//!
//! ```
//! use zconv::{convert_str, Format};
//! # fn main() -> Result<(), zconv::Error> {
//! let json = convert_str("<a id=\"7\">hi</a>", Format::Xml, Format::Json)?;
//! assert!(json.contains("\"@id\": \"7\""));
//! assert!(json.contains("\"#text\": \"hi\""));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Result};

pub mod format;
pub use format::{detect_format_from_path, Format};

pub mod value;
pub use value::{Array, Object, Value};

pub mod fs;
pub mod json;
pub mod xml;
pub mod yaml;
pub use xml::{Config as XmlConfig, Element as XmlElement};

pub mod convert;
pub use convert::{
    convert, convert_str, convert_str_with_options, convert_with_options, load, parse_str, save,
    to_string, ConvertOptions,
};

pub mod info;
pub use info::{inspect, inspect_with_options, validate, FileInfo};

/// Parse JSON from string
pub fn from_json_str(s: &str) -> Result<Object> {
    json::from_str(s)
}

/// Parse YAML from string
pub fn from_yaml_str(s: &str) -> Result<Object> {
    yaml::from_str(s)
}

/// Parse XML from string with the default mapping
pub fn from_xml_str(s: &str) -> Result<Object> {
    xml::from_str(s, &XmlConfig::default())
}
