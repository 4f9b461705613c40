//! YAML codec (serde_yaml), single document with plain scalars

use crate::error::{Error, Result};
use crate::format::Format;
use crate::value::{Object, Value};

/// Parse one YAML document; non-mapping roots are wrapped as `{"data": value}`
pub fn from_str(input: &str) -> Result<Object> {
    let value: Value = serde_yaml::from_str(input).map_err(|err| Error::format(Format::Yaml, err))?;
    Ok(value.into_document())
}

/// Serialize as a single YAML document
pub fn to_string(value: &Value) -> Result<String> {
    serde_yaml::to_string(value).map_err(Error::conversion)
}
