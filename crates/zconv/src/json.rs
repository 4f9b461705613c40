//! JSON codec (serde_json)

use crate::error::{Error, Result};
use crate::format::Format;
use crate::value::{Object, Value};

/// Parse JSON text; non-mapping roots are wrapped as `{"data": value}`
pub fn from_str(input: &str) -> Result<Object> {
    let value: Value = serde_json::from_str(input).map_err(|err| Error::format(Format::Json, err))?;
    Ok(value.into_document())
}

/// Pretty-print with two-space indentation and a trailing newline
pub fn to_string(value: &Value) -> Result<String> {
    let mut output = serde_json::to_string_pretty(value).map_err(Error::conversion)?;
    output.push('\n');
    Ok(output)
}
