//! Format conversion: load into a [`Value`], save from it

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::format::Format;
use crate::fs::{read_document, write_atomic};
use crate::value::{Object, Value};
use crate::{json, xml, yaml};

/// Conversion options per format
#[derive(Clone, Debug, Default)]
pub struct ConvertOptions {
    pub xml: xml::Config,
}

impl ConvertOptions {
    /// Options with a custom XML configuration
    pub fn with_xml(xml: xml::Config) -> Self {
        Self { xml }
    }
}

/// Parse an in-memory document of `format`
pub fn parse_str(input: &str, format: Format, options: &ConvertOptions) -> Result<Object> {
    debug!(%format, bytes = input.len(), "parsing document");
    match format {
        Format::Json => json::from_str(input),
        Format::Yaml => yaml::from_str(input),
        Format::Xml => xml::from_str(input, &options.xml),
    }
}

/// Serialize `value` as `format`
pub fn to_string(value: &Value, format: Format, options: &ConvertOptions) -> Result<String> {
    debug!(%format, "serializing document");
    match format {
        Format::Json => json::to_string(value),
        Format::Yaml => yaml::to_string(value),
        Format::Xml => xml::to_string(value, &options.xml),
    }
}

/// Convert between formats in memory
pub fn convert_str(input: &str, from: Format, to: Format) -> Result<String> {
    convert_str_with_options(input, from, to, &ConvertOptions::default())
}

/// Convert between formats in memory with options
pub fn convert_str_with_options(
    input: &str,
    from: Format,
    to: Format,
    options: &ConvertOptions,
) -> Result<String> {
    let document = parse_str(input, from, options)?;
    to_string(&Value::Object(document), to, options)
}

/// Load the file at `path` as `format`.
///
/// Format and conversion errors name the offending path.
pub fn load(path: &Path, format: Format, options: &ConvertOptions) -> Result<Object> {
    let input = read_document(path, format)?;
    let document = parse_str(&input, format, options).map_err(|err| err.in_document(path))?;
    info!(path = %path.display(), %format, keys = document.len(), "loaded document");
    Ok(document)
}

/// Save `value` to `path` as `format`.
///
/// The output is fully serialized before the destination is touched, and
/// then replaced atomically.
pub fn save(value: &Value, path: &Path, format: Format, options: &ConvertOptions) -> Result<()> {
    let output = to_string(value, format, options).map_err(|err| err.in_document(path))?;
    write_atomic(path, output.as_bytes())?;
    info!(path = %path.display(), %format, bytes = output.len(), "saved document");
    Ok(())
}

/// Convert `input` into `output` as `to`.
///
/// The input format comes from the extension alone; an unknown extension
/// fails before any file is opened.
pub fn convert(input: &Path, output: &Path, to: Format) -> Result<()> {
    convert_with_options(input, output, to, &ConvertOptions::default())
}

/// Convert a file with options
#[instrument(skip_all, fields(input = %input.display(), output = %output.display(), %to))]
pub fn convert_with_options(
    input: &Path,
    output: &Path,
    to: Format,
    options: &ConvertOptions,
) -> Result<()> {
    let from = Format::from_path(input)?;
    debug!(%from, %to, "detected input format");
    let document = load(input, from, options)?;
    save(&Value::Object(document), output, to, options)
}
