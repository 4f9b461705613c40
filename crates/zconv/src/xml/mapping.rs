//! Mapping between XML element trees and [`Value`].
//!
//! Reading folds each element into its parent's mapping:
//!
//! - attributes become `@name` keys;
//! - text becomes a bare scalar when the element has nothing else, otherwise
//!   a `#text` key;
//! - children are grouped by tag in first-seen order, and repeated tags
//!   become an array;
//! - a mapping left with a single plain child key (no attributes, value not
//!   an array) is replaced by that value, so pass-through wrappers vanish;
//! - an element with no content at all is `Null`.
//!
//! The collapse is lossy: wrapper tag names below the collapse point are not
//! recoverable, and sequence items are always written back under
//! [`Config::item_name`].
//!
//! Repeated tags read as `{tag: [..]}`, and writing that array nests it in
//! one more `item` wrapper (`<tag><item><item>..</item></item></tag>`). The
//! wrapper collapses on the next read, so the value settles while the XML
//! text of a rewritten document does not.
//!
//! Writing is the inverse walk: `@name` keys are attributes, `#text` is text,
//! other keys are child elements and array items become `item` children.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::value::{Object, Value};
use crate::xml::model::{is_valid_name, Element};
use crate::xml::Config;

/// Key holding text that coexists with attributes or children
pub const TEXT_KEY: &str = "#text";
/// Prefix marking attribute keys
pub const ATTRIBUTE_PREFIX: char = '@';

/// Convert one element (and its subtree) into a value.
pub fn element_to_value(element: &Element, config: &Config) -> Value {
    if config.item_lists && is_item_list(element, &config.item_name) {
        return element
            .children
            .iter()
            .map(|child| element_to_value(child, config))
            .collect::<Vec<_>>()
            .into();
    }

    let mut result = Object::new();
    for (name, value) in &element.attributes {
        result.insert(format!("{ATTRIBUTE_PREFIX}{name}"), scalar(value, config));
    }

    if let Some(text) = element.text() {
        if element.children.is_empty() && element.attributes.is_empty() {
            return scalar(text, config);
        }
        result.insert(TEXT_KEY, scalar(text, config));
    }

    let mut groups: IndexMap<&str, Vec<Value>> = IndexMap::new();
    for child in &element.children {
        groups
            .entry(child.name.as_str())
            .or_default()
            .push(element_to_value(child, config));
    }
    for (name, values) in groups {
        let value = match <[Value; 1]>::try_from(values) {
            Ok([single]) => single,
            Err(values) => Value::from(values),
        };
        result.insert(name, value);
    }

    if result.is_empty() {
        return Value::Null;
    }
    if element.attributes.is_empty() && is_pass_through(&result) {
        if let Some((_, value)) = result.into_iter().next() {
            return value;
        }
        return Value::Null;
    }
    Value::Object(result)
}

/// Convert a document root, keeping its tag as the only top-level key
pub fn document_to_value(root: &Element, config: &Config) -> Object {
    let value = element_to_value(root, config);
    if root.name.is_empty() {
        return value.into_document();
    }
    let mut document = Object::with_capacity(1);
    document.insert(root.name.clone(), value);
    document
}

/// Build an element named `name` from `value`.
///
/// Fails when a tag or attribute name is not a valid XML name, or when an
/// attribute key holds an array or mapping.
pub fn value_to_element(name: &str, value: &Value, config: &Config) -> Result<Element> {
    ensure_name(name)?;
    let mut element = Element::new(name);

    match value {
        Value::Object(obj) => {
            for (key, value) in obj {
                if let Some(attribute) = key.strip_prefix(ATTRIBUTE_PREFIX) {
                    ensure_name(attribute)?;
                    let text = value.to_text().ok_or_else(|| {
                        Error::conversion(format!("attribute `{key}` must hold a scalar"))
                    })?;
                    element.attributes.insert(attribute.to_string(), text);
                } else if key == TEXT_KEY {
                    let text = value.to_text().ok_or_else(|| {
                        Error::conversion(format!("`{TEXT_KEY}` must hold a scalar"))
                    })?;
                    element.set_text(&text);
                } else {
                    element
                        .children
                        .push(value_to_element(key, value, config)?);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                element
                    .children
                    .push(value_to_element(&config.item_name, item, config)?);
            }
        }
        other => {
            if let Some(text) = other.to_text() {
                element.set_text(&text);
            }
        }
    }

    Ok(element)
}

/// Build the document root for `value`.
///
/// A mapping with exactly one plain key is an unwrapped root (the shape
/// [`document_to_value`] produces) and becomes that element. Anything else
/// goes under [`Config::root_name`], one child per top-level entry.
pub fn value_to_document(value: &Value, config: &Config) -> Result<Element> {
    if let Value::Object(obj) = value {
        if obj.len() == 1 {
            if let Some((key, inner)) = obj.first() {
                if is_plain_key(key) {
                    return value_to_element(key, inner, config);
                }
            }
        }
    }
    value_to_element(&config.root_name, value, config)
}

fn is_plain_key(key: &str) -> bool {
    key != TEXT_KEY && !key.starts_with(ATTRIBUTE_PREFIX)
}

fn is_pass_through(result: &Object) -> bool {
    result.len() == 1
        && result
            .first()
            .is_some_and(|(key, value)| is_plain_key(key) && !value.is_array())
}

fn is_item_list(element: &Element, item_name: &str) -> bool {
    element.attributes.is_empty()
        && element.text.is_none()
        && !element.children.is_empty()
        && element.children.iter().all(|child| child.name == item_name)
}

fn ensure_name(name: &str) -> Result<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(Error::conversion(format!("`{name}` is not a valid XML name")))
    }
}

fn scalar(text: &str, config: &Config) -> Value {
    if config.typed_scalars {
        typed_scalar(text)
    } else {
        Value::from(text)
    }
}

/// `true`/`false` and plain decimal numbers; everything else stays a string.
///
/// Integers with leading zeros (`007`) keep their text.
fn typed_scalar(text: &str) -> Value {
    match text {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    let digits = text.strip_prefix(&['-', '+'][..]).unwrap_or(text);
    let looks_numeric = digits.starts_with(|c: char| c.is_ascii_digit())
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '-' | '+'));
    let leading_zero = digits.len() > 1
        && digits.starts_with('0')
        && digits.chars().nth(1).is_some_and(|c| c.is_ascii_digit());

    if looks_numeric && !leading_zero {
        if let Ok(n) = text.parse::<f64>() {
            if n.is_finite() {
                return Value::Number(n);
            }
        }
    }
    Value::from(text)
}
