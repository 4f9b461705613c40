//! XML data model

use indexmap::IndexMap;

/// XML element with trimmed text and ordered children
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    /// Trimmed direct text; never empty when present
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    /// Creates an empty element named `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds or replaces an attribute
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Sets the text, trimmed
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    /// Appends a child element
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Stores `text` trimmed; blank text clears it
    pub fn set_text(&mut self, text: &str) {
        let trimmed = text.trim();
        self.text = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    /// Trimmed direct text, if any
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// True when there are no attributes, text or children
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.text.is_none() && self.children.is_empty()
    }
}

/// XML name start character (namespaces are not resolved, so `:` passes)
pub(crate) fn is_name_start(ch: char) -> bool {
    ch.is_alphabetic() || matches!(ch, '_' | ':')
}

pub(crate) fn is_name_char(ch: char) -> bool {
    is_name_start(ch) || ch.is_numeric() || matches!(ch, '-' | '.' | '\u{b7}')
}

/// Checks a tag or attribute name before it is written
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(is_name_start) && chars.all(is_name_char)
}
