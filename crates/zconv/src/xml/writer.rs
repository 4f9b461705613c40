//! Element tree to XML text (quick-xml)

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Error, Result};
use crate::xml::model::Element;

/// Serialize `root` as a UTF-8 document with an XML declaration.
///
/// Nesting is indented by `indent` spaces; `0` writes everything on one
/// line. Elements without text or children self-close.
pub fn write_element(root: &Element, indent: usize) -> Result<String> {
    let mut writer = if indent == 0 {
        Writer::new(Vec::new())
    } else {
        Writer::new_with_indent(Vec::new(), b' ', indent)
    };

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(Error::conversion)?;
    write_node(&mut writer, root)?;

    let mut output = writer.into_inner();
    output.push(b'\n');
    String::from_utf8(output).map_err(Error::conversion)
}

fn write_node<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.text.is_none() && element.children.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(Error::conversion);
    }

    writer
        .write_event(Event::Start(start))
        .map_err(Error::conversion)?;
    if let Some(text) = element.text() {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(Error::conversion)?;
    }
    for child in &element.children {
        write_node(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(Error::conversion)
}
