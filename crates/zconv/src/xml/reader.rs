//! XML text to element tree (quick-xml)

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};
use crate::format::Format;
use crate::xml::model::Element;

/// Element under construction; direct text arrives in segments
#[derive(Debug)]
struct OpenElement {
    element: Element,
    text: Vec<String>,
}

impl OpenElement {
    fn from_start(start: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<Self> {
        let qname = start.name();
        let name = std::str::from_utf8(qname.as_ref())
            .map_err(|_| error_at(reader, "invalid utf-8 in element name"))?;
        let mut element = Element::new(name);

        for attr in start.attributes() {
            let attr = attr.map_err(|err| error_at(reader, err))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|_| error_at(reader, "invalid utf-8 in attribute name"))?;
            let value = attr.unescape_value().map_err(|err| error_at(reader, err))?;
            element.attributes.insert(key.to_string(), value.into_owned());
        }

        Ok(Self {
            element,
            text: Vec::new(),
        })
    }

    fn finish(mut self) -> Element {
        let text = self
            .text
            .iter()
            .map(|segment| segment.trim())
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        self.element.set_text(&text);
        self.element
    }
}

/// Parse a document with exactly one root element.
///
/// Declarations, comments, processing instructions and the doctype are
/// skipped. Text interrupted by child elements is joined with single spaces.
pub fn parse_element(input: &str) -> Result<Element> {
    let mut reader = Reader::from_str(input);
    reader.trim_text(true);

    let mut stack: Vec<OpenElement> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|err| error_at(&reader, err))?;
        match event {
            Event::Start(start) => {
                ensure_single_root(&stack, root.as_ref(), &reader)?;
                stack.push(OpenElement::from_start(&start, &reader)?);
            }
            Event::Empty(start) => {
                ensure_single_root(&stack, root.as_ref(), &reader)?;
                let element = OpenElement::from_start(&start, &reader)?.finish();
                attach(&mut stack, &mut root, element);
            }
            Event::End(_) => {
                let open = stack
                    .pop()
                    .ok_or_else(|| error_at(&reader, "unexpected closing tag"))?;
                attach(&mut stack, &mut root, open.finish());
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(|err| error_at(&reader, err))?;
                push_text(&mut stack, &text, &reader)?;
            }
            Event::CData(cdata) => {
                let raw = cdata.into_inner();
                let text = std::str::from_utf8(&raw)
                    .map_err(|_| error_at(&reader, "invalid utf-8 in cdata"))?;
                push_text(&mut stack, text, &reader)?;
            }
            Event::Eof => break,
            // declaration, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(error_at(
            &reader,
            format!("unclosed element <{}>", open.element.name),
        ));
    }

    root.ok_or_else(|| error_at(&reader, "document has no root element"))
}

fn ensure_single_root(
    stack: &[OpenElement],
    root: Option<&Element>,
    reader: &Reader<&[u8]>,
) -> Result<()> {
    if stack.is_empty() && root.is_some() {
        Err(error_at(reader, "multiple root elements"))
    } else {
        Ok(())
    }
}

fn attach(stack: &mut [OpenElement], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.element.children.push(element),
        None => *root = Some(element),
    }
}

fn push_text(stack: &mut [OpenElement], text: &str, reader: &Reader<&[u8]>) -> Result<()> {
    match stack.last_mut() {
        Some(open) => {
            open.text.push(text.to_string());
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(error_at(reader, "text outside the root element")),
    }
}

fn error_at(reader: &Reader<&[u8]>, message: impl std::fmt::Display) -> Error {
    Error::format(
        Format::Xml,
        format!("{message} (at byte {})", reader.buffer_position()),
    )
}
