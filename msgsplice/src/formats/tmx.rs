//! TMX (Translation Memory eXchange) document trees.
//!
//! Documents are parsed into a small generic element tree so translation
//! units can be looked up by `tuid` and re-serialized without losing
//! attributes or formatting text. Comments, processing instructions, and
//! the doctype are dropped.

use std::io::{BufRead, Write};

use quick_xml::{
    Reader, Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::{error::Error, traits::Parser};

/// A parsed XML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
}

/// An element with its attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

/// One child node: a nested element or a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Element {
    fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Value of the attribute `name`, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Direct child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// First direct child element called `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|element| element.name == name)
    }

    /// All descendant elements called `name`, in document order.
    pub fn descendants<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        collect_descendants(self, name, &mut found);
        found
    }
}

fn collect_descendants<'a>(element: &'a Element, name: &str, found: &mut Vec<&'a Element>) {
    for child in element.child_elements() {
        if child.name == name {
            found.push(child);
        }
        collect_descendants(child, name, found);
    }
}

impl Document {
    /// Mutable direct `tu` child of the root's `body` with matching `tuid`.
    pub fn find_unit_mut(&mut self, tuid: &str) -> Option<&mut Element> {
        let body = self.root.children.iter_mut().find_map(|node| match node {
            Node::Element(element) if element.name == "body" => Some(element),
            _ => None,
        })?;
        body.children.iter_mut().find_map(|node| match node {
            Node::Element(element)
                if element.name == "tu" && element.attribute("tuid") == Some(tuid) =>
            {
                Some(element)
            }
            _ => None,
        })
    }

    /// Appends the children of every unit of `other` whose `tuid` already
    /// exists here onto the existing unit; units with no match are dropped.
    pub fn absorb_units(&mut self, other: &Document) -> Result<(), Error> {
        for unit in other.root.descendants("tu") {
            let tuid = unit.attribute("tuid").ok_or_else(|| {
                Error::DataMismatch("tu element missing tuid attribute".to_string())
            })?;
            if let Some(target) = self.find_unit_mut(tuid) {
                target.children.extend(unit.children.iter().cloned());
            }
        }
        Ok(())
    }
}

impl Parser for Document {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut xml_reader = Reader::from_reader(reader);

        let mut buf = Vec::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    stack.push(element_from_start(e)?);
                }
                Ok(Event::Empty(ref e)) => {
                    let element = element_from_start(e)?;
                    place(&mut stack, &mut root, Node::Element(element))?;
                }
                Ok(Event::Text(e)) => {
                    let text = e.unescape().map_err(Error::XmlParse)?.to_string();
                    place(&mut stack, &mut root, Node::Text(text))?;
                }
                Ok(Event::CData(e)) => {
                    let text = String::from_utf8_lossy(&e.into_inner()).to_string();
                    place(&mut stack, &mut root, Node::Text(text))?;
                }
                Ok(Event::End(_)) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| Error::InvalidDocument("unbalanced end tag".to_string()))?;
                    place(&mut stack, &mut root, Node::Element(element))?;
                }
                Ok(Event::Eof) => break,
                // Declarations, comments, doctype, and processing
                // instructions are dropped.
                Ok(_) => {}
                Err(e) => return Err(Error::XmlParse(e)),
            }
            buf.clear();
        }

        match root {
            Some(root) => Ok(Document { root }),
            None => Err(Error::InvalidDocument("no root element".to_string())),
        }
    }

    /// Write to any writer (file, memory, etc.) as UTF-8 XML text.
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut xml_writer = Writer::new(&mut writer);
        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
        write_element(&mut xml_writer, &self.root)?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
        Ok(())
    }
}

fn element_from_start(e: &BytesStart<'_>) -> Result<Element, Error> {
    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
    let mut element = Element::new(name);
    for attr in e.attributes().with_checks(false) {
        let attr = attr.map_err(|err| Error::DataMismatch(err.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr.unescape_value()?.to_string();
        element.attributes.push((key, value));
    }
    Ok(element)
}

// A finished node lands in the open parent, or becomes the root when the
// stack is empty. Text outside the root is dropped.
fn place(stack: &mut Vec<Element>, root: &mut Option<Element>, node: Node) -> Result<(), Error> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        return Ok(());
    }
    match node {
        Node::Element(element) => {
            if root.is_some() {
                return Err(Error::InvalidDocument("multiple root elements".to_string()));
            }
            *root = Some(element);
            Ok(())
        }
        Node::Text(_) => Ok(()),
    }
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<(), Error> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    if element.children.is_empty() {
        xml_write(writer, Event::Empty(start))?;
        return Ok(());
    }
    xml_write(writer, Event::Start(start))?;
    for child in &element.children {
        match child {
            Node::Element(nested) => write_element(writer, nested)?,
            Node::Text(text) => xml_write(writer, Event::Text(BytesText::new(text)))?,
        }
    }
    xml_write(writer, Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}

fn xml_write<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), Error> {
    writer.write_event(event)?;
    Ok(())
}
