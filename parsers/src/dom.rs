// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A small, immutable DOM for the subset of XML the API speaks.
//!
//! The API never qualifies its element names with a namespace, so names are
//! kept as plain strings and compared verbatim.

use std::collections::BTreeMap;
use std::str::FromStr;

use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesRef, BytesStart, Event};
use quick_xml::Reader;

use crate::error::Error;

/// A node in an element's content.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A child element.
    Element(Element),

    /// Character data, with references already resolved.
    Text(String),
}

/// An XML element along with its attributes and content.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: BTreeMap<String, String>,
    nodes: Vec<Node>,
}

impl Element {
    /// Create an element without any attribute or content.
    pub fn bare<S: Into<String>>(name: S) -> Element {
        Element {
            name: name.into(),
            attributes: BTreeMap::new(),
            nodes: Vec::new(),
        }
    }

    /// The name of this element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this element is named `name`.
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Get the value of an attribute, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Iterate over all attributes, ordered by name.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Iterate over every node of this element, text included.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Iterate over the child elements, in document order.
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Element(elem) => Some(elem),
            Node::Text(_) => None,
        })
    }

    /// Iterate over the child elements named `name`, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children().filter(move |child| child.is(name))
    }

    /// Get the first child element named `name`.
    pub fn get_child(&self, name: &str) -> Option<&Element> {
        self.children().find(|child| child.is(name))
    }

    /// Whether a child element named `name` exists.
    pub fn has_child(&self, name: &str) -> bool {
        self.get_child(name).is_some()
    }

    /// The concatenated character data directly contained in this element.
    pub fn text(&self) -> String {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// The text of the first child element named `name`, if such a child
    /// exists.
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.get_child(name).map(Element::text)
    }

    /// Remove the first child element named `name` and return it.
    pub fn remove_child(&mut self, name: &str) -> Option<Element> {
        let index = self
            .nodes
            .iter()
            .position(|node| matches!(node, Node::Element(elem) if elem.is(name)))?;
        match self.nodes.remove(index) {
            Node::Element(elem) => Some(elem),
            Node::Text(_) => None,
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(Node::Text(last)) = self.nodes.last_mut() {
            last.push_str(text);
        } else {
            self.nodes.push(Node::Text(text.to_owned()));
        }
    }

    fn from_start(start: &BytesStart, decoder: Decoder) -> Result<Element, Error> {
        let qname = start.name();
        let name = decoder
            .decode(qname.as_ref())
            .map_err(quick_xml::Error::from)?
            .into_owned();
        let mut elem = Element::bare(name);
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = decoder
                .decode(attr.key.as_ref())
                .map_err(quick_xml::Error::from)?
                .into_owned();
            let value = attr.decode_and_unescape_value(decoder)?.into_owned();
            if elem.attributes.insert(key, value).is_some() {
                return Err(Error::Other("Attribute present twice on the same element."));
            }
        }
        Ok(elem)
    }
}

fn resolve_reference(reference: &BytesRef) -> Result<String, Error> {
    if let Some(ch) = reference.resolve_char_ref()? {
        return Ok(ch.to_string());
    }
    let name = reference.decode().map_err(quick_xml::Error::from)?;
    match quick_xml::escape::resolve_predefined_entity(&name) {
        Some(text) => Ok(text.to_owned()),
        None => Err(Error::Other("Unknown entity reference.")),
    }
}

struct TreeBuilder {
    stack: Vec<Element>,
    root: Option<Element>,
}

impl TreeBuilder {
    fn close(&mut self, elem: Element) -> Result<(), Error> {
        match self.stack.last_mut() {
            Some(parent) => parent.nodes.push(Node::Element(elem)),
            None if self.root.is_some() => {
                return Err(Error::Other("More than one root element."));
            }
            None => self.root = Some(elem),
        }
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<(), Error> {
        match self.stack.last_mut() {
            Some(parent) => parent.push_text(text),
            None if text.trim().is_empty() => (),
            None => return Err(Error::Other("Text found outside of the root element.")),
        }
        Ok(())
    }
}

impl FromStr for Element {
    type Err = Error;

    fn from_str(s: &str) -> Result<Element, Error> {
        let mut reader = Reader::from_str(s);
        let decoder = reader.decoder();
        let mut builder = TreeBuilder {
            stack: Vec::new(),
            root: None,
        };

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    let elem = Element::from_start(&start, decoder)?;
                    builder.stack.push(elem);
                }
                Event::Empty(start) => {
                    let elem = Element::from_start(&start, decoder)?;
                    builder.close(elem)?;
                }
                Event::End(_) => {
                    let elem = builder
                        .stack
                        .pop()
                        .ok_or(Error::Other("Unbalanced end tag."))?;
                    builder.close(elem)?;
                }
                Event::Text(text) => {
                    let text = text.xml10_content().map_err(quick_xml::Error::from)?;
                    builder.text(&text)?;
                }
                Event::CData(data) => {
                    let text = data.decode().map_err(quick_xml::Error::from)?;
                    builder.text(&text)?;
                }
                Event::GeneralRef(reference) => {
                    let text = resolve_reference(&reference)?;
                    builder.text(&text)?;
                }
                Event::Eof => break,
                Event::Decl(_) | Event::PI(_) | Event::Comment(_) | Event::DocType(_) => (),
            }
        }

        if !builder.stack.is_empty() {
            return Err(Error::Other("Document ended before the root element closed."));
        }
        builder.root.ok_or(Error::Other("Document has no root element."))
    }
}
