//! Generic XML tree with total, panic-free path navigation.
//!
//! The CII mapper does not want to know about XML events; it wants to ask
//! "what is the text at `ExchangedDocument.ID`?" and get an answer or an
//! absence. This module parses XML into an untyped [`Node`] tree and
//! answers exactly those questions.
//!
//! Conventions, shared with the host's XML view:
//! - namespace prefixes are stripped from element and attribute names,
//! - attributes become mapping keys under the `@_` prefix,
//! - mixed text + attribute elements keep their text under `#text`,
//! - the element names in [`ALWAYS_SEQUENCE`] are materialized as
//!   sequences even when they occur once. Other repeatable elements only
//!   become sequences on their second occurrence, so consumers normalize
//!   through [`as_sequence`] at the point of use.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::core::ExtractError;

/// Reserved mapping key holding the text of a mixed text+attribute element.
pub const TEXT_KEY: &str = "#text";

/// Reserved prefix for attribute keys.
pub const ATTR_PREFIX: &str = "@_";

/// Element names that are always materialized as sequences, matching the
/// repeatable CII elements the extractor iterates over.
pub const ALWAYS_SEQUENCE: &[&str] = &[
    "IncludedSupplyChainTradeLineItem",
    "ApplicableTradeTax",
    "SpecifiedTaxRegistration",
    "IncludedNote",
];

/// An untyped XML tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text content of a childless, attribute-less element.
    Scalar(String),
    /// Repeated sibling elements of the same name.
    Sequence(Vec<Node>),
    /// Element with children and/or attributes, keyed by stripped name.
    Mapping(BTreeMap<String, Node>),
}

impl Node {
    /// Parse XML text into a tree. The returned node is a mapping keyed by
    /// the root element name.
    ///
    /// Only syntactically broken XML errors; any well-formed document
    /// parses, whatever its vocabulary.
    pub fn parse(xml: &str) -> Result<Node, ExtractError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        // Index 0 is the synthetic document element collecting the root.
        let mut stack: Vec<PendingElement> = vec![PendingElement::default()];

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    stack.push(PendingElement::open(e));
                }
                Ok(Event::Empty(ref e)) => {
                    let pending = PendingElement::open(e);
                    let name = pending.name.clone();
                    attach(&mut stack, name, pending.finish());
                }
                Ok(Event::Text(ref e)) => {
                    let text = e.unescape().unwrap_or_default();
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&text);
                    }
                }
                Ok(Event::CData(ref e)) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&String::from_utf8_lossy(e));
                    }
                }
                Ok(Event::End(_)) => {
                    if stack.len() < 2 {
                        return Err(ExtractError::Malformed(
                            "unexpected closing tag".into(),
                        ));
                    }
                    if let Some(pending) = stack.pop() {
                        let name = pending.name.clone();
                        attach(&mut stack, name, pending.finish());
                    }
                }
                Ok(Event::Eof) => {
                    if stack.len() > 1 {
                        return Err(ExtractError::Malformed(
                            "unexpected end of input inside element".into(),
                        ));
                    }
                    return Ok(stack.pop().unwrap_or_default().finish());
                }
                Ok(_) => {}
                Err(e) => {
                    return Err(ExtractError::Malformed(format!("XML parse error: {e}")));
                }
            }
        }
    }

    /// Resolve a dotted path, one mapping key per segment.
    ///
    /// Total: any missing key, non-mapping intermediate, or otherwise
    /// unresolvable segment yields `None`, never a panic.
    pub fn get(&self, path: &str) -> Option<&Node> {
        let mut current = self;
        for segment in path.split('.') {
            match current {
                Node::Mapping(map) => current = map.get(segment)?,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Text content of this node: a scalar stringifies to itself, a mixed
    /// mapping to its `#text` entry, everything else to the empty string.
    pub fn text(&self) -> String {
        match self {
            Node::Scalar(s) => s.clone(),
            Node::Mapping(map) => match map.get(TEXT_KEY) {
                Some(Node::Scalar(s)) => s.clone(),
                _ => String::new(),
            },
            Node::Sequence(_) => String::new(),
        }
    }

    /// Resolve a path and stringify the result; absent resolves to the
    /// empty string.
    pub fn text_at(&self, path: &str) -> String {
        self.get(path).map(Node::text).unwrap_or_default()
    }
}

/// Normalize the parser's one-vs-many ambiguity: absent becomes an empty
/// sequence, a bare node a one-element sequence, a sequence itself.
pub fn as_sequence(node: Option<&Node>) -> Vec<&Node> {
    match node {
        None => Vec::new(),
        Some(Node::Sequence(items)) => items.iter().collect(),
        Some(other) => vec![other],
    }
}

/// An element whose closing tag has not been seen yet.
#[derive(Default)]
struct PendingElement {
    name: String,
    attrs: Vec<(String, String)>,
    text: String,
    children: Vec<(String, Node)>,
}

impl PendingElement {
    fn open(e: &quick_xml::events::BytesStart<'_>) -> Self {
        let name = String::from_utf8_lossy(e.name().local_name().as_ref()).into_owned();
        let mut attrs = Vec::new();
        for attr in e.attributes().flatten() {
            // Namespace declarations are not data.
            if attr.key.as_ref().starts_with(b"xmlns") {
                continue;
            }
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map(|v| v.into_owned())
                .unwrap_or_default();
            attrs.push((key, value));
        }
        Self {
            name,
            attrs,
            text: String::new(),
            children: Vec::new(),
        }
    }

    fn finish(self) -> Node {
        if self.attrs.is_empty() && self.children.is_empty() {
            return Node::Scalar(self.text);
        }
        let mut map = BTreeMap::new();
        for (key, value) in self.attrs {
            map.insert(format!("{ATTR_PREFIX}{key}"), Node::Scalar(value));
        }
        if !self.text.is_empty() {
            map.insert(TEXT_KEY.to_string(), Node::Scalar(self.text));
        }
        for (name, child) in self.children {
            insert_child(&mut map, name, child);
        }
        Node::Mapping(map)
    }
}

fn attach(stack: &mut [PendingElement], name: String, node: Node) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push((name, node));
    }
}

fn insert_child(map: &mut BTreeMap<String, Node>, name: String, child: Node) {
    match map.entry(name) {
        Entry::Vacant(slot) => {
            if ALWAYS_SEQUENCE.contains(&slot.key().as_str()) {
                slot.insert(Node::Sequence(vec![child]));
            } else {
                slot.insert(child);
            }
        }
        Entry::Occupied(mut slot) => match slot.get_mut() {
            Node::Sequence(items) => items.push(child),
            existing => {
                let first = std::mem::replace(existing, Node::Sequence(Vec::new()));
                *existing = Node::Sequence(vec![first, child]);
            }
        },
    }
}
