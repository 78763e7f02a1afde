//! `BEGIN`/`END` blocks and the [`Encode`] capability shared by every
//! document element.

use crate::event::Event;
use crate::property::Property;

/// Anything that renders itself as iCalendar text.
///
/// Implementations return complete lines, each terminated by `\n`, or an
/// empty string when they contribute nothing.
pub trait Encode {
    fn encode(&self) -> String;
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self) -> String {
        (**self).encode()
    }
}

/// Component names this crate knows how to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionName {
    Calendar,
    Event,
}

impl SectionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionName::Calendar => "VCALENDAR",
            SectionName::Event => "VEVENT",
        }
    }
}

impl std::fmt::Display for SectionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A child stored inside a [`Section`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Property(Property),
    Section(Section),
    Event(Event),
}

impl Encode for Node {
    fn encode(&self) -> String {
        match self {
            Node::Property(property) => property.encode(),
            Node::Section(section) => section.encode(),
            Node::Event(event) => event.encode(),
        }
    }
}

impl From<Property> for Node {
    fn from(property: Property) -> Self {
        Node::Property(property)
    }
}

impl From<Section> for Node {
    fn from(section: Section) -> Self {
        Node::Section(section)
    }
}

impl From<Event> for Node {
    fn from(event: Event) -> Self {
        Node::Event(event)
    }
}

/// A named block of properties followed by nested children.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    name: SectionName,
    properties: Vec<Property>,
    children: Vec<Node>,
}

impl Section {
    pub fn new(name: SectionName, properties: Vec<Property>) -> Self {
        Self {
            name,
            properties,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn name(&self) -> SectionName {
        self.name
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Encode the block, emitting `extra` after the section's own children.
    ///
    /// Output is `BEGIN:<name>`, the properties, own children, `extra`, then
    /// `END:<name>`, concatenated with no separators of its own.
    pub fn encode_with<E: Encode>(&self, extra: &[E]) -> String {
        let mut out = String::new();
        out.push_str(&Property::new("BEGIN", self.name.as_str()).encode());
        for property in &self.properties {
            out.push_str(&property.encode());
        }
        for child in &self.children {
            out.push_str(&child.encode());
        }
        for child in extra {
            out.push_str(&child.encode());
        }
        out.push_str(&Property::new("END", self.name.as_str()).encode());
        out
    }
}

impl Encode for Section {
    fn encode(&self) -> String {
        self.encode_with::<Node>(&[])
    }
}
