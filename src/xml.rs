//! Minimal XML element tree with a pretty printer
//!
//! The serializer builds an owned element tree and writes it straight to
//! tab-indented text in one pass. No `<?xml ?>` declaration is emitted;
//! the consuming find/replace tool expects the document to start at the
//! root element.
//!
//! Formatting rules:
//! - one tab per nesting level
//! - an element with no children renders self-closing (`<Items/>`)
//! - an element whose only child is text renders on a single line
//! - otherwise every child goes on its own indented line
//! - the document ends with a trailing newline

use std::fmt::Write;

/// A node in the tree: a child element or a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute, keeping declaration order.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Add a child element.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Add a text child.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the tree as an indented document without an XML declaration.
    pub fn to_pretty_string(&self) -> String {
        let mut out = String::new();
        self.write_indented(&mut out, 0);
        out
    }

    fn write_indented(&self, out: &mut String, depth: usize) {
        let indent = "\t".repeat(depth);
        let _ = write!(out, "{}<{}", indent, self.name);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }

        match self.children.as_slice() {
            [] => {
                out.push_str("/>\n");
            }
            [Node::Text(text)] => {
                let _ = writeln!(out, ">{}</{}>", escape_text(text), self.name);
            }
            children => {
                out.push_str(">\n");
                for child in children {
                    match child {
                        Node::Element(elem) => elem.write_indented(out, depth + 1),
                        Node::Text(text) => {
                            let _ = writeln!(out, "{}\t{}", indent, escape_text(text));
                        }
                    }
                }
                let _ = writeln!(out, "{}</{}>", indent, self.name);
            }
        }
    }
}

/// Escape text content: `&`, `<`, `>`.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape attribute values: text escapes plus the quote character.
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
