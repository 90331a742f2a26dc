//! Scene graph for SVG output.
//!
//! Chart builders produce a tree of plain [`Node`] values; [`Scene::to_svg`]
//! is the only place that turns the tree into markup.

use std::fmt::{self, Display, Write};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// One SVG element with ordered attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any earlier value under the same name.
    pub fn attr(mut self, name: &'static str, value: impl Display) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: &'static str, value: impl Display) {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Depth-first search for the element with the given `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        if self.get_attr("id") == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_id(id))
    }

    /// All descendants (not including `self`) with the given class, in document order.
    pub fn find_by_class(&self, class: &str) -> Vec<&Node> {
        let mut found = Vec::new();
        for child in &self.children {
            let matches = child
                .get_attr("class")
                .map_or(false, |c| c.split_whitespace().any(|part| part == class));
            if matches {
                found.push(child);
            }
            found.extend(child.find_by_class(class));
        }
        found
    }

    fn write_to(&self, out: &mut String, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        write!(out, "{}<{}", indent, self.tag)?;
        for (name, value) in &self.attrs {
            write!(out, " {}=\"{}\"", name, escape(value))?;
        }

        match (&self.text, self.children.is_empty()) {
            (None, true) => writeln!(out, "/>"),
            (Some(text), true) => writeln!(out, ">{}</{}>", escape(text), self.tag),
            (text, false) => {
                out.push('>');
                if let Some(text) = text {
                    out.push_str(&escape(text));
                }
                out.push('\n');
                for child in &self.children {
                    child.write_to(out, depth + 1)?;
                }
                writeln!(out, "{}</{}>", indent, self.tag)
            }
        }
    }
}

/// A complete drawing rooted at an `<svg>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub root: Node,
}

impl Scene {
    /// Create an empty scene of the given pixel size.
    pub fn new(width: f64, height: f64) -> Self {
        let root = Node::new("svg")
            .attr("xmlns", SVG_NAMESPACE)
            .attr("width", width)
            .attr("height", height)
            .attr("viewBox", format!("0 0 {} {}", width, height));
        Self { root }
    }

    pub fn push(&mut self, node: Node) {
        self.root.children.push(node);
    }

    /// Draw the scene as SVG markup.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.root.write_to(&mut out, 0);
        out
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        self.root.find_by_id(id)
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Node> {
        self.root.find_by_class(class)
    }
}

/// Escape text for use in XML content or a double-quoted attribute.
pub fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
