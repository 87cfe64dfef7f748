//! Structured element tree for the rendered widget and its HTML form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ClassNames, MilestoneGroup, TimelineConfig, TimelineLayout, YearMarker};

/// Glyph inside milestone markers when the widget is not interactive.
pub const BULLET_GLYPH: &str = "\u{2022}";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub styles: Vec<(String, String)>,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds a class; empty names are skipped.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() {
            self.classes.push(class);
        }
        self
    }

    /// Sets an inline style property, replacing a previous value.
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_style(property, value);
        self
    }

    pub fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.styles.iter_mut().find(|(name, _)| *name == property) {
            Some(slot) => slot.1 = value,
            None => self.styles.push((property, value)),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn push(&mut self, child: Element) -> usize {
        self.children.push(Node::Element(child));
        self.children.len() - 1
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|name| name == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(key, _)| key == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Depth-first search over all descendants, excluding `self`.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        for child in self.child_elements() {
            found.push(child);
            found.extend(child.descendants());
        }
        found
    }

    /// Concatenated text of direct text children.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if let Some(id) = &self.id {
            write!(f, " id=\"{}\"", escape(id))?;
        }
        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", escape(&self.classes.join(" ")))?;
        }
        if !self.styles.is_empty() {
            write!(f, " style=\"")?;
            for (property, value) in &self.styles {
                write!(f, "{}: {};", escape(property), escape(value))?;
            }
            write!(f, "\"")?;
        }
        for (name, value) in &self.attributes {
            write!(f, " {name}=\"{}\"", escape(value))?;
        }
        if is_void(&self.tag) {
            return write!(f, ">");
        }
        write!(f, ">")?;
        for child in &self.children {
            match child {
                Node::Element(element) => write!(f, "{element}")?,
                Node::Text(text) => write!(f, "{}", escape(text))?,
            }
        }
        write!(f, "</{}>", self.tag)
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "img" | "br" | "hr" | "input")
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// CSS length for a left percentage.
fn percent(value: f64) -> String {
    format!("{value}%")
}

/// Build the container element with every marker, in render order: line,
/// both boundaries, interval markers, then milestone groups.
pub fn render_tree(config: &TimelineConfig, layout: &TimelineLayout) -> Element {
    let classes = &config.classes;
    let mut root = Element::new("div")
        .class(classes.wrapper.clone())
        .style("position", "relative");

    root.push(Element::new("div").class(classes.line.clone()));
    for marker in layout.boundaries.iter().chain(&layout.intervals) {
        root.push(year_marker(classes, marker));
    }
    for group in &layout.groups {
        root.push(milestone_group(config, group));
    }
    root
}

fn year_marker(classes: &ClassNames, marker: &YearMarker) -> Element {
    let element = Element::new("div")
        .class(classes.interval_indicator.clone())
        .style("left", percent(marker.left_percent))
        .attr("data-year-offset", marker.offset.to_string());
    match &marker.label {
        Some(label) => element.child(Element::new("p").text(label.clone())),
        None => element,
    }
}

fn milestone_group(config: &TimelineConfig, group: &MilestoneGroup) -> Element {
    let mut wrapper = Element::new("div")
        .class(config.classes.milestone_wrapper.clone())
        .style("left", percent(group.left_percent))
        .attr("data-year-offset", group.offset.to_string());
    for index in &group.milestones {
        let marker = Element::new("div")
            .class(config.classes.milestone.clone())
            .attr("data-milestone-index", index.to_string());
        wrapper.push(if config.interactive {
            marker.attr("role", "button")
        } else {
            marker.text(BULLET_GLYPH)
        });
    }
    wrapper
}
