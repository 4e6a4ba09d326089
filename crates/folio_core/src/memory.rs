//! In-memory document
//!
//! A headless [`Document`] used by tests and the replay CLI. It models the
//! parts of a browser document the page layer observes: tree structure,
//! attributes, classes, text, inline styles, form field values, disabled
//! state, focus and scroll position. Layout is not modeled; each element
//! carries a fixed `offset_top` that scrolling lands on.
//!
//! # Example
//!
//! ```rust
//! use folio_core::{Document, ElementSpec, MemoryDocument};
//!
//! let mut doc = MemoryDocument::new();
//! let body = doc.body();
//! let form = doc.append(
//!     body,
//!     ElementSpec::new("form")
//!         .id("contact-form")
//!         .child(ElementSpec::new("input").attr("name", "email").value("a@b.c")),
//! );
//!
//! let input = doc.children(form)[0];
//! assert_eq!(doc.value(input).as_deref(), Some("a@b.c"));
//! ```

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::dom::{Document, ElementId, ScrollOptions};

/// Viewport width a fresh document reports
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;

/// Tags that carry a form value
const FIELD_TAGS: &[&str] = &["input", "textarea", "select"];

/// Declarative description of an element subtree
///
/// Also the fixture format of the replay CLI, so it derives serde.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementSpec {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attrs: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Vertical document offset scrolling aligns to
    #[serde(default)]
    pub offset_top: f32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn offset_top(mut self, offset: f32) -> Self {
        self.offset_top = offset;
        self
    }

    pub fn child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }
}

/// One `scroll_into_view` request, recorded in order
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRecord {
    pub target: ElementId,
    pub options: ScrollOptions,
    /// Resulting scroll position
    pub top: f32,
}

#[derive(Debug)]
struct Node {
    tag: String,
    attributes: IndexMap<String, String>,
    classes: SmallVec<[String; 4]>,
    text: String,
    children: Vec<ElementId>,
    parent: Option<ElementId>,
    styles: FxHashMap<String, String>,
    value: Option<String>,
    disabled: bool,
    offset_top: f32,
}

impl Node {
    fn from_spec(spec: &ElementSpec, parent: Option<ElementId>) -> Self {
        let tag = spec.tag.to_ascii_lowercase();
        let mut attributes = spec.attrs.clone();
        if let Some(id) = &spec.id {
            attributes.insert("id".to_string(), id.clone());
        }
        let disabled = attributes.shift_remove("disabled").is_some();
        let value = if FIELD_TAGS.contains(&tag.as_str()) {
            Some(spec.value.clone().unwrap_or_default())
        } else {
            None
        };

        Self {
            tag,
            attributes,
            classes: spec.classes.iter().cloned().collect(),
            text: spec.text.clone().unwrap_or_default(),
            children: Vec::new(),
            parent,
            styles: FxHashMap::default(),
            value,
            disabled,
            offset_top: spec.offset_top,
        }
    }
}

/// Headless document tree
#[derive(Debug)]
pub struct MemoryDocument {
    nodes: SlotMap<ElementId, Node>,
    root: ElementId,
    body: ElementId,
    focused: Option<ElementId>,
    viewport_width: f32,
    scroll_top: f32,
    scrolls: Vec<ScrollRecord>,
}

impl MemoryDocument {
    /// Create a document containing `<html><body></body></html>`
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::from_spec(&ElementSpec::new("html"), None));
        let body = nodes.insert(Node::from_spec(&ElementSpec::new("body"), Some(root)));
        nodes[root].children.push(body);

        Self {
            nodes,
            root,
            body,
            focused: None,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            scroll_top: 0.0,
            scrolls: Vec::new(),
        }
    }

    /// Create a document whose body holds the given subtrees
    pub fn from_specs(specs: &[ElementSpec]) -> Self {
        let mut doc = Self::new();
        let body = doc.body;
        for spec in specs {
            doc.append(body, spec.clone());
        }
        doc
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    /// Append a subtree under `parent` and return the subtree's root
    ///
    /// Appending to a dead handle still creates the nodes, detached.
    pub fn append(&mut self, parent: ElementId, spec: ElementSpec) -> ElementId {
        let parent = Some(parent).filter(|p| self.nodes.contains_key(*p));
        let el = self.nodes.insert(Node::from_spec(&spec, parent));
        if let Some(parent) = parent {
            self.nodes[parent].children.push(el);
        }
        for child in &spec.children {
            self.append(el, child.clone());
        }
        el
    }

    /// Remove an element and its subtree; the root cannot be removed
    pub fn remove(&mut self, el: ElementId) {
        if el == self.root || !self.nodes.contains_key(el) {
            return;
        }
        if let Some(parent) = self.nodes[el].parent {
            if let Some(node) = self.nodes.get_mut(parent) {
                node.children.retain(|c| *c != el);
            }
        }
        self.remove_subtree(el);
    }

    fn remove_subtree(&mut self, el: ElementId) {
        if let Some(node) = self.nodes.remove(el) {
            if self.focused == Some(el) {
                self.focused = None;
            }
            for child in node.children {
                self.remove_subtree(child);
            }
        }
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    /// Current vertical scroll position
    pub fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    /// Every scroll request in the order it was made
    pub fn scroll_log(&self) -> &[ScrollRecord] {
        &self.scrolls
    }

    /// Number of live elements, including `<html>` and `<body>`
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MemoryDocument {
    fn root(&self) -> ElementId {
        self.root
    }

    fn contains(&self, el: ElementId) -> bool {
        self.nodes.contains_key(el)
    }

    fn parent(&self, el: ElementId) -> Option<ElementId> {
        self.nodes.get(el).and_then(|n| n.parent)
    }

    fn children(&self, el: ElementId) -> Vec<ElementId> {
        self.nodes
            .get(el)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn tag(&self, el: ElementId) -> Option<&str> {
        self.nodes.get(el).map(|n| n.tag.as_str())
    }

    fn attribute(&self, el: ElementId, name: &str) -> Option<String> {
        let node = self.nodes.get(el)?;
        match name {
            "class" if node.classes.is_empty() => None,
            "class" => Some(node.classes.join(" ")),
            "disabled" => node.disabled.then(String::new),
            _ => node.attributes.get(name).cloned(),
        }
    }

    fn set_attribute(&mut self, el: ElementId, name: &str, value: &str) {
        let Some(node) = self.nodes.get_mut(el) else {
            return;
        };
        match name {
            "class" => {
                node.classes = value.split_whitespace().map(str::to_string).collect();
            }
            "disabled" => node.disabled = true,
            _ => {
                node.attributes.insert(name.to_string(), value.to_string());
            }
        }
    }

    fn remove_attribute(&mut self, el: ElementId, name: &str) {
        let Some(node) = self.nodes.get_mut(el) else {
            return;
        };
        match name {
            "class" => node.classes.clear(),
            "disabled" => node.disabled = false,
            _ => {
                node.attributes.shift_remove(name);
            }
        }
    }

    fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.nodes
            .get(el)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, el: ElementId, class: &str) {
        if let Some(node) = self.nodes.get_mut(el) {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, el: ElementId, class: &str) {
        if let Some(node) = self.nodes.get_mut(el) {
            node.classes.retain(|c| c != class);
        }
    }

    fn text(&self, el: ElementId) -> String {
        let Some(node) = self.nodes.get(el) else {
            return String::new();
        };
        let mut out = node.text.clone();
        for child in &node.children {
            out.push_str(&self.text(*child));
        }
        out
    }

    fn set_text(&mut self, el: ElementId, text: &str) {
        let Some(node) = self.nodes.get_mut(el) else {
            return;
        };
        node.text = text.to_string();
        let children = std::mem::take(&mut node.children);
        for child in children {
            self.remove_subtree(child);
        }
    }

    fn style(&self, el: ElementId, property: &str) -> Option<String> {
        self.nodes.get(el)?.styles.get(property).cloned()
    }

    fn set_style(&mut self, el: ElementId, property: &str, value: Option<&str>) {
        let Some(node) = self.nodes.get_mut(el) else {
            return;
        };
        match value {
            Some(v) if !v.is_empty() => {
                node.styles.insert(property.to_string(), v.to_string());
            }
            _ => {
                node.styles.remove(property);
            }
        }
    }

    fn value(&self, el: ElementId) -> Option<String> {
        self.nodes.get(el)?.value.clone()
    }

    fn set_value(&mut self, el: ElementId, value: &str) {
        if let Some(slot) = self.nodes.get_mut(el).and_then(|n| n.value.as_mut()) {
            *slot = value.to_string();
        }
    }

    fn is_disabled(&self, el: ElementId) -> bool {
        self.nodes.get(el).is_some_and(|n| n.disabled)
    }

    fn set_disabled(&mut self, el: ElementId, disabled: bool) {
        if let Some(node) = self.nodes.get_mut(el) {
            node.disabled = disabled;
        }
    }

    fn focus(&mut self, el: ElementId) {
        if self.nodes.contains_key(el) {
            self.focused = Some(el);
        }
    }

    fn focused(&self) -> Option<ElementId> {
        self.focused.filter(|el| self.nodes.contains_key(*el))
    }

    fn scroll_into_view(&mut self, el: ElementId, options: ScrollOptions) {
        let Some(node) = self.nodes.get(el) else {
            return;
        };
        self.scroll_top = node.offset_top;
        self.scrolls.push(ScrollRecord {
            target: el,
            options,
            top: self.scroll_top,
        });
    }

    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }
}
