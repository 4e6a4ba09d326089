//! Document capability
//!
//! The interaction layer never talks to a browser directly. Everything it
//! needs from the element tree goes through [`Document`], so the same
//! components run against a real host binding or the headless
//! [`MemoryDocument`](crate::MemoryDocument).
//!
//! Implementors provide the primitive accessors; selector queries
//! (`query`, `query_all`, `query_within`, `closest`) are provided methods
//! built on top of `children`/`parent`.
//!
//! Element handles are weak: once an element is removed, every accessor
//! returns `None`/empty and every mutator is a no-op for that handle.

use slotmap::new_key_type;

use crate::selector::Selector;

new_key_type! {
    /// Handle to an element in a [`Document`]
    pub struct ElementId;
}

/// Options for scroll-into-view behavior
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOptions {
    /// How to animate the scroll
    pub behavior: ScrollBehavior,
    /// Vertical alignment within the viewport
    pub block: ScrollBlock,
}

impl ScrollOptions {
    /// Smooth scroll aligning the element's top edge with the viewport's
    pub fn smooth_to_start() -> Self {
        Self {
            behavior: ScrollBehavior::Smooth,
            block: ScrollBlock::Start,
        }
    }
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            behavior: ScrollBehavior::Auto,
            block: ScrollBlock::Nearest,
        }
    }
}

/// Scroll animation behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Instant scroll (no animation)
    #[default]
    Auto,
    /// Smooth animated scroll
    Smooth,
}

/// Vertical scroll alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBlock {
    /// Align to top of viewport
    Start,
    /// Align to center of viewport
    Center,
    /// Align to bottom of viewport
    End,
    /// Scroll minimum distance to make visible
    #[default]
    Nearest,
}

/// The element tree and browser surface consumed by the page layer
pub trait Document {
    /// The root (`<html>`) element
    fn root(&self) -> ElementId;

    /// Whether the handle still refers to a live element
    fn contains(&self, el: ElementId) -> bool;

    /// Parent element, `None` for the root or a dead handle
    fn parent(&self, el: ElementId) -> Option<ElementId>;

    /// Child elements in document order
    fn children(&self, el: ElementId) -> Vec<ElementId>;

    /// Lowercase tag name
    fn tag(&self, el: ElementId) -> Option<&str>;

    fn attribute(&self, el: ElementId, name: &str) -> Option<String>;
    fn set_attribute(&mut self, el: ElementId, name: &str, value: &str);
    fn remove_attribute(&mut self, el: ElementId, name: &str);

    fn has_class(&self, el: ElementId, class: &str) -> bool;
    fn add_class(&mut self, el: ElementId, class: &str);
    fn remove_class(&mut self, el: ElementId, class: &str);

    /// Text content of the element and its descendants
    fn text(&self, el: ElementId) -> String;

    /// Replace the element's content with a single text run
    fn set_text(&mut self, el: ElementId, text: &str);

    /// Inline style property, `None` when unset
    fn style(&self, el: ElementId, property: &str) -> Option<String>;

    /// Set (`Some`) or clear (`None`) an inline style property
    fn set_style(&mut self, el: ElementId, property: &str, value: Option<&str>);

    /// Current value of a form field, `None` for non-fields
    fn value(&self, el: ElementId) -> Option<String>;
    fn set_value(&mut self, el: ElementId, value: &str);

    fn is_disabled(&self, el: ElementId) -> bool;
    fn set_disabled(&mut self, el: ElementId, disabled: bool);

    /// Move keyboard focus to the element
    fn focus(&mut self, el: ElementId);

    /// Currently focused element
    fn focused(&self) -> Option<ElementId>;

    /// Scroll the viewport so the element becomes visible
    fn scroll_into_view(&mut self, el: ElementId, options: ScrollOptions);

    /// Viewport width in logical pixels
    fn viewport_width(&self) -> f32;

    // =========================================================================
    // Provided queries
    // =========================================================================

    /// Descendants of `scope` in document order, excluding `scope`
    fn descendants(&self, scope: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = self.children(scope).into_iter().rev().collect();
        while let Some(el) = stack.pop() {
            out.push(el);
            stack.extend(self.children(el).into_iter().rev());
        }
        out
    }

    /// First element in the document matching `selector`
    fn query(&self, selector: &Selector) -> Option<ElementId> {
        let root = self.root();
        if selector.matches(self, root) {
            return Some(root);
        }
        self.query_within(root, selector).into_iter().next()
    }

    /// All elements in the document matching `selector`
    fn query_all(&self, selector: &Selector) -> Vec<ElementId> {
        let root = self.root();
        let mut out = Vec::new();
        if selector.matches(self, root) {
            out.push(root);
        }
        out.extend(self.query_within(root, selector));
        out
    }

    /// Descendants of `scope` matching `selector`
    fn query_within(&self, scope: ElementId, selector: &Selector) -> Vec<ElementId> {
        self.descendants(scope)
            .into_iter()
            .filter(|el| selector.matches(self, *el))
            .collect()
    }

    /// Nearest inclusive ancestor of `el` matching `selector`
    fn closest(&self, el: ElementId, selector: &Selector) -> Option<ElementId> {
        let mut current = Some(el).filter(|el| self.contains(*el));
        while let Some(candidate) = current {
            if selector.matches(self, candidate) {
                return Some(candidate);
            }
            current = self.parent(candidate);
        }
        None
    }

    /// Element whose `id` attribute equals `id`
    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.query(&Selector::id(id))
    }
}
