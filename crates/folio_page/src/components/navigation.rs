//! Small-screen navigation toggle

use folio_core::{transition, Document, ElementId, StateTransitions};
use tracing::debug;

use super::is_within;
use crate::config::Selectors;

/// Whether the navigation menu is shown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NavState {
    #[default]
    Collapsed,
    Expanded,
}

impl NavState {
    pub fn is_expanded(self) -> bool {
        matches!(self, NavState::Expanded)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// Toggle control clicked
    Toggle,
    /// Forced closed by in-page navigation
    Collapse,
}

impl StateTransitions for NavState {
    type Event = NavEvent;

    fn on_event(&self, event: NavEvent) -> Option<Self> {
        use NavState::*;

        match (self, event) {
            (Collapsed, NavEvent::Toggle) => Some(Expanded),
            (Expanded, NavEvent::Toggle) | (Expanded, NavEvent::Collapse) => Some(Collapsed),
            _ => None,
        }
    }
}

/// The toggle control and the menu it shows
#[derive(Debug)]
pub struct NavigationToggle {
    toggle: ElementId,
    list: ElementId,
    state: NavState,
}

impl NavigationToggle {
    /// Bind to the toggle and list; `None` unless both exist
    pub fn mount<D: Document + ?Sized>(doc: &mut D, selectors: &Selectors) -> Option<Self> {
        let toggle = doc.query(&selectors.nav_toggle);
        let list = doc.query(&selectors.nav_list);
        let (Some(toggle), Some(list)) = (toggle, list) else {
            debug!("navigation toggle or list missing, toggle disabled");
            return None;
        };

        let nav = Self {
            toggle,
            list,
            state: NavState::Collapsed,
        };
        nav.reflect(doc);
        Some(nav)
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn toggle_element(&self) -> ElementId {
        self.toggle
    }

    /// Whether a click on `target` belongs to the toggle control
    pub fn owns_click<D: Document + ?Sized>(&self, doc: &D, target: ElementId) -> bool {
        is_within(doc, target, self.toggle)
    }

    pub fn toggle<D: Document + ?Sized>(&mut self, doc: &mut D) {
        transition(&mut self.state, NavEvent::Toggle);
        debug!(state = ?self.state, "navigation toggled");
        self.reflect(doc);
    }

    /// Force the menu closed; returns whether it was open
    pub fn collapse<D: Document + ?Sized>(&mut self, doc: &mut D) -> bool {
        let changed = transition(&mut self.state, NavEvent::Collapse);
        self.reflect(doc);
        changed
    }

    fn reflect<D: Document + ?Sized>(&self, doc: &mut D) {
        let expanded = if self.state.is_expanded() { "true" } else { "false" };
        doc.set_attribute(self.toggle, "aria-expanded", expanded);
        doc.set_attribute(self.list, "aria-expanded", expanded);
        let display = self.state.is_expanded().then_some("flex");
        doc.set_style(self.list, "display", display);
    }
}
