//! Host input events
//!
//! The host (browser binding, replay harness, tests) translates its native
//! events into [`DomEvent`]s and hands them to the page. Handlers report
//! back through [`DispatchOutcome`].

use serde::{Deserialize, Serialize};

use crate::dom::ElementId;

/// Keyboard key identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Tab,
    Escape,
    Enter,
    /// A printable character
    Character(char),
    /// Any other named key, as the host reports it
    Named(String),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` string to a [`Key`]
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Tab" => Key::Tab,
            "Escape" | "Esc" => Key::Escape,
            "Enter" => Key::Enter,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Character(c),
                    _ => Key::Named(other.to_string()),
                }
            }
        }
    }
}

/// Input events the page reacts to
#[derive(Clone, Debug, PartialEq)]
pub enum DomEvent {
    /// Primary-button click on `target`
    Click {
        target: ElementId,
    },
    /// Key pressed; `target` is the focused element, if any
    KeyDown {
        key: Key,
        target: Option<ElementId>,
    },
    /// A form is being submitted
    Submit {
        form: ElementId,
    },
}

impl DomEvent {
    pub fn click(target: ElementId) -> Self {
        DomEvent::Click { target }
    }

    pub fn key(key: Key) -> Self {
        DomEvent::KeyDown { key, target: None }
    }

    pub fn submit(form: ElementId) -> Self {
        DomEvent::Submit { form }
    }
}

/// Result of dispatching one event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// A handler cancelled the host's default action
    pub default_prevented: bool,
    /// Number of handlers that acted on the event
    pub handled: u32,
}

impl DispatchOutcome {
    /// Record that a handler acted, optionally cancelling the default
    pub fn record(&mut self, prevent_default: bool) {
        self.handled += 1;
        self.default_prevented |= prevent_default;
    }
}
