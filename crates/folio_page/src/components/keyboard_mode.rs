//! Keyboard-mode detection
//!
//! Focus outlines stay hidden for pointer users until the first Tab press,
//! which marks the root element once. The page drops the listener after
//! that, so later key presses never reach the detector.

use folio_core::{transition, Document, Key, StateTransitions};
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyboardMode {
    #[default]
    Pointer,
    Tabbing,
}

impl StateTransitions for KeyboardMode {
    type Event = Key;

    fn on_event(&self, key: Key) -> Option<Self> {
        match (self, key) {
            (KeyboardMode::Pointer, Key::Tab) => Some(KeyboardMode::Tabbing),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct KeyboardModeDetector {
    class: String,
    mode: KeyboardMode,
}

impl KeyboardModeDetector {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            mode: KeyboardMode::Pointer,
        }
    }

    pub fn mode(&self) -> KeyboardMode {
        self.mode
    }

    /// Handle a key press; returns `true` on the one press that trips the
    /// detector
    pub fn handle_key<D: Document + ?Sized>(&mut self, doc: &mut D, key: &Key) -> bool {
        if !transition(&mut self.mode, key.clone()) {
            return false;
        }
        let root = doc.root();
        doc.add_class(root, &self.class);
        debug!("keyboard navigation detected");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::MemoryDocument;

    #[test]
    fn test_first_tab_trips_once() {
        let mut doc = MemoryDocument::new();
        let mut detector = KeyboardModeDetector::new("user-is-tabbing");

        assert!(!detector.handle_key(&mut doc, &Key::Character('a')));
        assert!(!detector.handle_key(&mut doc, &Key::Escape));
        assert_eq!(detector.mode(), KeyboardMode::Pointer);
        assert!(!doc.has_class(doc.root(), "user-is-tabbing"));

        assert!(detector.handle_key(&mut doc, &Key::Tab));
        assert!(doc.has_class(doc.root(), "user-is-tabbing"));

        assert!(!detector.handle_key(&mut doc, &Key::Tab));
        assert_eq!(detector.mode(), KeyboardMode::Tabbing);
        assert_eq!(doc.attribute(doc.root(), "class").as_deref(), Some("user-is-tabbing"));
    }
}
