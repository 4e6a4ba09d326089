//! Interaction components
//!
//! Each component owns a disjoint set of elements and its own state enum.
//! Components are built by `mount`, which returns `None` when the elements
//! a component needs are absent; the page then simply never routes events
//! to it.

pub mod contact_form;
pub mod keyboard_mode;
pub mod modal;
pub mod navigation;
pub mod scroll_router;
pub mod year;

pub use contact_form::{
    ContactFormController, FormSettings, SubmissionEvent, SubmissionPhase, SubmitOutcome,
};
pub use keyboard_mode::{KeyboardMode, KeyboardModeDetector};
pub use modal::{
    DismissReason, ModalEvent, ModalState, ProjectCard, ProjectCatalog, ProjectModal,
    ProjectSummary,
};
pub use navigation::{NavEvent, NavState, NavigationToggle};
pub use scroll_router::{RouteOutcome, SmoothScrollRouter};
pub use year::{current_year, populate_year};

use folio_core::{Document, ElementId};

/// Whether `target` is `container` or one of its descendants
pub(crate) fn is_within<D: Document + ?Sized>(doc: &D, target: ElementId, container: ElementId) -> bool {
    let mut current = Some(target).filter(|el| doc.contains(*el));
    while let Some(el) = current {
        if el == container {
            return true;
        }
        current = doc.parent(el);
    }
    false
}
