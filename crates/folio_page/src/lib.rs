//! Folio Page Interactions
//!
//! The client-side behavior of a single-page portfolio: a collapsible
//! navigation menu, smooth in-page scrolling, a contact form with a
//! simulated delivery, a project detail dialog, scroll-gated entrance
//! animations and keyboard-mode detection.
//!
//! # Architecture
//!
//! ```text
//! host input ──► Page::dispatch ──► listeners (registration order)
//!                    │                 ├─ NavigationToggle
//!                    │                 ├─ SmoothScrollRouter
//!                    │                 ├─ ContactFormController ──► TimerQueue
//!                    │                 ├─ ProjectModal
//!                    │                 └─ KeyboardModeDetector
//!                    ▼
//!                Document (folio_core)
//! ```
//!
//! Everything runs on one logical thread. The page never touches a clock:
//! the host advances time with [`Page::advance`], which makes the contact
//! form's delivery delay deterministic under test.
//!
//! Components degrade independently. When the markup a component needs is
//! missing, the component is not mounted and its listeners are never
//! registered; the rest of the page keeps working.

pub mod components;
pub mod config;
pub mod error;
pub mod page;
pub mod snapshot;
pub mod task;

pub use components::{
    ContactFormController, DismissReason, FormSettings, KeyboardMode, KeyboardModeDetector,
    ModalEvent, ModalState, NavEvent, NavState, NavigationToggle, ProjectCard, ProjectCatalog,
    ProjectModal, ProjectSummary, RouteOutcome, SmoothScrollRouter, SubmissionEvent,
    SubmissionPhase, SubmitOutcome,
};
pub use config::{Labels, Messages, PageConfig, SelectorConfig, Selectors};
pub use error::{PageError, Result};
pub use page::{Listener, Page};
pub use snapshot::{FormSnapshot, ModalSnapshot, PageSnapshot};
pub use task::PageTask;
