//! Page mount and event dispatch
//!
//! [`Page`] owns the document and every component. The host feeds it input
//! through [`Page::dispatch`] and time through [`Page::advance`]; both run
//! to completion before returning, so no component ever observes another
//! mid-update.
//!
//! Listeners run in registration order, the same order a browser would
//! invoke them for a single event:
//!
//! ```text
//! NavToggle → ScrollRouter → FormSubmit → FormClear → ProjectCta
//!     → ModalClose → ModalBackdrop → EscapeKey → FirstTab
//! ```
//!
//! # Example
//!
//! ```rust
//! use folio_core::{DomEvent, ElementSpec, Key, MemoryDocument};
//! use folio_page::{Page, PageConfig};
//!
//! let doc = MemoryDocument::from_specs(&[ElementSpec::new("main")]);
//! let mut page = Page::mount(doc, PageConfig::default(), None).unwrap();
//!
//! page.dispatch(&DomEvent::key(Key::Tab));
//! assert!(!page.has_listener(folio_page::Listener::FirstTab));
//! ```

use std::time::Duration;

use folio_animation::{register_page_animations, AnimationEngine, AnimationReport};
use folio_core::{DispatchOutcome, Document, DomEvent, Key, TimerQueue};
use serde::Serialize;
use tracing::{debug, trace};

use crate::components::{
    current_year, populate_year, ContactFormController, DismissReason, FormSettings,
    KeyboardMode, KeyboardModeDetector, ModalState, NavState, NavigationToggle, ProjectCatalog,
    ProjectModal, RouteOutcome, SmoothScrollRouter, SubmissionPhase,
};
use crate::config::PageConfig;
use crate::error::Result;
use crate::task::PageTask;

/// A registered event listener
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Listener {
    NavToggle,
    ScrollRouter,
    FormSubmit,
    FormClear,
    ProjectCta,
    ModalClose,
    ModalBackdrop,
    EscapeKey,
    FirstTab,
}

/// A mounted page
#[derive(Debug)]
pub struct Page<D: Document> {
    doc: D,
    config: PageConfig,
    nav: Option<NavigationToggle>,
    router: SmoothScrollRouter,
    form: Option<ContactFormController>,
    modal: Option<ProjectModal>,
    catalog: ProjectCatalog,
    keyboard: KeyboardModeDetector,
    listeners: Vec<Listener>,
    timers: TimerQueue<PageTask>,
    animations: AnimationReport,
}

impl<D: Document> Page<D> {
    /// Mount the interaction layer on `doc`
    ///
    /// Fails only if a configured selector does not parse. Missing elements
    /// disable their component.
    pub fn mount(
        doc: D,
        config: PageConfig,
        engine: Option<&mut dyn AnimationEngine>,
    ) -> Result<Self> {
        Self::mount_at(doc, config, engine, current_year())
    }

    /// Like [`Page::mount`], with the year to display given explicitly
    pub fn mount_at(
        mut doc: D,
        config: PageConfig,
        engine: Option<&mut dyn AnimationEngine>,
        year: i32,
    ) -> Result<Self> {
        let selectors = config.selectors.resolve()?;

        populate_year(&mut doc, &selectors.year, year);

        let nav = NavigationToggle::mount(&mut doc, &selectors);
        let router = SmoothScrollRouter::new(selectors.link.clone(), config.nav_breakpoint);
        let form = ContactFormController::mount(&doc, &selectors, FormSettings::from(&config));
        let modal = ProjectModal::mount(&mut doc, &selectors, &config);
        let catalog = match modal {
            Some(_) => ProjectCatalog::collect(&doc, &selectors),
            None => ProjectCatalog::default(),
        };

        let animations = register_page_animations(&doc, engine, &selectors.animation);

        let mut listeners = Vec::new();
        if nav.is_some() {
            listeners.push(Listener::NavToggle);
        }
        listeners.push(Listener::ScrollRouter);
        if form.is_some() {
            listeners.extend([Listener::FormSubmit, Listener::FormClear]);
        }
        if modal.is_some() {
            if !catalog.is_empty() {
                listeners.push(Listener::ProjectCta);
            }
            listeners.extend([
                Listener::ModalClose,
                Listener::ModalBackdrop,
                Listener::EscapeKey,
            ]);
        }
        listeners.push(Listener::FirstTab);

        debug!(
            nav = nav.is_some(),
            form = form.is_some(),
            modal = modal.is_some(),
            projects = catalog.cards().len(),
            animations = animations.total(),
            "page mounted"
        );

        Ok(Self {
            doc,
            keyboard: KeyboardModeDetector::new(config.keyboard_mode_class.clone()),
            config,
            nav,
            router,
            form,
            modal,
            catalog,
            listeners,
            timers: TimerQueue::new(),
            animations,
        })
    }

    /// Deliver one input event to every listener, in registration order
    pub fn dispatch(&mut self, event: &DomEvent) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();

        for listener in self.listeners.clone() {
            match (listener, event) {
                (Listener::NavToggle, DomEvent::Click { target }) => {
                    if let Some(nav) = self.nav.as_mut() {
                        if nav.owns_click(&self.doc, *target) {
                            nav.toggle(&mut self.doc);
                            outcome.record(false);
                        }
                    }
                }
                (Listener::ScrollRouter, DomEvent::Click { target }) => {
                    let route = self.router.handle_click(&mut self.doc, *target, self.nav.as_mut());
                    if route != RouteOutcome::NotALink {
                        outcome.record(route.prevents_default());
                    }
                }
                (Listener::FormSubmit, DomEvent::Submit { form }) => {
                    if let Some(ctrl) = self.form.as_mut().filter(|c| c.form() == *form) {
                        ctrl.submit(&mut self.doc, &mut self.timers);
                        outcome.record(true);
                    }
                }
                (Listener::FormClear, DomEvent::Click { target }) => {
                    if let Some(ctrl) = self.form.as_mut() {
                        if ctrl.owns_clear_click(&self.doc, *target) {
                            ctrl.clear(&mut self.doc);
                            outcome.record(false);
                        }
                    }
                }
                (Listener::ProjectCta, DomEvent::Click { target }) => {
                    let card = self.catalog.card_for_click(&self.doc, *target);
                    if let (Some(modal), Some(card)) = (self.modal.as_mut(), card) {
                        modal.open(&mut self.doc, &card.summary, Some(card.cta));
                        outcome.record(false);
                    }
                }
                (Listener::ModalClose, DomEvent::Click { target }) => {
                    if let Some(modal) = self.modal.as_mut() {
                        if modal.owns_close_click(&self.doc, *target) {
                            modal.close(&mut self.doc, DismissReason::CloseControl);
                            outcome.record(false);
                        }
                    }
                }
                (Listener::ModalBackdrop, DomEvent::Click { target }) => {
                    if let Some(modal) = self.modal.as_mut() {
                        if modal.is_backdrop(*target) {
                            modal.close(&mut self.doc, DismissReason::Backdrop);
                            outcome.record(false);
                        }
                    }
                }
                (Listener::EscapeKey, DomEvent::KeyDown { key: Key::Escape, .. }) => {
                    if let Some(modal) = self.modal.as_mut() {
                        if modal.close(&mut self.doc, DismissReason::Escape) {
                            outcome.record(false);
                        }
                    }
                }
                (Listener::FirstTab, DomEvent::KeyDown { key, .. }) => {
                    if self.keyboard.handle_key(&mut self.doc, key) {
                        self.listeners.retain(|l| *l != Listener::FirstTab);
                        outcome.record(false);
                    }
                }
                _ => {}
            }
        }

        trace!(?event, handled = outcome.handled, "event dispatched");
        outcome
    }

    /// Advance page time, running timers that come due; returns how many ran
    pub fn advance(&mut self, by: Duration) -> usize {
        let fired = self.timers.advance(by);
        let count = fired.len();
        for (token, task) in fired {
            match task {
                PageTask::CompleteSubmission => {
                    if let Some(form) = self.form.as_mut() {
                        form.complete(&mut self.doc, token);
                    }
                }
            }
        }
        count
    }

    /// Cancel pending work and drop every listener
    pub fn teardown(&mut self) {
        if let Some(form) = self.form.as_mut() {
            form.teardown(&mut self.timers);
        }
        self.listeners.clear();
        debug!("page torn down");
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    /// Mutable document access, for hosts simulating user edits
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    pub fn into_document(self) -> D {
        self.doc
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub fn has_listener(&self, listener: Listener) -> bool {
        self.listeners.contains(&listener)
    }

    pub fn nav_state(&self) -> Option<NavState> {
        self.nav.as_ref().map(NavigationToggle::state)
    }

    pub fn modal_state(&self) -> Option<&ModalState> {
        self.modal.as_ref().map(ProjectModal::state)
    }

    pub fn submission_phase(&self) -> Option<&SubmissionPhase> {
        self.form.as_ref().map(ContactFormController::phase)
    }

    pub fn contact_form(&self) -> Option<&ContactFormController> {
        self.form.as_ref()
    }

    pub fn keyboard_mode(&self) -> KeyboardMode {
        self.keyboard.mode()
    }

    pub fn projects(&self) -> &ProjectCatalog {
        &self.catalog
    }

    pub fn animations(&self) -> AnimationReport {
        self.animations
    }

    /// Page time elapsed through [`Page::advance`]
    pub fn elapsed(&self) -> Duration {
        self.timers.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
