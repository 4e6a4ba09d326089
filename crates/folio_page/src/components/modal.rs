//! Project detail modal
//!
//! A single dialog shared by every project card. Each card's call-to-action
//! opens it with that card's [`ProjectSummary`]; it closes through the close
//! control, a click on the backdrop (the container itself, not the panel),
//! or Escape anywhere on the page.

use folio_core::{transition, Document, ElementId, Selector, StateTransitions};
use serde::Serialize;
use tracing::debug;

use super::is_within;
use crate::config::{PageConfig, Selectors};

/// Content shown for one project
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub title: String,
    pub description: String,
}

impl ProjectSummary {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A project card and the control that opens it
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectCard {
    pub card: ElementId,
    pub cta: ElementId,
    pub summary: ProjectSummary,
}

/// Summaries of every project card, captured at mount
#[derive(Clone, Debug, Default)]
pub struct ProjectCatalog {
    cards: Vec<ProjectCard>,
}

impl ProjectCatalog {
    /// Read each call-to-action's card title and description
    ///
    /// A call-to-action outside a card, or in a card lacking a title or
    /// description, is skipped.
    pub fn collect<D: Document + ?Sized>(doc: &D, selectors: &Selectors) -> Self {
        let first_text = |scope: ElementId, selector: &Selector| {
            doc.query_within(scope, selector)
                .into_iter()
                .next()
                .map(|el| doc.text(el))
        };

        let mut cards = Vec::new();
        for cta in doc.query_all(&selectors.project_cta) {
            let Some(card) = doc.closest(cta, &selectors.project_card) else {
                debug!("project call-to-action outside a card, skipped");
                continue;
            };
            let title = first_text(card, &selectors.project_title);
            let description = first_text(card, &selectors.project_desc);
            let (Some(title), Some(description)) = (title, description) else {
                debug!("project card without title or description, skipped");
                continue;
            };
            cards.push(ProjectCard {
                card,
                cta,
                summary: ProjectSummary { title, description },
            });
        }
        Self { cards }
    }

    pub fn cards(&self) -> &[ProjectCard] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card whose call-to-action contains `target`
    pub fn card_for_click<D: Document + ?Sized>(&self, doc: &D, target: ElementId) -> Option<&ProjectCard> {
        self.cards.iter().find(|card| is_within(doc, target, card.cta))
    }
}

/// Why the modal is closing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissReason {
    CloseControl,
    Backdrop,
    Escape,
}

/// Dialog state; content only exists while open
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        title: String,
        body: String,
        /// Control that opened the dialog; may have been removed since
        last_trigger: Option<ElementId>,
    },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    Open {
        title: String,
        body: String,
        trigger: Option<ElementId>,
    },
    Dismiss(DismissReason),
}

impl StateTransitions for ModalState {
    type Event = ModalEvent;

    fn on_event(&self, event: ModalEvent) -> Option<Self> {
        match (self, event) {
            // Opening again while open replaces the content
            (_, ModalEvent::Open {
                title,
                body,
                trigger,
            }) => Some(ModalState::Open {
                title,
                body,
                last_trigger: trigger,
            }),
            (ModalState::Open { .. }, ModalEvent::Dismiss(_)) => Some(ModalState::Closed),
            (ModalState::Closed, ModalEvent::Dismiss(_)) => None,
        }
    }
}

#[derive(Debug)]
pub struct ProjectModal {
    container: ElementId,
    close_control: Option<ElementId>,
    title: Option<ElementId>,
    body: Option<ElementId>,
    panel: Option<ElementId>,
    state: ModalState,
    body_suffix: String,
    restore_focus: bool,
}

impl ProjectModal {
    /// Bind to the modal container; `None` if there is none
    pub fn mount<D: Document + ?Sized>(
        doc: &mut D,
        selectors: &Selectors,
        config: &PageConfig,
    ) -> Option<Self> {
        let Some(container) = doc.query(&selectors.modal) else {
            debug!("project modal missing, modal disabled");
            return None;
        };
        let part = |selector: &Selector| doc.query_within(container, selector).into_iter().next();

        let modal = Self {
            container,
            close_control: part(&selectors.modal_close),
            title: part(&selectors.modal_title),
            body: part(&selectors.modal_body),
            panel: part(&selectors.modal_panel),
            state: ModalState::Closed,
            body_suffix: config.modal_body_suffix.clone(),
            restore_focus: config.restore_focus,
        };
        doc.set_attribute(container, "aria-hidden", "true");
        Some(modal)
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn owns_close_click<D: Document + ?Sized>(&self, doc: &D, target: ElementId) -> bool {
        self.close_control
            .is_some_and(|close| is_within(doc, target, close))
    }

    /// Clicks land on the container itself only outside the panel
    pub fn is_backdrop(&self, target: ElementId) -> bool {
        target == self.container
    }

    /// Show `summary` and move focus into the dialog
    pub fn open<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        summary: &ProjectSummary,
        trigger: Option<ElementId>,
    ) {
        let body = format!("{}{}", summary.description, self.body_suffix);
        if let Some(el) = self.title {
            doc.set_text(el, &summary.title);
        }
        if let Some(el) = self.body {
            doc.set_text(el, &body);
        }
        transition(
            &mut self.state,
            ModalEvent::Open {
                title: summary.title.clone(),
                body,
                trigger,
            },
        );
        doc.set_attribute(self.container, "aria-hidden", "false");
        doc.focus(self.panel.unwrap_or(self.container));
        debug!(title = %summary.title, "modal opened");
    }

    /// Hide the dialog; returns whether it was open
    ///
    /// Closing an already closed dialog is a no-op apart from re-asserting
    /// the hidden signal.
    pub fn close<D: Document + ?Sized>(&mut self, doc: &mut D, reason: DismissReason) -> bool {
        let trigger = match &self.state {
            ModalState::Open { last_trigger, .. } => *last_trigger,
            ModalState::Closed => None,
        };
        let changed = transition(&mut self.state, ModalEvent::Dismiss(reason));
        doc.set_attribute(self.container, "aria-hidden", "true");

        if changed {
            if let Some(trigger) = trigger.filter(|_| self.restore_focus) {
                if doc.contains(trigger) {
                    doc.focus(trigger);
                }
            }
            debug!(?reason, "modal closed");
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{ElementSpec, MemoryDocument};

    const SUFFIX: &str = " — replace this summary with a detailed description, screenshots and links.";

    fn card(title: &str, desc: &str) -> ElementSpec {
        ElementSpec::new("article")
            .class("project-card")
            .child(ElementSpec::new("h3").class("project-title").text(title))
            .child(ElementSpec::new("p").class("project-desc").text(desc))
            .child(
                ElementSpec::new("button")
                    .class("project-cta")
                    .child(ElementSpec::new("span").text("Details")),
            )
    }

    fn modal_spec() -> ElementSpec {
        ElementSpec::new("div").id("project-modal").child(
            ElementSpec::new("div")
                .class("modal-panel")
                .attr("tabindex", "-1")
                .child(ElementSpec::new("button").class("modal-close").text("×"))
                .child(ElementSpec::new("h2").id("modal-title"))
                .child(ElementSpec::new("div").id("modal-body")),
        )
    }

    fn setup(config: &PageConfig) -> (MemoryDocument, ProjectModal, ProjectCatalog) {
        let mut doc = MemoryDocument::from_specs(&[
            card("Alpha", "A1"),
            card("Beta", "B1"),
            ElementSpec::new("article")
                .class("project-card")
                .child(ElementSpec::new("button").class("project-cta")),
            modal_spec(),
        ]);
        let selectors = config.selectors.resolve().unwrap();
        let modal = ProjectModal::mount(&mut doc, &selectors, config).unwrap();
        let catalog = ProjectCatalog::collect(&doc, &selectors);
        (doc, modal, catalog)
    }

    #[test]
    fn test_catalog_skips_incomplete_cards() {
        let (doc, _, catalog) = setup(&PageConfig::default());
        let titles: Vec<_> = catalog.cards().iter().map(|c| c.summary.title.as_str()).collect();
        assert_eq!(titles, ["Alpha", "Beta"]);

        let span = doc.query_all(&Selector::tag("span"))[1];
        let card = catalog.card_for_click(&doc, span).unwrap();
        assert_eq!(card.summary, ProjectSummary::new("Beta", "B1"));
    }

    #[test]
    fn test_open_sets_content_and_focus() {
        let (mut doc, mut modal, _) = setup(&PageConfig::default());

        modal.open(&mut doc, &ProjectSummary::new("T", "B"), None);

        let title = doc.element_by_id("modal-title").unwrap();
        let body = doc.element_by_id("modal-body").unwrap();
        let panel = doc.query(&Selector::class("modal-panel")).unwrap();
        assert_eq!(doc.text(title), "T");
        assert_eq!(doc.text(body), format!("B{SUFFIX}"));
        assert_eq!(doc.attribute(modal.container(), "aria-hidden").as_deref(), Some("false"));
        assert_eq!(doc.focused(), Some(panel));
        assert!(modal.state().is_open());
    }

    #[test]
    fn test_each_dismissal_closes() {
        for reason in [DismissReason::CloseControl, DismissReason::Backdrop, DismissReason::Escape] {
            let (mut doc, mut modal, _) = setup(&PageConfig::default());
            modal.open(&mut doc, &ProjectSummary::new("T", "B"), None);

            assert!(modal.close(&mut doc, reason));
            assert_eq!(modal.state(), &ModalState::Closed);
            assert_eq!(doc.attribute(modal.container(), "aria-hidden").as_deref(), Some("true"));
        }
    }

    #[test]
    fn test_close_when_closed_is_idempotent() {
        let (mut doc, mut modal, _) = setup(&PageConfig::default());
        assert!(!modal.close(&mut doc, DismissReason::Escape));
        assert_eq!(doc.attribute(modal.container(), "aria-hidden").as_deref(), Some("true"));
    }

    #[test]
    fn test_click_targets() {
        let (doc, modal, _) = setup(&PageConfig::default());
        let panel = doc.query(&Selector::class("modal-panel")).unwrap();
        let close = doc.query(&Selector::class("modal-close")).unwrap();

        assert!(modal.is_backdrop(modal.container()));
        assert!(!modal.is_backdrop(panel));
        assert!(modal.owns_close_click(&doc, close));
        assert!(!modal.owns_close_click(&doc, panel));
    }

    #[test]
    fn test_focus_restoration() {
        let (mut doc, mut modal, catalog) = setup(&PageConfig::default());
        let cta = catalog.cards()[0].cta;

        modal.open(&mut doc, &catalog.cards()[0].summary, Some(cta));
        modal.close(&mut doc, DismissReason::Escape);
        assert_eq!(doc.focused(), Some(cta));

        let config = PageConfig {
            restore_focus: false,
            ..Default::default()
        };
        let (mut doc, mut modal, catalog) = setup(&config);
        let cta = catalog.cards()[0].cta;
        modal.open(&mut doc, &catalog.cards()[0].summary, Some(cta));
        modal.close(&mut doc, DismissReason::Escape);
        assert_ne!(doc.focused(), Some(cta));
    }

    #[test]
    fn test_removed_trigger_is_not_focused() {
        let (mut doc, mut modal, catalog) = setup(&PageConfig::default());
        let card = catalog.cards()[1].clone();

        modal.open(&mut doc, &card.summary, Some(card.cta));
        doc.remove(card.card);
        assert!(modal.close(&mut doc, DismissReason::Backdrop));
        assert!(doc.focused().is_some_and(|el| el != card.cta));
    }

    #[test]
    fn test_reopen_replaces_content() {
        let mut state = ModalState::Closed;
        for title in ["Alpha", "Beta"] {
            transition(
                &mut state,
                ModalEvent::Open {
                    title: title.into(),
                    body: String::new(),
                    trigger: None,
                },
            );
        }
        assert!(matches!(state, ModalState::Open { ref title, .. } if title == "Beta"));
    }
}
