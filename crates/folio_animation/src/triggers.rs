//! Page animation triggers
//!
//! Registers the page's motion once at mount:
//!
//! - hero entrance: headline, lead paragraph, device illustration
//! - per project card: scroll-gated entrance, delayed by card index
//! - per section: scroll-gated reveal of headings, paragraphs and cards,
//!   staggered
//! - hero background: slow infinite drift
//!
//! Missing elements only skip their own registration. Without an engine the
//! whole layer is skipped.

use folio_core::{Document, Selector};
use serde::Serialize;
use tracing::{debug, trace};

use crate::easing::Easing;
use crate::engine::AnimationEngine;
use crate::tween::{ScrollTrigger, Tween, ViewportThreshold, VisualState};

/// Fraction of the viewport height a trigger's top edge must pass
const REVEAL_THRESHOLD: f32 = 0.85;

/// Extra delay per project card index, in seconds
const CARD_DELAY_STEP: f32 = 0.05;

/// Stagger between revealed children of a section, in seconds
const SECTION_STAGGER: f32 = 0.08;

/// Which elements each animation applies to
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationTargets {
    pub headline: Selector,
    pub lead: Selector,
    pub device_mock: Selector,
    pub project_card: Selector,
    pub section: Selector,
    /// Children of a section that are revealed together
    pub section_children: Selector,
    pub hero_background: Selector,
}

impl Default for AnimationTargets {
    fn default() -> Self {
        Self {
            headline: Selector::class("headline"),
            lead: Selector::class("lead"),
            device_mock: Selector::class("device-mock"),
            project_card: Selector::class("project-card"),
            section: Selector::class("section"),
            section_children: Selector::tag("h2")
                .or(Selector::tag("p"))
                .or(Selector::class("project-card"))
                .or(Selector::class("about-card"))
                .or(Selector::class("skill")),
            hero_background: Selector::class("hero-bg-grad"),
        }
    }
}

/// How many registrations of each kind were made
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AnimationReport {
    pub engine_available: bool,
    pub entrances: usize,
    pub scroll_gated: usize,
    pub infinite: usize,
}

impl AnimationReport {
    pub fn total(&self) -> usize {
        self.entrances + self.scroll_gated + self.infinite
    }
}

/// Register every page animation with `engine`, if there is one
pub fn register_page_animations<D: Document + ?Sized>(
    doc: &D,
    engine: Option<&mut dyn AnimationEngine>,
    targets: &AnimationTargets,
) -> AnimationReport {
    let Some(engine) = engine else {
        debug!("no animation engine, skipping page animations");
        return AnimationReport::default();
    };

    let mut report = AnimationReport {
        engine_available: true,
        ..Default::default()
    };

    // Hero entrance
    let hero = [
        (
            &targets.headline,
            Tween::from(VisualState::hidden_below(30.0))
                .duration(0.9)
                .ease(Easing::Power3Out),
        ),
        (
            &targets.lead,
            Tween::from(VisualState::hidden_below(18.0))
                .duration(0.9)
                .delay(0.15),
        ),
        (
            &targets.device_mock,
            Tween::from(VisualState::hidden_below(18.0))
                .duration(0.9)
                .delay(0.2),
        ),
    ];
    for (selector, tween) in hero {
        for el in doc.query_all(selector) {
            trace!(ease = tween.easing.name(), delay = tween.delay, "entrance registered");
            engine.register_entrance(el, tween);
            report.entrances += 1;
        }
    }

    let start = ViewportThreshold::top_at(REVEAL_THRESHOLD);

    for (i, card) in doc.query_all(&targets.project_card).into_iter().enumerate() {
        let tween = Tween::from(VisualState::hidden_below(20.0))
            .duration(0.8)
            .delay(CARD_DELAY_STEP * i as f32)
            .ease(Easing::Power2Out);
        engine.register_scroll_gated(vec![card], tween, ScrollTrigger::new(card, start));
        report.scroll_gated += 1;
    }

    for section in doc.query_all(&targets.section) {
        let children = doc.query_within(section, &targets.section_children);
        if children.is_empty() {
            continue;
        }
        let tween = Tween::from(VisualState::hidden_below(20.0))
            .duration(0.7)
            .stagger(SECTION_STAGGER)
            .ease(Easing::Power2Out);
        trace!(%start, targets = children.len(), "section reveal registered");
        engine.register_scroll_gated(children, tween, ScrollTrigger::new(section, start));
        report.scroll_gated += 1;
    }

    // Background drift
    let drift = Tween::to(VisualState {
        y: Some(6.0),
        opacity: None,
        rotation: Some(1.0),
    })
    .duration(8.0)
    .ease(Easing::SineInOut)
    .repeat_forever()
    .yoyo();
    for el in doc.query_all(&targets.hero_background) {
        engine.register_infinite(el, drift);
        report.infinite += 1;
    }

    debug!(
        entrances = report.entrances,
        scroll_gated = report.scroll_gated,
        infinite = report.infinite,
        "page animations registered"
    );
    report
}
