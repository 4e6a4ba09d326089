//! Animation engine capability
//!
//! The host implements [`AnimationEngine`] over whatever tweening library it
//! has. Registrations are fire-and-forget: the page never asks about them
//! again.

use folio_core::ElementId;

use crate::tween::{ScrollTrigger, Tween};

/// The capability set the page needs from an animation engine
pub trait AnimationEngine {
    /// Play `tween` on `target` once, immediately (after its delay)
    fn register_entrance(&mut self, target: ElementId, tween: Tween);

    /// Play `tween` across `targets` once `trigger` is reached
    fn register_scroll_gated(&mut self, targets: Vec<ElementId>, tween: Tween, trigger: ScrollTrigger);

    /// Play `tween` on `target` forever
    fn register_infinite(&mut self, target: ElementId, tween: Tween);
}

/// A recorded registration
#[derive(Clone, Debug, PartialEq)]
pub enum Registration {
    Entrance {
        target: ElementId,
        tween: Tween,
    },
    ScrollGated {
        targets: Vec<ElementId>,
        tween: Tween,
        trigger: ScrollTrigger,
    },
    Infinite {
        target: ElementId,
        tween: Tween,
    },
}

/// Engine that records registrations without animating anything
#[derive(Clone, Debug, Default)]
pub struct RecordingEngine {
    registrations: Vec<Registration>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    pub fn entrances(&self) -> impl Iterator<Item = (ElementId, &Tween)> {
        self.registrations.iter().filter_map(|r| match r {
            Registration::Entrance { target, tween } => Some((*target, tween)),
            _ => None,
        })
    }

    pub fn scroll_gated(&self) -> impl Iterator<Item = (&[ElementId], &Tween, &ScrollTrigger)> {
        self.registrations.iter().filter_map(|r| match r {
            Registration::ScrollGated {
                targets,
                tween,
                trigger,
            } => Some((targets.as_slice(), tween, trigger)),
            _ => None,
        })
    }

    pub fn infinite(&self) -> impl Iterator<Item = (ElementId, &Tween)> {
        self.registrations.iter().filter_map(|r| match r {
            Registration::Infinite { target, tween } => Some((*target, tween)),
            _ => None,
        })
    }
}

impl AnimationEngine for RecordingEngine {
    fn register_entrance(&mut self, target: ElementId, tween: Tween) {
        self.registrations.push(Registration::Entrance { target, tween });
    }

    fn register_scroll_gated(&mut self, targets: Vec<ElementId>, tween: Tween, trigger: ScrollTrigger) {
        self.registrations.push(Registration::ScrollGated {
            targets,
            tween,
            trigger,
        });
    }

    fn register_infinite(&mut self, target: ElementId, tween: Tween) {
        self.registrations.push(Registration::Infinite { target, tween });
    }
}
