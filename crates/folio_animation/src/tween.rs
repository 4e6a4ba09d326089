//! Tween descriptions
//!
//! A [`Tween`] says which visual properties move, in which direction, and
//! with what timing. Durations and delays are in seconds, matching the
//! units animation engines take.

use std::fmt;

use folio_core::ElementId;

use crate::easing::Easing;

/// Partial visual state; `None` properties are left alone
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisualState {
    /// Vertical translation in logical pixels
    pub y: Option<f32>,
    pub opacity: Option<f32>,
    /// Rotation in degrees
    pub rotation: Option<f32>,
}

impl VisualState {
    /// Shifted down by `y` and fully transparent
    pub fn hidden_below(y: f32) -> Self {
        Self {
            y: Some(y),
            opacity: Some(0.0),
            rotation: None,
        }
    }
}

/// Whether the tween's state is the start or the end
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenDirection {
    /// Animate from the given state to the element's current appearance
    From,
    /// Animate from the current appearance to the given state
    To,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Repeat {
    #[default]
    Once,
    Infinite,
}

/// A single animation request
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub direction: TweenDirection,
    pub state: VisualState,
    pub duration: f32,
    pub delay: f32,
    /// Extra delay per target when the tween covers several elements
    pub stagger: f32,
    pub easing: Easing,
    pub repeat: Repeat,
    /// Reverse direction on every other repetition
    pub yoyo: bool,
}

impl Tween {
    pub fn from(state: VisualState) -> Self {
        Self::new(TweenDirection::From, state)
    }

    pub fn to(state: VisualState) -> Self {
        Self::new(TweenDirection::To, state)
    }

    fn new(direction: TweenDirection, state: VisualState) -> Self {
        Self {
            direction,
            state,
            duration: 0.5,
            delay: 0.0,
            stagger: 0.0,
            easing: Easing::default(),
            repeat: Repeat::Once,
            yoyo: false,
        }
    }

    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration = seconds;
        self
    }

    pub fn delay(mut self, seconds: f32) -> Self {
        self.delay = seconds;
        self
    }

    pub fn stagger(mut self, seconds: f32) -> Self {
        self.stagger = seconds;
        self
    }

    pub fn ease(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn repeat_forever(mut self) -> Self {
        self.repeat = Repeat::Infinite;
        self
    }

    pub fn yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

}

/// "Start when the element's top edge reaches `viewport_fraction` of the
/// viewport height", e.g. `top 85%`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportThreshold {
    pub viewport_fraction: f32,
}

impl ViewportThreshold {
    pub fn top_at(viewport_fraction: f32) -> Self {
        Self { viewport_fraction }
    }
}

impl fmt::Display for ViewportThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "top {}%", (self.viewport_fraction * 100.0).round())
    }
}

/// Scroll gate for a tween
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTrigger {
    pub trigger: ElementId,
    pub start: ViewportThreshold,
}

impl ScrollTrigger {
    pub fn new(trigger: ElementId, start: ViewportThreshold) -> Self {
        Self { trigger, start }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_stagger() {
        let tween = Tween::from(VisualState::hidden_below(20.0))
            .duration(0.7)
            .delay(0.1)
            .stagger(0.08)
            .ease(Easing::Power2Out);

        assert_eq!(tween.direction, TweenDirection::From);
        assert_eq!(tween.state.opacity, Some(0.0));
        assert!((tween.delay - 0.1).abs() < 1e-6);
        assert!((tween.stagger - 0.08).abs() < 1e-6);
        assert_eq!(tween.repeat, Repeat::Once);
    }

    #[test]
    fn test_threshold() {
        let start = ViewportThreshold::top_at(0.85);
        assert_eq!(start.to_string(), "top 85%");
    }
}
