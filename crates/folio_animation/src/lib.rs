//! Folio Animation Triggers
//!
//! Declarative motion for the page, registered once at mount against an
//! injected [`AnimationEngine`]. This crate never runs animations itself:
//! it describes them ([`Tween`], [`ScrollTrigger`]) and hands them to
//! whatever engine the host provides.
//!
//! # Features
//!
//! - **Entrance tweens**: one-shot "from" animations for hero content
//! - **Scroll-gated tweens**: start when a trigger element crosses a viewport
//!   threshold, with per-item delay or stagger
//! - **Ambient tweens**: infinite, reversing background motion
//! - **Progressive enhancement**: with no engine, nothing registers and
//!   nothing fails
//! - **RecordingEngine**: an engine that only records, for tests and replay

pub mod easing;
pub mod engine;
pub mod triggers;
pub mod tween;

pub use easing::Easing;
pub use engine::{AnimationEngine, RecordingEngine, Registration};
pub use triggers::{register_page_animations, AnimationReport, AnimationTargets};
pub use tween::{Repeat, ScrollTrigger, Tween, TweenDirection, ViewportThreshold, VisualState};
