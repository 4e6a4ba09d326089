//! Easing curves

/// Timing curve applied over a tween's duration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out, the usual engine default
    #[default]
    Power1Out,
    /// Cubic ease-out
    Power2Out,
    /// Quartic ease-out
    Power3Out,
    /// Sinusoidal ease-in-out
    SineInOut,
}

impl Easing {
    /// Engine-facing curve name
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "none",
            Easing::Power1Out => "power1.out",
            Easing::Power2Out => "power2.out",
            Easing::Power3Out => "power3.out",
            Easing::SineInOut => "sine.inOut",
        }
    }
}
