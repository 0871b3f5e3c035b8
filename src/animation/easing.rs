//! Easing and remapping helpers for the bloom choreography

/// Easing curves used by the bloom phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Decelerating growth, for stem and leaf scale
    OutQuad,
    /// Accelerate then decelerate, for the pistil and color transition
    InOutCubic,
    /// Overshoots past 1 before settling, for the petal pop-open
    OutBack,
}

/// Overshoot factor for `Easing::OutBack`
const BACK_OVERSHOOT: f32 = 1.7;

/// Apply an easing curve to t. Input is clamped to [0, 1]; OutBack may
/// return values above 1 inside the window.
pub fn ease(t: f32, easing: Easing) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::OutQuad => t * (2.0 - t),
        Easing::InOutCubic => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
        Easing::OutBack => {
            let c = BACK_OVERSHOOT;
            1.0 + (c + 1.0) * (t - 1.0).powi(3) + c * (t - 1.0).powi(2)
        }
    }
}

/// Rescale the sub-interval [lo, hi] of v into [0, 1], clamped on both
/// sides. A zero-width (or inverted) window degrades to a step at lo.
pub fn remap(v: f32, lo: f32, hi: f32) -> f32 {
    if hi <= lo {
        return if v < lo { 0.0 } else { 1.0 };
    }
    ((v - lo) / (hi - lo)).clamp(0.0, 1.0)
}

/// Linear interpolation
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
