//! The bloom choreography: which window of global progress each part
//! animates in. Windows overlap on purpose so parts move concurrently
//! at different rates; the literal boundaries are part of the tuning
//! and must not drift.

use super::easing::remap;

/// A sub-interval of global progress during which one part animates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    pub start: f32,
    pub end: f32,
}

impl Phase {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Local normalized progress within this window
    pub fn local_t(&self, progress: f32) -> f32 {
        remap(progress, self.start, self.end)
    }
}

/// The six phase windows of the bloom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSchedule {
    pub stem: Phase,
    pub leaf: Phase,
    pub center: Phase,
    pub inner: Phase,
    pub outer: Phase,
    pub color: Phase,
}

impl Default for PhaseSchedule {
    fn default() -> Self {
        Self {
            stem: Phase::new(0.00, 0.35),
            leaf: Phase::new(0.10, 0.45),
            center: Phase::new(0.30, 0.70),
            inner: Phase::new(0.25, 0.65),
            outer: Phase::new(0.40, 0.90),
            color: Phase::new(0.20, 0.85),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_boundaries() {
        let s = PhaseSchedule::default();
        assert_eq!(s.stem, Phase::new(0.00, 0.35));
        assert_eq!(s.leaf, Phase::new(0.10, 0.45));
        assert_eq!(s.center, Phase::new(0.30, 0.70));
        assert_eq!(s.inner, Phase::new(0.25, 0.65));
        assert_eq!(s.outer, Phase::new(0.40, 0.90));
        assert_eq!(s.color, Phase::new(0.20, 0.85));
    }

    #[test]
    fn test_windows_overlap() {
        let s = PhaseSchedule::default();
        // At progress 0.3 the stem, leaf, inner, and color windows are
        // all live at once
        assert!(s.stem.local_t(0.3) > 0.0 && s.stem.local_t(0.3) < 1.0);
        assert!(s.leaf.local_t(0.3) > 0.0 && s.leaf.local_t(0.3) < 1.0);
        assert!(s.inner.local_t(0.3) > 0.0 && s.inner.local_t(0.3) < 1.0);
        assert!(s.color.local_t(0.3) > 0.0 && s.color.local_t(0.3) < 1.0);
    }

    #[test]
    fn test_outer_window_is_widest() {
        let s = PhaseSchedule::default();
        let widths = [
            s.stem.end - s.stem.start,
            s.leaf.end - s.leaf.start,
            s.center.end - s.center.start,
            s.inner.end - s.inner.start,
        ];
        let outer_width = s.outer.end - s.outer.start;
        for w in widths {
            assert!(outer_width >= w);
        }
    }

    #[test]
    fn test_local_t_flat_outside_window() {
        let p = Phase::new(0.4, 0.9);
        assert_eq!(p.local_t(0.0), 0.0);
        assert_eq!(p.local_t(0.4), 0.0);
        assert_eq!(p.local_t(0.9), 1.0);
        assert_eq!(p.local_t(1.0), 1.0);
    }
}
