//! Bloom animation: easing curves, the overlapping phase schedule, and
//! the time-driven controller that writes poses onto the flower model.

mod easing;
mod phase;
mod bloom;

pub use easing::{ease, lerp, remap, Easing};
pub use phase::{Phase, PhaseSchedule};
pub use bloom::BloomController;
