//! The bloom controller
//!
//! Owns animation time and progress, and writes transform and color
//! values onto the flower model each tick: a short initial delay, then
//! six overlapping eased phases from bud to full bloom, then a
//! continuous idle sway.

use std::f32::consts::TAU;
use crate::config::FlowerConfig;
use crate::math::Color;
use crate::model::{Flower, MIN_SCALE};
use super::easing::{ease, lerp, Easing};
use super::phase::PhaseSchedule;

/// Drives the flower from bud to bloom and keeps it swaying afterwards.
/// Borrows the flower mutably per call; it is the sole writer of the
/// model's mutable fields.
#[derive(Debug, Clone)]
pub struct BloomController {
    /// Accumulated seconds since construction or last reset
    elapsed: f32,
    /// Overall bloom completion in [0, 1]
    progress: f32,
    /// Latched once progress reaches 1; switches on the idle sway
    bloomed: bool,
    schedule: PhaseSchedule,

    // Constants captured from config at construction. The color pairs
    // are copies, independent of the model's live material colors.
    bloom_duration: f32,
    initial_delay: f32,
    bud_inner: Color,
    bloom_inner: Color,
    bud_outer: Color,
    bloom_outer: Color,
    inner_open_angle: f32,
    outer_open_angle: f32,
}

impl BloomController {
    pub fn new(config: &FlowerConfig) -> Self {
        Self {
            elapsed: 0.0,
            progress: 0.0,
            bloomed: false,
            schedule: PhaseSchedule::default(),
            bloom_duration: config.bloom_duration,
            initial_delay: config.initial_delay,
            bud_inner: config.inner_petals.bud_color,
            bloom_inner: config.inner_petals.bloom_color,
            bud_outer: config.outer_petals.bud_color,
            bloom_outer: config.outer_petals.bloom_color,
            inner_open_angle: config.inner_petals.open_angle,
            outer_open_angle: config.outer_petals.open_angle,
        }
    }

    /// Advance the animation by dt seconds and write the resulting pose
    /// into the flower. dt is assumed small and non-negative; the host
    /// clamps frame hitches before calling.
    pub fn update(&mut self, dt: f32, flower: &mut Flower) {
        self.elapsed += dt;
        if self.elapsed - self.initial_delay < 0.0 {
            return;
        }

        if !self.bloomed {
            self.progress = (self.progress + dt / self.bloom_duration).min(1.0);
            if self.progress >= 1.0 {
                self.bloomed = true;
            }
        }

        self.apply_phases(flower);

        // Second, explicitly ordered pass: overwrites petal and root
        // rotations once the bloom has finished
        if self.bloomed {
            self.idle_sway(flower);
        }
    }

    /// Phase-driven pose, a pure function of progress
    fn apply_phases(&self, flower: &mut Flower) {
        let schedule = &self.schedule;

        // Stem grows first; the head anchor rides its top
        let stem_t = ease(schedule.stem.local_t(self.progress), Easing::OutQuad);
        flower.stem.scale.y = lerp(MIN_SCALE, 1.0, stem_t);
        let stem_height = flower.stem_world_height();
        flower.head.position.y = stem_height;

        // Leaves ride up with the growing stem
        let leaf_t = ease(schedule.leaf.local_t(self.progress), Easing::OutQuad);
        for leaf in &mut flower.leaves {
            leaf.transform.position.y = leaf.height_fraction * stem_height;
            let s = lerp(MIN_SCALE, leaf.target_scale, leaf_t);
            leaf.transform.set_scale_uniform(s);
        }

        // Center pistil, flattened on y
        let center_t = ease(schedule.center.local_t(self.progress), Easing::InOutCubic);
        let cs = lerp(MIN_SCALE, 1.0, center_t);
        flower.center.scale.x = cs;
        flower.center.scale.y = cs * 0.75;
        flower.center.scale.z = cs;

        // Petal rings open in unison within each ring
        let inner_t = ease(schedule.inner.local_t(self.progress), Easing::OutBack);
        for petal in &mut flower.inner_petals {
            petal.opener = inner_t * self.inner_open_angle;
        }

        let outer_t = ease(schedule.outer.local_t(self.progress), Easing::OutBack);
        for petal in &mut flower.outer_petals {
            petal.opener = outer_t * self.outer_open_angle;
        }

        // Bud-to-bloom color transition
        let color_t = ease(schedule.color.local_t(self.progress), Easing::InOutCubic);
        flower.inner_material.color = self.bud_inner.lerp(&self.bloom_inner, color_t);
        flower.outer_material.color = self.bud_outer.lerp(&self.bloom_outer, color_t);
    }

    /// Continuous low-amplitude oscillation, a pure function of elapsed
    /// time. Per-petal phase offsets are spaced evenly around each ring
    /// so petals sway out of sync.
    fn idle_sway(&self, flower: &mut Flower) {
        let t = self.elapsed;

        flower.root.rotation.z = (t * 0.7).sin() * 0.025;
        flower.root.rotation.x = (t * 0.5 + 1.0).sin() * 0.018;

        let inner_count = flower.inner_petals.len() as f32;
        for (i, petal) in flower.inner_petals.iter_mut().enumerate() {
            let phase = (i as f32 / inner_count) * TAU;
            petal.opener = self.inner_open_angle + (t * 1.2 + phase).sin() * 0.04;
        }

        let outer_count = flower.outer_petals.len() as f32;
        for (i, petal) in flower.outer_petals.iter_mut().enumerate() {
            let phase = (i as f32 / outer_count) * TAU;
            petal.opener = self.outer_open_angle + (t * 0.9 + phase).sin() * 0.03;
        }
    }

    /// Hard synchronous reset: zero the internal state and snap the
    /// flower back to its pre-bloom pose
    pub fn reset(&mut self, flower: &mut Flower) {
        self.elapsed = 0.0;
        self.progress = 0.0;
        self.bloomed = false;

        flower.root.rotation = crate::math::Vec3::ZERO;
        flower.stem.scale.y = MIN_SCALE;
        flower.head.position.y = 0.0;
        flower.center.set_scale_uniform(MIN_SCALE);
        flower.inner_material.color = self.bud_inner;
        flower.outer_material.color = self.bud_outer;
        for petal in &mut flower.inner_petals {
            petal.opener = 0.0;
        }
        for petal in &mut flower.outer_petals {
            petal.opener = 0.0;
        }
        for leaf in &mut flower.leaves {
            leaf.transform.set_scale_uniform(MIN_SCALE);
            leaf.transform.position.y = 0.0;
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_bloomed(&self) -> bool {
        self.bloomed
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
