//! Per-pixel trajectory integration.
//!
//! A particle starts at rest on a pixel and is advanced through the field
//! until it is captured or runs out of steps. Each step accumulates the
//! sampled force into the velocity, then moves the position by the whole
//! accumulated velocity. The time step is already folded into the force
//! scaling, so there is no explicit `dt` here.

use crate::{
    config::Config,
    field_lut::FieldSource,
    types::{Color, FieldSample},
};
use glam::Vec2;

/// Terminal state of a single trajectory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trajectory {
    /// Entered an attractor's capture radius on step `steps` (0-based).
    Captured { color: Color, steps: u32 },
    /// Used the whole iteration budget without capture.
    Exhausted { steps: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Integrator {
    iterations: u32,
    drag: f32,
    background: Color,
}

impl Integrator {
    pub fn new(iterations: u32, drag: f32, background: Color) -> Self {
        Self {
            iterations,
            drag,
            background,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.iterations, cfg.drag, cfg.background)
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Follows the particle starting at `start` through `field`.
    pub fn trace<S: FieldSource + ?Sized>(&self, start: Vec2, field: &S) -> Trajectory {
        let mut pos = start;
        let mut velocity = Vec2::ZERO;

        for step in 0..self.iterations {
            match field.sample(pos) {
                FieldSample::Captured(color) => {
                    return Trajectory::Captured { color, steps: step };
                }
                FieldSample::Field(force) => {
                    velocity += force;
                    pos += velocity;
                    velocity *= self.drag;
                }
            }
        }

        Trajectory::Exhausted {
            steps: self.iterations,
        }
    }

    /// Color of the pixel whose particle starts at `start`: the capturing
    /// attractor's color, or the background if the budget runs out.
    #[inline]
    pub fn color_for<S: FieldSource + ?Sized>(&self, start: Vec2, field: &S) -> Color {
        match self.trace(start, field) {
            Trajectory::Captured { color, .. } => color,
            Trajectory::Exhausted { .. } => self.background,
        }
    }
}
