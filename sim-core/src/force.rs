//! Inverse-square attraction field of the attractor set.

use crate::{attractor::AttractorSet, config::Config, types::FieldSample};
use glam::Vec2;

/// Evaluates the combined pull of all attractors at a point.
#[derive(Clone, Debug)]
pub struct ForceModel {
    attractors: AttractorSet,
    distance_threshold: f32,
    duration_squared: f32,
}

impl ForceModel {
    pub fn new(attractors: AttractorSet, distance_threshold: f32, iteration_duration: f32) -> Self {
        Self {
            attractors,
            distance_threshold,
            duration_squared: iteration_duration * iteration_duration,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            cfg.attractor_set(),
            cfg.distance_threshold,
            cfg.iteration_duration,
        )
    }

    /// Returns the velocity increment at `point`, or the color of the first
    /// attractor (in declared order) whose capture radius contains it.
    ///
    /// Each attractor contributes `delta * strength / distance² * duration²`
    /// where `delta` points from `point` to the attractor. The capture test
    /// uses the linear distance.
    pub fn evaluate(&self, point: Vec2) -> FieldSample {
        let mut field = Vec2::ZERO;

        for a in &self.attractors.points {
            let delta = a.pos - point;
            let distance = (delta.x * delta.x + delta.y * delta.y).sqrt();

            if distance < self.distance_threshold {
                return FieldSample::Captured(a.color);
            }

            let attraction = a.strength / (distance * distance);
            field += delta * attraction * self.duration_squared;
        }

        FieldSample::Field(field)
    }
}
