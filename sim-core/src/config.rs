use crate::{
    attractor::{AttractorSet, AttractorSpec},
    types::Color,
};

/// Image size at a resolution multiplier of `1.0`.
pub const BASE_WIDTH: usize = 2160;
pub const BASE_HEIGHT: usize = 3840;
/// Iteration budget at a precision multiplier of `1.0`.
pub const BASE_ITERATIONS: u32 = 200;
pub const BASE_ITERATION_DURATION: f32 = 20.0;
pub const BASE_DISTANCE_THRESHOLD: f32 = 30.0;

pub const CPU_THREADS: usize = 12;
pub const THREADS_PER_CPU_THREAD: usize = 2;

/// Default attractor layout.
pub const DEFAULT_ATTRACTORS: [AttractorSpec; 3] = [
    AttractorSpec::new(0.31, 0.36, 1.0, Color::RED),
    AttractorSpec::new(0.81, 0.45, 1.0, Color::GREEN),
    AttractorSpec::new(0.42, 0.65, 1.0, Color::BLUE),
];

/// Immutable parameters of a single render.
///
/// Built once at startup and passed by reference to every phase.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// Maximum number of integration steps per pixel.
    pub iterations: u32,
    /// Time step folded into the force scaling as `iteration_duration²`.
    pub iteration_duration: f32,
    /// Capture radius shared by every attractor.
    pub distance_threshold: f32,
    /// Velocity damping applied after each position update. `1.0` disables it.
    pub drag: f32,
    pub background: Color,
    pub workers: usize,
    /// Sample the precomputed field instead of evaluating the attractors at
    /// every in-bounds step.
    pub use_lut: bool,
    pub attractors: Vec<AttractorSpec>,
}

impl Config {
    /// Derives a configuration from the resolution and simulation precision
    /// multipliers.
    ///
    /// Resolution scales the image, the capture radius, and the time step so
    /// the picture keeps its shape. Precision trades a shorter time step for
    /// a proportionally larger iteration budget.
    pub fn scaled(resolution: f32, precision: f32) -> Self {
        Self {
            width: (BASE_WIDTH as f32 * resolution) as usize,
            height: (BASE_HEIGHT as f32 * resolution) as usize,
            iterations: (BASE_ITERATIONS as f32 * precision) as u32,
            iteration_duration: BASE_ITERATION_DURATION / precision * resolution,
            distance_threshold: BASE_DISTANCE_THRESHOLD * resolution,
            drag: 1.0,
            background: Color::BLACK,
            workers: CPU_THREADS * THREADS_PER_CPU_THREAD,
            use_lut: true,
            attractors: DEFAULT_ATTRACTORS.to_vec(),
        }
    }

    #[inline]
    pub fn duration_squared(&self) -> f32 {
        self.iteration_duration * self.iteration_duration
    }

    /// Attractors placed on this configuration's image.
    pub fn attractor_set(&self) -> AttractorSet {
        AttractorSet::from_specs(&self.attractors, self.width, self.height)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::scaled(1.0, 1.0)
    }
}
