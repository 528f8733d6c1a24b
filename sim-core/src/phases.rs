//! High-level render phases.
//!
//! A render runs in two phases:
//! 1. [`field_phase`] — evaluates the attractor field once per pixel into a
//!    [`FieldLut`].
//! 2. [`render_phase`] — integrates one trajectory per pixel across the
//!    worker bands and times it.
//!
//! [`render_image`] chains both, or skips the table entirely when
//! [`Config::use_lut`] is off.

use crate::{
    config::Config,
    field_lut::{FieldLut, FieldSource},
    force::ForceModel,
    image::ColorBuffer,
    integrator::Integrator,
    scheduler,
};
use std::time::{Duration, Instant};

/// Output of [`render_phase`].
#[derive(Debug)]
pub struct Rendered {
    pub image: ColorBuffer,
    /// Wall-clock time of the trajectory pass only.
    pub elapsed: Duration,
}

/// Builds the field table for `cfg`'s image, using `cfg.workers` threads.
pub fn field_phase(cfg: &Config) -> FieldLut {
    let started = Instant::now();
    let lut = FieldLut::build(
        ForceModel::from_config(cfg),
        cfg.width,
        cfg.height,
        cfg.workers,
    );
    log::debug!("field table ready in {:?}", started.elapsed());
    lut
}

/// Colors every pixel of `cfg`'s image by integrating through `field`.
///
/// ### Parameters
/// - `cfg` - Image size, worker count, and integrator settings.
/// - `field` - Field to sample; either a prebuilt [`FieldLut`] or a bare
///   [`ForceModel`].
///
/// ### Returns
/// The finished image and the time spent producing it.
pub fn render_phase<S: FieldSource>(cfg: &Config, field: &S) -> Rendered {
    let integrator = Integrator::from_config(cfg);

    let started = Instant::now();
    let image = scheduler::render(cfg.width, cfg.height, cfg.workers, &integrator, field);
    let elapsed = started.elapsed();

    Rendered { image, elapsed }
}

/// Runs the full pipeline for `cfg`.
pub fn render_image(cfg: &Config) -> Rendered {
    if cfg.use_lut {
        let lut = field_phase(cfg);
        render_phase(cfg, &lut)
    } else {
        render_phase(cfg, &ForceModel::from_config(cfg))
    }
}
