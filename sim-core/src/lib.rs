//! Core attractor-basin rendering library.
//!
//! Every pixel of the image releases a particle at rest that falls through
//! the inverse-square field of a small fixed set of attractors. The pixel
//! takes the color of the attractor that captures it, or the background
//! color if none does within the iteration budget.
//!
//! Main components:
//! - [`attractor`] — attractors and their configured layout.
//! - [`config`] — immutable render configuration.
//! - [`force`] — field and capture evaluation at a point.
//! - [`field_lut`] — precomputed field table and the [`field_lut::FieldSource`] seam.
//! - [`integrator`] — per-pixel trajectory integration.
//! - [`scheduler`] — row-band partitioning and the parallel fan-out.
//! - [`phases`] — high-level render pipeline.
//! - [`image`] — the output color buffer.
//! - [`types`] — shared color and field-sample types.

pub mod attractor;
pub mod config;
pub mod field_lut;
pub mod force;
pub mod image;
pub mod integrator;
pub mod phases;
pub mod scheduler;
pub mod types;
