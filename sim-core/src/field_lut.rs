use crate::{
    force::ForceModel,
    scheduler::{fill_bands, partition_rows},
    types::FieldSample,
};
use glam::Vec2;

/// Anything a trajectory can query for the field at a point.
///
/// Sources are shared read-only across worker threads.
pub trait FieldSource: Sync {
    fn sample(&self, point: Vec2) -> FieldSample;
}

impl FieldSource for ForceModel {
    #[inline]
    fn sample(&self, point: Vec2) -> FieldSample {
        self.evaluate(point)
    }
}

/// Precomputed [`ForceModel`] results for every integer cell of the image.
///
/// The table is immutable once built. Queries outside the image fall back
/// to evaluating the owned model directly.
#[derive(Clone, Debug)]
pub struct FieldLut {
    width: usize,
    height: usize,
    entries: Vec<FieldSample>,
    model: ForceModel,
}

impl FieldLut {
    /// Evaluates `model` at every cell `(x, y)` in `[0, width) × [0, height)`.
    ///
    /// Rows are split across `workers` threads the same way rendering splits
    /// them. The table is complete when this returns.
    pub fn build(model: ForceModel, width: usize, height: usize, workers: usize) -> Self {
        log::debug!("building {width}x{height} field table on {workers} workers");

        let mut entries = vec![FieldSample::Field(Vec2::ZERO); width * height];
        let bands = partition_rows(height, workers);
        fill_bands(&mut entries, width, &bands, |x, y| {
            model.evaluate(Vec2::new(x as f32, y as f32))
        });

        Self {
            width,
            height,
            entries,
            model,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Stored entry for an integer cell.
    ///
    /// ### Panics
    /// Panics if `(x, y)` lies outside the table.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> FieldSample {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of bounds");
        self.entries[y * self.width + x]
    }

    #[inline]
    pub fn in_bounds(&self, point: Vec2) -> bool {
        point.x >= 0.0
            && point.x < self.width as f32
            && point.y >= 0.0
            && point.y < self.height as f32
    }
}

impl FieldSource for FieldLut {
    /// In-bounds points read the entry of the cell they fall in (coordinates
    /// truncated). Everything else is evaluated directly.
    #[inline]
    fn sample(&self, point: Vec2) -> FieldSample {
        if self.in_bounds(point) {
            self.entries[self.width * point.y as usize + point.x as usize]
        } else {
            self.model.evaluate(point)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        attractor::{Attractor, AttractorSet},
        types::Color,
    };
    use rand::Rng;

    fn model() -> ForceModel {
        let set = AttractorSet::from_attractors(vec![
            Attractor {
                pos: Vec2::new(12.4, 9.0),
                strength: 1.0,
                color: Color::RED,
            },
            Attractor {
                pos: Vec2::new(30.0, 25.5),
                strength: 1.5,
                color: Color::BLACK,
            },
        ]);
        ForceModel::new(set, 4.0, 3.0)
    }

    #[test]
    fn table_matches_direct_evaluation_bit_for_bit() {
        let model = model();
        let lut = FieldLut::build(model.clone(), 40, 33, 4);

        for y in 0..33 {
            for x in 0..40 {
                let direct = model.evaluate(Vec2::new(x as f32, y as f32));
                assert_eq!(lut.get(x, y), direct, "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn worker_count_does_not_change_table() {
        let single = FieldLut::build(model(), 40, 33, 1);
        let many = FieldLut::build(model(), 40, 33, 7);

        assert_eq!(single.entries, many.entries);
    }

    #[test]
    fn black_attractor_cells_are_marked_captured() {
        let lut = FieldLut::build(model(), 40, 33, 2);

        assert_eq!(lut.get(30, 25), FieldSample::Captured(Color::BLACK));
        assert!(!lut.get(0, 0).is_captured());
    }

    #[test]
    fn sample_truncates_in_bounds_points_to_their_cell() {
        let lut = FieldLut::build(model(), 40, 33, 3);
        let mut rng = rand::rng();

        for _ in 0..200 {
            let p = Vec2::new(rng.random_range(0.0..40.0), rng.random_range(0.0..33.0));
            assert_eq!(lut.sample(p), lut.get(p.x as usize, p.y as usize));
        }
    }

    #[test]
    fn sample_out_of_bounds_falls_back_to_model() {
        let model = model();
        let lut = FieldLut::build(model.clone(), 40, 33, 3);

        for p in [
            Vec2::new(-0.5, 10.0),
            Vec2::new(40.0, 10.0),
            Vec2::new(10.0, -3.0),
            Vec2::new(10.0, 33.0),
            Vec2::new(-100.0, 500.0),
        ] {
            assert!(!lut.in_bounds(p));
            assert_eq!(lut.sample(p), model.evaluate(p));
        }
    }

    #[test]
    fn empty_table_is_all_fallback() {
        let lut = FieldLut::build(model(), 0, 0, 4);

        assert!(!lut.in_bounds(Vec2::ZERO));
        assert_eq!(lut.sample(Vec2::ZERO), model().evaluate(Vec2::ZERO));
    }
}
