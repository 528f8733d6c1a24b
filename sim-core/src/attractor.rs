use crate::types::Color;
use glam::Vec2;

/// A fixed point in image space exerting an inverse-square pull.
#[derive(Clone, Debug, PartialEq)]
pub struct Attractor {
    pub pos: Vec2,
    pub strength: f32,
    pub color: Color,
}

/// Configuration form of an attractor.
///
/// The position is expressed as fractions of the image width and height so
/// the same layout works at every resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttractorSpec {
    pub fx: f64,
    pub fy: f64,
    pub strength: f32,
    pub color: Color,
}

impl AttractorSpec {
    pub const fn new(fx: f64, fy: f64, strength: f32, color: Color) -> Self {
        Self {
            fx,
            fy,
            strength,
            color,
        }
    }

    /// Places this attractor on an image of the given size.
    pub fn scale(&self, width: usize, height: usize) -> Attractor {
        Attractor {
            pos: Vec2::new(
                (self.fx * width as f64) as f32,
                (self.fy * height as f64) as f32,
            ),
            strength: self.strength,
            color: self.color,
        }
    }
}

/// Ordered, immutable set of attractors.
///
/// The order is significant: when a point lies within capture range of
/// several attractors, the first one in this list wins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttractorSet {
    pub points: Vec<Attractor>,
}

impl AttractorSet {
    pub fn from_attractors(points: Vec<Attractor>) -> Self {
        Self { points }
    }

    pub fn from_specs(specs: &[AttractorSpec], width: usize, height: usize) -> Self {
        let points = specs
            .iter()
            .map(|spec| spec.scale(width, height))
            .collect();

        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_specs_scales_fractions_to_pixels() {
        let specs = [
            AttractorSpec::new(0.5, 0.25, 1.0, Color::RED),
            AttractorSpec::new(0.0, 1.0, 2.0, Color::BLUE),
        ];

        let set = AttractorSet::from_specs(&specs, 200, 400);

        assert_eq!(set.len(), 2);
        assert_eq!(set.points[0].pos, Vec2::new(100.0, 100.0));
        assert_eq!(set.points[0].color, Color::RED);
        assert_eq!(set.points[1].pos, Vec2::new(0.0, 400.0));
        assert_eq!(set.points[1].strength, 2.0);
    }

    #[test]
    fn from_specs_keeps_declared_order() {
        let specs = [
            AttractorSpec::new(0.1, 0.1, 1.0, Color::GREEN),
            AttractorSpec::new(0.9, 0.9, 1.0, Color::RED),
        ];

        let set = AttractorSet::from_specs(&specs, 10, 10);
        let colors: Vec<Color> = set.points.iter().map(|a| a.color).collect();

        assert_eq!(colors, vec![Color::GREEN, Color::RED]);
    }
}
