/// An 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Result of querying the attraction field at a point.
///
/// Capture is carried by the variant, never by the color value, so an
/// attractor whose color is all zeros is still distinguishable from a point
/// that is merely under the field's pull.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldSample {
    /// Velocity increment contributed by all attractors at this point.
    Field(glam::Vec2),
    /// The point lies inside an attractor's capture radius.
    Captured(Color),
}

impl FieldSample {
    #[inline]
    pub fn is_captured(&self) -> bool {
        matches!(self, FieldSample::Captured(_))
    }
}
