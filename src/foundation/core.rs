pub use kurbo::{CubicBez, Point, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Integer pixel coordinate in the destination buffer.
pub struct PointI {
    /// Horizontal pixel coordinate.
    pub x: i32,
    /// Vertical pixel coordinate (y grows downward).
    pub y: i32,
}

impl PointI {
    /// Build a new integer point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for PointI {
    type Output = PointI;

    fn add(self, rhs: PointI) -> PointI {
        PointI::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for PointI {
    type Output = PointI;

    fn sub(self, rhs: PointI) -> PointI {
        PointI::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black, the border stamp color.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white, the canvas clear color.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Build a color from straight channel values.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Rotate `p` about `pivot` by `degrees`.
///
/// Positive angles rotate clockwise in the y-down pixel coordinate system.
/// Both the forward placement transform and the inverse texture mapping go
/// through this helper so that rotating by `d` then `-d` round-trips.
pub fn rotate_about(p: Point, pivot: Point, degrees: f64) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let d = p - pivot;
    pivot + Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
