use rand::Rng;

use crate::{
    animation::curve::MotionCurve,
    foundation::core::{Point, PointI},
    foundation::error::{TrishardError, TrishardResult},
    geometry::triangle::Triangle,
};

/// Full rotation upper bound; per-model degrees are drawn from [0, 360).
const MAX_DEGREES: f64 = 360.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Diagnostic pixel counters, refreshed on every rendered frame.
pub struct PixelStats {
    /// Border pixels stamped during the edge walk.
    pub border: u32,
    /// Border plus interior fill pixels.
    pub total: u32,
    /// Interior pixels whose blend weight was within 1e-4 of 1.
    ///
    /// The historical UI called these "not transparent"; the counter has
    /// always counted near-fully-applied pixels, so it is named for what it
    /// actually counts.
    pub opaque: u32,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
/// One animated mesh triangle.
///
/// Binds a fixed texture-space triangle to a random rotation amount, a
/// random motion curve anchored at the triangle's centroid, and the most
/// recently rasterized screen-space placement.
pub struct TriangleModel {
    texture: Triangle<Point>,
    degrees: f64,
    curve: MotionCurve,
    current: Triangle<PointI>,
    stats: PixelStats,
}

impl TriangleModel {
    /// Build a model for a texture-space triangle.
    ///
    /// All vertex coordinates must lie in the unit square; the mesh builder
    /// guarantees this, anything else is a broken upstream invariant.
    pub fn new(texture: Triangle<Point>, rng: &mut impl Rng) -> TrishardResult<Self> {
        for v in texture.vertices() {
            if !(0.0..=1.0).contains(&v.x) || !(0.0..=1.0).contains(&v.y) {
                return Err(TrishardError::validation(format!(
                    "texture vertex ({}, {}) outside the unit square",
                    v.x, v.y
                )));
            }
        }
        let placeholder = PointI::new(-1, -1);
        Ok(Self {
            curve: MotionCurve::new(texture.centroid(), rng),
            texture,
            degrees: rng.random_range(0.0..MAX_DEGREES),
            current: Triangle::new(placeholder, placeholder, placeholder),
            stats: PixelStats::default(),
        })
    }

    /// The fixed texture-space triangle in [0, 1] coordinates.
    pub fn texture_triangle(&self) -> &Triangle<Point> {
        &self.texture
    }

    /// Full rotation reached at progress 1, in degrees.
    pub fn rotation_degrees(&self) -> f64 {
        self.degrees
    }

    /// The motion curve driving this triangle's position.
    pub fn curve(&self) -> &MotionCurve {
        &self.curve
    }

    /// Most recently rasterized screen-space placement.
    pub fn current_triangle(&self) -> &Triangle<PointI> {
        &self.current
    }

    /// Counters from the most recent rasterization.
    pub fn stats(&self) -> PixelStats {
        self.stats
    }

    /// True when the current screen placement contains `p`.
    pub fn contains(&self, p: PointI) -> bool {
        self.current.contains(p)
    }

    /// Redraw the motion curve's random control points.
    pub fn new_curve(&mut self, rng: &mut impl Rng) {
        self.curve.regenerate(rng);
    }

    /// Assign a fresh random rotation amount.
    pub fn new_degrees(&mut self, rng: &mut impl Rng) {
        self.degrees = rng.random_range(0.0..MAX_DEGREES);
    }

    pub(crate) fn set_current(&mut self, current: Triangle<PointI>) {
        self.current = current;
    }

    pub(crate) fn set_stats(&mut self, stats: PixelStats) {
        self.stats = stats;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/model.rs"]
mod tests;
