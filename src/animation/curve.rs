use kurbo::ParamCurve as _;
use rand::Rng;

use crate::foundation::core::{CubicBez, Point};

/// Lower bound of the random control point domain.
pub const CTRL_MIN: f64 = -0.5;
/// Upper bound of the random control point domain.
///
/// Deliberately wider than the unit texture square so a curve can approach
/// its anchor from outside the image.
pub const CTRL_MAX: f64 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Per-triangle cubic Bezier motion path.
///
/// P3 is pinned to the owning triangle's texture-space centroid; P0..P2 are
/// drawn uniformly from [`CTRL_MIN`, `CTRL_MAX`] on each axis. Evaluating at
/// t = 1 therefore lands exactly on the centroid (the solved position) and
/// t = 0 on the random far end.
pub struct MotionCurve {
    bez: CubicBez,
}

impl MotionCurve {
    /// Build a curve anchored at `anchor` with fresh random control points.
    pub fn new(anchor: Point, rng: &mut impl Rng) -> Self {
        Self {
            bez: CubicBez::new(
                random_ctrl(rng),
                random_ctrl(rng),
                random_ctrl(rng),
                anchor,
            ),
        }
    }

    /// Redraw P0..P2 at random; the anchor P3 is untouched.
    pub fn regenerate(&mut self, rng: &mut impl Rng) {
        self.bez.p0 = random_ctrl(rng);
        self.bez.p1 = random_ctrl(rng);
        self.bez.p2 = random_ctrl(rng);
    }

    /// Evaluate the curve at `t` in [0, 1] with the standard cubic blend.
    pub fn point_at(&self, t: f64) -> Point {
        self.bez.eval(t)
    }

    /// The random far end of the path (P0).
    pub fn start(&self) -> Point {
        self.bez.p0
    }

    /// The fixed anchor of the path (P3).
    pub fn anchor(&self) -> Point {
        self.bez.p3
    }
}

fn random_ctrl(rng: &mut impl Rng) -> Point {
    Point::new(
        rng.random_range(CTRL_MIN..=CTRL_MAX),
        rng.random_range(CTRL_MIN..=CTRL_MAX),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
