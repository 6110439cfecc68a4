use rand::Rng;

use crate::{
    animation::model::TriangleModel,
    foundation::core::{Point, PointI},
    foundation::error::{TrishardError, TrishardResult},
    geometry::triangle::Triangle,
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Insertion-ordered collection of animated triangles spanning the source
/// image with no gaps and no overlapping interiors.
///
/// Built once from the source dimensions and a grid step; two right triangles
/// per grid cell. Rebuilding only happens on structural reconfiguration
/// (a different image or step).
pub struct Mesh {
    models: Vec<TriangleModel>,
}

impl Mesh {
    /// Partition a `width` x `height` source into grid triangles.
    ///
    /// `step` is the grid cell size in source pixels and must satisfy
    /// `1 <= step <= min(width, height)`.
    #[tracing::instrument(skip(rng))]
    pub fn build(width: u32, height: u32, step: u32, rng: &mut impl Rng) -> TrishardResult<Self> {
        if width == 0 || height == 0 {
            return Err(TrishardError::validation("source dimensions must be > 0"));
        }
        if step == 0 || step > width.min(height) {
            return Err(TrishardError::validation(format!(
                "grid step {step} not in 1..={}",
                width.min(height)
            )));
        }

        let (w, h) = (f64::from(width), f64::from(height));
        // A cell's far edge snaps to the image border so the last row and
        // column tile exactly even when step does not divide the dimensions.
        let snap_x = |i: u32| (i + step).min(width);
        let snap_y = |j: u32| (j + step).min(height);

        let mut models = Vec::new();
        // Upper-left halves: right angle at the cell's top-left corner.
        for i in (0..width).step_by(step as usize) {
            for j in (0..height).step_by(step as usize) {
                let tri = Triangle::new(
                    Point::new(f64::from(i) / w, f64::from(j) / h),
                    Point::new(f64::from(snap_x(i)) / w, f64::from(j) / h),
                    Point::new(f64::from(i) / w, f64::from(snap_y(j)) / h),
                );
                models.push(TriangleModel::new(tri, rng)?);
            }
        }
        // Lower-right halves: right angle at the cell's bottom-right corner.
        for i in (0..width).step_by(step as usize) {
            for j in (0..height).step_by(step as usize) {
                let tri = Triangle::new(
                    Point::new(f64::from(i) / w, f64::from(snap_y(j)) / h),
                    Point::new(f64::from(snap_x(i)) / w, f64::from(j) / h),
                    Point::new(f64::from(snap_x(i)) / w, f64::from(snap_y(j)) / h),
                );
                models.push(TriangleModel::new(tri, rng)?);
            }
        }

        tracing::debug!(models = models.len(), width, height, step, "mesh built");
        Ok(Self { models })
    }

    /// Models in insertion order.
    pub fn models(&self) -> &[TriangleModel] {
        &self.models
    }

    pub(crate) fn models_mut(&mut self) -> &mut [TriangleModel] {
        &mut self.models
    }

    /// Number of triangle models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// True when the mesh holds no models.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Regenerate every model's motion curve and rotation amount.
    ///
    /// Restarts the animation cycle with fresh randomness; texture triangles
    /// and mesh order are untouched.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        for model in &mut self.models {
            model.new_curve(rng);
            model.new_degrees(rng);
        }
    }

    /// Topmost model whose current screen placement contains `p`.
    ///
    /// Models are scanned in reverse insertion order, so a later model wins
    /// when placements overlap. `None` is "no match", not an error.
    pub fn hit_test(&self, p: PointI) -> Option<usize> {
        self.models.iter().rposition(|m| m.contains(p))
    }
}

#[cfg(test)]
#[path = "../tests/unit/mesh.rs"]
mod tests;
