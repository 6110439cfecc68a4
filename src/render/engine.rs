use crate::{
    animation::model::{PixelStats, TriangleModel},
    foundation::core::{Point, PointI, Rgba8, rotate_about},
    foundation::error::{TrishardError, TrishardResult},
    geometry::triangle::Triangle,
    mesh::Mesh,
    render::frame::Frame,
    render::texture::Texture,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// How interior pixels sample the source texture.
pub enum SamplingMode {
    /// Round to the nearest source texel.
    Nearest,
    /// Blend the surrounding 2x2 texel neighborhood.
    Bilinear,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Where the per-pixel blend weight comes from.
pub enum AlphaMode {
    /// Every interior pixel is applied fully.
    Opaque,
    /// Weight each pixel by the sampled texel's alpha channel.
    Weighted,
}

/// Normalized-space offset applied before scaling into the sub-window. Also
/// the allowed margin around the unit square for placed triangles.
const OFFSET: f64 = 0.75;

/// Iteration cap per edge-walk phase. Exceeding it means the walk failed to
/// terminate, which is a defect, not a recoverable condition.
const WALK_CAP: u32 = 100_000;

/// Blend weights within this distance of 1 count as fully applied.
const OPAQUE_EPSILON: f64 = 1e-4;

/// Rasterize every mesh triangle for a global `progress` in [0, 1].
///
/// For each model the engine rotates the texture triangle about its own
/// centroid by `rotation_degrees * progress`, moves its centroid to the
/// motion curve evaluated at `1 - progress`, scales the result into the
/// frame's sub-window and scan-converts it: black border pixels along the
/// edges, texture-sampled interior spans blended onto `frame`. Progress 0 is
/// the solved state (no rotation, curve anchor = texture centroid).
///
/// Each model's screen placement and pixel counters are updated in place.
#[tracing::instrument(skip(mesh, frame, texture))]
pub fn render(
    mesh: &mut Mesh,
    progress: f64,
    frame: &mut Frame,
    texture: &Texture,
    sampling: SamplingMode,
    alpha: AlphaMode,
) -> TrishardResult<()> {
    if !(0.0..=1.0).contains(&progress) {
        return Err(TrishardError::validation(format!(
            "progress {progress} outside [0, 1]"
        )));
    }
    // Sub-window scale: four tenths of the destination per axis, with the
    // historical truncating division.
    let scale_x = i64::from(frame.width() / 10) * 4;
    let scale_y = i64::from(frame.height() / 10) * 4;
    if scale_x == 0 || scale_y == 0 {
        return Err(TrishardError::validation(format!(
            "frame {}x{} too small for the animation sub-window",
            frame.width(),
            frame.height()
        )));
    }

    for model in mesh.models_mut() {
        rasterize_model(model, progress, frame, texture, scale_x, scale_y, sampling, alpha)?;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn rasterize_model(
    model: &mut TriangleModel,
    progress: f64,
    frame: &mut Frame,
    texture: &Texture,
    scale_x: i64,
    scale_y: i64,
    sampling: SamplingMode,
    alpha: AlphaMode,
) -> TrishardResult<()> {
    let tex_tri = *model.texture_triangle();
    let centroid = tex_tri.centroid();
    let degrees = model.rotation_degrees() * progress;

    // The curve anchor stays inside the control point domain by convex hull;
    // the placement margin below is the check that can actually fail.
    let anchor = model.curve().point_at(1.0 - progress);
    let placed = tex_tri
        .rotated_about(centroid, degrees)
        .translated(anchor - centroid);

    for v in placed.vertices() {
        if !(-OFFSET..=1.0 + OFFSET).contains(&v.x) || !(-OFFSET..=1.0 + OFFSET).contains(&v.y) {
            return Err(TrishardError::geometry(format!(
                "placed vertex ({}, {}) outside the [-{OFFSET}, {}] halo",
                v.x,
                v.y,
                1.0 + OFFSET
            )));
        }
    }

    let screen = scale_to_screen(&placed, scale_x, scale_y, frame)?;
    model.set_current(screen);

    let mut painter = SpanPainter {
        frame,
        texture,
        sampling,
        alpha,
        scale_x: scale_x as f64,
        scale_y: scale_y as f64,
        centroid,
        anchor,
        degrees,
        stats: PixelStats::default(),
    };
    walk_edges(&screen, &mut painter)?;

    let mut stats = painter.stats;
    stats.total += stats.border;
    model.set_stats(stats);
    Ok(())
}

/// Map a placed normalized triangle to strictly in-bounds pixel coordinates.
fn scale_to_screen(
    placed: &Triangle<Point>,
    scale_x: i64,
    scale_y: i64,
    frame: &Frame,
) -> TrishardResult<Triangle<PointI>> {
    let scale = |v: Point| {
        PointI::new(
            ((v.x + OFFSET) * scale_x as f64) as i32,
            ((v.y + OFFSET) * scale_y as f64) as i32,
        )
    };
    let [a, b, c] = placed.vertices().map(scale);
    for p in [a, b, c] {
        if p.x <= 0
            || p.x >= frame.width() as i32
            || p.y <= 0
            || p.y >= frame.height() as i32
        {
            return Err(TrishardError::geometry(format!(
                "scaled vertex ({}, {}) outside the {}x{} frame",
                p.x,
                p.y,
                frame.width(),
                frame.height()
            )));
        }
    }
    Ok(Triangle::new(a, b, c))
}

/// Dual-edge scanline walk over a screen triangle.
///
/// Two Bresenham trackers descend from the top vertex along the edges to the
/// middle and bottom vertices. Whenever both sit on the same scanline with an
/// unfilled span between them, the span is filled before either advances.
/// When the short tracker reaches the middle vertex it is replaced by one for
/// the middle-to-bottom edge and the walk resumes until both trackers reach
/// the bottom vertex.
fn walk_edges(screen: &Triangle<PointI>, painter: &mut SpanPainter<'_>) -> TrishardResult<()> {
    let [a, b, c] = screen.vertices();

    // Upper phase: a->b against the long edge a->c.
    let mut short = EdgeTracker::new(a, b);
    let mut long = EdgeTracker::new(a, c);
    let mut filled = true;
    painter.stamp(b.x, b.y);

    let mut steps = 0u32;
    while !short.at_end() {
        if steps >= WALK_CAP {
            return Err(TrishardError::raster("upper edge walk exceeded iteration cap"));
        }
        steps += 1;
        if short.y == long.y && !filled {
            painter.fill(short.y, short.x, long.x);
            filled = true;
        } else if short.y <= long.y {
            painter.stamp(short.x, short.y);
            filled &= !short.step();
        } else {
            painter.stamp(long.x, long.y);
            filled &= !long.step();
        }
    }

    // Lower phase: b->c against the still-advancing long edge.
    let mut short = EdgeTracker::new(b, c);
    filled = true;
    painter.stamp(c.x, c.y);

    let mut steps = 0u32;
    loop {
        if steps >= WALK_CAP {
            return Err(TrishardError::raster("lower edge walk exceeded iteration cap"));
        }
        steps += 1;
        if short.y == long.y && !filled {
            painter.fill(short.y, short.x, long.x);
            filled = true;
        } else if short.y <= long.y && !short.at_end() {
            painter.stamp(short.x, short.y);
            filled &= !short.step();
        } else if long.y <= short.y && !long.at_end() {
            painter.stamp(long.x, long.y);
            filled &= !long.step();
        } else {
            break;
        }
    }
    Ok(())
}

/// Integer-error line tracker for one triangle edge, advancing at most one
/// pixel step at a time so two trackers can be kept on the same scanline.
struct EdgeTracker {
    x: i32,
    y: i32,
    end_x: i32,
    end_y: i32,
    sx: i32,
    dx: i32,
    dy: i32,
    err: i32,
}

impl EdgeTracker {
    fn new(from: PointI, to: PointI) -> Self {
        let dx = (to.x - from.x).abs();
        // Canonical vertex order guarantees dy >= 0.
        let dy = to.y - from.y;
        Self {
            x: from.x,
            y: from.y,
            end_x: to.x,
            end_y: to.y,
            sx: if from.x < to.x { 1 } else { -1 },
            dx,
            dy,
            err: dx - dy,
        }
    }

    fn at_end(&self) -> bool {
        self.x == self.end_x && self.y >= self.end_y
    }

    /// Advance one Bresenham step; true when a new scanline was entered.
    fn step(&mut self) -> bool {
        let doubled = self.err * 2;
        let mut descended = false;
        if doubled > -self.dy {
            self.x += self.sx;
            self.err -= self.dy;
        }
        if doubled < self.dx {
            self.y += 1;
            self.err += self.dx;
            descended = true;
        }
        descended
    }
}

/// Pixel sink for one triangle: border stamping, span filling via inverse
/// texture mapping, and counter accumulation.
struct SpanPainter<'a> {
    frame: &'a mut Frame,
    texture: &'a Texture,
    sampling: SamplingMode,
    alpha: AlphaMode,
    scale_x: f64,
    scale_y: f64,
    centroid: Point,
    anchor: Point,
    degrees: f64,
    stats: PixelStats,
}

impl SpanPainter<'_> {
    fn stamp(&mut self, x: i32, y: i32) {
        self.frame.set_pixel(x as u32, y as u32, Rgba8::BLACK);
        self.stats.border += 1;
    }

    /// Fill the open span between two tracker columns on scanline `y`.
    fn fill(&mut self, y: i32, xa: i32, xb: i32) {
        let (left, right) = (xa.min(xb), xa.max(xb));
        for x in left + 1..right {
            let (u, v) = self.to_texture_coords(x, y);
            let color = match self.sampling {
                SamplingMode::Nearest => self.texture.sample_nearest(u, v),
                SamplingMode::Bilinear => self.texture.sample_bilinear(u, v),
            };
            let weight = match self.alpha {
                AlphaMode::Opaque => 1.0,
                AlphaMode::Weighted => f64::from(color.a) / 255.0,
            };
            if (weight - 1.0).abs() < OPAQUE_EPSILON {
                self.stats.opaque += 1;
            }

            let dst = self.frame.pixel(x as u32, y as u32);
            let mix = |d: u8, s: u8| ((1.0 - weight) * f64::from(d) + weight * f64::from(s)) as u8;
            self.frame.set_pixel(
                x as u32,
                y as u32,
                Rgba8::new(mix(dst.r, color.r), mix(dst.g, color.g), mix(dst.b, color.b), 255),
            );
            self.stats.total += 1;
        }
    }

    /// Invert the placement transform for a destination pixel: un-scale,
    /// un-translate, un-rotate, then clamp away floating point drift.
    fn to_texture_coords(&self, x: i32, y: i32) -> (f64, f64) {
        let p = Point::new(
            f64::from(x) / self.scale_x - OFFSET,
            f64::from(y) / self.scale_y - OFFSET,
        );
        let q = p + (self.centroid - self.anchor);
        let t = rotate_about(q, self.centroid, -self.degrees);
        (t.x.clamp(0.0, 1.0), t.y.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/engine.rs"]
mod tests;
