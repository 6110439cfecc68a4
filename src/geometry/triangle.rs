use crate::foundation::core::{Point, PointI, Vec2, rotate_about};

/// Vertex coordinate usable by [`Triangle`].
///
/// Supplies the canonical ordering test: vertices sort ascending by y, ties
/// broken by ascending x.
pub trait Vertex: Copy {
    /// True when `self` must come after `other` in canonical order.
    fn sorts_after(self, other: Self) -> bool;
}

impl Vertex for Point {
    fn sorts_after(self, other: Self) -> bool {
        self.y > other.y || (self.y == other.y && self.x > other.x)
    }
}

impl Vertex for PointI {
    fn sorts_after(self, other: Self) -> bool {
        (self.y, self.x) > (other.y, other.x)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// An ordered 3-vertex polygon.
///
/// Invariant: vertices are kept in canonical order (`a.y <= b.y <= c.y`,
/// ties by ascending x). Construction and every mutating operation return a
/// re-normalized value, so the invariant can never be observed broken.
pub struct Triangle<P> {
    a: P,
    b: P,
    c: P,
}

impl<P: Vertex> Triangle<P> {
    /// Build a triangle from three vertices in any order.
    pub fn new(a: P, b: P, c: P) -> Self {
        let (mut a, mut b, mut c) = (a, b, c);
        if b.sorts_after(c) {
            std::mem::swap(&mut b, &mut c);
        }
        if a.sorts_after(c) {
            std::mem::swap(&mut a, &mut c);
        }
        if a.sorts_after(b) {
            std::mem::swap(&mut a, &mut b);
        }
        Self { a, b, c }
    }

    /// Topmost vertex in canonical order.
    pub fn a(&self) -> P {
        self.a
    }

    /// Middle vertex in canonical order.
    pub fn b(&self) -> P {
        self.b
    }

    /// Bottom vertex in canonical order.
    pub fn c(&self) -> P {
        self.c
    }

    /// All three vertices in canonical order.
    pub fn vertices(&self) -> [P; 3] {
        [self.a, self.b, self.c]
    }
}

impl Triangle<Point> {
    /// Arithmetic mean of the three vertices.
    pub fn centroid(&self) -> Point {
        Point::new(
            (self.a.x + self.b.x + self.c.x) / 3.0,
            (self.a.y + self.b.y + self.c.y) / 3.0,
        )
    }

    /// Translate all vertices by `v`.
    pub fn translated(&self, v: Vec2) -> Self {
        Self::new(self.a + v, self.b + v, self.c + v)
    }

    /// Rotate all vertices about an external `pivot` by `degrees`.
    pub fn rotated_about(&self, pivot: Point, degrees: f64) -> Self {
        Self::new(
            rotate_about(self.a, pivot, degrees),
            rotate_about(self.b, pivot, degrees),
            rotate_about(self.c, pivot, degrees),
        )
    }
}

impl Triangle<PointI> {
    /// True when `p` lies inside the triangle or on its boundary.
    ///
    /// A point is in iff the triangle's area equals the sum of the three
    /// sub-triangle areas formed by replacing one vertex with `p`. Areas are
    /// doubled cross products on integers, so the comparison is exact.
    pub fn contains(&self, p: PointI) -> bool {
        doubled_area(self.a, self.b, self.c)
            == doubled_area(p, self.b, self.c)
                + doubled_area(self.a, p, self.c)
                + doubled_area(self.a, self.b, p)
    }
}

/// Absolute doubled area of the triangle `abc`.
fn doubled_area(a: PointI, b: PointI, c: PointI) -> i64 {
    let (ax, ay) = (i64::from(a.x), i64::from(a.y));
    let (bx, by) = (i64::from(b.x), i64::from(b.y));
    let (cx, cy) = (i64::from(c.x), i64::from(c.y));
    (bx * cy - cx * by - ax * cy + cx * ay + ax * by - bx * ay).abs()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/triangle.rs"]
mod tests;
