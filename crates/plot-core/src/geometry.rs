// File: crates/plot-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math, placement and affine transforms.

/// Integer pixel point. All plot drawing happens on whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
    pub const fn is_empty(&self) -> bool { self.width() <= 0 || self.height() <= 0 }

    /// Edges inclusive, matching how the host reports pointer hits on a widget.
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Result of the host's placement pass: absolute origin plus the size the plot
/// is drawn at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Placement {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }
    /// Placement at the surface origin, as used for offscreen export.
    pub const fn origin(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }
    pub const fn rect(&self) -> RectI32 {
        RectI32::from_ltwh(self.x, self.y, self.width, self.height)
    }
}

/// 2D affine transform.
///
/// Maps `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)`. Operations such as
/// [`Transform::rotate`] post-multiply, so they act on user space before the
/// existing transform (same as a canvas transform stack).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// `self * other`: `other` applies to points first.
    pub fn concat(&self, other: &Transform) -> Transform {
        Transform {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    pub fn rotate(&mut self, degrees: f64) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        *self = self.concat(&Transform { a: cos, b: sin, c: -sin, d: cos, e: 0.0, f: 0.0 });
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        *self = self.concat(&Transform { a: sx, b: 0.0, c: 0.0, d: sy, e: 0.0, f: 0.0 });
    }

    /// Shear by the given angles (degrees) along x and y.
    pub fn skew(&mut self, x_degrees: f64, y_degrees: f64) {
        let c = x_degrees.to_radians().tan();
        let b = y_degrees.to_radians().tan();
        *self = self.concat(&Transform { a: 1.0, b, c, d: 1.0, e: 0.0, f: 0.0 });
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        *self = self.concat(&Transform { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: dx, f: dy });
    }

    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (self.a * x + self.c * y + self.e, self.b * x + self.d * y + self.f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn rect_contains_is_edge_inclusive() {
        let r = RectI32::from_ltwh(10, 20, 100, 50);
        assert!(r.contains(10, 20));
        assert!(r.contains(110, 70));
        assert!(!r.contains(111, 70));
        assert!(!r.contains(50, 19));
    }

    #[test]
    fn rotate_then_translate_acts_on_user_space_first() {
        let mut t = Transform::IDENTITY;
        t.translate(10.0, 0.0);
        t.rotate(90.0);
        // point is rotated first, then translated
        assert!(close(t.apply(1.0, 0.0), (10.0, 1.0)));
    }

    #[test]
    fn scale_and_skew() {
        let mut t = Transform::IDENTITY;
        t.scale(2.0, 3.0);
        assert!(close(t.apply(1.0, 1.0), (2.0, 3.0)));

        let mut s = Transform::IDENTITY;
        s.skew(45.0, 0.0);
        assert!(close(s.apply(0.0, 2.0), (2.0, 2.0)));
        assert!(!s.is_identity());
    }
}
