//! Axis-aligned rectangles and the geometric overlap predicates every game
//! leans on.
//!
//! A `Rect` stores float coordinates. Width/height may be stored negative as
//! a horizontal-flip flag for rendering ([`Rect::flipped_x`]); every
//! geometric test normalizes to absolute extents first.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box `{x, y, w, h}` with the origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect of the given size centered on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center.x - size.x / 2.0, center.y - size.y / 2.0, size.x, size.y)
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Absolute extents. Negative width/height only ever means "mirror at
    /// draw time", so geometry must go through this first.
    #[inline]
    pub fn normalized(&self) -> Rect {
        Rect::new(self.x, self.y, self.w.abs(), self.h.abs())
    }

    /// The same region with the horizontal-flip flag toggled. Used at draw
    /// time for left-facing sprites; stored frame tables stay untouched.
    #[inline]
    pub fn flipped_x(&self) -> Rect {
        Rect::new(self.x, self.y, -self.w, self.h)
    }

    /// AABB overlap. Strictly separated sides mean no overlap, so rects that
    /// merely touch do not collide; identical rects do.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        a.x < b.x + b.w && b.x < a.x + a.w && a.y < b.y + b.h && b.y < a.y + a.h
    }
}

/// Free-function form of [`Rect::overlaps`].
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

/// Circle/circle overlap.
pub fn circles_overlap(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> bool {
    let r = r1 + r2;
    c1.distance_squared(c2) < r * r
}

/// Circle/rect overlap: clamp the center onto the rect and compare the
/// remaining distance against the radius.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let r = rect.normalized();
    let closest = Vec2::new(
        center.x.clamp(r.left(), r.right()),
        center.y.clamp(r.top(), r.bottom()),
    );
    center.distance_squared(closest) < radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separated_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Separated on x
        assert!(!a.overlaps(&Rect::new(20.0, 0.0, 10.0, 10.0)));
        // Separated on y
        assert!(!a.overlaps(&Rect::new(0.0, -30.0, 10.0, 10.0)));
        // Touching edges only
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn identical_rects_overlap() {
        let a = Rect::new(5.0, -3.0, 8.0, 4.0);
        assert!(a.overlaps(&a));
    }

    #[test]
    fn flip_flag_is_normalized_before_tests() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let flipped = Rect::new(2.0, 2.0, -6.0, 6.0);
        assert!(a.overlaps(&flipped));
        assert_eq!(flipped.flipped_x().w, 6.0);
    }

    #[test]
    fn circle_predicates() {
        assert!(circles_overlap(Vec2::ZERO, 5.0, Vec2::new(8.0, 0.0), 4.0));
        assert!(!circles_overlap(Vec2::ZERO, 5.0, Vec2::new(10.0, 0.0), 4.0));

        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(circle_rect_overlap(Vec2::new(8.0, 20.0), 3.0, &rect));
        assert!(!circle_rect_overlap(Vec2::new(5.0, 20.0), 3.0, &rect));
        // Center inside the rect always overlaps
        assert!(circle_rect_overlap(Vec2::new(15.0, 15.0), 0.1, &rect));
    }

    #[test]
    fn center_and_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
    }
}
