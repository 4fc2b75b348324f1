//! Axis-separated collision resolution.
//!
//! Motion is resolved one axis at a time: move on X, push out of solids on
//! X, then move on Y and push out on Y. Two independent passes avoid the
//! diagonal tunnelling and corner snags a combined resolution produces; the
//! X-before-Y order matches the level geometry the games were tuned for
//! (steep slopes are not supported).
//!
//! Fast thin bodies (the pong ball vs paddles) additionally need the swept
//! variant, which compares previous-frame edges against current-frame edges
//! to tell which side was crossed instead of relying on overlap alone.

use glam::Vec2;

use super::rect::Rect;

/// Resolution axis for the two collision passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Push `hitbox` out of every overlapping solid along `axis`, using the sign
/// of `direction` on that axis to pick the contact edge.
///
/// With `zero_vertical` set, a Y-axis hit clears `direction.y` — the
/// gravity-stop on landing or head-bump. Horizontal direction is never
/// cleared so the entity keeps sliding.
///
/// Solids are visited in collection order; when several overlap at once the
/// last write wins. Solids are non-overlapping tile grids in practice.
pub fn resolve_axis<I>(hitbox: &mut Rect, direction: &mut Vec2, solids: I, axis: Axis, zero_vertical: bool)
where
    I: IntoIterator<Item = Rect>,
{
    for solid in solids {
        if !hitbox.overlaps(&solid) {
            continue;
        }
        match axis {
            Axis::X => {
                if direction.x > 0.0 {
                    hitbox.x = solid.left() - hitbox.w;
                } else if direction.x < 0.0 {
                    hitbox.x = solid.right();
                }
            }
            Axis::Y => {
                if direction.y > 0.0 {
                    hitbox.y = solid.top() - hitbox.h;
                    if zero_vertical {
                        direction.y = 0.0;
                    }
                } else if direction.y < 0.0 {
                    hitbox.y = solid.bottom();
                    if zero_vertical {
                        direction.y = 0.0;
                    }
                }
            }
        }
    }
}

/// Swept edge-crossing resolution against a single (possibly moving) solid.
///
/// A right-edge crossing is recognized when the mover's right edge is past
/// the solid's left edge now but was not last frame; the symmetric test
/// recognizes left-edge crossings (and top/bottom on the Y axis). On a
/// crossing the mover snaps to the contact edge and the direction component
/// on that axis is negated.
///
/// Only overlap on the perpendicular axis gates the tests: the crossing
/// comparison itself covers the resolution axis, so a body that fully passed
/// through a thin solid within one frame still bounces.
///
/// Both edge tests run on every call; if both ever fire, the later one wins.
/// Returns whether a bounce happened.
pub fn resolve_swept_axis(
    moving: &mut Rect,
    moving_prev: &Rect,
    solid: &Rect,
    solid_prev: &Rect,
    direction: &mut Vec2,
    axis: Axis,
) -> bool {
    let m = moving.normalized();
    let s = solid.normalized();
    let aligned = match axis {
        Axis::X => m.top() < s.bottom() && s.top() < m.bottom(),
        Axis::Y => m.left() < s.right() && s.left() < m.right(),
    };
    if !aligned {
        return false;
    }
    let mut bounced = false;
    match axis {
        Axis::X => {
            // Mover's right edge crossed the solid's left edge
            if moving.right() >= solid.left() && moving_prev.right() <= solid_prev.left() {
                moving.x = solid.left() - moving.w;
                direction.x = -direction.x;
                bounced = true;
            }
            // Mover's left edge crossed the solid's right edge
            if moving.left() <= solid.right() && moving_prev.left() >= solid_prev.right() {
                moving.x = solid.right();
                direction.x = -direction.x;
                bounced = true;
            }
        }
        Axis::Y => {
            if moving.bottom() >= solid.top() && moving_prev.bottom() <= solid_prev.top() {
                moving.y = solid.top() - moving.h;
                direction.y = -direction.y;
                bounced = true;
            }
            if moving.top() <= solid.bottom() && moving_prev.top() >= solid_prev.bottom() {
                moving.y = solid.bottom();
                direction.y = -direction.y;
                bounced = true;
            }
        }
    }
    bounced
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid() -> Rect {
        Rect::new(130.0, 0.0, 64.0, 64.0)
    }

    #[test]
    fn rightward_motion_clamps_to_solid_left_edge() {
        // Hitbox width 40 at x=100 moving right at 100 units/sec for one
        // tick of dt=0.1 into a solid at x=130 resolves to x=90, not 110.
        let mut hitbox = Rect::new(100.0, 10.0, 40.0, 40.0);
        let mut dir = Vec2::new(1.0, 0.0);
        hitbox.x += dir.x * 100.0 * 0.1;
        resolve_axis(&mut hitbox, &mut dir, [solid()], Axis::X, false);
        assert_eq!(hitbox.x, 90.0);
        assert!(hitbox.right() <= solid().left());
    }

    #[test]
    fn leftward_motion_clamps_to_solid_right_edge() {
        let mut hitbox = Rect::new(200.0, 10.0, 40.0, 40.0);
        let mut dir = Vec2::new(-1.0, 0.0);
        hitbox.x = 180.0; // moved into the solid (right edge 194)
        resolve_axis(&mut hitbox, &mut dir, [solid()], Axis::X, false);
        assert_eq!(hitbox.left(), solid().right());
    }

    #[test]
    fn landing_zeroes_vertical_direction_only() {
        let floor = Rect::new(0.0, 100.0, 200.0, 64.0);
        let mut hitbox = Rect::new(10.0, 80.0, 30.0, 30.0); // bottom at 110
        let mut dir = Vec2::new(0.7, 5.0);
        resolve_axis(&mut hitbox, &mut dir, [floor], Axis::Y, true);
        assert_eq!(hitbox.bottom(), floor.top());
        assert_eq!(dir.y, 0.0);
        assert_eq!(dir.x, 0.7);
    }

    #[test]
    fn head_bump_zeroes_vertical_direction() {
        let ceiling = Rect::new(0.0, 0.0, 200.0, 64.0);
        let mut hitbox = Rect::new(10.0, 50.0, 30.0, 30.0); // top at 50 < 64
        let mut dir = Vec2::new(0.0, -4.0);
        resolve_axis(&mut hitbox, &mut dir, [ceiling], Axis::Y, true);
        assert_eq!(hitbox.top(), ceiling.bottom());
        assert_eq!(dir.y, 0.0);
    }

    #[test]
    fn without_flag_vertical_direction_is_kept() {
        let floor = Rect::new(0.0, 100.0, 200.0, 64.0);
        let mut hitbox = Rect::new(10.0, 80.0, 30.0, 30.0);
        let mut dir = Vec2::new(0.0, 5.0);
        resolve_axis(&mut hitbox, &mut dir, [floor], Axis::Y, false);
        assert_eq!(hitbox.bottom(), floor.top());
        assert_eq!(dir.y, 5.0);
    }

    #[test]
    fn non_overlapping_solids_leave_the_rect_alone() {
        let mut hitbox = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut dir = Vec2::new(1.0, 0.0);
        resolve_axis(&mut hitbox, &mut dir, [Rect::new(50.0, 0.0, 10.0, 10.0)], Axis::X, false);
        assert_eq!(hitbox, Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn multiple_overlapping_solids_last_write_wins() {
        let a = Rect::new(100.0, 0.0, 20.0, 20.0);
        let b = Rect::new(95.0, 0.0, 20.0, 20.0);
        let mut hitbox = Rect::new(90.0, 0.0, 15.0, 15.0);
        let mut dir = Vec2::new(1.0, 0.0);
        resolve_axis(&mut hitbox, &mut dir, [a, b], Axis::X, false);
        // Clamped against `a` first, then `b`
        assert_eq!(hitbox.right(), b.left());
    }

    #[test]
    fn swept_left_approach_reflects_and_snaps() {
        // Previous right edge 5 units left of the paddle, current right edge
        // 5 units into it: direction flips to -1 and the right edge snaps to
        // the paddle's left edge.
        let paddle = Rect::new(100.0, 0.0, 10.0, 100.0);
        let prev = Rect::new(65.0, 40.0, 30.0, 30.0); // right = 95
        let mut ball = Rect::new(75.0, 40.0, 30.0, 30.0); // right = 105
        let mut dir = Vec2::new(1.0, 0.0);

        let bounced = resolve_swept_axis(&mut ball, &prev, &paddle, &paddle, &mut dir, Axis::X);
        assert!(bounced);
        assert_eq!(dir, Vec2::new(-1.0, 0.0));
        assert_eq!(ball.right(), paddle.left());
    }

    #[test]
    fn swept_right_approach_reflects_and_snaps() {
        let paddle = Rect::new(100.0, 0.0, 10.0, 100.0);
        let prev = Rect::new(115.0, 40.0, 30.0, 30.0); // left = 115
        let mut ball = Rect::new(95.0, 40.0, 30.0, 30.0); // left = 95 < 110
        let mut dir = Vec2::new(-1.0, 0.2);

        let bounced = resolve_swept_axis(&mut ball, &prev, &paddle, &paddle, &mut dir, Axis::X);
        assert!(bounced);
        assert_eq!(dir.x, 1.0);
        assert_eq!(ball.left(), paddle.right());
    }

    #[test]
    fn swept_vertical_edges() {
        let paddle = Rect::new(0.0, 100.0, 100.0, 10.0);
        let prev = Rect::new(40.0, 65.0, 30.0, 30.0); // bottom = 95
        let mut ball = Rect::new(40.0, 75.0, 30.0, 30.0); // bottom = 105
        let mut dir = Vec2::new(0.0, 1.0);

        assert!(resolve_swept_axis(&mut ball, &prev, &paddle, &paddle, &mut dir, Axis::Y));
        assert_eq!(dir.y, -1.0);
        assert_eq!(ball.bottom(), paddle.top());
    }

    #[test]
    fn swept_does_nothing_before_the_edge_is_crossed() {
        let paddle = Rect::new(100.0, 0.0, 10.0, 100.0);
        let prev = Rect::new(0.0, 40.0, 30.0, 30.0);
        let mut ball = Rect::new(10.0, 40.0, 30.0, 30.0);
        let mut dir = Vec2::new(1.0, 0.0);

        assert!(!resolve_swept_axis(&mut ball, &prev, &paddle, &paddle, &mut dir, Axis::X));
        assert_eq!(dir.x, 1.0);
    }

    #[test]
    fn swept_catches_a_full_pass_through() {
        // Thin paddle, big step: the ball ends up entirely on the far side
        // with no overlap, but the edge was still crossed this tick.
        let paddle = Rect::new(100.0, 0.0, 10.0, 100.0);
        let prev = Rect::new(60.0, 40.0, 30.0, 30.0); // right = 90
        let mut ball = Rect::new(140.0, 40.0, 30.0, 30.0); // left = 140, past
        let mut dir = Vec2::new(1.0, 0.0);

        assert!(resolve_swept_axis(&mut ball, &prev, &paddle, &paddle, &mut dir, Axis::X));
        assert_eq!(dir.x, -1.0);
        assert_eq!(ball.right(), paddle.left());
    }

    #[test]
    fn swept_ignores_a_crossing_outside_the_perpendicular_span() {
        let paddle = Rect::new(100.0, 0.0, 10.0, 100.0);
        let prev = Rect::new(60.0, 200.0, 30.0, 30.0);
        let mut ball = Rect::new(140.0, 200.0, 30.0, 30.0); // well below the paddle
        let mut dir = Vec2::new(1.0, 0.0);

        assert!(!resolve_swept_axis(&mut ball, &prev, &paddle, &paddle, &mut dir, Axis::X));
        assert_eq!(dir.x, 1.0);
    }

    #[test]
    fn swept_ignores_a_ball_already_inside_last_frame() {
        // Already overlapping last frame: neither edge was crossed this
        // tick, so no bounce is reported.
        let paddle = Rect::new(100.0, 0.0, 10.0, 100.0);
        let prev = Rect::new(95.0, 40.0, 30.0, 30.0); // right = 125, already past
        let mut ball = Rect::new(96.0, 40.0, 30.0, 30.0);
        let mut dir = Vec2::new(1.0, 0.0);

        assert!(!resolve_swept_axis(&mut ball, &prev, &paddle, &paddle, &mut dir, Axis::X));
    }
}
