//! Entity capability set and lifecycle.
//!
//! Every game entity composes the same capabilities: a destination rect
//! (world position + size), a source rect (texture region), a direction, a
//! speed and a liveness flag. Per-game variants add only the behavior that
//! differs. Removal is always deferred: an entity flags itself Discarded and
//! is dropped by the end-of-frame [`compact`] pass, never mid-iteration.

use glam::Vec2;

use super::rect::Rect;

/// Lifecycle state of an entity.
///
/// Active entities move and animate. Dying is a time-boxed, visual-only
/// state (death flash) with motion frozen; a death timer moves the entity on
/// to Discarded. Entities with no death animation go straight to Discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Liveness {
    #[default]
    Active,
    Dying,
    Discarded,
}

/// Position, texture region, motion and lifecycle shared by every sprite.
#[derive(Debug, Clone)]
pub struct Body {
    /// World position and size.
    pub dest: Rect,
    /// Texture region; width may be negated at draw time for mirroring.
    pub source: Rect,
    /// Motion direction. Not necessarily unit length; callers normalize
    /// when they need a pure direction.
    pub direction: Vec2,
    /// Speed in world units per second.
    pub speed: f32,
    pub liveness: Liveness,
}

impl Body {
    pub fn new(dest: Rect, source: Rect, speed: f32) -> Self {
        Self {
            dest,
            source,
            direction: Vec2::ZERO,
            speed,
            liveness: Liveness::Active,
        }
    }

    /// Body placed at `pos` with its size taken from the source region.
    pub fn at(pos: Vec2, source: Rect, speed: f32) -> Self {
        let size = source.normalized();
        Self::new(Rect::new(pos.x, pos.y, size.w, size.h), source, speed)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.dest.center()
    }

    /// `dest += direction * speed * dt`.
    pub fn integrate(&mut self, dt: f32) {
        self.dest.x += self.direction.x * self.speed * dt;
        self.dest.y += self.direction.y * self.speed * dt;
    }

    /// Flag for removal at the next compaction pass.
    pub fn discard(&mut self) {
        self.liveness = Liveness::Discarded;
    }

    /// Enter the time-boxed dying state (only from Active).
    pub fn start_dying(&mut self) {
        if self.liveness == Liveness::Active {
            self.liveness = Liveness::Dying;
        }
    }

    #[inline]
    pub fn is_discarded(&self) -> bool {
        self.liveness == Liveness::Discarded
    }

    #[inline]
    pub fn is_dying(&self) -> bool {
        self.liveness == Liveness::Dying
    }
}

/// Capability contract shared by game entities.
pub trait Entity {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    /// Per-entity discard predicate, evaluated every tick after motion.
    /// Default: never discards.
    fn check_discard(&mut self) {}

    /// Integrate motion (frozen while dying), then evaluate the discard
    /// predicate.
    fn advance(&mut self, dt: f32) {
        if !self.body().is_dying() {
            self.body_mut().integrate(dt);
        }
        self.check_discard();
    }
}

/// End-of-frame compaction: drop every entity flagged Discarded, keeping
/// the relative order of the survivors.
pub fn compact<E: Entity>(entities: &mut Vec<E>) {
    entities.retain(|e| !e.body().is_discarded());
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        body: Body,
        max_x: f32,
    }

    impl Probe {
        fn new(x: f32) -> Self {
            Self {
                body: Body::new(Rect::new(x, 0.0, 10.0, 10.0), Rect::new(0.0, 0.0, 10.0, 10.0), 100.0),
                max_x: f32::INFINITY,
            }
        }
    }

    impl Entity for Probe {
        fn body(&self) -> &Body {
            &self.body
        }

        fn body_mut(&mut self) -> &mut Body {
            &mut self.body
        }

        fn check_discard(&mut self) {
            if self.body.dest.x > self.max_x {
                self.body.discard();
            }
        }
    }

    #[test]
    fn integrate_moves_along_direction() {
        let mut probe = Probe::new(0.0);
        probe.body.direction = Vec2::new(1.0, -0.5);
        probe.advance(0.1);
        assert_eq!(probe.body.dest.x, 10.0);
        assert_eq!(probe.body.dest.y, -5.0);
    }

    #[test]
    fn dying_freezes_motion() {
        let mut probe = Probe::new(0.0);
        probe.body.direction = Vec2::new(1.0, 0.0);
        probe.body.start_dying();
        probe.advance(0.1);
        assert_eq!(probe.body.dest.x, 0.0);
    }

    #[test]
    fn discard_predicate_hook_runs_after_motion() {
        let mut probe = Probe::new(0.0);
        probe.max_x = 5.0;
        probe.body.direction = Vec2::new(1.0, 0.0);
        probe.advance(0.1); // lands at x=10 > 5
        assert!(probe.body.is_discarded());
    }

    #[test]
    fn compaction_removes_flagged_entities_wherever_they_sit() {
        for discard_at in 0..4 {
            let mut list: Vec<Probe> = (0..4).map(|i| Probe::new(i as f32)).collect();
            list[discard_at].body.discard();
            compact(&mut list);
            assert_eq!(list.len(), 3);
            assert!(list.iter().all(|p| p.body.dest.x != discard_at as f32));
        }
    }

    #[test]
    fn start_dying_is_terminal_for_discarded() {
        let mut body = Body::new(Rect::default(), Rect::default(), 0.0);
        body.discard();
        body.start_dying();
        assert!(body.is_discarded());
    }
}
